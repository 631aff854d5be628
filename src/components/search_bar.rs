//! Search Bar Component
//!
//! Live text filter over the table plus a result counter.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::filter::match_count;
use crate::store::AppStateStoreFields;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let query = ctx.store.query();
    let total = ctx.catalog.len();

    let counter = move || {
        let shown = match_count(ctx.catalog, &query.get());
        format!("{} of {} resources", shown, total)
    };

    view! {
        <div class="search-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search Azure resources..."
                autocomplete="off"
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <span class="search-count">{counter}</span>
        </div>
    }
}
