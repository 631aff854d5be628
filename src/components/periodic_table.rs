//! Periodic Table Component
//!
//! One column per category, filtered by the live query.

use leptos::prelude::*;

use crate::components::ElementTile;
use crate::context::use_app_context;
use crate::filter::{filter_catalog, FilteredCategory};
use crate::store::AppStateStoreFields;

#[component]
pub fn PeriodicTable() -> impl IntoView {
    let ctx = use_app_context();
    let query = ctx.store.query();

    let columns = move || {
        let filtered = filter_catalog(ctx.catalog, &query.get());
        if filtered.is_empty() {
            return view! { <p class="table-empty">"No resources match"</p> }.into_any();
        }
        view! {
            <div class="periodic-table">
                {filtered.into_iter().map(|column| view! { <TableColumn column=column /> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! { <section class="table-section">{columns}</section> }
}

#[component]
fn TableColumn(column: FilteredCategory<'static>) -> impl IntoView {
    let ctx = use_app_context();
    let header_style = format!("border-bottom-color: {}", column.accent);
    let accent = column.accent.to_string();

    view! {
        <div class="table-column">
            <h2 class="column-title" style=header_style>{column.title.to_string()}</h2>
            {column.items.into_iter().map(|item| {
                let number = ctx.catalog.number_of(&item.slug).unwrap_or_default();
                view! { <ElementTile item=item.clone() number=number accent=accent.clone() /> }
            }).collect_view()}
        </div>
    }
}
