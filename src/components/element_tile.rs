//! Element Tile Component
//!
//! One periodic-table cell: number, slug as the element symbol, and name.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Item;

#[component]
pub fn ElementTile(
    item: Item,
    /// Position in the full dataset, unaffected by filtering
    number: usize,
    #[prop(into)] accent: String,
) -> impl IntoView {
    let ctx = use_app_context();
    let slug = item.slug.clone();
    let style = format!("border-color: {}", accent);
    let title = format!("{} ({})", item.name, item.code);

    view! {
        <button
            type="button"
            class="element-tile"
            style=style
            title=title
            on:click=move |_| ctx.open_item(&slug)
        >
            <span class="element-number">{number}</span>
            <span class="element-symbol">{item.slug.clone()}</span>
            <span class="element-name">{item.name.clone()}</span>
        </button>
    }
}
