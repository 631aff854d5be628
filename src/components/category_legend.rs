//! Category Legend
//!
//! Color key for the table columns.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn CategoryLegend() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <ul class="category-legend">
            {ctx.catalog.categories().iter().map(|category| {
                let swatch = format!("background-color: {}", category.accent);
                view! {
                    <li class="legend-entry">
                        <span class="legend-swatch" style=swatch></span>
                        <span class="legend-label">{category.title.clone()}</span>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
