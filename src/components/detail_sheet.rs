//! Detail Sheet Component
//!
//! Slide-out panel for the selected resource. Closed by the overlay, the
//! close button, or Escape.

use leptos::prelude::*;

use crate::components::{CodeSnippet, ResourceLinks, SlugCopy};
use crate::context::use_app_context;
use crate::markdown::render_inline;
use crate::sheet::SheetView;
use crate::store::AppStateStoreFields;

#[component]
pub fn DetailSheet() -> impl IntoView {
    let ctx = use_app_context();
    let open = ctx.store.open();
    let selected = ctx.store.selected();
    // Only a changed slug rebuilds the body; closing keeps it for the slide-out
    let shown = Memo::new(move |_| selected.get());
    let view_model = move || {
        shown
            .get()
            .and_then(|slug| ctx.catalog.get(&slug))
            .map(SheetView::from_item)
    };

    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            ctx.set_open(false);
        }
    });
    on_cleanup(move || handle.remove());

    let root_class = move || if open.get() { "sheet-root open" } else { "sheet-root" };

    view! {
        <div class=root_class>
            <div class="sheet-overlay" on:click=move |_| ctx.set_open(false)></div>
            <aside class="sheet-panel" role="dialog" aria-modal="true">
                <button type="button" class="sheet-close" aria-label="Close" on:click=move |_| ctx.set_open(false)>
                    "×"
                </button>
                {move || view_model().map(|sheet| view! { <SheetBody sheet=sheet /> })}
            </aside>
        </div>
    }
}

#[component]
fn SheetBody(sheet: SheetView) -> impl IntoView {
    let links = sheet.links();
    let description = render_inline(&sheet.description);
    let restrictions = render_inline(&sheet.restrictions);
    let icon = sheet.icon.clone().map(|src| {
        view! { <img class="sheet-icon" width="44" height="44" src=src alt=sheet.icon_alt.clone() /> }
    });

    view! {
        <div class="sheet-header">
            {icon}
            <SlugCopy slug=sheet.slug.clone() />
        </div>
        <h2 class="sheet-title">{sheet.name.clone()}</h2>
        <CodeSnippet code=sheet.code.clone() />
        <p class="sheet-description" inner_html=description></p>
        <section class="sheet-section">
            <h3>"Length"</h3>
            <div>{sheet.length.clone()}</div>
        </section>
        <section class="sheet-section">
            <h3>"Restrictions"</h3>
            <div inner_html=restrictions></div>
        </section>
        <ResourceLinks links=links />
    }
}
