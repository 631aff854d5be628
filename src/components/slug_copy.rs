//! Slug Copy Component
//!
//! Clickable slug chip. Hover shows a copy icon that turns into a check
//! mark while the copied indicator is on.

use leptos::prelude::*;
use leptos_clipboard::{make_on_click, make_on_mouseenter, make_on_mouseleave};

use crate::components::{CheckIcon, CopyIcon};
use crate::context::use_app_context;

#[component]
pub fn SlugCopy(#[prop(into)] slug: String) -> impl IntoView {
    let copy = use_app_context().copy;
    let text = slug.clone();

    view! {
        <div
            class="slug-copy"
            title="Copy to clipboard"
            on:mouseenter=make_on_mouseenter(copy)
            on:mouseleave=make_on_mouseleave(copy)
            on:click=make_on_click(copy, move || Some(text.clone()))
        >
            <Show when=move || copy.hover_read.get()>
                <span class="slug-copy-icon">
                    <Show when=move || copy.copied_read.get() fallback=|| view! { <CopyIcon /> }>
                        <CheckIcon />
                    </Show>
                </span>
            </Show>
            <span class="slug-copy-text">{slug}</span>
        </div>
    }
}
