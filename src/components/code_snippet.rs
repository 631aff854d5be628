//! Code Snippet Component
//!
//! Highlighted ARM `type` fragment for the resource.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::markdown::highlight_resource_type;

#[component]
pub fn CodeSnippet(#[prop(into)] code: String) -> impl IntoView {
    let theme = use_app_context().highlight_theme();
    let rendered_html = highlight_resource_type(&code, &theme);

    view! { <div class="code-snippet" inner_html=rendered_html></div> }
}
