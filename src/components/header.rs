//! Page Header
//!
//! Azure logo and the two-line title.

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header-logo">
                <AzureLogo />
            </div>
            <div class="page-header-title">
                <span class="title-main">"Azure Resource"</span>
                <span class="title-sub">"Naming Convention Periodic Table"</span>
            </div>
        </header>
    }
}

#[component]
pub fn AzureLogo(#[prop(default = 64)] size: u32) -> impl IntoView {
    view! {
        <svg width=size height=size viewBox="0 0 96 96" xmlns="http://www.w3.org/2000/svg" aria-label="Azure">
            <path fill="#0a5da8" d="M33.34 6.54h26.04L32.35 86.63a4.15 4.15 0 0 1-3.93 2.83H8.15a4.14 4.14 0 0 1-3.93-5.47L29.4 9.37a4.15 4.15 0 0 1 3.94-2.83z"></path>
            <path fill="#0078d4" d="M71.17 60.26H29.88a1.91 1.91 0 0 0-1.3 3.31l26.53 24.76a4.17 4.17 0 0 0 2.85 1.13h23.38z"></path>
            <path fill="#1490df" d="M66.6 9.36a4.14 4.14 0 0 0-3.93-2.82H33.65a4.15 4.15 0 0 1 3.93 2.82l25.18 74.62a4.15 4.15 0 0 1-3.93 5.48h29.02a4.15 4.15 0 0 0 3.93-5.48z"></path>
        </svg>
    }
}
