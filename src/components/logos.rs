//! Link Logos

use leptos::prelude::*;

#[component]
pub fn TerraformLogo(#[prop(default = 32)] width: u32, #[prop(default = 32)] height: u32) -> impl IntoView {
    view! {
        <svg width=width height=height viewBox="0 0 128 128">
            <g fill-rule="evenodd">
                <path d="M77.941 44.5v36.836L46.324 62.918V26.082zm0 0" fill="#5c4ee5"></path>
                <path d="M81.41 81.336l31.633-18.418V26.082L81.41 44.5zm0 0" fill="#4040b2"></path>
                <path
                    d="M11.242 42.36L42.86 60.776V23.941L11.242 5.523zm0 0M77.941 85.375L46.324 66.957v36.82l31.617 18.418zm0 0"
                    fill="#5c4ee5"
                ></path>
            </g>
        </svg>
    }
}

#[component]
pub fn MicrosoftLogo(#[prop(default = 32)] width: u32, #[prop(default = 32)] height: u32) -> impl IntoView {
    view! {
        <svg width=width height=height xmlns="http://www.w3.org/2000/svg" viewBox="0 0 50 50">
            <path fill="#f25022" d="M7.097 7.097H24.14V24.14H7.097z"></path>
            <path fill="#7fba00" d="M25.859 7.097h17.043V24.14H25.859z"></path>
            <path fill="#00a4ef" d="M7.097 25.859H24.14v17.043H7.097z"></path>
            <path fill="#ffb900" d="M25.859 25.859h17.043v17.043H25.859z"></path>
        </svg>
    }
}

#[component]
pub fn CopyIcon(#[prop(default = 12)] size: u32) -> impl IntoView {
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <rect x="9" y="9" width="13" height="13" rx="2" ry="2"></rect>
            <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"></path>
        </svg>
    }
}

#[component]
pub fn CheckIcon(#[prop(default = 12)] size: u32) -> impl IntoView {
    view! {
        <svg width=size height=size viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <polyline points="20 6 9 17 4 12"></polyline>
        </svg>
    }
}
