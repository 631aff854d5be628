//! Log Panel Component
//!
//! Shows the rolling log buffer when debug logging is on (`?log=debug`).

use leptos::prelude::*;
use log::LevelFilter;

use crate::context::use_app_context;

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_app_context();
    let enabled = ctx.config.with_value(|c| c.log_level >= LevelFilter::Debug);
    let (lines, set_lines) = signal(Vec::<String>::new());

    enabled.then(|| {
        view! {
            <details class="log-panel">
                <summary>"Recent log"</summary>
                <button type="button" on:click=move |_| set_lines.set(console_logger::recent())>"Refresh"</button>
                <pre class="log-lines">{move || lines.get().join("\n")}</pre>
            </details>
        }
    })
}
