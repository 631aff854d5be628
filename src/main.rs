//! Azure Naming Table Frontend Entry Point

mod models;
mod catalog;
mod filter;
mod sheet;
mod config;
mod location;
mod markdown;
mod context;
mod store;
mod components;
mod app;

use app::{App, LoadError};
use catalog::Catalog;
use config::{AppConfig, LOG_CAPACITY};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let query = location::current_query().unwrap_or_default();
    let (config, ignored) = AppConfig::from_query(&query);

    if let Err(e) = console_logger::init(config.log_level, LOG_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] logger init failed: {}", e).into());
    }
    for pair in ignored {
        log::warn!(target: "config", "ignoring query parameter {:?}", pair);
    }

    match Catalog::bundled() {
        Ok(catalog) => mount_to_body(move || view! { <App catalog=catalog config=config /> }),
        Err(e) => {
            log::error!(target: "catalog", "{}", e);
            let message = e.to_string();
            mount_to_body(move || view! { <LoadError message=message /> })
        }
    }
}
