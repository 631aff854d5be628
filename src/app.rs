//! Naming Table App
//!
//! Root component: header, search, table, and the detail sheet.

use leptos::prelude::*;
use leptos_clipboard::create_copy_signals;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::components::{CategoryLegend, DetailSheet, Header, LogPanel, PeriodicTable, SearchBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::location::{self, slug_from_hash};
use crate::store::AppState;

#[component]
pub fn App(catalog: &'static Catalog, config: AppConfig) -> impl IntoView {
    log::info!(
        target: "app",
        "loaded {} resources in {} categories",
        catalog.len(),
        catalog.categories().len()
    );

    if catalog.is_empty() {
        log::warn!(target: "app", "resource catalog is empty");
    }

    let store = Store::new(AppState::new());
    let copy = create_copy_signals(config.copy_reset_ms);
    let ctx = AppContext::new(catalog, config, store, copy);

    // Provide context to all children
    provide_context(ctx);

    // Open the sheet named by the location hash, if any
    match location::current_hash() {
        Ok(hash) => {
            if let Some(slug) = slug_from_hash(&hash) {
                if catalog.get(&slug).is_some() {
                    ctx.open_item(&slug);
                } else {
                    log::debug!(target: "app", "ignoring unknown deep link {:?}", slug);
                }
            }
        }
        Err(e) => log::debug!(target: "app", "could not read location hash: {}", e),
    }

    view! {
        <main class="page">
            <DetailSheet />
            <Header />
            <SearchBar />
            <CategoryLegend />
            <PeriodicTable />
            <LogPanel />
        </main>
    }
}

/// Shown instead of the table when the bundled dataset fails to load
#[component]
pub fn LoadError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <main class="page">
            <Header />
            <div class="load-error" role="alert">
                <strong>"Could not load the resource catalog"</strong>
                <pre>{message}</pre>
            </div>
        </main>
    }
}
