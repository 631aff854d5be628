//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos_clipboard::CopySignals;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::location;
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The bundled dataset
    pub catalog: &'static Catalog,
    pub config: StoredValue<AppConfig>,
    pub store: AppStore,
    /// Copied indicator for the sheet's slug chip
    pub copy: CopySignals,
}

impl AppContext {
    pub fn new(catalog: &'static Catalog, config: AppConfig, store: AppStore, copy: CopySignals) -> Self {
        Self {
            catalog,
            config: StoredValue::new(config),
            store,
            copy,
        }
    }

    /// Show the sheet for `slug`
    pub fn open_item(&self, slug: &str) {
        // Unknown slugs never reach the store, so nothing is notified
        if let Err(e) = self.catalog.resolve(slug) {
            log::warn!(target: "app", "{}", e);
            return;
        }
        let mut result = Ok(());
        self.store.update(|state| result = state.open_item(self.catalog, slug));
        if let Err(e) = result {
            log::warn!(target: "app", "{}", e);
            return;
        }

        log::debug!(target: "app", "opened {}", slug);
        // A check mark left over from the previous item would be stale
        self.copy.reset();
        if let Err(e) = location::replace_hash(Some(slug)) {
            log::debug!(target: "app", "could not update location hash: {}", e);
        }
    }

    /// Sheet open-change (overlay click, Escape, close button)
    pub fn set_open(&self, open: bool) {
        self.store.update(|state| state.set_open(open));
        if !open {
            if let Err(e) = location::replace_hash(None) {
                log::debug!(target: "app", "could not clear location hash: {}", e);
            }
        }
    }

    pub fn highlight_theme(&self) -> String {
        self.config.with_value(|c| c.highlight_theme.clone())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
