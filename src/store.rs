//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::catalog::{Catalog, CatalogError};

/// View state; the dataset itself lives in the catalog
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Live search text
    pub query: String,
    /// Slug of the selected item, always one the catalog knows
    pub selected: Option<String>,
    /// Detail sheet visibility
    pub open: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `slug` and open the sheet. Unknown slugs leave the state untouched.
    pub fn open_item(&mut self, catalog: &Catalog, slug: &str) -> Result<(), CatalogError> {
        let item = catalog.resolve(slug)?;
        self.selected = Some(item.slug.clone());
        self.open = true;
        Ok(())
    }

    /// Hide the sheet. The selection stays so the sheet keeps its content while it slides out.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Open-change handler for the sheet (overlay click, Escape, close button)
    pub fn set_open(&mut self, open: bool) {
        if !open {
            self.close();
        } else if self.selected.is_some() {
            self.open = true;
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_catalog;

    #[test]
    fn test_open_selects_item() {
        let catalog = sample_catalog();
        let mut state = AppState::new();
        assert_eq!(state.selected, None);
        assert!(!state.open);

        state.open_item(&catalog, "vnet").unwrap();
        assert!(state.open);
        assert_eq!(state.selected.as_deref(), Some("vnet"));
    }

    #[test]
    fn test_unknown_slug_is_rejected() {
        let catalog = sample_catalog();
        let mut state = AppState::new();
        state.open_item(&catalog, "rg").unwrap();

        assert!(matches!(state.open_item(&catalog, "missing"), Err(CatalogError::UnknownSlug(_))));
        assert_eq!(state.selected.as_deref(), Some("rg"));
        assert!(state.open);
    }

    #[test]
    fn test_close_keeps_selection_for_slide_out() {
        let catalog = sample_catalog();
        let mut state = AppState::new();

        state.open_item(&catalog, "st").unwrap();
        state.close();
        assert!(!state.open);
        assert_eq!(state.selected.as_deref(), Some("st"));
    }

    #[test]
    fn test_close_then_reopen_with_other_item() {
        let catalog = sample_catalog();
        let mut state = AppState::new();

        state.open_item(&catalog, "st").unwrap();
        state.close();
        state.open_item(&catalog, "kv").unwrap();

        assert!(state.open);
        let item = catalog.get(state.selected.as_deref().unwrap()).unwrap();
        assert_eq!(item.slug, "kv");
        assert_eq!(item.name, "Key vault");
    }

    #[test]
    fn test_set_open_without_selection_stays_closed() {
        let catalog = sample_catalog();
        let mut state = AppState::new();
        state.set_open(true);
        assert!(!state.open);

        state.open_item(&catalog, "mg").unwrap();
        state.set_open(false);
        assert!(!state.open);
        state.set_open(true);
        assert!(state.open);
        assert_eq!(state.selected.as_deref(), Some("mg"));
    }

    #[test]
    fn test_query_does_not_touch_selection() {
        let catalog = sample_catalog();
        let mut state = AppState::new();
        state.open_item(&catalog, "rg").unwrap();
        state.query = "zzz".to_string();
        assert_eq!(state.query, "zzz");
        assert_eq!(state.selected.as_deref(), Some("rg"));
    }
}
