//! Resource Catalog
//!
//! The bundled naming-rule dataset, parsed once and validated on load.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::models::{Category, Item};

/// Dataset compiled into the binary
const BUNDLED_JSON: &str = include_str!("../data/resources.json");

static BUNDLED: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("item {index} in \"{category}\" has an empty {field}")]
    EmptyField {
        category: String,
        index: usize,
        field: &'static str,
    },
    #[error("slug \"{0}\" appears more than once")]
    DuplicateSlug(String),
    #[error("no resource with slug \"{0}\"")]
    UnknownSlug(String),
}

/// Ordered categories of immutable items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let catalog = Self { categories };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    /// The embedded dataset, parsed on first use
    pub fn bundled() -> Result<&'static Catalog, &'static CatalogError> {
        BUNDLED
            .get_or_init(|| Catalog::from_json(BUNDLED_JSON))
            .as_ref()
    }

    /// Names and slugs must be non-empty; slugs must be unique
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for category in &self.categories {
            for (index, item) in category.items.iter().enumerate() {
                let empty = |field| CatalogError::EmptyField {
                    category: category.title.clone(),
                    index,
                    field,
                };
                if item.name.trim().is_empty() {
                    return Err(empty("name"));
                }
                if item.slug.trim().is_empty() {
                    return Err(empty("slug"));
                }
                if !seen.insert(item.slug.as_str()) {
                    return Err(CatalogError::DuplicateSlug(item.slug.clone()));
                }
            }
        }
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All items in dataset order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn get(&self, slug: &str) -> Option<&Item> {
        self.items().find(|item| item.slug == slug)
    }

    /// Like `get`, but as a `Result` for callers that must reject unknown slugs
    pub fn resolve(&self, slug: &str) -> Result<&Item, CatalogError> {
        self.get(slug)
            .ok_or_else(|| CatalogError::UnknownSlug(slug.to_string()))
    }

    /// 1-based position in dataset order, the tile's "atomic number"
    pub fn number_of(&self, slug: &str) -> Option<usize> {
        self.items().position(|item| item.slug == slug).map(|i| i + 1)
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
pub(crate) fn sample_catalog() -> Catalog {
    use crate::models::make_item;

    let mut storage = make_item("Storage account", "st");
    storage.code = "Microsoft.Storage/storageAccounts".to_string();
    storage.terraform_url = Some("https://registry.terraform.io/storage_account".to_string());
    storage.learn_url = Some("https://learn.microsoft.com/storage".to_string());

    let mut vault = make_item("Key vault", "kv");
    vault.code = "Microsoft.KeyVault/vaults".to_string();
    vault.learn_url = Some("https://learn.microsoft.com/keyvault".to_string());

    Catalog::new(vec![
        Category {
            title: "General".to_string(),
            accent: "#38bdf8".to_string(),
            items: vec![make_item("Resource group", "rg"), make_item("Management group", "mg")],
        },
        Category {
            title: "Networking".to_string(),
            accent: "#a78bfa".to_string(),
            items: vec![make_item("Virtual network", "vnet"), make_item("Subnet", "snet")],
        },
        Category {
            title: "Storage".to_string(),
            accent: "#14b8a6".to_string(),
            items: vec![storage, vault],
        },
    ])
    .unwrap()
}
