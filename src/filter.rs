//! Text Filter
//!
//! Case-insensitive substring search over name, slug, and resource type.

use crate::catalog::Catalog;
use crate::models::Item;

/// A category with only the items that matched, in dataset order
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCategory<'a> {
    pub title: &'a str,
    pub accent: &'a str,
    pub items: Vec<&'a Item>,
}

/// Trimmed and lowercased query; `None` means "match everything"
fn normalize(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

fn matches_normalized(item: &Item, needle: &str) -> bool {
    [&item.name, &item.slug, &item.code]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filter every category, dropping the ones left empty
pub fn filter_catalog<'a>(catalog: &'a Catalog, query: &str) -> Vec<FilteredCategory<'a>> {
    let needle = normalize(query);
    catalog
        .categories()
        .iter()
        .filter_map(|category| {
            let items: Vec<&Item> = category
                .items
                .iter()
                .filter(|item| needle.as_deref().map_or(true, |n| matches_normalized(item, n)))
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(FilteredCategory {
                    title: &category.title,
                    accent: &category.accent,
                    items,
                })
            }
        })
        .collect()
}

pub fn match_count(catalog: &Catalog, query: &str) -> usize {
    match normalize(query) {
        Some(needle) => catalog.items().filter(|i| matches_normalized(i, &needle)).count(),
        None => catalog.len(),
    }
}
