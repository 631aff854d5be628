//! Detail Sheet View
//!
//! Everything the sheet renders, projected from a single item so nothing
//! from a previous selection can leak into the current one.

use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Terraform,
    MicrosoftLearn,
}

impl LinkKind {
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Terraform => "Terraform",
            LinkKind::MicrosoftLearn => "Microsoft Learn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLink {
    pub kind: LinkKind,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    pub name: String,
    pub slug: String,
    /// `None` when the item has no icon; the image is skipped
    pub icon: Option<String>,
    pub icon_alt: String,
    pub code: String,
    pub description: String,
    pub length: String,
    pub restrictions: String,
    terraform_url: Option<String>,
    learn_url: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.trim().is_empty()).cloned()
}

impl SheetView {
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            slug: item.slug.clone(),
            icon: Some(item.icon.clone()).filter(|i| !i.trim().is_empty()),
            icon_alt: format!("icon for {}", item.name),
            code: item.code.clone(),
            description: item.description.clone(),
            length: item.length.clone(),
            restrictions: item.restrictions.clone(),
            terraform_url: non_blank(&item.terraform_url),
            learn_url: non_blank(&item.learn_url),
        }
    }

    /// Outbound links in display order, only those the item provides
    pub fn links(&self) -> Vec<ResourceLink> {
        let mut links = Vec::with_capacity(2);
        if let Some(href) = &self.terraform_url {
            links.push(ResourceLink { kind: LinkKind::Terraform, href: href.clone() });
        }
        if let Some(href) = &self.learn_url {
            links.push(ResourceLink { kind: LinkKind::MicrosoftLearn, href: href.clone() });
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_catalog, Catalog};
    use crate::models::make_item;

    #[test]
    fn test_view_shows_exactly_the_item_fields() {
        let catalog = Catalog::bundled().unwrap();
        for item in catalog.items() {
            let view = SheetView::from_item(item);
            assert_eq!(view.name, item.name);
            assert_eq!(view.slug, item.slug);
            assert_eq!(view.description, item.description);
            assert_eq!(view.code, item.code);
            assert_eq!(view.length, item.length);
            assert_eq!(view.restrictions, item.restrictions);
        }
    }

    #[test]
    fn test_links_follow_optional_urls() {
        let catalog = sample_catalog();

        let both = SheetView::from_item(catalog.get("st").unwrap()).links();
        assert_eq!(both.len(), 2);
        assert_eq!(both[0].kind, LinkKind::Terraform);
        assert_eq!(both[1].kind, LinkKind::MicrosoftLearn);
        assert_eq!(both[1].href, "https://learn.microsoft.com/storage");

        let learn_only = SheetView::from_item(catalog.get("kv").unwrap()).links();
        assert_eq!(learn_only.len(), 1);
        assert_eq!(learn_only[0].kind, LinkKind::MicrosoftLearn);

        assert!(SheetView::from_item(catalog.get("rg").unwrap()).links().is_empty());
    }

    #[test]
    fn test_blank_url_counts_as_missing() {
        let mut item = make_item("Subnet", "snet");
        item.terraform_url = Some("  ".to_string());
        assert!(SheetView::from_item(&item).links().is_empty());
    }

    #[test]
    fn test_missing_icon_is_none() {
        let mut item = make_item("Subnet", "snet");
        assert_eq!(SheetView::from_item(&item).icon.as_deref(), Some("icons/snet.svg"));

        item.icon.clear();
        let view = SheetView::from_item(&item);
        assert_eq!(view.icon, None);
        assert_eq!(view.icon_alt, "icon for Subnet");
    }

    #[test]
    fn test_bundled_items_without_icon_render_no_image() {
        let catalog = Catalog::bundled().unwrap();
        for item in catalog.items().filter(|i| i.icon.is_empty()) {
            assert_eq!(SheetView::from_item(item).icon, None, "{}", item.slug);
        }
    }

    #[test]
    fn test_reprojection_has_no_stale_fields() {
        let catalog = sample_catalog();
        let first = SheetView::from_item(catalog.get("st").unwrap());
        let second = SheetView::from_item(catalog.get("rg").unwrap());
        assert_ne!(first, second);
        assert_eq!(second.name, "Resource group");
        assert!(second.links().is_empty());
    }
}
