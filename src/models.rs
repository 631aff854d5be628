//! Frontend Models
//!
//! Naming-rule entries and the periodic-table columns that group them.

use serde::Deserialize;

/// One naming rule for an Azure resource type
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    /// Recommended abbreviation; the text copied to the clipboard
    pub slug: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// ARM resource type, e.g. `Microsoft.Resources/resourceGroups`
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub restrictions: String,
    #[serde(default)]
    pub terraform_url: Option<String>,
    #[serde(default)]
    pub learn_url: Option<String>,
}

/// A column of the table
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub title: String,
    /// CSS color used for the column header and tile border
    #[serde(default)]
    pub accent: String,
    pub items: Vec<Item>,
}

#[cfg(test)]
pub(crate) fn make_item(name: &str, slug: &str) -> Item {
    Item {
        name: name.to_string(),
        slug: slug.to_string(),
        icon: format!("icons/{}.svg", slug),
        description: format!("{} description", name),
        code: format!("Microsoft.Test/{}", slug),
        length: "1-80".to_string(),
        restrictions: "Alphanumerics and hyphens.".to_string(),
        terraform_url: None,
        learn_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_empty() {
        let item: Item = serde_json::from_str(r#"{"name": "Subnet", "slug": "snet"}"#).unwrap();
        assert_eq!(item.icon, "");
        assert_eq!(item.description, "");
        assert_eq!(item.code, "");
        assert_eq!(item.terraform_url, None);
        assert_eq!(item.learn_url, None);
    }

    #[test]
    fn test_camel_case_urls() {
        let item: Item = serde_json::from_str(
            r#"{
                "name": "Key vault",
                "slug": "kv",
                "terraformUrl": "https://registry.terraform.io/kv",
                "learnUrl": "https://learn.microsoft.com/kv"
            }"#,
        )
        .unwrap();
        assert_eq!(item.terraform_url.as_deref(), Some("https://registry.terraform.io/kv"));
        assert_eq!(item.learn_url.as_deref(), Some("https://learn.microsoft.com/kv"));
    }
}
