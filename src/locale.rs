//! Localized UI labels used in page titles.

use serde::{Deserialize, Serialize};

/// Navigation labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavLabels {
    pub archive: String,
    pub search: String,
    pub page_not_found: String,
}

impl Default for NavLabels {
    fn default() -> Self {
        Self {
            archive: "Archive".into(),
            search: "Search".into(),
            page_not_found: "Page Not Found".into(),
        }
    }
}

/// Taxonomy labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonLabels {
    pub category: String,
    pub tags: String,
}

impl Default for CommonLabels {
    fn default() -> Self {
        Self {
            category: "Category".into(),
            tags: "Tags".into(),
        }
    }
}

/// Localized strings for title assembly.
///
/// Defaults are English. Hosts supply translations by deserializing a
/// full or partial label set; missing labels keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub nav: NavLabels,
    pub common: CommonLabels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_defaults() {
        let locale = Locale::default();
        assert_eq!(locale.nav.archive, "Archive");
        assert_eq!(locale.nav.search, "Search");
        assert_eq!(locale.nav.page_not_found, "Page Not Found");
        assert_eq!(locale.common.category, "Category");
        assert_eq!(locale.common.tags, "Tags");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let json = r#"{"nav": {"archive": "归档", "search": "搜索"}, "common": {"tags": "标签"}}"#;
        let locale: Locale = serde_json::from_str(json).unwrap();
        assert_eq!(locale.nav.archive, "归档");
        assert_eq!(locale.nav.search, "搜索");
        // Not overridden
        assert_eq!(locale.nav.page_not_found, "Page Not Found");
        assert_eq!(locale.common.tags, "标签");
        assert_eq!(locale.common.category, "Category");
    }
}
