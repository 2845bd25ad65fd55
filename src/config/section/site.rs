//! `[site]` configuration.
//!
//! Site-wide metadata consumed by metadata resolution, head rendering,
//! and structured data.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Field paths for diagnostics.
pub struct SiteInfoFields {
    pub title: FieldPath,
    pub url: FieldPath,
}

/// Site metadata.
///
/// `url` may carry a sub-path (e.g. `https://example.com/blog`) which
/// becomes part of every canonical URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Author name.
    pub author: String,

    /// Site URL, path used as prefix (e.g., "https://example.com/blog").
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-CN").
    pub language: String,

    /// Default social/cover image URL.
    pub page_cover: Option<String>,

    /// Favicon URL. Doubles as the publisher logo in structured data.
    pub favicon: Option<String>,

    /// Browser theme color.
    pub theme_color: Option<String>,

    /// Fallback SEO keywords.
    pub keywords: Vec<String>,

    /// Custom fields passed through to the host untouched.
    #[serde(default)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            url: None,
            language: "en".into(),
            page_cover: None,
            favicon: None,
            theme_color: None,
            keywords: Vec::new(),
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        title: FieldPath::new("site.title"),
        url: FieldPath::new("site.url"),
    };

    /// Base link with any trailing slash removed.
    ///
    /// Empty when `url` is unconfigured, which degrades generated URLs to
    /// site-relative paths instead of failing.
    pub fn base_url(&self) -> &str {
        self.url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .unwrap_or("")
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` must be set
    /// - `url` must be set and a valid URL with scheme (e.g., `https://example.com`)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is not configured",
                "set site.title, e.g.: \"My Blog\"",
            );
        }

        // URL format check using url crate for strict validation
        match &self.url {
            None => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    "site URL is not configured",
                    format!(
                        "set {}, e.g.: \"https://example.com\"",
                        Self::FIELDS.url.as_str()
                    ),
                );
            }
            Some(url_str) => match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.title, "Test");
        assert_eq!(config.site.language, "en");
        assert!(config.site.page_cover.is_none());
        assert!(config.site.keywords.is_empty());
    }

    #[test]
    fn test_site_custom() {
        let config = test_parse_config(
            r#"language = "zh-CN"
page_cover = "https://example.com/cover.jpg"
favicon = "https://example.com/favicon.ico"
keywords = ["blog", "rust"]

[site.extra]
analytics_id = "UA-1234"
"#,
        );
        assert_eq!(config.site.language, "zh-CN");
        assert_eq!(
            config.site.page_cover.as_deref(),
            Some("https://example.com/cover.jpg")
        );
        assert_eq!(config.site.keywords, vec!["blog", "rust"]);
        assert!(config.site.extra.contains_key("analytics_id"));
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let mut site = SiteInfoConfig::default();
        assert_eq!(site.base_url(), "");

        site.url = Some("https://example.com/".into());
        assert_eq!(site.base_url(), "https://example.com");

        site.url = Some("https://example.com/blog".into());
        assert_eq!(site.base_url(), "https://example.com/blog");
    }

    #[test]
    fn test_validate_requires_title_and_url() {
        let site = SiteInfoConfig::default();
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut site = SiteInfoConfig {
            title: "Test".into(),
            ..Default::default()
        };

        site.url = Some("ftp://example.com".into());
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_errors());

        site.url = Some("not a url".into());
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_accepts_url_with_sub_path() {
        let site = SiteInfoConfig {
            title: "Test".into(),
            url: Some("https://example.github.io/my-blog".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(!diag.has_errors());
    }
}
