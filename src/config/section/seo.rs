//! `[seo]` configuration (verification tokens, webmention).

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Field paths for diagnostics.
pub struct WebmentionFields {
    pub hostname: FieldPath,
}

/// Webmention endpoint links emitted into page heads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebmentionConfig {
    /// Emit webmention/pingback endpoint links.
    pub enable: bool,

    /// Hostname registered with webmention.io.
    pub hostname: String,

    /// URL for the `rel="me"` identity link.
    pub auth: Option<String>,
}

impl WebmentionConfig {
    pub const FIELDS: WebmentionFields = WebmentionFields {
        hostname: FieldPath::new("seo.webmention.hostname"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && self.hostname.is_empty() {
            diag.error_with_hint(
                Self::FIELDS.hostname,
                "webmention is enabled but hostname is not configured",
                "set seo.webmention.hostname, e.g.: \"example.com\"",
            );
        }
    }
}

/// Search-engine and social integration settings.
///
/// Everything here only affects which head tags get emitted. Unset
/// fields emit nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSectionConfig {
    /// Google Search Console verification token.
    pub google_site_verification: Option<String>,

    /// Baidu site verification token.
    pub baidu_site_verification: Option<String>,

    /// Facebook page URL for `article:publisher`.
    pub facebook_page: Option<String>,

    /// Webmention endpoint settings.
    pub webmention: WebmentionConfig,
}

impl SeoSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.webmention.validate(diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_seo_defaults() {
        let config = test_parse_config("");
        assert!(config.seo.google_site_verification.is_none());
        assert!(config.seo.facebook_page.is_none());
        assert!(!config.seo.webmention.enable);
    }

    #[test]
    fn test_seo_custom() {
        let config = test_parse_config(
            r#"[seo]
google_site_verification = "token-g"
baidu_site_verification = "token-b"
facebook_page = "https://www.facebook.com/myblog"

[seo.webmention]
enable = true
hostname = "example.com"
auth = "https://example.com/about"
"#,
        );
        assert_eq!(
            config.seo.google_site_verification.as_deref(),
            Some("token-g")
        );
        assert!(config.seo.webmention.enable);
        assert_eq!(config.seo.webmention.hostname, "example.com");
        assert_eq!(
            config.seo.webmention.auth.as_deref(),
            Some("https://example.com/about")
        );
    }

    #[test]
    fn test_webmention_requires_hostname() {
        let webmention = WebmentionConfig {
            enable: true,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        webmention.validate(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field.as_str(), "seo.webmention.hostname");
    }

    #[test]
    fn test_webmention_disabled_skips_check() {
        let webmention = WebmentionConfig::default();
        let mut diag = ConfigDiagnostics::new();
        webmention.validate(&mut diag);
        assert!(!diag.has_errors());
    }
}
