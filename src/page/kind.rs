//! Page content kind.

use serde::{Deserialize, Serialize};

/// Content kind the backend reports for a page.
///
/// Determines which structured-data shape the page gets: `Post` becomes
/// a `BlogPosting`, `Page` a `WebPage`, `Website` the site-level `WebSite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageKind {
    /// Site-level listing pages: home, archive, tag/category lists, search.
    #[serde(rename = "website")]
    Website,
    /// A dated article with author and publish metadata.
    Post,
    /// A standalone page (about, links) without article semantics.
    Page,
}

impl PageKind {
    /// Check if this page carries article semantics.
    #[inline]
    pub fn is_post(&self) -> bool {
        matches!(self, Self::Post)
    }

    /// Check if this is a site-level listing page.
    #[inline]
    pub fn is_website(&self) -> bool {
        matches!(self, Self::Website)
    }

    /// The literal string the backend and `og:type` use.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Post => "Post",
            Self::Page => "Page",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_literals() {
        // Backend sends the capitalized forms, listing pages the lowercase one
        assert_eq!(serde_json::to_string(&PageKind::Website).unwrap(), r#""website""#);
        assert_eq!(serde_json::to_string(&PageKind::Post).unwrap(), r#""Post""#);
        assert_eq!(serde_json::to_string(&PageKind::Page).unwrap(), r#""Page""#);

        let kind: PageKind = serde_json::from_str(r#""Post""#).unwrap();
        assert!(kind.is_post());
    }

    #[test]
    fn test_predicates() {
        assert!(PageKind::Website.is_website());
        assert!(!PageKind::Website.is_post());
        assert!(!PageKind::Page.is_post());
        assert_eq!(PageKind::Page.as_str(), "Page");
    }
}
