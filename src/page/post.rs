//! Post metadata as delivered by the content backend.

use serde::{Deserialize, Serialize};

use super::{JsonMap, PageKind};

/// Deserialize a string list, treating `null` as empty vec
fn deserialize_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Post metadata from the content backend's page records.
///
/// Field names mirror the backend's camelCase JSON.
///
/// # Standard Fields
///
/// | Field                | Type           | Description                      |
/// |----------------------|----------------|----------------------------------|
/// | `title`              | `String`       | Post title                       |
/// | `summary`            | `String`       | Short description                |
/// | `slug`               | `String`       | URL path segment                 |
/// | `type`               | `PageKind`     | Content kind (`Post`, `Page`)    |
/// | `tags`               | `Vec<String>`  | Categorization tags              |
/// | `category`           | `Vec<String>`  | Categories; the first one is primary |
/// | `publishDate`        | `String`       | Publication date                 |
/// | `lastEditedDate`     | `String`       | Last modification date           |
/// | `pageCoverThumbnail` | `String`       | Cover image URL                  |
///
/// # Custom Fields (`extra`)
///
/// Any additional backend fields are captured in `extra` as raw JSON and
/// passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostMeta {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub slug: Option<String>,
    /// Content kind. The backend only ever sends `Post` or `Page` here.
    #[serde(rename = "type")]
    pub kind: Option<PageKind>,
    /// Tags for categorizing the post.
    #[serde(deserialize_with = "deserialize_string_list")]
    pub tags: Vec<String>,
    /// Categories. The backend models this as a list; only the first
    /// entry participates in metadata.
    #[serde(deserialize_with = "deserialize_string_list")]
    pub category: Vec<String>,
    pub publish_date: Option<String>,
    pub last_edited_date: Option<String>,
    pub page_cover_thumbnail: Option<String>,
    /// Additional backend fields (raw JSON).
    #[serde(flatten)]
    pub extra: JsonMap,
}

impl PostMeta {
    /// The primary category, if any.
    pub fn primary_category(&self) -> Option<&str> {
        self.category.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_meta_default() {
        let post = PostMeta::default();
        assert!(post.title.is_none());
        assert!(post.kind.is_none());
        assert!(post.tags.is_empty());
        assert!(post.primary_category().is_none());
    }

    #[test]
    fn test_post_meta_deserialize() {
        let json = r#"{
            "title": "Hello",
            "summary": "A first post",
            "slug": "hello",
            "type": "Post",
            "tags": ["rust", "web"],
            "category": ["Programming"],
            "publishDate": "2024-01-01",
            "lastEditedDate": "2024-02-15",
            "pageCoverThumbnail": "https://example.com/cover.jpg"
        }"#;
        let post: PostMeta = serde_json::from_str(json).unwrap();
        assert_eq!(post.title.as_deref(), Some("Hello"));
        assert_eq!(post.kind, Some(PageKind::Post));
        assert_eq!(post.tags, vec!["rust", "web"]);
        assert_eq!(post.primary_category(), Some("Programming"));
        assert_eq!(post.publish_date.as_deref(), Some("2024-01-01"));
        assert_eq!(
            post.page_cover_thumbnail.as_deref(),
            Some("https://example.com/cover.jpg")
        );
    }

    #[test]
    fn test_post_meta_null_lists() {
        let json = r#"{"tags": null, "category": null}"#;
        let post: PostMeta = serde_json::from_str(json).unwrap();
        assert!(post.tags.is_empty());
        assert!(post.category.is_empty());
    }

    #[test]
    fn test_post_meta_extra_fields() {
        let json = r#"{"title": "Test", "status": "Published", "wordCount": 42}"#;
        let post: PostMeta = serde_json::from_str(json).unwrap();
        assert_eq!(
            post.extra.get("status").and_then(|v| v.as_str()),
            Some("Published")
        );
        assert_eq!(post.extra.get("wordCount").and_then(|v| v.as_i64()), Some(42));
    }

    #[test]
    fn test_post_meta_first_category_is_primary() {
        let json = r#"{"category": ["Rust", "Web"]}"#;
        let post: PostMeta = serde_json::from_str(json).unwrap();
        assert_eq!(post.primary_category(), Some("Rust"));
    }
}
