//! JSON-LD structured data.
//!
//! Builds the schema.org object embedded in every page head. The shape
//! depends on the record: posts become `BlogPosting`, standalone pages
//! `WebPage`, everything else the site-level `WebSite` with its
//! `SearchAction`.

use anyhow::Result;
use serde::Serialize;

use super::meta::SeoMeta;
use crate::{config::SiteInfoConfig, page::PostMeta, utils::date::DateTimeUtc};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A schema.org `Person` node.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

impl Person {
    fn new(name: &str) -> Self {
        Self {
            kind: "Person",
            name: name.to_owned(),
        }
    }
}

/// A schema.org `ImageObject` node.
#[derive(Debug, Clone, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A schema.org `Organization` node.
#[derive(Debug, Clone, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

impl Organization {
    /// The site as publisher, with the favicon standing in for a logo.
    fn publisher(site: &SiteInfoConfig) -> Self {
        Self {
            kind: "Organization",
            name: site.title.clone(),
            logo: ImageObject {
                kind: "ImageObject",
                url: site.favicon.clone(),
            },
        }
    }
}

/// Reference to the page a `BlogPosting` is the main entity of.
#[derive(Debug, Serialize)]
pub struct MainEntity {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

/// Sitelinks search box action.
#[derive(Debug, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Keeps the literal `{search_term_string}` placeholder; search
    /// engines substitute the query themselves.
    pub target: String,
    #[serde(rename = "query-input")]
    pub query_input: &'static str,
}

/// Article structured data for post pages.
#[derive(Debug, Serialize)]
pub struct BlogPosting {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "mainEntityOfPage")]
    pub main_entity_of_page: MainEntity,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "datePublished", skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(rename = "dateModified", skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    pub author: Person,
    pub publisher: Organization,
}

/// Structured data for standalone pages below the site root.
#[derive(Debug, Serialize)]
pub struct WebPage {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "isPartOf")]
    pub is_part_of: WebSiteRef,
}

/// Short `WebSite` reference used inside `isPartOf`.
#[derive(Debug, Serialize)]
pub struct WebSiteRef {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
    pub name: String,
}

/// Site-level structured data, the default shape.
#[derive(Debug, Serialize)]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
    pub name: String,
    pub description: String,
    pub publisher: Organization,
    #[serde(rename = "potentialAction")]
    pub potential_action: SearchAction,
}

/// The JSON-LD object for one page.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StructuredData {
    BlogPosting(Box<BlogPosting>),
    WebPage(WebPage),
    WebSite(WebSite),
}

impl StructuredData {
    /// Build the structured data for a resolved record.
    ///
    /// `url` is the page's canonical URL. Post dates that fail to parse
    /// are omitted rather than emitted verbatim.
    pub fn build(
        meta: &SeoMeta,
        post: Option<&PostMeta>,
        site: &SiteInfoConfig,
        url: &str,
    ) -> Self {
        if meta.is_post() && let Some(post) = post {
            return Self::BlogPosting(Box::new(BlogPosting {
                context: SCHEMA_CONTEXT,
                kind: "BlogPosting",
                main_entity_of_page: MainEntity {
                    kind: "WebPage",
                    id: url.to_owned(),
                },
                headline: post.title.clone().unwrap_or_default(),
                description: post.summary.clone().or_else(|| meta.description.clone()),
                image: meta.image.clone(),
                date_published: iso_date(post.publish_date.as_deref()),
                date_modified: iso_date(post.last_edited_date.as_deref()),
                author: Person::new(&site.author),
                publisher: Organization::publisher(site),
            }));
        }

        let base_url = site.base_url();

        // Named pages that are not site-level listings
        let site_level = meta.kind.is_some_and(|k| k.is_website());
        if !site_level && meta.slug.as_deref().is_some_and(|s| !s.is_empty()) {
            return Self::WebPage(WebPage {
                context: SCHEMA_CONTEXT,
                kind: "WebPage",
                url: url.to_owned(),
                name: meta.title.clone(),
                description: meta.description.clone(),
                is_part_of: WebSiteRef {
                    kind: "WebSite",
                    url: base_url.to_owned(),
                    name: site.title.clone(),
                },
            });
        }

        Self::WebSite(WebSite {
            context: SCHEMA_CONTEXT,
            kind: "WebSite",
            url: base_url.to_owned(),
            name: site.title.clone(),
            description: site.description.clone(),
            publisher: Organization::publisher(site),
            potential_action: SearchAction {
                kind: "SearchAction",
                target: format!("{base_url}/search/{{search_term_string}}"),
                query_input: "required name=search_term_string",
            },
        })
    }

    /// Serialize for embedding inside a `<script>` element.
    ///
    /// `<` becomes `\u003c` so a `</script>` sequence in a string value
    /// cannot terminate the element early. The escaped form parses back
    /// to identical JSON.
    pub fn to_embedded_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }
}

/// ISO 8601 timestamp with millisecond precision, `None` when unparseable.
fn iso_date(raw: Option<&str>) -> Option<String> {
    raw.and_then(DateTimeUtc::parse).map(DateTimeUtc::to_iso8601)
}
