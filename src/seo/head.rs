//! Head fragment rendering.
//!
//! Serializes a resolved metadata record into the `<head>` tags of a
//! page: title, description, keywords, Open Graph and Twitter cards,
//! verification tokens, webmention endpoints, `article:*` properties,
//! the canonical link, and the JSON-LD script.

use std::io::{Cursor, Write};

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};

use super::{jsonld::StructuredData, meta::SeoMeta};
use crate::{
    config::{SiteConfig, SiteInfoConfig},
    page::PageContext,
    utils::{date::DateTimeUtc, url::canonical_url},
};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Social preview fallback when neither page nor site define a cover.
const DEFAULT_OG_IMAGE: &str = "/bg_image.jpg";

/// Render the head fragment for a resolved record.
///
/// Unset optional inputs (verification tokens, theme color, webmention,
/// post dates) emit nothing. The canonical URL joins `site.url` with the
/// record slug, percent-encoded.
pub fn render_head(meta: &SeoMeta, ctx: &PageContext, config: &SiteConfig) -> Result<String> {
    let site = &config.site;
    let seo = &config.seo;

    let url = canonical_url(site.base_url(), meta.slug.as_deref());
    let title = if meta.title.is_empty() {
        site.title.as_str()
    } else {
        meta.title.as_str()
    };
    let description = meta.description.as_deref().unwrap_or(&site.description);
    let image = meta.image.as_deref().unwrap_or(DEFAULT_OG_IMAGE);
    // Facebook only recognizes the og:locale in its zh_CN form
    let og_locale = site.language.replace('-', "_");
    let keywords = derive_keywords(meta, ctx, site);

    let mut writer = Writer::new(Cursor::new(Vec::new()));

    if let Some(favicon) = &site.favicon {
        write_empty_elem(&mut writer, "link", &[("rel", "icon"), ("href", favicon)])?;
    }
    write_text_element(&mut writer, "title", title)?;
    if let Some(color) = &site.theme_color {
        write_meta_name(&mut writer, "theme-color", color)?;
    }
    write_meta_name(&mut writer, "robots", "follow, index")?;
    if let Some(token) = &seo.google_site_verification {
        write_meta_name(&mut writer, "google-site-verification", token)?;
    }
    if let Some(token) = &seo.baidu_site_verification {
        write_meta_name(&mut writer, "baidu-site-verification", token)?;
    }
    write_meta_name(&mut writer, "keywords", &keywords)?;
    write_meta_name(&mut writer, "description", description)?;
    write_meta_property(&mut writer, "og:locale", &og_locale)?;
    write_meta_property(&mut writer, "og:title", title)?;
    write_meta_property(&mut writer, "og:description", description)?;
    write_meta_property(&mut writer, "og:url", &url)?;
    write_meta_property(&mut writer, "og:image", image)?;
    // og:site_name carries the page title, not the site title
    write_meta_property(&mut writer, "og:site_name", title)?;
    write_meta_property(&mut writer, "og:type", meta.og_type())?;
    write_meta_name(&mut writer, "twitter:card", "summary_large_image")?;
    write_meta_name(&mut writer, "twitter:description", description)?;
    write_meta_name(&mut writer, "twitter:title", title)?;
    write_meta_name(&mut writer, "twitter:image", image)?;

    if seo.webmention.enable {
        let hostname = &seo.webmention.hostname;
        write_empty_elem(
            &mut writer,
            "link",
            &[
                ("rel", "webmention"),
                ("href", &format!("https://webmention.io/{hostname}/webmention")),
            ],
        )?;
        write_empty_elem(
            &mut writer,
            "link",
            &[
                ("rel", "pingback"),
                ("href", &format!("https://webmention.io/{hostname}/xmlrpc")),
            ],
        )?;
        if let Some(auth) = &seo.webmention.auth {
            write_empty_elem(&mut writer, "link", &[("href", auth), ("rel", "me")])?;
        }
    }

    if meta.is_post() {
        write_article_properties(&mut writer, meta, ctx, site, seo.facebook_page.as_deref())?;
    }

    write_empty_elem(&mut writer, "link", &[("rel", "canonical"), ("href", &url)])?;

    let json = StructuredData::build(meta, ctx.post.as_ref(), site, &url).to_embedded_json()?;
    write_json_ld(&mut writer, &json)?;

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// `article:*` Open Graph properties, post records only.
fn write_article_properties(
    writer: &mut XmlWriter,
    meta: &SeoMeta,
    ctx: &PageContext,
    site: &SiteInfoConfig,
    facebook_page: Option<&str>,
) -> Result<()> {
    let published = ctx
        .post
        .as_ref()
        .and_then(|p| p.publish_date.as_deref())
        .and_then(DateTimeUtc::parse)
        .map(DateTimeUtc::to_date_string);
    if let Some(day) = published {
        write_meta_property(writer, "article:published_time", &day)?;
    }
    if !site.author.is_empty() {
        write_meta_property(writer, "article:author", &site.author)?;
    }
    // Facebook reads the link category from article:section
    let section = meta
        .category
        .clone()
        .unwrap_or_else(|| site.keywords.join(","));
    if !section.is_empty() {
        write_meta_property(writer, "article:section", &section)?;
    }
    if let Some(page) = facebook_page {
        write_meta_property(writer, "article:publisher", page)?;
    }
    Ok(())
}

/// Comma-joined keywords: post tags win, then record tags, then the
/// configured site keywords.
fn derive_keywords(meta: &SeoMeta, ctx: &PageContext, site: &SiteInfoConfig) -> String {
    if let Some(post) = &ctx.post && !post.tags.is_empty() {
        return post.tags.join(",");
    }
    if !meta.tags.is_empty() {
        return meta.tags.join(",");
    }
    site.keywords.join(",")
}

/// Write a text element: `<tag>text</tag>`.
fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

fn write_meta_name(writer: &mut XmlWriter, name: &str, content: &str) -> Result<()> {
    write_empty_elem(writer, "meta", &[("name", name), ("content", content)])
}

fn write_meta_property(writer: &mut XmlWriter, property: &str, content: &str) -> Result<()> {
    write_empty_elem(writer, "meta", &[("property", property), ("content", content)])
}

/// Write the JSON-LD script. The payload is pre-escaped JSON and goes in
/// raw; routing it through a text event would entity-encode the quotes.
fn write_json_ld(writer: &mut XmlWriter, json: &str) -> Result<()> {
    let mut script = BytesStart::new("script");
    script.push_attribute(("type", "application/ld+json"));
    writer.write_event(Event::Start(script))?;
    writer.get_mut().write_all(json.as_bytes())?;
    writer.write_event(Event::End(BytesEnd::new("script")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        locale::Locale,
        page::{PageKind, PostMeta, Route},
    };

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.title = "Blog".into();
        config.site.description = "A blog".into();
        config.site.author = "Ann".into();
        config.site.url = Some("https://example.com".into());
        config.site.favicon = Some("/favicon.ico".into());
        config
    }

    fn make_post() -> PostMeta {
        PostMeta {
            title: Some("Hello".into()),
            summary: Some("A first post".into()),
            slug: Some("hello".into()),
            kind: Some(PageKind::Post),
            publish_date: Some("2024-01-05".into()),
            category: vec!["Programming".into()],
            tags: vec!["rust".into(), "web".into()],
            ..Default::default()
        }
    }

    fn render(route: &Route, ctx: &PageContext, config: &SiteConfig) -> String {
        let meta = SeoMeta::resolve(route, ctx, &config.site, &Locale::default());
        render_head(&meta, ctx, config).unwrap()
    }

    #[test]
    fn test_render_home() {
        let config = make_config();
        let head = render(&Route::Home, &PageContext::default(), &config);

        assert!(head.starts_with(r#"<link rel="icon" href="/favicon.ico"/>"#));
        assert!(head.contains("<title>Blog | A blog</title>"));
        assert!(head.contains(r#"<meta name="robots" content="follow, index"/>"#));
        assert!(head.contains(r#"<meta name="description" content="A blog"/>"#));
        assert!(head.contains(r#"<meta property="og:title" content="Blog | A blog"/>"#));
        assert!(head.contains(r#"<meta property="og:url" content="https://example.com/"/>"#));
        assert!(head.contains(r#"<meta property="og:type" content="website"/>"#));
        assert!(head.contains(r#"<meta name="twitter:card" content="summary_large_image"/>"#));
        assert!(head.contains(r#"<link rel="canonical" href="https://example.com/"/>"#));
        assert!(head.contains(r#"<script type="application/ld+json">"#));
        assert!(head.contains(r#""@type":"WebSite""#));
    }

    #[test]
    fn test_gated_tags_absent_by_default() {
        let config = make_config();
        let head = render(&Route::Home, &PageContext::default(), &config);

        assert!(!head.contains("google-site-verification"));
        assert!(!head.contains("baidu-site-verification"));
        assert!(!head.contains("theme-color"));
        assert!(!head.contains("webmention"));
        assert!(!head.contains("article:"));
    }

    #[test]
    fn test_gated_tags_present_when_configured() {
        let mut config = make_config();
        config.site.theme_color = Some("#1e1e1e".into());
        config.seo.google_site_verification = Some("token-g".into());
        config.seo.baidu_site_verification = Some("token-b".into());
        config.seo.webmention.enable = true;
        config.seo.webmention.hostname = "example.com".into();
        config.seo.webmention.auth = Some("https://example.com/about".into());

        let head = render(&Route::Home, &PageContext::default(), &config);
        assert!(head.contains(r##"<meta name="theme-color" content="#1e1e1e"/>"##));
        assert!(head.contains(r#"<meta name="google-site-verification" content="token-g"/>"#));
        assert!(head.contains(r#"<meta name="baidu-site-verification" content="token-b"/>"#));
        assert!(head.contains(
            r#"<link rel="webmention" href="https://webmention.io/example.com/webmention"/>"#
        ));
        assert!(head.contains(
            r#"<link rel="pingback" href="https://webmention.io/example.com/xmlrpc"/>"#
        ));
        assert!(head.contains(r#"<link href="https://example.com/about" rel="me"/>"#));
    }

    #[test]
    fn test_webmention_auth_link_needs_auth_url() {
        let mut config = make_config();
        config.seo.webmention.enable = true;
        config.seo.webmention.hostname = "example.com".into();

        let head = render(&Route::Home, &PageContext::default(), &config);
        assert!(head.contains(r#"rel="webmention""#));
        assert!(!head.contains(r#"rel="me""#));
    }

    #[test]
    fn test_article_properties_for_posts() {
        let mut config = make_config();
        config.seo.facebook_page = Some("https://www.facebook.com/myblog".into());
        let ctx = PageContext::for_post(make_post());

        let head = render(&Route::Post, &ctx, &config);
        assert!(head.contains(r#"<meta property="article:published_time" content="2024-01-05"/>"#));
        assert!(head.contains(r#"<meta property="article:author" content="Ann"/>"#));
        assert!(head.contains(r#"<meta property="article:section" content="Programming"/>"#));
        assert!(head.contains(
            r#"<meta property="article:publisher" content="https://www.facebook.com/myblog"/>"#
        ));
        assert!(head.contains(r#"<meta property="og:type" content="Post"/>"#));
        assert!(head.contains(r#""@type":"BlogPosting""#));
    }

    #[test]
    fn test_invalid_publish_date_is_omitted() {
        let config = make_config();
        let mut post = make_post();
        post.publish_date = Some("someday".into());
        let ctx = PageContext::for_post(post);

        let head = render(&Route::Post, &ctx, &config);
        assert!(!head.contains("article:published_time"));
        // The rest of the article block still renders
        assert!(head.contains("article:author"));
    }

    #[test]
    fn test_keywords_prefer_post_tags() {
        let mut config = make_config();
        config.site.keywords = vec!["fallback".into()];
        let ctx = PageContext::for_post(make_post());

        let head = render(&Route::Post, &ctx, &config);
        assert!(head.contains(r#"<meta name="keywords" content="rust,web"/>"#));
    }

    #[test]
    fn test_keywords_fall_back_to_site_config() {
        let mut config = make_config();
        config.site.keywords = vec!["tech".into(), "blog".into()];

        let head = render(&Route::Home, &PageContext::default(), &config);
        assert!(head.contains(r#"<meta name="keywords" content="tech,blog"/>"#));

        let mut post = make_post();
        post.tags = Vec::new();
        let head = render(&Route::Post, &PageContext::for_post(post), &config);
        assert!(head.contains(r#"<meta name="keywords" content="tech,blog"/>"#));
    }

    #[test]
    fn test_keywords_use_record_tags_without_post() {
        let mut config = make_config();
        config.site.keywords = vec!["fallback".into()];
        let meta = SeoMeta {
            title: "Notes | Blog".into(),
            slug: Some("notes".into()),
            tags: vec!["essays".into(), "notes".into()],
            ..SeoMeta::default()
        };

        let head = render_head(&meta, &PageContext::default(), &config).unwrap();
        assert!(head.contains(r#"<meta name="keywords" content="essays,notes"/>"#));
    }

    #[test]
    fn test_og_image_fallback() {
        let config = make_config();
        // No page cover anywhere in make_config
        let head = render(&Route::Home, &PageContext::default(), &config);
        assert!(head.contains(r#"<meta property="og:image" content="/bg_image.jpg"/>"#));
        assert!(head.contains(r#"<meta name="twitter:image" content="/bg_image.jpg"/>"#));

        let mut config = make_config();
        config.site.page_cover = Some("https://example.com/cover.jpg".into());
        let head = render(&Route::Home, &PageContext::default(), &config);
        assert!(
            head.contains(r#"<meta property="og:image" content="https://example.com/cover.jpg"/>"#)
        );
    }

    #[test]
    fn test_og_locale_uses_underscore() {
        let mut config = make_config();
        config.site.language = "zh-CN".into();

        let head = render(&Route::Home, &PageContext::default(), &config);
        assert!(head.contains(r#"<meta property="og:locale" content="zh_CN"/>"#));
    }

    #[test]
    fn test_canonical_percent_encodes_slug() {
        let config = make_config();
        let head = render(
            &Route::Tag { tag: "中文".into() },
            &PageContext::default(),
            &config,
        );
        assert!(head.contains(
            r#"<link rel="canonical" href="https://example.com/tag/%E4%B8%AD%E6%96%87/"/>"#
        ));
    }

    #[test]
    fn test_not_found_canonical_is_base_url() {
        let config = make_config();
        let head = render(&Route::NotFound, &PageContext::default(), &config);
        assert!(head.contains(r#"<link rel="canonical" href="https://example.com/"/>"#));
        assert!(head.contains("<title>Blog | Page Not Found</title>"));
        // No slug means no page of its own, never an "undefined" segment
        assert!(!head.contains("undefined"));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut config = make_config();
        config.site.description = r#"Q&A "tips""#.into();

        let head = render(&Route::Home, &PageContext::default(), &config);
        assert!(head.contains("Q&amp;A &quot;tips&quot;"));
        assert!(head.contains("<title>Blog | Q&amp;A &quot;tips&quot;</title>"));
    }

    #[test]
    fn test_json_ld_payload_is_inert() {
        let config = make_config();
        let mut post = make_post();
        post.summary = Some("bad </script><script>alert(1)</script>".into());
        let ctx = PageContext::for_post(post);

        let head = render(&Route::Post, &ctx, &config);
        // Only the JSON-LD script element itself opens and closes a script
        assert_eq!(head.matches("<script").count(), 1);
        assert_eq!(head.matches("</script>").count(), 1);
        assert!(head.contains("\\u003c/script>"));
    }

    #[test]
    fn test_missing_title_falls_back_to_site_title() {
        let config = make_config();
        let meta = SeoMeta::default();
        let head = render_head(&meta, &PageContext::default(), &config).unwrap();
        assert!(head.contains("<title>Blog</title>"));
        assert!(head.contains(r#"<meta property="og:site_name" content="Blog"/>"#));
    }
}
