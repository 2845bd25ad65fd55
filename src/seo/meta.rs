//! Metadata resolution.
//!
//! Maps a [`Route`] plus its render context to the metadata record that
//! feeds head rendering and structured data. Resolution is a total
//! function: every route produces a record with a title, and missing
//! inputs degrade to `None`/empty fields instead of failing.

use crate::{
    config::SiteInfoConfig,
    locale::Locale,
    page::{PageContext, PageKind, Route},
};

/// SEO metadata for one rendered page.
///
/// | Field         | Meaning                                            |
/// |---------------|----------------------------------------------------|
/// | `title`       | Document title, always non-empty                   |
/// | `description` | Meta description; `None` only on the 404 record    |
/// | `image`       | Social preview image URL                           |
/// | `slug`        | Path below the site base URL; `None` means no page of its own |
/// | `kind`        | `website` for listings, post kind on detail pages  |
/// | `category`    | Primary category (post detail only)                |
/// | `tags`        | Post tags (post detail only)                       |
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub slug: Option<String>,
    pub kind: Option<PageKind>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl SeoMeta {
    /// Resolve the metadata record for a route.
    ///
    /// Listing routes draw everything from `site` and `locale`. The
    /// [`Route::Post`] fallback draws from `ctx.post`, or produces the
    /// `"{title} | loading"` placeholder when no post is loaded yet.
    pub fn resolve(
        route: &Route,
        ctx: &PageContext,
        site: &SiteInfoConfig,
        locale: &Locale,
    ) -> Self {
        match route {
            Route::Home => Self::listing(
                format!("{} | {}", site.title, site.description),
                "",
                site,
            ),
            Route::Archive => Self::listing(
                format!("{} | {}", locale.nav.archive, site.title),
                "archive",
                site,
            ),
            Route::Page { page } => Self::listing(
                format!("{page} | Page | {}", site.title),
                format!("page/{page}"),
                site,
            ),
            // Pagination keeps the unpaginated slug
            Route::Category { category } | Route::CategoryPage { category, .. } => Self::listing(
                format!("{category} | {} | {}", locale.common.category, site.title),
                format!("category/{category}"),
                site,
            ),
            Route::Tag { tag } | Route::TagPage { tag, .. } => Self::listing(
                format!("{tag} | {} | {}", locale.common.tags, site.title),
                format!("tag/{tag}"),
                site,
            ),
            Route::CategoryIndex => Self::listing(
                format!("{} | {}", locale.common.category, site.title),
                "category",
                site,
            ),
            Route::TagIndex => Self::listing(
                format!("{} | {}", locale.common.tags, site.title),
                "tag",
                site,
            ),
            Route::Search => {
                let keyword = effective_keyword(ctx, None);
                Self::listing(search_title(keyword, site, locale), "search", site)
            }
            Route::SearchKeyword { keyword } | Route::SearchKeywordPage { keyword, .. } => {
                let keyword = effective_keyword(ctx, Some(keyword.as_str()));
                Self {
                    // Keyword search pages describe the site by its title
                    description: Some(site.title.clone()),
                    ..Self::listing(
                        search_title(keyword, site, locale),
                        format!("search/{}", keyword.unwrap_or_default()),
                        site,
                    )
                }
            }
            Route::NotFound => Self {
                title: format!("{} | {}", site.title, locale.nav.page_not_found),
                image: site.page_cover.clone(),
                ..Self::default()
            },
            Route::Post => match &ctx.post {
                Some(post) => Self {
                    title: format!(
                        "{} | {}",
                        post.title.as_deref().unwrap_or_default(),
                        site.title
                    ),
                    description: post.summary.clone(),
                    image: post
                        .page_cover_thumbnail
                        .clone()
                        .or_else(|| site.page_cover.clone()),
                    slug: post.slug.clone(),
                    kind: post.kind,
                    category: post.primary_category().map(str::to_owned),
                    tags: post.tags.clone(),
                },
                None => Self {
                    title: format!("{} | loading", site.title),
                    image: site.page_cover.clone(),
                    ..Self::default()
                },
            },
        }
    }

    /// Record shared by all listing routes.
    fn listing(title: String, slug: impl Into<String>, site: &SiteInfoConfig) -> Self {
        Self {
            title,
            description: Some(site.description.clone()),
            image: site.page_cover.clone(),
            slug: Some(slug.into()),
            kind: Some(PageKind::Website),
            category: None,
            tags: Vec::new(),
        }
    }

    /// Check if this record carries article semantics.
    #[inline]
    pub fn is_post(&self) -> bool {
        self.kind.is_some_and(|k| k.is_post())
    }

    /// The `og:type` value: the record kind, defaulting to `website`.
    pub fn og_type(&self) -> &'static str {
        self.kind.map_or("website", |k| k.as_str())
    }
}

/// The active search keyword: an explicit query wins over the route path.
/// Empty strings count as absent.
fn effective_keyword<'a>(ctx: &'a PageContext, route_keyword: Option<&'a str>) -> Option<&'a str> {
    ctx.search_keyword
        .as_deref()
        .or(route_keyword)
        .filter(|k| !k.is_empty())
}

fn search_title(keyword: Option<&str>, site: &SiteInfoConfig, locale: &Locale) -> String {
    match keyword {
        Some(kw) => format!("{kw} | {} | {}", locale.nav.search, site.title),
        None => format!("{} | {}", locale.nav.search, site.title),
    }
}
