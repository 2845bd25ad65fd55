//! Page routes of the site.

use crate::utils::url::UrlPath;

/// The closed set of routes the site renders.
///
/// Every variant carries its own parameters, so metadata resolution can
/// match exhaustively instead of re-parsing paths. Anything that is not a
/// recognized listing route is a [`Route::Post`]: a post or standalone
/// page addressed by its slug, resolved from the page context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/archive`
    Archive,
    /// `/page/{page}`, pagination of the home list
    Page { page: u32 },
    /// `/category`, index of all categories
    CategoryIndex,
    /// `/category/{category}`
    Category { category: String },
    /// `/category/{category}/page/{page}`
    CategoryPage { category: String, page: u32 },
    /// `/tag`, index of all tags
    TagIndex,
    /// `/tag/{tag}`
    Tag { tag: String },
    /// `/tag/{tag}/page/{page}`
    TagPage { tag: String, page: u32 },
    /// `/search`
    Search,
    /// `/search/{keyword}`
    SearchKeyword { keyword: String },
    /// `/search/{keyword}/page/{page}`
    SearchKeywordPage { keyword: String, page: u32 },
    /// `/404`
    NotFound,
    /// Fallback: a post or standalone page.
    Post,
}

impl Route {
    /// Map a concrete URL path to a route.
    ///
    /// The path may be percent-encoded; parameters come out decoded.
    /// Paths that fit no listing pattern (including malformed page
    /// numbers) fall back to [`Route::Post`].
    pub fn parse(path: &str) -> Self {
        let path = UrlPath::from_browser(path);
        let segments: Vec<&str> = path.segments().collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["archive"] => Self::Archive,
            ["page", page] => match page.parse() {
                Ok(page) => Self::Page { page },
                Err(_) => Self::Post,
            },
            ["category"] => Self::CategoryIndex,
            ["category", category] => Self::Category {
                category: (*category).to_owned(),
            },
            ["category", category, "page", page] => match page.parse() {
                Ok(page) => Self::CategoryPage {
                    category: (*category).to_owned(),
                    page,
                },
                Err(_) => Self::Post,
            },
            ["tag"] => Self::TagIndex,
            ["tag", tag] => Self::Tag {
                tag: (*tag).to_owned(),
            },
            ["tag", tag, "page", page] => match page.parse() {
                Ok(page) => Self::TagPage {
                    tag: (*tag).to_owned(),
                    page,
                },
                Err(_) => Self::Post,
            },
            ["search"] => Self::Search,
            ["search", keyword] => Self::SearchKeyword {
                keyword: (*keyword).to_owned(),
            },
            ["search", keyword, "page", page] => match page.parse() {
                Ok(page) => Self::SearchKeywordPage {
                    keyword: (*keyword).to_owned(),
                    page,
                },
                Err(_) => Self::Post,
            },
            ["404"] => Self::NotFound,
            _ => Self::Post,
        }
    }
}
