//! Per-render page context.

use super::PostMeta;

/// Inputs that vary from one rendered page to the next.
///
/// `post` is present on post and standalone-page routes. `search_keyword`
/// carries the active search query and wins over any keyword embedded in
/// the route path.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub post: Option<PostMeta>,
    pub search_keyword: Option<String>,
}

impl PageContext {
    /// Context for a post detail page.
    pub fn for_post(post: PostMeta) -> Self {
        Self {
            post: Some(post),
            ..Self::default()
        }
    }

    /// Context for a search page with an active query.
    pub fn for_search(keyword: impl Into<String>) -> Self {
        Self {
            search_keyword: Some(keyword.into()),
            ..Self::default()
        }
    }
}
