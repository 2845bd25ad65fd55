//! Page types: routes, backend metadata, and per-render context.

mod context;
mod kind;
mod post;
mod route;

pub use context::PageContext;
pub use kind::PageKind;
pub use post::PostMeta;
pub use route::Route;

/// A JSON object map for storing arbitrary metadata fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
