//! Masthead - SEO metadata for statically generated blogs.
//!
//! Resolves per-route page metadata, builds schema.org structured data,
//! and renders `<head>` fragments, driven by a TOML site configuration.

pub mod config;
pub mod locale;
pub mod logger;
pub mod page;
pub mod seo;
pub mod utils;

pub use config::SiteConfig;
pub use locale::Locale;
pub use page::{PageContext, PageKind, PostMeta, Route};
pub use seo::{SeoMeta, StructuredData, render_head};
