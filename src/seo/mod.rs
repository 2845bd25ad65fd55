//! SEO output for rendered pages.
//!
//! Three stages, each usable on its own:
//!
//! - **Metadata resolution**: maps a route plus page context to a
//!   [`SeoMeta`] record (title, description, slug, kind)
//! - **Structured data**: builds the schema.org JSON-LD object for the
//!   record (`BlogPosting`, `WebPage`, or `WebSite`)
//! - **Head rendering**: serializes the record into the `<head>` tags,
//!   Open Graph and Twitter cards included
//!
//! Resolution and structured data are pure; rendering writes markup.

pub mod head;
pub mod jsonld;
pub mod meta;

pub use head::render_head;
pub use jsonld::StructuredData;
pub use meta::SeoMeta;
