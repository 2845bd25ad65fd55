//! Configuration section definitions.
//!
//! Each module corresponds to a section in `masthead.toml`:
//!
//! | Module | TOML Section | Purpose                              |
//! |--------|--------------|--------------------------------------|
//! | `seo`  | `[seo]`      | Verification tokens, webmention      |
//! | `site` | `[site]`     | Site metadata (title, url, language) |

mod seo;
mod site;

// Re-export section configs
pub use seo::{SeoSectionConfig, WebmentionConfig};
pub use site::SiteInfoConfig;
