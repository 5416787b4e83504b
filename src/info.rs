//! Static site metadata
//!
//! Defaults for the site name and canonical URL. Both can be overridden in
//! `_config.yml`; templates should read them through [`crate::config::SiteConfig`].

/// Used for the header of the page and in SEO
pub const NAME: &str = "Ben Heidemann Limited";

/// Used for SEO in `/posts/<slug>`
pub const WEBSITE: &str = "https://heidemann.dev";
