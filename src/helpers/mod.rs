//! Helper functions for content enrichment
//!
//! Text utilities shared by the content pipeline and the CLI: HTML
//! inspection and reading time estimation.

mod html;
mod reading;

pub use html::*;
pub use reading::*;
