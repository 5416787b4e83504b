//! CLI commands

pub mod export;
pub mod list;
