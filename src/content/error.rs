//! Errors raised while loading posts

use std::path::PathBuf;
use thiserror::Error;

/// Problems with a document's front-matter block
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("no front-matter block found")]
    Missing,

    #[error("invalid front-matter: {0}")]
    Invalid(String),

    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unrecognised date `{0}`")]
    InvalidDate(String),
}

/// Loading errors. Any of these aborts the whole load.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk posts directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Cannot derive a slug from {path:?}")]
    InvalidPath { path: PathBuf },

    #[error("Front-matter error in {path:?}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },

    #[error("Failed to render {path:?}: {message}")]
    Render { path: PathBuf, message: String },

    #[error("{path:?} has no paragraph to use as preview and sets no `preview` in front-matter")]
    MissingPreview { path: PathBuf },

    #[error("Duplicate slug `{slug}` in {first:?} and {second:?}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },
}
