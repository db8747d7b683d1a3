//! Error types for mdraft operations

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for draft operations
#[derive(Error, Debug)]
pub enum DraftError {
    /// Selected file does not have a `.md` extension
    #[error("not a Markdown file: {}", .0.display())]
    NotMarkdown(PathBuf),

    /// Export attempted with empty (or whitespace-only) content
    #[error("draft has no content to export")]
    EmptyDraft,

    /// Banner image could not be decoded or re-encoded
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
