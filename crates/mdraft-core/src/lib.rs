//! mdraft Core Library
//!
//! Draft model and file plumbing for the mdraft desktop editor.
//!
//! ## Overview
//!
//! A draft is an in-memory post: a title, a Markdown source buffer, and an
//! optional banner image preview. Nothing is persisted automatically; the
//! only way a draft leaves the process is an explicit export to a `.md` file.
//!
//! This crate has no UI dependency. It owns everything the desktop shell
//! needs to test in isolation:
//!
//! - Slug generation for export file names
//! - Markdown-to-HTML rendering with GFM extensions
//! - `.md` import (extension check + async read)
//! - `.md` export (non-empty check + async write)
//! - Banner preview encoding (image file to PNG data URI)
//!
//! ## Quick Start
//!
//! ```no_run
//! use mdraft_core::{Draft, render_markdown};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mdraft_core::DraftError> {
//!     let mut draft = Draft::new();
//!     draft.title = "My First Post".to_string();
//!     draft.source = mdraft_core::read_markdown("notes/intro.md".as_ref()).await?;
//!
//!     let html = render_markdown(&draft.source);
//!     println!("{html}");
//!
//!     mdraft_core::write_markdown(draft.export_file_name().as_ref(), &draft.source).await?;
//!     Ok(())
//! }
//! ```

pub mod banner;
pub mod draft;
pub mod error;
pub mod export;
pub mod import;
pub mod markdown;
pub mod slug;

// Re-exports
pub use banner::BannerPreview;
pub use draft::Draft;
pub use error::DraftError;
pub use export::write_markdown;
pub use import::{is_markdown_file, read_markdown};
pub use markdown::render_markdown;
pub use slug::{export_file_name, slugify};
