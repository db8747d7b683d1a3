//! The in-memory draft.

use crate::banner::BannerPreview;
use crate::slug;

/// An unsaved post: title, Markdown source and optional banner preview.
///
/// Lives only for the duration of a page visit; the only way out is an
/// explicit export via [`crate::write_markdown`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Draft {
    /// Post title, used to derive the export file name
    pub title: String,
    /// Full Markdown source
    pub source: String,
    banner: Option<BannerPreview>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the source is empty after trimming whitespace.
    pub fn is_empty(&self) -> bool {
        self.source.trim().is_empty()
    }

    /// File name for export: `<slug>.md`, falling back to `post.md`.
    pub fn export_file_name(&self) -> String {
        slug::export_file_name(&self.title)
    }

    /// Currently selected banner preview, if any.
    pub fn banner(&self) -> Option<&BannerPreview> {
        self.banner.as_ref()
    }

    /// Replace the banner preview, returning the superseded one.
    ///
    /// The caller receives ownership of the previous preview, so its buffer
    /// is released exactly once when the return value drops.
    pub fn set_banner(&mut self, preview: BannerPreview) -> Option<BannerPreview> {
        self.banner.replace(preview)
    }

    /// Remove the banner preview, returning it.
    pub fn clear_banner(&mut self) -> Option<BannerPreview> {
        self.banner.take()
    }
}
