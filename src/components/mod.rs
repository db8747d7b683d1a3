//! UI Components for mdraft.

mod banner_picker;
pub mod dialogs;
mod markdown_editor;
mod markdown_preview;
mod nav_header;

pub use banner_picker::BannerPicker;
pub use markdown_editor::MarkdownEditor;
pub use markdown_preview::MarkdownPreview;
pub use nav_header::{NavHeader, NavLocation};
