//! Banner preview encoding.
//!
//! A selected banner image is decoded, re-encoded as PNG and held in memory
//! as a base64 data URI the webview can display directly. The preview owns
//! its buffer: replacing it (or dropping the draft) releases the resource.

use std::io::Cursor;
use std::path::Path;

use base64::Engine as _;
use image::{GenericImageView, ImageFormat};

use crate::error::DraftError;

/// In-memory preview of the currently selected banner image.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerPreview {
    file_name: String,
    width: u32,
    height: u32,
    data_uri: String,
}

impl BannerPreview {
    /// Load an image file and encode it as a displayable PNG data URI.
    ///
    /// Any format the `image` crate can decode is accepted; the file
    /// picker's extension filter is a convenience, not validation.
    pub fn from_path(path: &Path) -> Result<Self, DraftError> {
        let img = image::open(path)?;
        let (width, height) = img.dimensions();

        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

        let encoded = base64::engine::general_purpose::STANDARD.encode(&buffer);
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("banner")
            .to_string();

        tracing::debug!(file = %file_name, width, height, "Encoded banner preview");

        Ok(Self {
            file_name,
            width,
            height,
            data_uri: format!("data:image/png;base64,{encoded}"),
        })
    }

    /// Original file name of the selected image.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Pixel dimensions of the decoded image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Data URI suitable for an `img src` attribute.
    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn write_test_image(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        let img = RgbaImage::from_pixel(4, 2, Rgba([200, 30, 30, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_preview_from_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), "banner.png");

        let preview = BannerPreview::from_path(&path).unwrap();
        assert_eq!(preview.file_name(), "banner.png");
        assert_eq!(preview.dimensions(), (4, 2));
        assert!(preview.data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_non_image_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"plain text").unwrap();

        let err = BannerPreview::from_path(&path).unwrap_err();
        assert!(matches!(err, DraftError::Image(_)));
    }
}
