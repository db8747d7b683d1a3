//! Markdown file export.

use std::path::Path;

use tokio::fs;

use crate::error::DraftError;

/// Write the draft source to `path` as UTF-8 text.
///
/// Refuses to produce a file when the source is empty after trimming.
pub async fn write_markdown(path: &Path, source: &str) -> Result<(), DraftError> {
    if source.trim().is_empty() {
        return Err(DraftError::EmptyDraft);
    }

    fs::write(path, source).await?;
    tracing::info!(file = %path.display(), bytes = source.len(), "Exported draft");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_writes_exact_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("my-post.md");

        write_markdown(&path, "# Hi").await.unwrap();
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "# Hi");
    }

    #[tokio::test]
    async fn test_empty_source_produces_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");

        let err = write_markdown(&path, "   \n").await.unwrap_err();
        assert!(matches!(err, DraftError::EmptyDraft));
        assert!(!path.exists());
    }
}
