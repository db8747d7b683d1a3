//! Markdown file import.

use std::path::Path;

use tokio::fs;

use crate::error::DraftError;

/// Filename-only check: does the name end in `.md` (case-insensitive)?
pub fn is_markdown_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_ascii_lowercase().ends_with(".md"))
        .unwrap_or(false)
}

/// Read the full text of a `.md` file.
///
/// Rejects files by extension before touching the filesystem, so a rejected
/// selection never mutates anything. The content replaces the draft source
/// wholesale at the call site; there is no merge and no undo.
pub async fn read_markdown(path: &Path) -> Result<String, DraftError> {
    if !is_markdown_file(path) {
        return Err(DraftError::NotMarkdown(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).await?;
    tracing::info!(file = %path.display(), bytes = text.len(), "Imported Markdown file");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_check() {
        assert!(is_markdown_file(Path::new("draft.md")));
        assert!(is_markdown_file(Path::new("DRAFT.MD")));
        assert!(!is_markdown_file(Path::new("notes.txt")));
        assert!(!is_markdown_file(Path::new("archive.md.bak")));
        assert!(!is_markdown_file(Path::new("/")));
    }

    #[tokio::test]
    async fn test_read_replaces_content_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.md");
        tokio::fs::write(&path, "# Hi").await.unwrap();

        let text = read_markdown(&path).await.unwrap();
        assert_eq!(text, "# Hi");
    }

    #[tokio::test]
    async fn test_wrong_extension_is_rejected_before_read() {
        let rejected = PathBuf::from("notes.txt");
        let err = read_markdown(&rejected).await.unwrap_err();
        assert!(matches!(err, DraftError::NotMarkdown(p) if p == rejected));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let err = read_markdown(Path::new("/no/such/file.md")).await.unwrap_err();
        assert!(matches!(err, DraftError::Io(_)));
    }
}
