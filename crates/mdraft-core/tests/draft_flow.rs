//! End-to-end draft lifecycle tests
//!
//! Import a file into a draft, edit it, export it, and manage the banner
//! preview, the same way the desktop shell drives the core.

use image::{Rgba, RgbaImage};
use mdraft_core::{read_markdown, write_markdown, BannerPreview, Draft, DraftError};

#[tokio::test]
async fn import_edit_export_roundtrip() {
    let dir = tempfile::tempdir().unwrap();

    let source_path = dir.path().join("draft.md");
    tokio::fs::write(&source_path, "# Hi\n\nFirst take.")
        .await
        .unwrap();

    let mut draft = Draft::new();
    draft.title = "My Post".to_string();
    draft.source = read_markdown(&source_path).await.unwrap();
    assert_eq!(draft.source, "# Hi\n\nFirst take.");

    draft.source.push_str("\n\nSecond take.");

    let out_path = dir.path().join(draft.export_file_name());
    write_markdown(&out_path, &draft.source).await.unwrap();

    let exported = tokio::fs::read_to_string(dir.path().join("my-post.md"))
        .await
        .unwrap();
    assert_eq!(exported, "# Hi\n\nFirst take.\n\nSecond take.");
}

#[tokio::test]
async fn rejected_import_leaves_draft_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let wrong = dir.path().join("notes.txt");
    tokio::fs::write(&wrong, "not markdown").await.unwrap();

    let mut draft = Draft::new();
    draft.source = "# Existing".to_string();

    match read_markdown(&wrong).await {
        Err(DraftError::NotMarkdown(path)) => assert_eq!(path, wrong),
        other => panic!("expected NotMarkdown, got {other:?}"),
    }
    assert_eq!(draft.source, "# Existing");
}

#[tokio::test]
async fn empty_draft_export_is_blocked() {
    let dir = tempfile::tempdir().unwrap();
    let draft = Draft::new();
    assert!(draft.is_empty());

    let out_path = dir.path().join(draft.export_file_name());
    let err = write_markdown(&out_path, &draft.source).await.unwrap_err();
    assert!(matches!(err, DraftError::EmptyDraft));
    assert!(!out_path.exists());
}

#[test]
fn new_banner_supersedes_previous_exactly_once() {
    let dir = tempfile::tempdir().unwrap();

    let first_path = dir.path().join("first.png");
    RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]))
        .save(&first_path)
        .unwrap();
    let second_path = dir.path().join("second.png");
    RgbaImage::from_pixel(3, 3, Rgba([0, 0, 255, 255]))
        .save(&second_path)
        .unwrap();

    let mut draft = Draft::new();

    let none = draft.set_banner(BannerPreview::from_path(&first_path).unwrap());
    assert!(none.is_none());

    // Replacing hands back the first preview; dropping it releases the buffer
    let superseded = draft
        .set_banner(BannerPreview::from_path(&second_path).unwrap())
        .expect("first preview is superseded");
    assert_eq!(superseded.file_name(), "first.png");

    assert_eq!(draft.banner().unwrap().file_name(), "second.png");
    assert_eq!(draft.banner().unwrap().dimensions(), (3, 3));

    // Teardown: the last preview is released with the draft
    let last = draft.clear_banner().expect("banner still set");
    assert_eq!(last.file_name(), "second.png");
    assert!(draft.banner().is_none());
}
