//! Markdown Editor Component
//!
//! Source textarea plus the import/export toolbar. Import replaces the
//! draft source wholesale with the contents of a `.md` file; export saves
//! the source under a slug-derived file name.

use dioxus::prelude::*;
use rfd::FileDialog;

use mdraft_core::{read_markdown, write_markdown, Draft, DraftError};

use crate::components::dialogs;
use crate::get_drafts_dir;

const EDITOR_PLACEHOLDER: &str = "# Post title

Write your content in **Markdown** here.

- List ideas
- Reference CVEs
- Include code blocks, etc.
";

#[component]
pub fn MarkdownEditor(
    /// The draft being edited
    draft: Signal<Draft>,
) -> Element {
    // Load a .md file and replace the source in full (no merge, no undo)
    let import_markdown = move |_| {
        spawn(async move {
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("markdown", &["md"])
                    .set_title("Load a Markdown file")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => match read_markdown(&path).await {
                    Ok(text) => {
                        draft.write().source = text;
                    }
                    Err(DraftError::NotMarkdown(path)) => {
                        tracing::warn!(file = %path.display(), "Rejected non-markdown import");
                        dialogs::alert("Load Markdown", "Please select a .md file.").await;
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Import failed");
                        dialogs::alert("Load Markdown", &format!("Could not read the file: {e}"))
                            .await;
                    }
                },
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    tracing::error!(error = %e, "File picker task failed");
                }
            }
        });
    };

    // Save the source as <slug>.md via a save dialog
    let export_markdown = move |_| {
        spawn(async move {
            let (file_name, source) = {
                let d = draft.read();
                (d.export_file_name(), d.source.clone())
            };

            if source.trim().is_empty() {
                dialogs::alert(
                    "Export draft",
                    "Write some Markdown content before downloading.",
                )
                .await;
                return;
            }

            let drafts_dir = get_drafts_dir();
            let dest = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("markdown", &["md"])
                    .set_title("Save draft")
                    .set_directory(drafts_dir)
                    .set_file_name(file_name)
                    .save_file()
            })
            .await;

            match dest {
                Ok(Some(path)) => {
                    if let Err(e) = write_markdown(&path, &source).await {
                        tracing::error!(error = %e, file = %path.display(), "Export failed");
                        dialogs::alert("Export draft", &format!("Could not save the draft: {e}"))
                            .await;
                    }
                }
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    tracing::error!(error = %e, "Save dialog task failed");
                }
            }
        });
    };

    let source = draft.read().source.clone();

    rsx! {
        div { class: "field",
            label { class: "field-label", "Markdown content" }

            textarea {
                class: "md-textarea",
                value: "{source}",
                oninput: move |e| draft.write().source = e.value(),
                placeholder: EDITOR_PLACEHOLDER,
                spellcheck: true,
            }

            div { class: "editor-toolbar",
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    onclick: import_markdown,
                    // Lucide upload icon
                    svg {
                        xmlns: "http://www.w3.org/2000/svg",
                        width: "16",
                        height: "16",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" }
                        path { d: "m17 8-5-5-5 5" }
                        path { d: "M12 3v12" }
                    }
                    "Load .md file"
                }

                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    onclick: export_markdown,
                    // Lucide file-down icon
                    svg {
                        xmlns: "http://www.w3.org/2000/svg",
                        width: "16",
                        height: "16",
                        view_box: "0 0 24 24",
                        fill: "none",
                        stroke: "currentColor",
                        stroke_width: "2",
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        path { d: "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" }
                        path { d: "M14 2v4a2 2 0 0 0 2 2h4" }
                        path { d: "M12 18v-6" }
                        path { d: "m9 15 3 3 3-3" }
                    }
                    "Download as .md"
                }
            }
        }
    }
}
