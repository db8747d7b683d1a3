//! Markdown Preview Component
//!
//! Renders the draft as it will be published: banner, title, then the
//! Markdown source converted to HTML. Shows a placeholder prompt until
//! there is content.

use dioxus::prelude::*;

use mdraft_core::{render_markdown, Draft};

/// Title shown when the draft has none yet.
const TITLE_FALLBACK: &str = "Post title";

fn preview_title(title: &str) -> &str {
    if title.trim().is_empty() {
        TITLE_FALLBACK
    } else {
        title
    }
}

#[component]
pub fn MarkdownPreview(
    /// The draft being previewed
    draft: Signal<Draft>,
) -> Element {
    let html_preview = use_memo(move || render_markdown(&draft.read().source));

    let banner_uri = draft
        .read()
        .banner()
        .map(|banner| banner.data_uri().to_string());
    let title = preview_title(&draft.read().title).to_string();
    let is_empty = draft.read().is_empty();

    rsx! {
        div { class: "preview",
            if let Some(uri) = banner_uri {
                div { class: "banner-frame",
                    img {
                        class: "banner-img",
                        src: "{uri}",
                        alt: "Banner preview",
                    }
                }
            }

            h2 { class: "preview-title", "{title}" }
            p { class: "hint",
                "Local preview only. To publish, export the .md file and add it to the site."
            }

            div { class: "preview-pane",
                if is_empty {
                    p { class: "preview-empty",
                        "Start writing in Markdown or load a .md file to see the preview here."
                    }
                } else {
                    article {
                        class: "prose",
                        dangerous_inner_html: "{html_preview()}",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_uses_fallback() {
        assert_eq!(preview_title(""), TITLE_FALLBACK);
        assert_eq!(preview_title("   "), TITLE_FALLBACK);
    }

    #[test]
    fn test_non_empty_title_passes_through() {
        assert_eq!(preview_title("My Post"), "My Post");
    }
}
