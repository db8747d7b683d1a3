//! The Create page - draft editor and live preview, side by side.
//!
//! Owns the draft state. Everything below it receives the draft signal:
//! the editor card mutates it, the preview card renders it.

use dioxus::prelude::*;

use mdraft_core::Draft;

use crate::components::{BannerPicker, MarkdownEditor, MarkdownPreview, NavHeader, NavLocation};

/// Draft editor page component.
#[component]
pub fn Create() -> Element {
    // The whole draft lives here for the duration of the page visit.
    // Navigating away drops it, banner preview buffer included.
    let mut draft: Signal<Draft> = use_signal(Draft::new);

    let title = draft.read().title.clone();

    rsx! {
        NavHeader { current: NavLocation::Create }

        main { class: "create-page",
            header { class: "create-intro",
                p { class: "eyebrow", "Papers & Articles" }
                h1 { class: "page-title",
                    "Create a new post in "
                    span { class: "accent", "Markdown" }
                }
                p { class: "body-text",
                    "Write directly or load a Markdown file, attach a banner, "
                    "and check the preview before exporting the draft as .md."
                }
            }

            div { class: "create-grid",
                // Editor card
                section { class: "card",
                    header { class: "card-header",
                        h2 { class: "card-title", "Editor" }
                        p { class: "card-description",
                            "Set the banner, title and Markdown content."
                        }
                    }
                    div { class: "card-body",
                        div { class: "field",
                            label { class: "field-label", "Title" }
                            input {
                                class: "text-input",
                                r#type: "text",
                                placeholder: "e.g. Vulnerability analysis in modern web apps",
                                value: "{title}",
                                oninput: move |e| draft.write().title = e.value(),
                            }
                        }

                        BannerPicker { draft }

                        MarkdownEditor { draft }
                    }
                }

                // Preview card
                section { class: "card",
                    header { class: "card-header",
                        h2 { class: "card-title", "Preview" }
                        p { class: "card-description",
                            "How the post will look once published."
                        }
                    }
                    div { class: "card-body",
                        MarkdownPreview { draft }
                    }
                }
            }
        }
    }
}
