//! Landing page - entry point to the editor.

use dioxus::prelude::*;

use crate::app::Route;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let navigator = use_navigator();

    let start_draft = move |_| {
        navigator.push(Route::Create {});
    };

    rsx! {
        main { class: "landing",
            header { class: "landing-header",
                p { class: "eyebrow", "Papers & Articles" }
                h1 { class: "page-title",
                    "Write in "
                    span { class: "accent", "Markdown" }
                }
                p { class: "tagline",
                    "Draft posts locally, preview them as they will be published, "
                    "and export them as .md files. Nothing leaves your machine."
                }

                button {
                    class: "btn btn-primary btn-enter",
                    onclick: start_draft,
                    "Start a draft"
                }
            }

            section { class: "landing-notes",
                p { class: "body-text",
                    "Drafts live in memory only. Export early, export often."
                }
            }
        }
    }
}
