//! Banner Picker Component
//!
//! File picker for the post banner with an inline preview. The preview is
//! a PNG data URI held by the draft; choosing a new file hands the old
//! preview back to this component, which drops it.

use dioxus::prelude::*;
use rfd::FileDialog;

use mdraft_core::{BannerPreview, Draft};

#[component]
pub fn BannerPicker(
    /// The draft owning the banner
    draft: Signal<Draft>,
) -> Element {
    let mut picking = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let pick_banner = move |_| {
        if picking() {
            return;
        }
        picking.set(true);
        error.set(None);

        spawn(async move {
            // Open file picker (blocking, but in spawn_blocking so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select banner image")
                    .pick_file()
            })
            .await;

            match file_path {
                Ok(Some(path)) => match BannerPreview::from_path(&path) {
                    Ok(preview) => {
                        // The superseded preview comes back here and drops,
                        // releasing its buffer exactly once
                        if let Some(old) = draft.write().set_banner(preview) {
                            tracing::debug!(file = %old.file_name(), "Replaced banner preview");
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, file = %path.display(), "Failed to load banner");
                        error.set(Some(format!("Could not load image: {e}")));
                    }
                },
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    error.set(Some(format!("File picker error: {e}")));
                }
            }
            picking.set(false);
        });
    };

    let banner = draft
        .read()
        .banner()
        .map(|b| (b.file_name().to_string(), b.data_uri().to_string()));

    rsx! {
        div { class: "field",
            label { class: "field-label", "Post banner" }

            div { class: "banner-picker",
                button {
                    r#type: "button",
                    class: "btn btn-outline",
                    onclick: pick_banner,
                    disabled: picking(),
                    if picking() { "Selecting..." } else { "Select image" }
                }

                if let Some((file_name, _)) = &banner {
                    span { class: "banner-file-name", "{file_name}" }
                }
            }

            if let Some((_, uri)) = &banner {
                div { class: "banner-frame",
                    img {
                        class: "banner-img",
                        src: "{uri}",
                        alt: "Banner preview",
                    }
                }
            } else {
                p { class: "hint",
                    "Tip: a 16:9 image works best (e.g. 1280x720)."
                }
            }

            if let Some(err) = error() {
                p { class: "field-error", "{err}" }
            }
        }
    }
}
