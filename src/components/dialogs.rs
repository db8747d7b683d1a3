//! Blocking message dialogs.
//!
//! rfd dialogs block the calling thread, so they always run on a blocking
//! task while the UI event loop keeps going.

use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Show a blocking warning alert with a single OK button.
pub async fn alert(title: &str, message: &str) {
    let title = title.to_string();
    let message = message.to_string();

    let result = tokio::task::spawn_blocking(move || {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_buttons(MessageButtons::Ok)
            .set_title(title)
            .set_description(message)
            .show()
    })
    .await;

    if let Err(e) = result {
        tracing::error!(error = %e, "Alert dialog task failed");
    }
}
