use dioxus::prelude::*;

use crate::pages::{Create, Landing};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with a "Start a draft" button
/// - `/create` - The draft editor with live preview
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/create")]
    Create {},
}

/// Root application component.
///
/// Provides global styles and routing. All draft state lives in the
/// Create page; there is nothing to persist or share across routes.
#[component]
pub fn App() -> Element {
    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
