//! Navigation Header Component
//!
//! Horizontal header with app title and nav links.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Home,
    Create,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Home => "Home",
            NavLocation::Create => "Create",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Home => Route::Landing {},
            NavLocation::Create => Route::Create {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation Header component
///
/// - Left: app title
/// - Right: navigation links with Lucide icons
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let locations = [NavLocation::Home, NavLocation::Create];

    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    h1 { class: "app-title", "mdraft" }
                }

                nav { class: "nav-links",
                    for location in &locations {
                        Link {
                            to: location.route(),
                            class: if *location == props.current { "nav-link active" } else { "nav-link" },

                            span { class: "nav-link-icon",
                                {render_nav_icon(*location)}
                            }
                            span { class: "nav-link-label", "{location.display_name()}" }
                        }
                    }
                }
            }
        }
    }
}

/// Render Lucide icon for navigation location
fn render_nav_icon(location: NavLocation) -> Element {
    match location {
        NavLocation::Home => rsx! {
            // Lucide house icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" }
                path { d: "M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            }
        },
        NavLocation::Create => rsx! {
            // Lucide square-pen icon
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "18",
                height: "18",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M12 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7" }
                path { d: "M18.375 2.625a1 1 0 0 1 3 3l-9.013 9.014a2 2 0 0 1-.853.505l-2.873.84a.5.5 0 0 1-.62-.62l.84-2.873a2 2 0 0 1 .506-.852z" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_link_class_when_active() {
        let current = NavLocation::Create;
        let location = NavLocation::Create;
        let class = if location == current { "nav-link active" } else { "nav-link" };
        assert_eq!(class, "nav-link active");
    }

    #[test]
    fn test_nav_link_class_when_inactive() {
        let current = NavLocation::Create;
        let location = NavLocation::Home;
        let class = if location == current { "nav-link active" } else { "nav-link" };
        assert_eq!(class, "nav-link");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(NavLocation::Home.display_name(), "Home");
        assert_eq!(NavLocation::Create.display_name(), "Create");
    }
}
