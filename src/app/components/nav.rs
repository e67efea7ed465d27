//! Header / navigation bar.
//!
//! Shows the plain header title until the route guard marks the session as
//! logged in, then switches to the admin menu.

use dioxus::prelude::*;

use crate::app::state::use_app_state;
use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "dashboard")
    #[props(default)]
    pub active: String,
}

/// Navigation bar with mobile toggle.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let app = use_app_state();
    let mut menu_open = use_signal(|| false);

    let title = app.title();

    if !app.is_login() {
        return rsx! {
            nav {
                ul {
                    li { strong { "{title}" } }
                }
            }
        };
    }

    let link_class = |page: &str| {
        if props.active == page {
            "contrast"
        } else {
            "secondary"
        }
    };

    rsx! {
        nav {
            ul {
                li { strong { "{title}" } }
            }
            ul {
                li {
                    Link {
                        class: link_class("dashboard").to_string(),
                        to: Route::Dashboard {},
                        onclick: move |_| menu_open.set(false),
                        "Dashboard"
                    }
                }
                li {
                    button {
                        class: "outline secondary",
                        r#type: "button",
                        aria_expanded: "{menu_open}",
                        onclick: move |_| menu_open.toggle(),
                        "Menu"
                    }
                }
            }
        }
        if menu_open() {
            aside { id: "mobile-menu",
                nav {
                    ul {
                        li { small { "Signed in as administrator" } }
                        li {
                            Link {
                                to: Route::Dashboard {},
                                onclick: move |_| menu_open.set(false),
                                "Batch job runs"
                            }
                        }
                    }
                }
            }
        }
    }
}
