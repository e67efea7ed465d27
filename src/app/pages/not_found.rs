//! Catch-all page for unknown paths.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::use_app_state;
use crate::app::HOME_PATH;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let app = use_app_state();
    let nav = navigator();
    use_effect(move || app.set_title("Page not found"));

    let path = format!("/{}", segments.join("/"));

    rsx! {
        Layout {
            article {
                h1 { "404" }
                p { "Page Not Found" }
                p { "Nothing lives at " code { "{path}" } ". It may have been moved." }
                div { role: "group",
                    button {
                        class: "secondary",
                        onclick: move |_| nav.go_back(),
                        "Go Back"
                    }
                    Link { to: HOME_PATH, role: "button", "Home" }
                }
            }
        }
    }
}
