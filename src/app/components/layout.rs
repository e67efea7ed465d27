//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::app::state::use_app_state;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
.status-ok { color: var(--pico-ins-color); }
.status-err { color: var(--pico-del-color); }
.status-pending { color: var(--pico-muted-color); }
.login-card { max-width: 32rem; margin: 3rem auto; }
.phone-row { display: flex; gap: 0.5rem; }
.phone-row select { max-width: 8rem; }
.runs-table td, .runs-table th { white-space: nowrap; }
small { color: var(--pico-muted-color); }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Active navigation item ID
    #[props(default)]
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
///
/// The browser tab title follows the shared header title.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let app = use_app_state();
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - Admin Console", app.title());

    rsx! {
        document::Title { "{full_title}" }
        document::Link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
        document::Style { {CUSTOM_STYLES} }

        header { class: "container",
            Nav { active: props.nav_active.clone() }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "container",
            small { "Admin Console v{version}" }
        }
    }
}
