//! Dioxus web application entry point.
//!
//! This module provides the root App component, the route table and the
//! handles views use to reach the API client, session store and shared UI
//! state.

use std::rc::Rc;

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod state;
#[cfg(test)]
pub(crate) mod testing;

use crate::api::{AdminApi, AdminClient, ApiError};
use crate::config::AppConfig;
use crate::session::{platform_store, SessionStore};
use components::AuthGuard;
use pages::{Dashboard, Login, NotFound};
use state::AppState;

/// Plain link to the login page, without a `logout` query
pub const HOME_PATH: &str = "/";

/// Dependencies built once at startup and handed to views.
#[derive(Clone)]
pub struct Services {
    pub api: Rc<dyn AdminApi>,
    pub session: Rc<dyn SessionStore>,
    pub runs_page_size: u8,
}

impl Services {
    /// Wire the platform session store into a new API client.
    pub fn from_config(config: AppConfig) -> Result<Self, ApiError> {
        let session = platform_store(&config.token_key);
        let runs_page_size = config.runs_page_size;
        let client = AdminClient::new(config, session.clone())?;
        Ok(Self {
            api: Rc::new(client),
            session,
            runs_page_size,
        })
    }
}

/// Access the services provided by [`App`].
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Root app component: builds the [`Services`] from the launch config and
/// mounts the [`Console`].
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let startup_error = use_hook(move || match Services::from_config(config) {
        Ok(services) => {
            provide_context(services);
            None
        }
        Err(e) => {
            tracing::error!("Failed to build API client: {}", e);
            Some(e.to_string())
        }
    });

    if let Some(error) = startup_error {
        return rsx! {
            main { class: "container",
                h1 { "Admin console unavailable" }
                p { class: "status-err", "{error}" }
            }
        };
    }

    rsx! {
        Console {}
    }
}

/// Shared UI state, the error boundary and the router. Expects [`Services`]
/// in context.
#[component]
pub fn Console() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        ErrorBoundary {
            handle_error: error_fallback,
            Router::<Route> {}
        }
    }
}

/// Rendered in place of the routes when a view fails.
fn error_fallback(errors: ErrorContext) -> Element {
    let detail = errors.error().map(|e| e.to_string());
    if let Some(detail) = &detail {
        tracing::error!("Error caught by error boundary: {}", detail);
    }

    rsx! {
        main { class: "container",
            article { class: "login-card",
                h1 { "Oops! Something went wrong" }
                p { "We encountered an unexpected error. Please try again or contact support if the problem persists." }
                if let Some(detail) = detail {
                    details {
                        summary { "Error details" }
                        pre { class: "status-err", "{detail}" }
                    }
                }
                button {
                    id: "error-reset",
                    onclick: move |_| errors.clear_errors(),
                    "Try Again"
                }
            }
        }
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/?:logout")]
    Login { logout: bool },
    #[layout(AuthGuard)]
        #[route("/admin/dashboard")]
        Dashboard {},
    #[end_layout]
    #[redirect("/admin", || Route::Login { logout: false })]
    #[redirect("/dashboard", || Route::Dashboard {})]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
