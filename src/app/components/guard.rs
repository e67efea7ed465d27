//! Route layout that gates protected pages on a stored session.

use dioxus::prelude::*;

use crate::app::state::use_app_state;
use crate::app::{use_services, Route};
use crate::auth::{check_session, GuardDecision};

/// Checks the session once per mount.
///
/// Allowed: marks the shared state as logged in and renders the nested
/// route. Otherwise: replaces the location with the login page flagged as a
/// forced logout.
#[component]
pub fn AuthGuard() -> Element {
    let services = use_services();
    let app = use_app_state();
    let nav = navigator();

    let decision = use_hook(|| check_session(services.session.as_ref()));

    use_effect(move || match decision {
        GuardDecision::Allow => app.set_logged_in(true),
        GuardDecision::Redirect => {
            let _ = nav.replace(Route::Login { logout: true });
        }
    });

    if decision.is_allowed() {
        rsx! { Outlet::<Route> {} }
    } else {
        rsx! {}
    }
}
