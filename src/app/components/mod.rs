//! Shared UI components for the Dioxus web UI.

pub mod guard;
pub mod layout;
pub mod nav;

pub use guard::AuthGuard;
pub use layout::Layout;
pub use nav::Nav;
