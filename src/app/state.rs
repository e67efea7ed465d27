//! Shared UI state: header title and login flag.
//!
//! Created once by [`App`](super::App) and reached through
//! [`use_app_state`]. Lives for the lifetime of the tab; a full reload resets
//! it to defaults.

use dioxus::prelude::*;

pub const DEFAULT_TITLE: &str = "Chat bot admin login";

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    title: String,
    is_login: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            is_login: false,
        }
    }
}

impl UiState {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_login(&self) -> bool {
        self.is_login
    }

    /// Returns true if the title changed
    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if self.title == title {
            return false;
        }
        self.title = title;
        true
    }

    /// Returns true if the flag changed
    pub fn set_logged_in(&mut self, is_login: bool) -> bool {
        if self.is_login == is_login {
            return false;
        }
        self.is_login = is_login;
        true
    }
}

/// Copyable handle over the shared [`UiState`] signal.
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    inner: Signal<UiState>,
}

impl AppState {
    /// Must be called inside a component scope.
    pub fn new() -> Self {
        Self {
            inner: Signal::new(UiState::default()),
        }
    }

    pub fn title(&self) -> String {
        self.inner.read().title().to_string()
    }

    pub fn is_login(&self) -> bool {
        self.inner.read().is_login()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        // Skip the write (and re-render) when nothing changes
        if self.inner.peek().title() == title {
            return;
        }
        let mut inner = self.inner;
        inner.write().set_title(title);
    }

    pub fn set_logged_in(&self, is_login: bool) {
        if self.inner.peek().is_login() == is_login {
            return;
        }
        let mut inner = self.inner;
        inner.write().set_logged_in(is_login);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Access the shared UI state provided by the app root.
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
