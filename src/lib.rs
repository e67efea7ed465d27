//! OTP Admin Console
//!
//! Single-page administrative console for batch-job runs.
//!
//! This library provides:
//! - Phone validation and the WhatsApp OTP login flow
//! - Bearer-token session storage (browser localStorage on wasm32)
//! - HTTP client for the `/api/admin` endpoints
//! - Session-gated routing and the Dioxus web UI

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

#![deny(unsafe_code)]
#![deny(unused_must_use)]

pub mod api;
pub mod auth;
pub mod config;
pub mod session;

// Dioxus UI app
pub mod app;

pub use api::{AdminApi, AdminClient, ApiError};
pub use auth::{check_session, is_valid_phone, GuardDecision, LoginFlow, LoginStage};
pub use config::AppConfig;
pub use session::{MemorySessionStore, SessionStore};
