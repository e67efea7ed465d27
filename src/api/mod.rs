//! Admin API access
//!
//! [`AdminApi`] is the seam between the UI and the remote admin service.
//! [`AdminClient`] implements it over HTTP; tests substitute fakes.

mod client;

pub use client::AdminClient;

use admin_wire::{AdminUser, RunRecord, TokenResponse};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// POST JSON `{phone_number}`
pub const OTP_PATH: &str = "/api/admin/otp";
/// POST multipart `username`, `password`
pub const TOKEN_PATH: &str = "/api/admin/token";
/// GET with bearer auth
pub const RUNS_PATH: &str = "/api/admin/runs";
/// GET with bearer auth
pub const ME_PATH: &str = "/api/admin/me";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Protected call attempted without a stored token; no request was sent
    #[error("Not signed in: no session token stored")]
    NoToken,

    #[error("Page size must be between 1 and 100, got {0}")]
    InvalidPageSize(u8),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {}", d))
        .unwrap_or_default()
}

impl ApiError {
    /// The server refused the credentials or the token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Operations of the remote admin API.
///
/// Every call is a single round trip: no retry, no timeout, no cancellation.
/// Implementations return data only; persisting the token is up to the
/// caller.
#[async_trait(?Send)]
pub trait AdminApi {
    /// Ask the server to deliver an OTP to `phone_number`.
    async fn request_otp(&self, phone_number: &str) -> Result<Value, ApiError>;

    /// Exchange a phone number and OTP for a bearer token.
    async fn verify_otp(&self, phone_number: &str, otp: &str) -> Result<TokenResponse, ApiError>;

    /// List batch-job runs using the server's default page size.
    async fn list_runs(&self) -> Result<Vec<RunRecord>, ApiError>;

    /// List up to `page_size` runs (1..=100).
    async fn list_runs_page(&self, page_size: u8) -> Result<Vec<RunRecord>, ApiError>;

    /// The admin identity encoded in the current token.
    async fn current_user(&self) -> Result<AdminUser, ApiError>;
}
