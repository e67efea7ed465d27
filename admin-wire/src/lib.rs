//! Wire protocol types for the batch-job admin API.
//!
//! These types define the request and response bodies exchanged between the
//! admin console and the `/api/admin` endpoints.
//!
//! # Modules
//! - [`auth`] - OTP request, token response, current user
//! - [`runs`] - Batch-job run records

pub mod auth;
pub mod runs;

pub use auth::{AdminUser, ErrorDetail, OtpRequest, TokenResponse};
pub use runs::{parse_timestamp, RunRecord, RunStatus};
