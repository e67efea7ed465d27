//! Login/OTP flow controller.
//!
//! Drives the login form through `PhoneEntry -> OtpEntry -> Verified`. The
//! transitions are linear; there is no way back and no expiry.
//!
//! Each submission is split in two halves so UI code never holds the form
//! state across an await point:
//!
//! ```text
//! begin_phone_submit()  -> composed phone     (validate, mark busy)
//! api.request_otp(..)                          (caller awaits)
//! complete_phone_submit(result)                (clear busy, transition)
//! ```
//!
//! [`LoginFlow::submit_phone`] and [`LoginFlow::submit_otp`] run both halves
//! back to back for callers that own the flow exclusively.

use admin_wire::TokenResponse;
use thiserror::Error;
use tracing::{info, warn};

use super::phone::is_valid_phone;
use crate::api::{AdminApi, ApiError};
use crate::session::{SessionStore, StorageError};

/// Country code option offered by the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    /// Digits sent to the API
    pub value: &'static str,
    /// Text shown in the selector
    pub label: &'static str,
}

/// Supported country codes. The first entry is the default.
pub const COUNTRY_CODES: [CountryCode; 2] = [
    CountryCode {
        value: "1",
        label: "+1 US",
    },
    CountryCode {
        value: "91",
        label: "+91 IN",
    },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginStage {
    #[default]
    PhoneEntry,
    OtpEntry,
    Verified,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Enter a valid mobile number")]
    InvalidPhone,

    #[error("Enter the code sent to your phone")]
    EmptyOtp,

    #[error("A request is already in progress")]
    Busy,

    #[error("Not allowed during {0:?}")]
    WrongStage(LoginStage),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Could not save the session: {0}")]
    Storage(#[from] StorageError),
}

/// Phone number and code for one verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpSubmission {
    pub phone_number: String,
    pub otp: String,
}

/// Form state of the login screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFlow {
    stage: LoginStage,
    country: usize,
    local_number: String,
    otp: String,
    busy: bool,
    phone_error: Option<String>,
    form_error: Option<String>,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> LoginStage {
        self.stage
    }

    /// A request is in flight; submissions are refused until it completes
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn country(&self) -> CountryCode {
        COUNTRY_CODES[self.country]
    }

    pub fn country_index(&self) -> usize {
        self.country
    }

    pub fn local_number(&self) -> &str {
        &self.local_number
    }

    pub fn otp(&self) -> &str {
        &self.otp
    }

    /// Validation message for the phone field
    pub fn phone_error(&self) -> Option<&str> {
        self.phone_error.as_deref()
    }

    /// Message from the last failed request
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// The phone field is display-only once an OTP has been sent
    pub fn phone_locked(&self) -> bool {
        self.stage != LoginStage::PhoneEntry
    }

    /// `+{country}{local}`, the form the validator checks
    pub fn display_phone(&self) -> String {
        format!("+{}{}", self.country().value, self.local_number.trim())
    }

    /// `{country}{local}` without whitespace, the form sent to the API
    pub fn composed_phone(&self) -> String {
        let local: String = self
            .local_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        format!("{}{}", self.country().value, local)
    }

    /// Pick a country code by index into [`COUNTRY_CODES`].
    ///
    /// Returns false if the index is unknown or the phone is locked.
    pub fn select_country(&mut self, index: usize) -> bool {
        if self.phone_locked() || index >= COUNTRY_CODES.len() {
            return false;
        }
        self.country = index;
        self.phone_error = None;
        true
    }

    pub fn set_local_number(&mut self, value: impl Into<String>) {
        if self.phone_locked() {
            return;
        }
        self.local_number = value.into();
        self.phone_error = None;
    }

    pub fn set_otp(&mut self, value: impl Into<String>) {
        if self.stage != LoginStage::OtpEntry {
            return;
        }
        self.otp = value.into();
        self.form_error = None;
    }

    fn ensure_idle(&self, expected: LoginStage) -> Result<(), FlowError> {
        if self.busy {
            return Err(FlowError::Busy);
        }
        if self.stage != expected {
            return Err(FlowError::WrongStage(self.stage));
        }
        Ok(())
    }

    fn validate_phone(&mut self) -> Result<String, FlowError> {
        if !is_valid_phone(&self.display_phone()) {
            self.phone_error = Some(FlowError::InvalidPhone.to_string());
            return Err(FlowError::InvalidPhone);
        }
        self.phone_error = None;
        Ok(self.composed_phone())
    }

    /// Validate the phone and mark the flow busy.
    ///
    /// Returns the composed phone number to pass to
    /// [`AdminApi::request_otp`]. On validation failure the field error is
    /// set and no request must be made.
    pub fn begin_phone_submit(&mut self) -> Result<String, FlowError> {
        self.ensure_idle(LoginStage::PhoneEntry)?;
        let phone = self.validate_phone()?;
        self.form_error = None;
        self.busy = true;
        Ok(phone)
    }

    /// Apply the outcome of the OTP request started by
    /// [`begin_phone_submit`](Self::begin_phone_submit).
    ///
    /// Success moves to `OtpEntry`. Failure keeps `PhoneEntry` with the
    /// error recorded for display and is returned to the caller.
    pub fn complete_phone_submit<T>(&mut self, result: Result<T, ApiError>) -> Result<(), FlowError> {
        if !self.busy || self.stage != LoginStage::PhoneEntry {
            warn!(stage = ?self.stage, "Ignoring OTP request result outside phone entry");
            return Err(FlowError::WrongStage(self.stage));
        }
        self.busy = false;

        match result {
            Ok(_) => {
                self.stage = LoginStage::OtpEntry;
                self.form_error = None;
                info!("OTP sent, waiting for code");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "OTP request failed");
                self.form_error = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Re-validate the phone, check the code and mark the flow busy.
    pub fn begin_otp_submit(&mut self) -> Result<OtpSubmission, FlowError> {
        self.ensure_idle(LoginStage::OtpEntry)?;
        let phone_number = self.validate_phone()?;

        let otp = self.otp.trim().to_string();
        if otp.is_empty() {
            self.form_error = Some(FlowError::EmptyOtp.to_string());
            return Err(FlowError::EmptyOtp);
        }

        self.form_error = None;
        self.busy = true;
        Ok(OtpSubmission { phone_number, otp })
    }

    /// Apply the outcome of the verification started by
    /// [`begin_otp_submit`](Self::begin_otp_submit).
    ///
    /// Success persists the access token to `store` (exactly once) and moves
    /// to `Verified`. Failure keeps `OtpEntry` so the code can be re-entered.
    pub fn complete_otp_submit(
        &mut self,
        result: Result<TokenResponse, ApiError>,
        store: &dyn SessionStore,
    ) -> Result<(), FlowError> {
        if !self.busy || self.stage != LoginStage::OtpEntry {
            warn!(stage = ?self.stage, "Ignoring verification result outside OTP entry");
            return Err(FlowError::WrongStage(self.stage));
        }
        self.busy = false;

        let outcome = result
            .map_err(FlowError::from)
            .and_then(|token| store.save_token(&token.access_token).map_err(FlowError::from));

        match outcome {
            Ok(()) => {
                self.stage = LoginStage::Verified;
                self.otp.clear();
                self.form_error = None;
                info!("OTP verified, session stored");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "OTP verification failed");
                self.form_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Validate and request an OTP in one step.
    pub async fn submit_phone(&mut self, api: &dyn AdminApi) -> Result<(), FlowError> {
        let phone = self.begin_phone_submit()?;
        let result = api.request_otp(&phone).await;
        self.complete_phone_submit(result)
    }

    /// Verify the OTP and persist the token in one step.
    pub async fn submit_otp(
        &mut self,
        api: &dyn AdminApi,
        store: &dyn SessionStore,
    ) -> Result<(), FlowError> {
        let submission = self.begin_otp_submit()?;
        let result = api.verify_otp(&submission.phone_number, &submission.otp).await;
        self.complete_otp_submit(result, store)
    }
}
