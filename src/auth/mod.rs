//! OTP login and session gating.

pub mod flow;
pub mod guard;
pub mod phone;

pub use flow::{CountryCode, FlowError, LoginFlow, LoginStage, COUNTRY_CODES};
pub use guard::{check_session, GuardDecision, LOGOUT_REDIRECT};
pub use phone::is_valid_phone;
