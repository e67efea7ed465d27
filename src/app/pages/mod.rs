//! Page components.
//!
//! Pages reach the API through the `Services` context and report their
//! header title through the shared `AppState`.

mod dashboard;
mod login;
mod not_found;

pub use dashboard::Dashboard;
pub use login::Login;
pub use not_found::NotFound;
