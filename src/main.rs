//! OTP Admin Console
//!
//! Web entry point: initializes logging, loads configuration and mounts the
//! Dioxus app. A missing API origin is fatal and nothing is mounted.
//!
//! The console only renders in the browser (`dx serve --features web`). A
//! native build validates its configuration and then exits with an error.

use anyhow::Result;
use otp_admin_console::config::AppConfig;

fn main() -> Result<()> {
    init_logging();

    let config = load_config()?;
    tracing::info!(api_server = %config.api_server, "Configuration loaded");

    launch(config)
}

#[cfg(feature = "web")]
fn launch(config: AppConfig) -> Result<()> {
    use otp_admin_console::app::App;

    dioxus::LaunchBuilder::web().with_context(config).launch(App);
    Ok(())
}

#[cfg(not(feature = "web"))]
fn launch(config: AppConfig) -> Result<()> {
    anyhow::bail!(
        "no renderer compiled in (API server {}); rebuild with `--features web` for the browser",
        config.api_server
    )
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    // A second init (hot reload) is harmless
    let _ = dioxus::logger::init(tracing::Level::INFO);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "otp_admin_console=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> Result<AppConfig> {
    AppConfig::from_build_env().map_err(|e| {
        tracing::error!("Refusing to start: {}", e);
        e.into()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Result<AppConfig> {
    otp_admin_console::config::load_config().map_err(|e| {
        tracing::error!("Refusing to start: {}", e);
        e.into()
    })
}

#[cfg(all(test, not(feature = "web")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_launch_refuses_without_renderer() {
        let config = AppConfig::new(Some("http://127.0.0.1:8000")).unwrap();

        let err = launch(config).unwrap_err();

        assert!(err.to_string().contains("--features web"));
    }
}
