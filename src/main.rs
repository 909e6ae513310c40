//! Salary slip HTTP server.
//!
//! Usage: `salary-slip [CONFIG_DIR]`
//!
//! The config directory defaults to `$SALARY_SLIP_CONFIG`, then
//! `./config/default`. The bind address comes from `$SALARY_SLIP_ADDR`
//! (default `127.0.0.1:3000`). Log verbosity follows `RUST_LOG`, falling
//! back to `info` when it is unset or unparsable.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use salary_slip::api::{create_router, AppState};
use salary_slip::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_LOG_FILTER: &str = "info";

fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .init();

    let config_dir = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SALARY_SLIP_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("SALARY_SLIP_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading policy from {}", config_dir))?;
    info!(
        policy = %config.policy().name,
        version = %config.policy().version,
        danger_zones = config.danger_zones().len(),
        tax_configured = config.constants().tax.is_some(),
        "Policy loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "Salary slip server listening");

    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_level_is_honoured() {
        assert_eq!(log_filter(Some("debug")).to_string(), "debug");
        assert_eq!(log_filter(Some("trace")).to_string(), "trace");
    }

    #[test]
    fn test_unset_or_blank_rust_log_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("  ")).to_string(), "info");
    }

    #[test]
    fn test_unparsable_rust_log_defaults_to_info() {
        assert_eq!(log_filter(Some("salary_slip=loud")).to_string(), "info");
    }
}
