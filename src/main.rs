use anyhow::Context;
use hcrm_console::{Session, SessionOptions};
use hcrm_core::{CoreConfig, Shell};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Hospital CRM
///
/// Runs an interactive console session on stdin/stdout. Logs go to stderr so
/// they never interleave with the drawn screen.
///
/// # Environment Variables
/// - `HCRM_TITLE`: title shown above the sidebar (default: "Hospital CRM")
/// - `HCRM_SEED`: `demo` or `empty` (default: "demo")
/// - `HCRM_START_PATH`: path mounted at start-up (default: "/")
/// - `RUST_LOG`: tracing filter (default: "warn")
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = CoreConfig::from_env_values(
        std::env::var("HCRM_TITLE").ok(),
        std::env::var("HCRM_SEED").ok(),
        std::env::var("HCRM_START_PATH").ok(),
    )
    .context("invalid HCRM_* configuration")?;

    tracing::info!(
        "++ Starting {} ({} seed) at {}",
        cfg.app_title(),
        cfg.seed_mode(),
        cfg.start_path()
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(
        Shell::new(cfg),
        stdin.lock(),
        stdout.lock(),
        SessionOptions::interactive(),
    );
    session.run()?;

    Ok(())
}
