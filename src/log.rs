// src/log.rs
use tracing_subscriber::{ fmt, EnvFilter };

/// Install the stderr logger. Lines carry the time since start:
/// `0.412s  WARN flyer_scrape::scrape: HTTP 404 from https://...`
///
/// `RUST_LOG` wins over `default_level` when set. Safe to call twice; the
/// second call is a no-op.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
