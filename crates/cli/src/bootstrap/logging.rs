use rootwalk_domain::Config;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout carries only the resolution trace.
///
/// `RUST_LOG` overrides the configured level, e.g. `RUST_LOG=rootwalk_application=debug`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
