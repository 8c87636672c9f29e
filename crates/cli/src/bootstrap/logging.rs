use mesos_dns_domain::config::LoggingConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log to stderr so record output on stdout stays clean. `RUST_LOG` wins
/// over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    if config.json {
        builder.json().init();
    } else {
        builder.with_ansi(true).init();
    }

    debug!(level = %config.level, json = config.json, "Logging initialized");
}
