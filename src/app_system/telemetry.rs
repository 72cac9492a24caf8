use tracing_subscriber::EnvFilter;

use super::SystemConfig;

/// Installs the global subscriber. `RUST_LOG` wins over `config.log_filter`.
///
/// Call once, from the binary. Later calls are ignored.
pub fn setup_tracing(config: &SystemConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .try_init();
}
