//! Logging setup. Logs go to stderr so search output on stdout stays clean.

use tracing_subscriber::EnvFilter;

/// Used when neither the command line nor the config names a level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Picks the log filter: `--log-level` first, then the config value, then
/// [`DEFAULT_LOG_LEVEL`].
fn filter_for(cli_level: Option<&str>, config_level: &str) -> EnvFilter {
    let given = |level: &&str| !level.is_empty();
    let level = cli_level
        .map(str::trim)
        .filter(given)
        .or_else(|| Some(config_level.trim()).filter(given))
        .unwrap_or(DEFAULT_LOG_LEVEL);
    EnvFilter::new(level)
}

/// Installs the global subscriber. A subscriber that is already set wins.
pub fn init_logging(cli_level: Option<&str>, config_level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_for(cli_level, config_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
