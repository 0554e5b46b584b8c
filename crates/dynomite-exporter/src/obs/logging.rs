use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogFormat, LogSection};

/// Install the global subscriber. `RUST_LOG`, when set, wins over the
/// configured level.
pub fn init(cfg: &LogSection) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.level.as_str()));

    match cfg.format {
        LogFormat::Logfmt => fmt().with_env_filter(filter).compact().init(),
        LogFormat::Json => fmt().with_env_filter(filter).json().init(),
    }
}
