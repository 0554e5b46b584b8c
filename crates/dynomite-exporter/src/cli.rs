use clap::Parser;
use clap::ValueHint;

use dynomite_core::error::Result;

use crate::config::{self, ExporterConfig, LogFormat, LogLevel};

/// Flags override the config file, the config file overrides built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "dynomite_exporter", version, about = "Prometheus exporter for dynomite", long_about = None)]
pub struct Cli {
    /// dynomite server address (host:port or URL)
    #[arg(long = "dynomite.address", env = "DYNOMITE_ADDRESS", value_hint = ValueHint::Hostname)]
    pub address: Option<String>,

    /// dynomite connect timeout, e.g. 500ms or 1s [default: 1s]
    #[arg(long = "dynomite.timeout", env = "DYNOMITE_TIMEOUT")]
    pub timeout: Option<String>,

    /// Address to listen on for web interface and telemetry [default: :9122]
    #[arg(long = "web.listen-address", env = "DYNOMITE_EXPORTER_LISTEN_ADDRESS")]
    pub listen_address: Option<String>,

    /// Path under which to expose metrics [default: /metrics]
    #[arg(long = "web.telemetry-path", env = "DYNOMITE_EXPORTER_TELEMETRY_PATH")]
    pub telemetry_path: Option<String>,

    /// Only log messages with the given severity or above: debug, info, warn, error
    #[arg(long = "log.level", env = "DYNOMITE_EXPORTER_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Output format of log messages: logfmt, json
    #[arg(long = "log.format", env = "DYNOMITE_EXPORTER_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,

    /// YAML config file
    #[arg(long = "config.file", env = "DYNOMITE_EXPORTER_CONFIG", value_hint = ValueHint::FilePath)]
    pub config_file: Option<String>,
}

impl Cli {
    /// Load the config file (if any), apply flag overrides and validate.
    pub fn into_config(self) -> Result<ExporterConfig> {
        let mut cfg = match &self.config_file {
            Some(path) => config::load_from_file(path)?,
            None => ExporterConfig::default(),
        };
        self.apply(&mut cfg);
        cfg.validate()?;
        Ok(cfg)
    }

    fn apply(self, cfg: &mut ExporterConfig) {
        if let Some(v) = self.address {
            cfg.dynomite.address = v;
        }
        if let Some(v) = self.timeout {
            cfg.dynomite.timeout = v;
        }
        if let Some(v) = self.listen_address {
            cfg.web.listen_address = v;
        }
        if let Some(v) = self.telemetry_path {
            cfg.web.telemetry_path = v;
        }
        if let Some(v) = self.log_level {
            cfg.log.level = v;
        }
        if let Some(v) = self.log_format {
            cfg.log.format = v;
        }
    }
}
