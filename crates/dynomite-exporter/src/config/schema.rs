use std::net::{SocketAddr, ToSocketAddrs};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;
use dynomite_core::error::{ExporterError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    #[serde(default)]
    pub dynomite: DynomiteSection,

    #[serde(default)]
    pub web: WebSection,

    #[serde(default)]
    pub log: LogSection,
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        self.dynomite.validate()?;
        self.web.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DynomiteSection {
    /// host:port of the stats listener, or a full URL.
    #[serde(default = "default_address")]
    pub address: String,

    /// Connect and read timeout, e.g. `500ms`, `1s`.
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

impl Default for DynomiteSection {
    fn default() -> Self {
        Self {
            address: default_address(),
            timeout: default_timeout(),
        }
    }
}

impl DynomiteSection {
    pub fn validate(&self) -> Result<()> {
        if self.address.trim().is_empty() {
            return Err(ExporterError::BadConfig("dynomite.address must not be empty".into()));
        }
        self.timeout()?;
        Ok(())
    }

    pub fn timeout(&self) -> Result<Duration> {
        match parse_duration(&self.timeout) {
            Some(d) if !d.is_zero() => Ok(d),
            Some(_) => Err(ExporterError::BadConfig("dynomite.timeout must be greater than zero".into())),
            None => Err(ExporterError::BadConfig(format!(
                "dynomite.timeout is not a duration: {:?}",
                self.timeout
            ))),
        }
    }
}

fn default_address() -> String {
    "localhost:22222".into()
}
fn default_timeout() -> String {
    "1s".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSection {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: String,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            telemetry_path: default_telemetry_path(),
        }
    }
}

impl WebSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;

        let path = self.telemetry_path.as_str();
        if !path.starts_with('/') {
            return Err(ExporterError::BadConfig("web.telemetry_path must start with '/'".into()));
        }
        if path == "/" || path == "/healthz" {
            return Err(ExporterError::BadConfig(format!(
                "web.telemetry_path {path} collides with a built-in route"
            )));
        }
        if path.chars().any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>')) {
            return Err(ExporterError::BadConfig("web.telemetry_path contains invalid characters".into()));
        }
        // Route syntax: captures and wildcards.
        if path.chars().any(|c| matches!(c, ':' | '*' | '{' | '}')) {
            return Err(ExporterError::BadConfig(format!(
                "web.telemetry_path {path} must be a literal path (no ':', '*', '{{' or '}}')"
            )));
        }
        Ok(())
    }

    /// Resolve the listen address. A bare `:port` binds the IPv6 wildcard,
    /// which also accepts IPv4 on dual-stack hosts.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let raw = self.listen_address.trim();
        let full = if raw.starts_with(':') {
            format!("[::]{raw}")
        } else {
            raw.to_string()
        };
        full.to_socket_addrs()
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or_else(|| ExporterError::BadConfig(format!("web.listen_address is not a socket address: {raw:?}")))
    }
}

fn default_listen_address() -> String {
    ":9122".into()
}
fn default_telemetry_path() -> String {
    "/metrics".into()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level {other:?} (debug, info, warn, error)")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Logfmt,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "logfmt" => Ok(LogFormat::Logfmt),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format {other:?} (logfmt, json)")),
        }
    }
}

/// Parse `500ms`, `1s`, `2m` or a bare number of seconds.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(secs) = s.strip_suffix('s') {
        if let Some(ms) = secs.strip_suffix('m') {
            ms.parse::<u64>().ok().map(Duration::from_millis)
        } else {
            secs.parse::<u64>().ok().map(Duration::from_secs)
        }
    } else if let Some(mins) = s.strip_suffix('m') {
        mins.parse::<u64>().ok().and_then(|m| m.checked_mul(60)).map(Duration::from_secs)
    } else {
        s.parse::<u64>().ok().map(Duration::from_secs)
    }
}
