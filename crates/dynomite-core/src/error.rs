//! Shared error type across the exporter crates.

use thiserror::Error;

/// Stable error kinds (used in log fields and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure, timeout, non-2xx status or a malformed body.
    UnreachableUpstream,
    /// A sample did not match its metric definition.
    InternalProjection,
    /// Rejected configuration.
    BadConfig,
    /// Two collectors describe the same metric name.
    DuplicateMetric,
    /// Internal error.
    Internal,
}

impl ErrorKind {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::UnreachableUpstream => "UNREACHABLE_UPSTREAM",
            ErrorKind::InternalProjection => "INTERNAL_PROJECTION",
            ErrorKind::BadConfig => "BAD_CONFIG",
            ErrorKind::DuplicateMetric => "DUPLICATE_METRIC",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("upstream unreachable: {0}")]
    Upstream(String),
    #[error("malformed status document: {0}")]
    Decode(String),
    #[error("projection failed: {0}")]
    Projection(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("duplicate metric: {0}")]
    DuplicateMetric(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    /// Map the error onto its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExporterError::Upstream(_) | ExporterError::Decode(_) => ErrorKind::UnreachableUpstream,
            ExporterError::Projection(_) => ErrorKind::InternalProjection,
            ExporterError::BadConfig(_) => ErrorKind::BadConfig,
            ExporterError::DuplicateMetric(_) => ErrorKind::DuplicateMetric,
            ExporterError::Internal(_) => ErrorKind::Internal,
        }
    }
}
