//! Process observability.
//!
//! The exporter's own diagnostics go through `tracing`; the scraped metrics
//! are produced by the collectors, not here.

pub mod logging;
