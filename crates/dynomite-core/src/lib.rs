//! dynomite core: status document model, metric catalog, projection and
//! the Prometheus text encoder.
//!
//! This crate carries no transport or runtime dependencies. The exporter
//! binary owns the HTTP fetch and the serving side; everything here is a pure
//! function of a decoded status document.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here. A failed decode or
//! a malformed sample surfaces as `ExporterError` so a scrape never takes the
//! process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod exposition;
pub mod projection;
pub mod sample;
pub mod status;

pub use catalog::{Catalog, MetricDefinition, MetricKind, NAMESPACE};
pub use error::{ErrorKind, ExporterError, Result};
pub use projection::project;
pub use sample::Sample;
pub use status::StatusDocument;
