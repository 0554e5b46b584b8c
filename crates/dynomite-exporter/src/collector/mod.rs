//! Scrape-time metric sources.
//!
//! A collector describes a fixed set of metric definitions and produces a
//! fresh batch of samples on every scrape. Collectors hold no per-scrape
//! state, so one instance serves any number of concurrent scrapes.

pub mod build_info;
pub mod dynomite;

use async_trait::async_trait;

use dynomite_core::{MetricDefinition, Sample};

pub use build_info::BuildInfoCollector;
pub use dynomite::DynomiteCollector;

#[async_trait]
pub trait Collector: Send + Sync {
    /// Definitions of every metric this collector may emit. Stable for the
    /// lifetime of the collector; never touches the network.
    fn describe(&self) -> Vec<MetricDefinition>;

    /// Run one scrape cycle.
    async fn collect(&self) -> Vec<Sample>;
}
