//! Explicit collector registry.
//!
//! Built in `main` and handed to the app state; there is no process-global
//! registry.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;

use dynomite_core::error::{ExporterError, Result};
use dynomite_core::exposition;
use dynomite_core::{MetricDefinition, Sample};

use crate::collector::Collector;

#[derive(Default)]
pub struct Registry {
    collectors: Vec<Arc<dyn Collector>>,
}

impl Registry {
    pub fn new() -> Self {
        Self { collectors: Vec::new() }
    }

    /// Add a collector. Fails if any metric name it describes is already
    /// described by a registered collector (or twice by itself).
    pub fn register(&mut self, collector: Arc<dyn Collector>) -> Result<()> {
        let mut seen: HashSet<String> = self.describe().into_iter().map(|d| d.name).collect();
        for def in collector.describe() {
            if !seen.insert(def.name.clone()) {
                return Err(ExporterError::DuplicateMetric(def.name));
            }
        }
        self.collectors.push(collector);
        Ok(())
    }

    /// Definitions of all registered collectors, in registration order.
    pub fn describe(&self) -> Vec<MetricDefinition> {
        self.collectors.iter().flat_map(|c| c.describe()).collect()
    }

    /// Run every collector concurrently and concatenate in registration order.
    pub async fn gather(&self) -> Vec<Sample> {
        join_all(self.collectors.iter().map(|c| c.collect()))
            .await
            .into_iter()
            .flatten()
            .collect()
    }

    /// Gather and encode as Prometheus text.
    pub async fn render(&self) -> String {
        let defs = self.describe();
        let samples = self.gather().await;
        exposition::encode(&defs, &samples)
    }
}
