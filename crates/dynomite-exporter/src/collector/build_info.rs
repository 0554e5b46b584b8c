use async_trait::async_trait;
use tracing::error;

use dynomite_core::catalog::fq_name;
use dynomite_core::{MetricDefinition, MetricKind, Sample};

use super::Collector;

/// `dynomite_exporter_build_info{version="..."} 1`
pub struct BuildInfoCollector {
    def: MetricDefinition,
    version: &'static str,
}

impl BuildInfoCollector {
    pub fn new() -> Self {
        Self {
            def: MetricDefinition::new(
                fq_name("dynomite_exporter", "", "build_info"),
                "A metric with a constant '1' value labeled by the version of dynomite_exporter.",
                MetricKind::Gauge,
                &["version"],
            ),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl Default for BuildInfoCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Collector for BuildInfoCollector {
    fn describe(&self) -> Vec<MetricDefinition> {
        vec![self.def.clone()]
    }

    async fn collect(&self) -> Vec<Sample> {
        match Sample::new(&self.def, 1.0, vec![self.version.to_string()]) {
            Ok(s) => vec![s],
            Err(e) => {
                error!(error = %e, "build info sample rejected");
                Vec::new()
            }
        }
    }
}
