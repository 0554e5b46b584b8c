use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{debug, error};

use dynomite_core::error::{ExporterError, Result};
use dynomite_core::{project, Catalog, MetricDefinition, Sample, StatusDocument};

use super::Collector;

/// Polls one dynomite stats endpoint per scrape.
pub struct DynomiteCollector {
    url: String,
    client: reqwest::Client,
    catalog: Catalog,
}

impl DynomiteCollector {
    /// `address` is `host:port` (fetched as `http://{address}`) or a full
    /// `http://` / `https://` URL used verbatim. `timeout` bounds both the
    /// connect and the whole request.
    pub fn new(address: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(concat!("dynomite_exporter/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ExporterError::Internal(format!("http client init failed: {e}")))?;

        Ok(Self {
            url: target_url(address),
            client,
            catalog: Catalog::default(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Turn a projection outcome into the cycle's samples: `up=1` followed by
    /// the projected samples, or `up=0` alone when projection failed.
    pub fn finish(&self, projected: Result<Vec<Sample>>) -> Vec<Sample> {
        match projected {
            Ok(samples) => {
                let mut out = Vec::with_capacity(samples.len() + 1);
                out.push(self.catalog.up_sample(true));
                out.extend(samples);
                out
            }
            Err(e) => {
                error!(url = %self.url, kind = e.kind().as_str(), error = %e, "failed to map dynomite stats");
                vec![self.catalog.up_sample(false)]
            }
        }
    }

    /// GET and decode the status document.
    pub async fn fetch(&self) -> Result<StatusDocument> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ExporterError::Upstream(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExporterError::Upstream(format!("unexpected status {status}")));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| ExporterError::Upstream(e.to_string()))?;
        StatusDocument::from_slice(&body)
    }
}

#[async_trait]
impl Collector for DynomiteCollector {
    fn describe(&self) -> Vec<MetricDefinition> {
        self.catalog.definitions().cloned().collect()
    }

    /// Fail fast: an unreachable or undecodable upstream yields `up=0` and
    /// nothing else.
    async fn collect(&self) -> Vec<Sample> {
        let started = Instant::now();

        let doc = match self.fetch().await {
            Ok(doc) => doc,
            Err(e) => {
                error!(url = %self.url, kind = e.kind().as_str(), error = %e, "failed to connect to dynomite");
                return vec![self.catalog.up_sample(false)];
            }
        };

        let samples = self.finish(project(&self.catalog, &doc));
        debug!(
            url = %self.url,
            rack = %doc.rack,
            samples = samples.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "dynomite scrape done"
        );
        samples
    }
}

fn target_url(address: &str) -> String {
    let address = address.trim();
    if address.starts_with("http://") || address.starts_with("https://") {
        address.to_string()
    } else {
        format!("http://{address}")
    }
}

