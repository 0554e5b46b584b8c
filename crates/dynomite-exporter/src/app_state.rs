//! Shared application state for the exporter.

use std::sync::Arc;

use crate::config::ExporterConfig;
use crate::registry::Registry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    registry: Registry,
}

impl AppState {
    pub fn new(cfg: ExporterConfig, registry: Registry) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, registry }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }
}
