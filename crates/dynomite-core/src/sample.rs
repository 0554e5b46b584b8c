//! A single emitted metric value.

use crate::catalog::{MetricDefinition, MetricKind};
use crate::error::{ExporterError, Result};

/// One value of one metric, labelled in definition order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub name: String,
    pub kind: MetricKind,
    pub value: f64,
    pub labels: Vec<(String, String)>,
}

impl Sample {
    /// Build a sample for `def`. The label values must line up with the
    /// definition's label names one to one.
    pub fn new(def: &MetricDefinition, value: f64, label_values: Vec<String>) -> Result<Self> {
        if label_values.len() != def.label_names.len() {
            return Err(ExporterError::Projection(format!(
                "{}: expected {} label values {:?}, got {}",
                def.name,
                def.label_names.len(),
                def.label_names,
                label_values.len()
            )));
        }
        let labels = def.label_names.iter().cloned().zip(label_values).collect();
        Ok(Self {
            name: def.name.clone(),
            kind: def.kind,
            value,
            labels,
        })
    }

    /// Value of the label `name`, if present.
    pub fn label(&self, name: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}
