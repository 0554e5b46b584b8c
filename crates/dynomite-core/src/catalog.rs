//! Metric catalog.
//!
//! The exported metric set is data: `FAMILIES` lists, per metric, its kind,
//! label schema and the `(type label, document field)` pairs it is fed from.
//! Metric names and kinds are consumed by existing dashboards and must not
//! change.

use crate::sample::Sample;
use crate::status::StatusDocument;

/// Metric name prefix.
pub const NAMESPACE: &str = "dynomite";

/// Reads one scalar out of a decoded document.
pub type Field = fn(&StatusDocument) -> i64;

/// Exposition kind of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Counter,
    Gauge,
}

impl MetricKind {
    /// Name used on the `# TYPE` line.
    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Counter => "counter",
            MetricKind::Gauge => "gauge",
        }
    }
}

/// Name, help text, kind and ordered label names of one exported metric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDefinition {
    pub name: String,
    pub help: String,
    pub kind: MetricKind,
    pub label_names: Vec<String>,
}

impl MetricDefinition {
    pub fn new(name: impl Into<String>, help: impl Into<String>, kind: MetricKind, labels: &[&str]) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            kind,
            label_names: labels.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Join the non-empty name parts with `_`.
pub fn fq_name(namespace: &str, subsystem: &str, name: &str) -> String {
    [namespace, subsystem, name]
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("_")
}

/// One emitted series of a family. `type_label` is `None` for rack-only families.
pub struct Series {
    pub type_label: Option<&'static str>,
    pub field: Field,
}

/// Static description of one metric family.
pub struct Family {
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    pub labels: &'static [&'static str],
    pub series: &'static [Series],
}

const RACK: &[&str] = &["rack"];
const RACK_TYPE: &[&str] = &["rack", "type"];

macro_rules! series {
    ($field:ident) => {
        Series { type_label: None, field: |d: &StatusDocument| d.$field }
    };
    ($ty:literal => $field:ident) => {
        Series { type_label: Some($ty), field: |d: &StatusDocument| d.$field }
    };
}

macro_rules! family {
    ($name:literal, $help:literal, $kind:ident, $labels:expr, [$($series:tt)*]) => {
        Family {
            name: $name,
            help: $help,
            kind: MetricKind::$kind,
            labels: $labels,
            series: &[$($series)*],
        }
    };
}

pub static FAMILIES: &[Family] = &[
    // Counter kind on uptime and latency is kept as published.
    family!("uptime_seconds", "Number of seconds since the server started.", Counter, RACK, [
        series!(uptime),
    ]),
    family!("latency", "Server latency.", Counter, RACK_TYPE, [
        series!("max" => latency_max),
        series!("999" => latency_999th),
        series!("99" => latency_99th),
        series!("95" => latency_95th),
        series!("50" => latency_mean),
    ]),
    family!("payload_size", "Payload size.", Gauge, RACK_TYPE, [
        series!("max" => payload_size_max),
        series!("999" => payload_size_999th),
        series!("99" => payload_size_99th),
        series!("95" => payload_size_95th),
        series!("50" => payload_size_mean),
    ]),
    family!("cross_region_rtt", "Cross region RTT.", Gauge, RACK_TYPE, [
        series!("99" => cross_region_rtt_99),
        series!("50" => average_cross_region_rtt),
    ]),
    family!("cross_zone_latency", "Cross zone latency.", Gauge, RACK_TYPE, [
        series!("99" => cross_zone_latency_99),
        series!("50" => average_cross_zone_latency),
    ]),
    family!("server_latency", "Server latency.", Gauge, RACK_TYPE, [
        series!("99" => server_latency_99),
        series!("50" => average_server_latency),
    ]),
    family!("server_queue_wait", "Server queue wait.", Gauge, RACK_TYPE, [
        series!("99" => server_queue_wait_99),
        series!("50" => average_server_queue_wait),
    ]),
    family!("cross_region_queue_wait", "Cross region queue wait.", Gauge, RACK_TYPE, [
        series!("99" => cross_region_queue_wait_99),
        series!("50" => average_cross_region_queue_wait),
    ]),
    family!("client_out_queue", "Client out queue.", Gauge, RACK_TYPE, [
        series!("99" => client_out_queue_99),
    ]),
    family!("server_in_queue", "Server in queue.", Gauge, RACK_TYPE, [
        series!("99" => server_in_queue_99),
    ]),
    family!("server_out_queue", "Server out queue.", Gauge, RACK_TYPE, [
        series!("99" => server_out_queue_99),
    ]),
    family!("dnode_client_out_queue", "Dnode client out queue.", Gauge, RACK_TYPE, [
        series!("99" => dnode_client_out_queue_99),
    ]),
    family!("peer_in_queue", "Peer in queue.", Gauge, RACK_TYPE, [
        series!("99" => peer_in_queue_99),
    ]),
    family!("peer_out_queue", "Peer out queue.", Gauge, RACK_TYPE, [
        series!("99" => peer_out_queue_99),
    ]),
    family!("remote_peer_in_queue", "Remote peer in queue.", Gauge, RACK_TYPE, [
        series!("99" => remote_peer_in_queue_99),
    ]),
    family!("remote_peer_out_queue", "Remote peer out queue.", Gauge, RACK_TYPE, [
        series!("99" => remote_peer_out_queue_99),
    ]),
    family!("alloc_msgs", "The number of currently allocated messages.", Gauge, RACK, [
        series!(alloc_msgs),
    ]),
    family!("free_msgs", "The number of currently free messages.", Gauge, RACK, [
        series!(free_msgs),
    ]),
    family!("alloc_mbufs", "The number of allocated mbufs.", Gauge, RACK, [
        series!(alloc_mbufs),
    ]),
    family!("free_mbufs", "The number of free mbufs.", Gauge, RACK, [
        series!(free_mbufs),
    ]),
    family!("dyn_memory", "Dynomite memory usage.", Gauge, RACK, [
        series!(dyn_memory),
    ]),
];

/// Definitions for every exported metric, built once at startup and shared
/// read-only by all scrapes.
#[derive(Debug, Clone)]
pub struct Catalog {
    up: MetricDefinition,
    families: Vec<MetricDefinition>,
}

impl Catalog {
    pub fn new(namespace: &str) -> Self {
        let up = MetricDefinition::new(
            fq_name(namespace, "", "up"),
            "Could the dynomite server be reached.",
            MetricKind::Gauge,
            &[],
        );
        let families = FAMILIES
            .iter()
            .map(|f| MetricDefinition::new(fq_name(namespace, "", f.name), f.help, f.kind, f.labels))
            .collect();
        Self { up, families }
    }

    /// The `up` definition.
    pub fn up(&self) -> &MetricDefinition {
        &self.up
    }

    /// `up=1` or `up=0`.
    pub fn up_sample(&self, reachable: bool) -> Sample {
        Sample {
            name: self.up.name.clone(),
            kind: self.up.kind,
            value: if reachable { 1.0 } else { 0.0 },
            labels: Vec::new(),
        }
    }

    /// All definitions, `up` first, then `FAMILIES` order.
    pub fn definitions(&self) -> impl Iterator<Item = &MetricDefinition> {
        std::iter::once(&self.up).chain(self.families.iter())
    }

    /// Family definitions paired with their static table entry.
    pub fn families(&self) -> impl Iterator<Item = (&MetricDefinition, &'static Family)> {
        self.families.iter().zip(FAMILIES.iter())
    }

    pub fn get(&self, name: &str) -> Option<&MetricDefinition> {
        self.definitions().find(|d| d.name == name)
    }

    /// Number of samples a successful projection emits (`up` excluded).
    pub fn sample_count(&self) -> usize {
        FAMILIES.iter().map(|f| f.series.len()).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(NAMESPACE)
    }
}
