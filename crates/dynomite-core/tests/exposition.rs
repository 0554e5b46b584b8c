//! Text exposition output.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use dynomite_core::exposition::encode;
use dynomite_core::{project, Catalog, MetricDefinition, MetricKind, Sample, StatusDocument};

#[test]
fn failed_scrape_renders_only_up() {
    let catalog = Catalog::default();
    let out = encode(catalog.definitions(), &[catalog.up_sample(false)]);
    assert_eq!(
        out,
        "# HELP dynomite_up Could the dynomite server be reached.\n# TYPE dynomite_up gauge\ndynomite_up 0\n"
    );
}

#[test]
fn labelled_families_render_in_catalog_order() {
    let catalog = Catalog::default();
    let doc = StatusDocument::from_slice(br#"{"rack": "r1", "uptime": 12345, "latency_99th": 42}"#).unwrap();
    let mut samples = vec![catalog.up_sample(true)];
    samples.extend(project(&catalog, &doc).unwrap());

    let out = encode(catalog.definitions(), &samples);
    assert!(out.starts_with("# HELP dynomite_up "));
    assert!(out.contains("# TYPE dynomite_uptime_seconds counter\ndynomite_uptime_seconds{rack=\"r1\"} 12345\n"));
    assert!(out.contains("dynomite_latency{rack=\"r1\",type=\"99\"} 42\n"));
    assert!(out.contains("# TYPE dynomite_payload_size gauge\n"));

    let uptime_at = out.find("dynomite_uptime_seconds{").unwrap();
    let memory_at = out.find("dynomite_dyn_memory{").unwrap();
    assert!(uptime_at < memory_at);
}

#[test]
fn label_values_and_help_are_escaped() {
    let def = MetricDefinition::new("x_info", "line one\nline \\two", MetricKind::Gauge, &["rack"]);
    let s = Sample::new(&def, 1.5, vec!["a\"b\\c\nd".into()]).unwrap();
    let out = encode([&def], &[s]);
    assert_eq!(
        out,
        "# HELP x_info line one\\nline \\\\two\n# TYPE x_info gauge\nx_info{rack=\"a\\\"b\\\\c\\nd\"} 1.5\n"
    );
}

#[test]
fn special_values() {
    let def = MetricDefinition::new("x", "x", MetricKind::Gauge, &[]);
    let mk = |v| Sample::new(&def, v, vec![]).unwrap();
    let out = encode([&def], &[mk(f64::NAN), mk(f64::INFINITY), mk(f64::NEG_INFINITY)]);
    assert!(out.ends_with("x NaN\nx +Inf\nx -Inf\n"));
}
