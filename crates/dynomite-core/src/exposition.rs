//! Prometheus text exposition format (0.0.4).

use std::fmt::Write;

use crate::catalog::MetricDefinition;
use crate::sample::Sample;

/// Content type of an encoded payload.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        v.to_string()
    }
}

/// Render `samples` grouped under their definitions, in definition order.
///
/// Definitions without samples are omitted (a failed scrape only carries
/// `up`). Samples whose name has no definition are not rendered.
pub fn encode<'a>(definitions: impl IntoIterator<Item = &'a MetricDefinition>, samples: &[Sample]) -> String {
    let mut out = String::new();
    for def in definitions {
        let mut series = samples.iter().filter(|s| s.name == def.name).peekable();
        if series.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "# HELP {} {}", def.name, escape_help(&def.help));
        let _ = writeln!(out, "# TYPE {} {}", def.name, def.kind.as_str());
        for s in series {
            if s.labels.is_empty() {
                let _ = writeln!(out, "{} {}", s.name, format_value(s.value));
            } else {
                let label_str = s
                    .labels
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                let _ = writeln!(out, "{}{{{}}} {}", s.name, label_str, format_value(s.value));
            }
        }
    }
    out
}
