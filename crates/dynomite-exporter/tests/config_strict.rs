#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use dynomite_exporter::config::{self, parse_duration, LogFormat, LogLevel};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
dynomite:
  address: "10.0.0.5:22222"
  timout: "2s" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
log:
  level: debug
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.log.level, LogLevel::Debug);
    assert_eq!(cfg.log.format, LogFormat::Logfmt);
    assert_eq!(cfg.dynomite.address, "localhost:22222");
    assert_eq!(cfg.dynomite.timeout().unwrap(), Duration::from_secs(1));
    assert_eq!(cfg.web.telemetry_path, "/metrics");
    assert_eq!(cfg.web.listen_addr().unwrap().port(), 9122);
    assert!(cfg.web.listen_addr().unwrap().ip().is_unspecified());
    assert!(cfg.web.listen_addr().unwrap().is_ipv6());
}

#[test]
fn ok_full_config() {
    let ok = r#"
dynomite:
  address: "dyno-1.internal:22222"
  timeout: "250ms"
web:
  listen_address: "127.0.0.1:9200"
  telemetry_path: "/dynomite"
log:
  level: warn
  format: json
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.dynomite.timeout().unwrap(), Duration::from_millis(250));
    assert_eq!(cfg.web.listen_addr().unwrap().to_string(), "127.0.0.1:9200");
    assert_eq!(cfg.log.format, LogFormat::Json);
}

#[test]
fn invalid_values_are_rejected() {
    let cases = [
        "dynomite: { address: \"\" }",
        "dynomite: { timeout: \"soon\" }",
        "dynomite: { timeout: \"0s\" }",
        "web: { telemetry_path: \"metrics\" }",
        "web: { telemetry_path: \"/\" }",
        "web: { telemetry_path: \"/healthz\" }",
        "dynomite: { timeout: \"999999999999999999m\" }",
        "web: { telemetry_path: \"/metrics/*\" }",
        "web: { telemetry_path: \"/*rest\" }",
        "web: { telemetry_path: \"/:id\" }",
        "web: { telemetry_path: \"/{name}\" }",
        "web: { listen_address: \"not an address\" }",
        "log: { level: trace }",
        "log: { format: xml }",
    ];
    for case in cases {
        let err = config::load_from_str(case).expect_err(case);
        assert_eq!(err.kind().as_str(), "BAD_CONFIG", "{case}");
    }
}

#[test]
fn missing_file_is_a_config_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "BAD_CONFIG");
}

#[test]
fn durations() {
    assert_eq!(parse_duration("1s"), Some(Duration::from_secs(1)));
    assert_eq!(parse_duration("500ms"), Some(Duration::from_millis(500)));
    assert_eq!(parse_duration("2m"), Some(Duration::from_secs(120)));
    assert_eq!(parse_duration("10"), Some(Duration::from_secs(10)));
    assert_eq!(parse_duration("1.5s"), None);
    assert_eq!(parse_duration("999999999999999999m"), None);
}
