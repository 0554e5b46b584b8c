//! Status document decode tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;

use dynomite_core::{ErrorKind, StatusDocument};

fn load(name: &str) -> Vec<u8> {
    fs::read(format!("tests/vectors/{name}")).unwrap()
}

#[test]
fn decode_full_document() {
    let doc = StatusDocument::from_slice(&load("status_full.json")).unwrap();
    assert_eq!(doc.service, "dynomite");
    assert_eq!(doc.rack, "us-east-1a");
    assert_eq!(doc.dc, "us-east-1");
    assert_eq!(doc.uptime, 86400);
    assert_eq!(doc.latency_999th, 910);
    assert_eq!(doc.cross_region_rtt_99, 140);
    assert_eq!(doc.average_cross_region_rtt, 61);
    assert_eq!(doc.remote_peer_out_queue_99, 13);
    assert_eq!(doc.dyn_memory, 73_400_320);
    assert_eq!(doc.dyn_o_mite.client_connections, 42);
    assert_eq!(doc.dyn_o_mite.peer_request_bytes, 9_876_543_210);
}

#[test]
fn missing_keys_decode_to_zero() {
    let doc = StatusDocument::from_slice(br#"{"rack": "r1"}"#).unwrap();
    assert_eq!(doc.rack, "r1");
    assert_eq!(doc.uptime, 0);
    assert_eq!(doc.latency_max, 0);
    assert_eq!(doc.dyn_o_mite.client_connections, 0);

    let empty = StatusDocument::from_slice(b"{}").unwrap();
    assert_eq!(empty, StatusDocument::default());
}

#[test]
fn unknown_keys_are_ignored() {
    let doc = StatusDocument::from_slice(br#"{"uptime": 5, "brand_new_gauge": [1, 2], "dyn_o_mite": {"x": {}}}"#)
        .unwrap();
    assert_eq!(doc.uptime, 5);
}

#[test]
fn wrong_type_is_a_decode_error() {
    let err = StatusDocument::from_slice(br#"{"uptime": "soon"}"#).expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UnreachableUpstream);
    assert_eq!(err.kind().as_str(), "UNREACHABLE_UPSTREAM");
}

#[test]
fn non_json_body_is_a_decode_error() {
    let err = StatusDocument::from_slice(b"<html>502 Bad Gateway</html>").expect_err("must fail");
    assert_eq!(err.kind(), ErrorKind::UnreachableUpstream);
}

#[test]
fn null_decodes_to_zero() {
    let doc = StatusDocument::from_slice(&load("status_nulls.json")).unwrap();
    assert_eq!(doc.rack, "r1");
    assert_eq!(doc.uptime, 0);
    assert_eq!(doc.dc, "");
    assert_eq!(doc.latency_99th, 42);
    assert_eq!(doc.latency_mean, 0);
    assert_eq!(doc.cross_region_rtt_99, 0);
    assert_eq!(doc.dyn_o_mite.client_connections, 0);
    assert_eq!(doc.dyn_o_mite.peer_connections, 5);

    let nested = StatusDocument::from_slice(br#"{"uptime": 7, "dyn_o_mite": null}"#).unwrap();
    assert_eq!(nested.uptime, 7);
    assert_eq!(nested.dyn_o_mite, Default::default());
}
