//! Throwaway HTTP servers standing in for a dynomite stats port.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;

pub const STATUS: &str = r#"{
    "service": "dynomite",
    "source": "dyno-node-1",
    "version": "0.6.22",
    "uptime": 12345,
    "rack": "us-east-1a",
    "dc": "us-east-1",
    "latency_max": 900,
    "latency_999th": 500,
    "latency_99th": 42,
    "latency_95th": 20,
    "latency_mean": 7,
    "payload_size_mean": 128,
    "99_cross_region_rtt": 140,
    "average_cross_region_rtt": 61,
    "remote_peer_out_queue_99": 13,
    "dyn_memory": 73400320,
    "dyn_o_mite": { "client_connections": 42 },
    "not_in_schema": { "nested": true }
}"#;

/// Serve `app` on an ephemeral localhost port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Upstream answering every GET on `/` with `body`, counting hits.
pub async fn upstream(status: StatusCode, body: &'static str) -> (SocketAddr, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let app = Router::new().route(
        "/",
        get(move || {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );
    (spawn(app).await, hits)
}

/// Upstream that answers only after `delay`.
pub async fn slow_upstream(delay: Duration) -> SocketAddr {
    let app = Router::new().route(
        "/",
        get(move || async move {
            tokio::time::sleep(delay).await;
            STATUS
        }),
    );
    spawn(app).await
}

/// An address nothing listens on.
pub async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
