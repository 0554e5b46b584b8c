//! Status document served by dynomite on its stats port.
//!
//! Every field is defaulted: a key missing from the response decodes to its
//! zero value, as does an explicit `null`. Keys not listed here are ignored.
//! Only a value of the wrong JSON type fails the decode.

use serde::{Deserialize, Deserializer};

use crate::error::{ExporterError, Result};

/// One decoded snapshot of the upstream stats page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StatusDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub service: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uptime: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rack: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dc: String,

    #[serde(deserialize_with = "null_as_default")]
    pub latency_max: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub latency_999th: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub latency_99th: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub latency_95th: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub latency_mean: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub payload_size_max: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub payload_size_999th: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub payload_size_99th: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub payload_size_95th: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub payload_size_mean: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub average_cross_region_rtt: i64,
    #[serde(rename = "99_cross_region_rtt", deserialize_with = "null_as_default")]
    pub cross_region_rtt_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_cross_zone_latency: i64,
    #[serde(rename = "99_cross_zone_latency", deserialize_with = "null_as_default")]
    pub cross_zone_latency_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_server_latency: i64,
    #[serde(rename = "99_server_latency", deserialize_with = "null_as_default")]
    pub server_latency_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_cross_region_queue_wait: i64,
    #[serde(rename = "99_cross_region_queue_wait", deserialize_with = "null_as_default")]
    pub cross_region_queue_wait_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_cross_zone_queue_wait: i64,
    #[serde(rename = "99_cross_zone_queue_wait", deserialize_with = "null_as_default")]
    pub cross_zone_queue_wait_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub average_server_queue_wait: i64,
    #[serde(rename = "99_server_queue_wait", deserialize_with = "null_as_default")]
    pub server_queue_wait_99: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub client_out_queue_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub server_in_queue_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub server_out_queue_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dnode_client_out_queue_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_in_queue_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_out_queue_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_in_queue_99: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_out_queue_99: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub alloc_msgs: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub free_msgs: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub alloc_mbufs: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub free_mbufs: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dyn_memory: i64,

    /// Per-pool connection and queue counters.
    #[serde(deserialize_with = "null_as_default")]
    pub dyn_o_mite: PoolStats,
}

impl StatusDocument {
    /// Decode a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| ExporterError::Decode(e.to_string()))
    }
}

/// `null` decodes like a missing key.
fn null_as_default<'de, D, T>(d: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// The nested `dyn_o_mite` record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PoolStats {
    #[serde(deserialize_with = "null_as_default")]
    pub client_eof: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_err: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_connections: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_read_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_write_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_dropped_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_non_quorum_w_responses: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub client_non_quorum_r_responses: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub server_ejects: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub dnode_client_eof: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dnode_client_err: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dnode_client_connections: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dnode_client_in_queue: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dnode_client_in_queue_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dnode_client_out_queue: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub dnode_client_out_queue_bytes: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub peer_dropped_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_timedout_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_dropped_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_timedout_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_failover_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_eof: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_err: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_timedout: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_timedout: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_connections: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_forward_error: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_requests: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_request_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_responses: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_response_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_ejected_at: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_ejects: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_in_queue: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_in_queue: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_in_queue_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_in_queue_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_out_queue: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_out_queue: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_out_queue_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub remote_peer_out_queue_bytes: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub peer_mismatch_requests: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub forward_error: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub fragments: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub stats_count: i64,
}
