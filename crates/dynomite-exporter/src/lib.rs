//! dynomite exporter library entry.
//!
//! Wires config, the upstream collector, the registry and the HTTP surface.
//! Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod cli;
pub mod collector;
pub mod config;
pub mod obs;
pub mod ops;
pub mod registry;
pub mod router;
