//! Tool server: JSON-RPC 2.0 over stdio, one JSON object per line.
//!
//! `tools` holds the catalogue (definitions plus dispatch into
//! `lexlink_sources`); `rpc` speaks the framing. Domain failures come back
//! as ordinary text results; protocol errors are reserved for malformed
//! requests, unknown methods, and bad arguments.

pub mod rpc;
pub mod tools;

pub use rpc::serve;
pub use tools::{CallError, Catalogue};
