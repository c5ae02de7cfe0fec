//! Network Module
//!
//! UDP endpoints for the three processes.
//!
//! ## Architecture
//! - Client: ephemeral socket, blocking send/receive per scripted request
//! - RelayHost: well-known client-facing socket plus an ephemeral socket
//!   for both the server leg and the return leg
//! - Server: well-known socket, validates and acknowledges
//!
//! One logical thread per process; every socket operation blocks. Request
//! N's full round trip completes before request N+1 begins, enforced by the
//! client's own blocking receive.

mod relay;
mod server;
mod client;

pub use relay::RelayHost;
pub use server::Server;
pub use client::{request_script, Client, ScriptEntry, SCRIPT_LEN};

/// Receive buffer size for all endpoints, large enough for any datagram
/// this protocol produces
pub const MAX_DATAGRAM: usize = 1024;

/// Format a packet as space-separated uppercase hex for diagnostics
pub fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{byte:02X}"));
    }
    out
}
