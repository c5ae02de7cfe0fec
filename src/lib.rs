//! # filereq
//!
//! A teaching-oriented subset of a file-transfer request protocol over UDP:
//! - A scripted Client issuing alternating read/write requests
//! - A RelayHost relaying datagrams byte-for-byte between client and server
//! - A Server parsing, validating, and acknowledging requests
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────┐  request   ┌─────────────┐  request   ┌──────────┐
//! │  Client  ├───────────►│  RelayHost  ├───────────►│  Server  │
//! │          │◄───────────┤  (port 23)  │◄───────────┤ (port 69)│
//! └──────────┘    ack     └─────────────┘    ack     └──────────┘
//! ```
//!
//! The relay never inspects payloads; it forwards exact bytes and retains
//! only the originating client address for the return leg. The server
//! acknowledges valid requests with a fixed 4-byte reply and silently drops
//! invalid ones. One request is in flight at a time, system-wide: the
//! client's blocking receive serializes the script.
//!
//! No file content moves anywhere. Requests name files that need not exist;
//! this is a single-shot request/acknowledge exchange, not a full transfer
//! protocol.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FileReqError, Result};
pub use config::Config;
pub use network::{Client, RelayHost, Server};
pub use protocol::{Ack, Opcode, RejectionReason, Request};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of filereq
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
