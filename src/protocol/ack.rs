//! Acknowledgment definitions
//!
//! Fixed 4-byte replies confirming a validated request.

use super::{Opcode, Request};

/// Acknowledgment for a validated request
///
/// Read and Write each map to one fixed 4-byte value; there is no payload
/// and no other acknowledgment kind on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// Reply to a valid read request: `00 03 00 01`
    Read,

    /// Reply to a valid write request: `00 04 00 00`
    Write,
}

impl Ack {
    /// Derive the acknowledgment for a decoded request
    ///
    /// Deterministic, no side effects: Read -> Read ack, Write -> Write ack.
    pub fn for_request(request: &Request) -> Self {
        match request.opcode {
            Opcode::Read => Ack::Read,
            Opcode::Write => Ack::Write,
        }
    }

    /// The exact bytes sent on the wire
    pub fn to_bytes(self) -> [u8; 4] {
        match self {
            Ack::Read => [0x00, 0x03, 0x00, 0x01],
            Ack::Write => [0x00, 0x04, 0x00, 0x00],
        }
    }

    /// Recognize a reply buffer as one of the two acknowledgments
    ///
    /// Used by the client to interpret the 4 raw reply bytes for display;
    /// anything else is not an acknowledgment.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0x00, 0x03, 0x00, 0x01] => Some(Ack::Read),
            [0x00, 0x04, 0x00, 0x00] => Some(Ack::Write),
            _ => None,
        }
    }
}
