//! Protocol codec
//!
//! Encoding and decoding functions for the request wire format.
//!
//! ## Wire Format
//! ```text
//! ┌──────────┬──────────┬────────────┬──────────┬────────┬──────────┐
//! │   0x00   │ Op (1)   │  filename  │   0x00   │  mode  │   0x00   │
//! └──────────┴──────────┴────────────┴──────────┴────────┴──────────┘
//! ```
//!
//! Decoding is a pure, total function over the raw datagram: no I/O, no
//! side effects, first failing check wins. Rejections carry an explicit
//! reason so the caller decides the policy (the server drops silently).

use bytes::{BufMut, BytesMut};
use thiserror::Error;

use super::{Ack, Opcode, Request};

/// Smallest possible request: leading zero, opcode, two delimiters
pub const MIN_REQUEST_LEN: usize = 4;

/// Acknowledgments are always exactly 4 bytes
pub const ACK_LEN: usize = 4;

/// Why a raw datagram failed to decode as a request
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RejectionReason {
    /// Too short, leading byte non-zero, or opcode byte not 0x01/0x02
    #[error("malformed opcode: incorrect leading bytes or insufficient length")]
    MalformedOpcode,

    /// No zero byte terminates the filename
    #[error("no zero byte after filename")]
    NoFilenameTerminator,

    /// No zero byte terminates the mode
    #[error("no zero byte after mode")]
    NoModeTerminator,

    /// Bytes follow the mode terminator
    #[error("extra data found after mode terminator")]
    TrailingData,
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a request to its wire bytes
///
/// Never fails for a well-formed request. Mode is ASCII-lower-cased before
/// writing, matching the convention the client scripts rely on.
pub fn encode_request(request: &Request) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(MIN_REQUEST_LEN + request.filename.len() + request.mode.len());

    buf.put_u8(0x00);
    buf.put_u8(request.opcode as u8);
    buf.put_slice(&request.filename);
    buf.put_u8(0x00);
    buf.put_slice(&request.mode.to_ascii_lowercase());
    buf.put_u8(0x00);

    buf.to_vec()
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a raw datagram into a request
///
/// Checks run in order and short-circuit on the first failure:
/// 1. `len >= 4`, `buf[0] == 0`, `buf[1]` in {1, 2}  (`MalformedOpcode`)
/// 2. a zero byte at index >= 2 ends the filename    (`NoFilenameTerminator`)
/// 3. a second zero byte ends the mode               (`NoModeTerminator`)
/// 4. that second zero is the final byte             (`TrailingData`)
///
/// The delimiter scan only requires *some* zero byte, so an empty filename
/// or empty mode span decodes successfully. That is preserved behavior.
pub fn decode_request(buf: &[u8]) -> Result<Request, RejectionReason> {
    if buf.len() < MIN_REQUEST_LEN || buf[0] != 0x00 {
        return Err(RejectionReason::MalformedOpcode);
    }

    let opcode = Opcode::from_byte(buf[1]).ok_or(RejectionReason::MalformedOpcode)?;

    // First zero at or after index 2 ends the filename
    let filename_end = buf[2..]
        .iter()
        .position(|&b| b == 0x00)
        .map(|i| i + 2)
        .ok_or(RejectionReason::NoFilenameTerminator)?;

    // Next zero after that ends the mode
    let mode_end = buf[filename_end + 1..]
        .iter()
        .position(|&b| b == 0x00)
        .map(|i| i + filename_end + 1)
        .ok_or(RejectionReason::NoModeTerminator)?;

    if mode_end != buf.len() - 1 {
        return Err(RejectionReason::TrailingData);
    }

    Ok(Request {
        opcode,
        filename: buf[2..filename_end].to_vec(),
        mode: buf[filename_end + 1..mode_end].to_vec(),
    })
}

/// Decode a raw datagram and derive its acknowledgment
///
/// The tagged-result form of validate-and-respond: callers choose what to do
/// with a rejection rather than the codec hard-coding a drop policy.
pub fn validate(buf: &[u8]) -> Result<Ack, RejectionReason> {
    let request = decode_request(buf)?;
    Ok(Ack::for_request(&request))
}
