//! Protocol Module
//!
//! Defines the wire protocol for the file-transfer request exchange.
//!
//! ## Request Format
//! ```text
//! ┌──────────┬──────────┬────────────┬──────────┬────────┬──────────┐
//! │   0x00   │ Op (1)   │  filename  │   0x00   │  mode  │   0x00   │
//! └──────────┴──────────┴────────────┴──────────┴────────┴──────────┘
//! ```
//!
//! ### Opcodes
//! - 0x01: READ
//! - 0x02: WRITE
//!
//! Exactly two internal zero delimiters, nothing after the final zero,
//! total length >= 4. Filename and mode spans may be empty; neither may
//! contain an interior zero byte.
//!
//! ## Acknowledgment Format (fixed 4 bytes, no payload)
//! ```text
//! READ  ack: 00 03 00 01
//! WRITE ack: 00 04 00 00
//! ```
//!
//! Invalid requests receive no acknowledgment at all: the server logs the
//! rejection reason and stays silent on the wire.

mod request;
mod ack;
mod codec;

pub use request::{Opcode, Request};
pub use ack::Ack;
pub use codec::{decode_request, encode_request, validate, RejectionReason, ACK_LEN, MIN_REQUEST_LEN};
