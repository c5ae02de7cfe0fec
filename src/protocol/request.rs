//! Request definitions
//!
//! Represents read/write requests from clients.

/// Request opcodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    Read = 0x01,
    Write = 0x02,
}

impl Opcode {
    /// Parse an opcode byte; anything other than 0x01/0x02 is invalid
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Opcode::Read),
            0x02 => Some(Opcode::Write),
            _ => None,
        }
    }
}

/// A parsed file-transfer request
///
/// Transient, constructed per exchange; nothing is persisted. Filename and
/// mode are carried as raw bytes (UTF-8 strings in practice) and must not
/// contain interior zero bytes, since zero delimits the fields on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Read or Write
    pub opcode: Opcode,

    /// Requested file name (the file need not exist; no transfer occurs)
    pub filename: Vec<u8>,

    /// Transfer mode token, e.g. "netascii" or "octet"; not interpreted
    pub mode: Vec<u8>,
}

impl Request {
    /// Create a read request
    pub fn read(filename: impl Into<Vec<u8>>, mode: impl Into<Vec<u8>>) -> Self {
        Self {
            opcode: Opcode::Read,
            filename: filename.into(),
            mode: mode.into(),
        }
    }

    /// Create a write request
    pub fn write(filename: impl Into<Vec<u8>>, mode: impl Into<Vec<u8>>) -> Self {
        Self {
            opcode: Opcode::Write,
            filename: filename.into(),
            mode: mode.into(),
        }
    }
}
