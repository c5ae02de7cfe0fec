//! Scripted client
//!
//! Generates the fixed request script and performs one blocking
//! send/receive round trip per entry against the relay host.

use std::net::UdpSocket;
use std::time::Duration;

use crate::config::Config;
use crate::error::{FileReqError, Result};
use crate::protocol::{encode_request, Ack, Request};

use super::hex_dump;

/// Number of entries in the fixed request script
pub const SCRIPT_LEN: usize = 11;

/// One entry of the client's request script
#[derive(Debug, Clone)]
pub enum ScriptEntry {
    /// A well-formed request, encoded via the codec before sending
    Request(Request),

    /// Raw bytes sent as-is; used for the deliberately malformed entry
    Raw(Vec<u8>),
}

impl ScriptEntry {
    /// Wire bytes for this entry
    pub fn to_wire(&self) -> Vec<u8> {
        match self {
            ScriptEntry::Request(request) => encode_request(request),
            ScriptEntry::Raw(bytes) => bytes.clone(),
        }
    }
}

/// Build the fixed 11-entry script
///
/// Indices 0-9 alternate Read/Write (even = Read) with alternating modes
/// (even = "netascii", odd = "octet") over synthetic filenames
/// `test{i}.txt` — the files need not exist, no transfer occurs. Index 10
/// is malformed on purpose: its opcode field is free text rather than the
/// `[0x00, opcode]` prefix, exercising the server's rejection path.
pub fn request_script() -> Vec<ScriptEntry> {
    let mut script = Vec::with_capacity(SCRIPT_LEN);

    for i in 0..SCRIPT_LEN - 1 {
        let filename = format!("test{i}.txt");
        let mode = if i % 2 == 0 { "netascii" } else { "octet" };
        let request = if i % 2 == 0 {
            Request::read(filename, mode)
        } else {
            Request::write(filename, mode)
        };
        script.push(ScriptEntry::Request(request));
    }

    script.push(ScriptEntry::Raw(malformed_request()));
    script
}

/// The 11th packet: a free-text opcode that can never decode
fn malformed_request() -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(b"invalid (request #11)");
    buf.push(0x00);
    buf.extend_from_slice(b"test10.txt");
    buf.push(0x00);
    buf.extend_from_slice(b"netascii");
    buf.push(0x00);
    buf
}

/// Blocking request client
pub struct Client {
    socket: UdpSocket,

    /// The relay host's client-facing address
    relay_addr: String,
}

impl Client {
    /// Bind an ephemeral socket aimed at the relay host
    ///
    /// A non-zero `recv_timeout_ms` bounds each blocking receive, which is
    /// what lets the script's malformed final request terminate cleanly
    /// instead of hanging on a reply that never comes. Zero restores the
    /// indefinite block.
    pub fn connect(config: &Config) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        if config.recv_timeout_ms > 0 {
            socket.set_read_timeout(Some(Duration::from_millis(config.recv_timeout_ms)))?;
        }

        Ok(Self {
            socket,
            relay_addr: config.relay_addr.clone(),
        })
    }

    /// Send one payload and block for the reply
    ///
    /// The reply buffer is sized to the payload just sent, which always
    /// fits the 4-byte acknowledgment since no request is shorter than 4
    /// bytes.
    pub fn exchange(&self, payload: &[u8]) -> Result<Vec<u8>> {
        self.socket.send_to(payload, &self.relay_addr)?;
        tracing::info!(
            to = %self.relay_addr,
            len = payload.len(),
            bytes = %hex_dump(payload),
            "sent request"
        );

        let mut buf = vec![0u8; payload.len()];
        let (len, from) = match self.socket.recv_from(&mut buf) {
            Ok(received) => received,
            Err(ref e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                return Err(FileReqError::Timeout(format!(
                    "reply via {}",
                    self.relay_addr
                )));
            }
            Err(e) => return Err(e.into()),
        };
        buf.truncate(len);

        tracing::info!(%from, len, bytes = %hex_dump(&buf), "received reply");
        Ok(buf)
    }

    /// Run the fixed script end to end
    ///
    /// A timed-out exchange is reported and skipped rather than treated as
    /// fatal: the malformed final request is dropped silently by the server,
    /// so no reply for it is the expected outcome.
    pub fn run_script(&self) -> Result<()> {
        for (index, entry) in request_script().iter().enumerate() {
            tracing::info!(request = index + 1, ?entry, "sending script entry");

            match self.exchange(&entry.to_wire()) {
                Ok(reply) => match Ack::from_bytes(&reply) {
                    Some(ack) => {
                        tracing::info!(request = index + 1, ?ack, "acknowledged")
                    }
                    None => tracing::warn!(
                        request = index + 1,
                        bytes = %hex_dump(&reply),
                        "reply is not an acknowledgment"
                    ),
                },
                Err(FileReqError::Timeout(what)) => {
                    tracing::warn!(
                        request = index + 1,
                        "no reply ({what}); invalid requests are dropped without an error reply"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}
