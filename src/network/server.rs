//! UDP server
//!
//! Receives relayed requests, validates them, and acknowledges valid ones.

use std::net::{SocketAddr, UdpSocket};
use std::time::Duration;

use crate::config::Config;
use crate::error::{FileReqError, Result};
use crate::protocol::validate;

use super::{hex_dump, MAX_DATAGRAM};

/// Validating server for file-transfer requests
///
/// Invalid requests are logged and dropped with no reply on the wire; the
/// sender sees nothing. Acknowledgments are sent from a fresh ephemeral
/// socket per reply.
pub struct Server {
    socket: UdpSocket,
}

impl Server {
    /// Bind the server port
    ///
    /// A non-zero `recv_timeout_ms` bounds each blocking receive; zero
    /// means block forever.
    pub fn bind(config: &Config) -> Result<Self> {
        let socket = UdpSocket::bind(&config.server_addr)?;
        if config.recv_timeout_ms > 0 {
            socket.set_read_timeout(Some(Duration::from_millis(config.recv_timeout_ms)))?;
        }

        tracing::info!(addr = %socket.local_addr()?, "server bound");
        Ok(Self { socket })
    }

    /// Address of the listening socket (useful when bound to port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Serve requests forever
    ///
    /// An idle-receive timeout just re-arms the loop; socket errors
    /// propagate and terminate the process.
    pub fn run(&self) -> Result<()> {
        loop {
            match self.serve_once() {
                Ok(()) => {}
                Err(FileReqError::Timeout(_)) => {
                    tracing::trace!("no request within deadline, still listening");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Receive and handle a single datagram
    pub fn serve_once(&self) -> Result<()> {
        let mut buf = [0u8; MAX_DATAGRAM];

        let (len, src) = match self.socket.recv_from(&mut buf) {
            Ok(received) => received,
            Err(ref e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                return Err(FileReqError::Timeout("request datagram".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            from = %src,
            len,
            bytes = %hex_dump(&buf[..len]),
            "received request"
        );

        match validate(&buf[..len]) {
            Ok(ack) => {
                let reply = ack.to_bytes();
                let reply_socket = UdpSocket::bind("0.0.0.0:0")?;
                reply_socket.send_to(&reply, src)?;
                tracing::info!(
                    to = %src,
                    bytes = %hex_dump(&reply),
                    "request valid, acknowledgment sent"
                );
            }
            Err(reason) => {
                // Deliberate protocol choice: no error reply exists on the
                // wire, so the sender of a malformed request hears nothing.
                tracing::warn!(from = %src, %reason, "invalid request dropped");
            }
        }

        Ok(())
    }
}
