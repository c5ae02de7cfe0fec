//! Relay host
//!
//! Synchronous store-and-forward bridge between the client-facing port and
//! the server. The relay never inspects payload semantics: it forwards the
//! exact bytes it received, in both directions, and remembers only the
//! originating client address for the return leg.

use std::net::{SocketAddr, UdpSocket};

use crate::config::Config;
use crate::error::Result;

use super::{hex_dump, MAX_DATAGRAM};

/// Store-and-forward relay between client and server
///
/// Holds exactly one transaction in flight: the client address retained on
/// receipt is dropped as soon as the server's reply has been forwarded back.
/// There is no session table and no timeout; a non-responding server stalls
/// the relay indefinitely.
pub struct RelayHost {
    /// Well-known socket clients send requests to
    client_socket: UdpSocket,

    /// Ephemeral socket for the server leg and the return leg to the client
    relay_socket: UdpSocket,

    /// Where requests are forwarded
    server_addr: String,
}

impl RelayHost {
    /// Bind the client-facing port and an ephemeral relay socket
    pub fn bind(config: &Config) -> Result<Self> {
        let client_socket = UdpSocket::bind(&config.relay_addr)?;
        let relay_socket = UdpSocket::bind("0.0.0.0:0")?;

        tracing::info!(
            client_facing = %client_socket.local_addr()?,
            relay = %relay_socket.local_addr()?,
            server = %config.server_addr,
            "relay host bound"
        );

        Ok(Self {
            client_socket,
            relay_socket,
            server_addr: config.server_addr.clone(),
        })
    }

    /// Address of the client-facing socket (useful when bound to port 0)
    pub fn client_addr(&self) -> Result<SocketAddr> {
        Ok(self.client_socket.local_addr()?)
    }

    /// Relay transactions forever
    pub fn run(&self) -> Result<()> {
        loop {
            self.relay_once()?;
        }
    }

    /// Complete one client -> server -> client round trip
    ///
    /// Blocks on the client socket until a request arrives, forwards it
    /// unmodified to the server, blocks on the reply, and forwards that
    /// unmodified to the retained client address. Length-preserving on
    /// both legs.
    pub fn relay_once(&self) -> Result<()> {
        let mut buf = [0u8; MAX_DATAGRAM];

        // Client leg
        let (request_len, client_addr) = self.client_socket.recv_from(&mut buf)?;
        tracing::info!(
            from = %client_addr,
            len = request_len,
            bytes = %hex_dump(&buf[..request_len]),
            "received from client"
        );

        self.relay_socket.send_to(&buf[..request_len], &self.server_addr)?;
        tracing::info!(
            to = %self.server_addr,
            len = request_len,
            bytes = %hex_dump(&buf[..request_len]),
            "forwarded to server"
        );

        // Server leg
        let (reply_len, reply_src) = self.relay_socket.recv_from(&mut buf)?;
        tracing::info!(
            from = %reply_src,
            len = reply_len,
            bytes = %hex_dump(&buf[..reply_len]),
            "received from server"
        );

        self.relay_socket.send_to(&buf[..reply_len], client_addr)?;
        tracing::info!(
            to = %client_addr,
            len = reply_len,
            bytes = %hex_dump(&buf[..reply_len]),
            "forwarded back to client"
        );

        Ok(())
    }
}
