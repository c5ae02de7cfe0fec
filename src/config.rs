//! Configuration for filereq
//!
//! Centralized configuration with the protocol's well-known defaults.

/// Main configuration shared by the three processes
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// The relay host's client-facing address: the relay binds it, the
    /// client sends to it (well-known port 23)
    pub relay_addr: String,

    /// The server's address: the server binds it, the relay forwards to it
    /// (well-known port 69)
    pub server_addr: String,

    /// Receive deadline for the client and server sockets, in milliseconds;
    /// 0 means block forever (the relay always blocks forever)
    pub recv_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relay_addr: "127.0.0.1:23".to_string(),
            server_addr: "127.0.0.1:69".to_string(),
            recv_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the relay host's client-facing address
    pub fn relay_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.relay_addr = addr.into();
        self
    }

    /// Set the server's address
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the receive deadline (in milliseconds, 0 = block forever)
    pub fn recv_timeout_ms(mut self, ms: u64) -> Self {
        self.config.recv_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
