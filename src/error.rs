//! Error types for filereq
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::protocol::RejectionReason;

/// Result type alias using FileReqError
pub type Result<T> = std::result::Result<T, FileReqError>;

/// Unified error type for filereq operations
#[derive(Debug, Error)]
pub enum FileReqError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("request rejected: {0}")]
    Decode(#[from] RejectionReason),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("timed out waiting for {0}")]
    Timeout(String),
}
