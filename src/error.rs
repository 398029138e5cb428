//! # Error Types
//!
//! This module defines error types used throughout the recibo library.

use thiserror::Error;

/// Main error type for recibo operations
#[derive(Debug, Error)]
pub enum ReciboError {
    /// No printer has been configured yet
    #[error("No printer configured")]
    NotConfigured,

    /// The stored identifier no longer matches a live device
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// Transport-level errors (open, write, close)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image fetch or decode error (non-fatal for receipt printing)
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper (config documents)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
