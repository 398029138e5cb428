//! # Printer Transport Layer
//!
//! This module provides communication backends for sending bytes to
//! thermal printers.
//!
//! ## Available Transports
//!
//! - [`usb`]: USB bulk-endpoint writer (re-resolves the stored device
//!   description against live devices)
//! - [`serial`]: serial-port writer (9600 baud, 1 second timeout)
//!
//! Both expose the same observable semantics through the [`Transport`]
//! trait: ordered blocking writes and an idempotent [`Transport::dispose`]
//! that swallows close errors. The [`ReceiptPrinter`](crate::printer::ReceiptPrinter)
//! depends only on the trait.
//!
//! Handles are acquired per print call and disposed before the call
//! returns; nothing is pooled. Callers that print from multiple threads
//! against the same device must serialize those calls themselves.

use crate::error::ReciboError;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod serial;
pub mod usb;

pub use serial::SerialTransport;
pub use usb::UsbTransport;

/// A byte sink connected to a printer.
///
/// One write call maps to one OS-level transfer; callers control
/// chunking (one write per line, one per control sequence).
pub trait Transport {
    /// Write `data` to the device, blocking until the transfer completes.
    fn write(&mut self, data: &[u8]) -> Result<(), ReciboError>;

    /// Release the underlying device resources.
    ///
    /// Idempotent; errors during release are swallowed.
    fn dispose(&mut self);
}

/// Which transport the persisted configuration selects.
///
/// Serializes as the lowercase document values `"usb"` / `"serial"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// USB bulk-endpoint transport (the default).
    #[default]
    Usb,
    /// Serial-port transport.
    Serial,
}

impl std::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usb => write!(f, "usb"),
            Self::Serial => write!(f, "serial"),
        }
    }
}

/// Resolve the persisted transport kind and device identifier into a
/// live transport handle.
///
/// ## Errors
///
/// - [`ReciboError::DeviceNotFound`] when the identifier no longer
///   matches a connected device
/// - [`ReciboError::Transport`] for open failures at the OS/driver level
pub fn resolve(kind: TransportKind, identifier: &str) -> Result<Box<dyn Transport>, ReciboError> {
    match kind {
        TransportKind::Usb => Ok(Box::new(UsbTransport::open(identifier)?)),
        TransportKind::Serial => Ok(Box::new(SerialTransport::open(identifier)?)),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_to_document_values() {
        assert_eq!(serde_json::to_string(&TransportKind::Usb).unwrap(), "\"usb\"");
        assert_eq!(
            serde_json::to_string(&TransportKind::Serial).unwrap(),
            "\"serial\""
        );
    }

    #[test]
    fn test_kind_deserializes_from_document_values() {
        let kind: TransportKind = serde_json::from_str("\"serial\"").unwrap();
        assert_eq!(kind, TransportKind::Serial);
        assert!(serde_json::from_str::<TransportKind>("\"bluetooth\"").is_err());
    }

    #[test]
    fn test_kind_default_is_usb() {
        assert_eq!(TransportKind::default(), TransportKind::Usb);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransportKind::Usb.to_string(), "usb");
        assert_eq!(TransportKind::Serial.to_string(), "serial");
    }
}
