//! # Recibo - Thermal Receipt Printer Utility
//!
//! Recibo formats receipt text and streams it, together with ESC/POS
//! control sequences, to a thermal printer over USB or a serial port.
//! The selected device and transport kind persist as two small JSON
//! documents, so a configured printer keeps working across invocations.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recibo::{ConfigStore, ReceiptPrinter, format};
//! use recibo::transport::TransportKind;
//!
//! // Persist the printer selection (normally done once via the CLI)
//! let store = ConfigStore::new(".");
//! store.save_device("/dev/ttyUSB0")?;
//! store.save_transport_kind(TransportKind::Serial)?;
//!
//! // Build fixed-width lines and print them
//! let lines = vec![
//!     format::center(&format::bold("Corner Cafe"), format::LINE_WIDTH),
//!     format::center(&format::dashed_line(), format::LINE_WIDTH),
//!     format::item_line("Espresso", 2, 3.50, &format::ItemWidths::default()),
//! ];
//!
//! let printer = ReceiptPrinter::new(store);
//! printer.print_receipt(&lines, None, true)?;
//! # Ok::<(), recibo::ReciboError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`format`] | Fixed-width line formatting with control markers |
//! | [`protocol`] | ESC/POS control byte sequences |
//! | [`transport`] | USB and serial communication backends |
//! | [`config`] | Persisted device/transport configuration |
//! | [`discovery`] | USB/serial device enumeration |
//! | [`printer`] | Receipt printing orchestration |
//! | [`receipt`] | Receipt content types and templates |
//! | [`logo`] | Logo fetch/decode collaborator |
//! | [`notify`] | Operator alert capability |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Generic ESC/POS thermal receipt printers exposing either a USB bulk
//! OUT endpoint or a serial port. Tested command subset: emphasis,
//! double-height characters, paper feed/cut, buzzer.

pub mod config;
pub mod discovery;
pub mod error;
pub mod format;
pub mod logo;
pub mod notify;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod transport;

// Re-exports for convenience
pub use config::ConfigStore;
pub use error::ReciboError;
pub use printer::{ReceiptPrinter, TrailerPolicy};
pub use transport::{Transport, TransportKind};
