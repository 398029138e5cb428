//! # Config Store
//!
//! Persists the selected printer device and transport kind as two
//! independent JSON documents inside a caller-supplied directory:
//!
//! | File | Contents |
//! |------|----------|
//! | `printer.json` | `{"printer": "<identifier>"}` |
//! | `type_printer.json` | `{"type_printer": "usb"\|"serial"}` |
//!
//! Each document is readable and writable on its own; partial state
//! (device saved, transport kind absent) is valid and resolves through
//! the usb default. Unreadable or malformed documents behave as absent
//! and are logged, never propagated as a crash.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ReciboError;
use crate::transport::TransportKind;

/// File name of the device-config document.
pub const DEVICE_CONFIG_FILE: &str = "printer.json";

/// File name of the transport-kind document.
pub const TYPE_CONFIG_FILE: &str = "type_printer.json";

/// The device-config document: `{"printer": <identifier>}`.
#[derive(Debug, Serialize, Deserialize)]
struct DeviceDocument {
    printer: String,
}

/// The transport-kind document: `{"type_printer": "usb"|"serial"}`.
#[derive(Debug, Serialize, Deserialize)]
struct KindDocument {
    type_printer: TransportKind,
}

/// # Config Store
///
/// Reads and writes the two printer configuration documents.
///
/// The directory is supplied at construction; callers decide where
/// configuration lives (the CLI defaults to the current directory).
///
/// ## Example
///
/// ```no_run
/// use recibo::config::ConfigStore;
/// use recibo::transport::TransportKind;
///
/// let store = ConfigStore::new(".");
/// store.save_device("/dev/ttyUSB0")?;
/// store.save_transport_kind(TransportKind::Serial)?;
///
/// assert_eq!(store.load_device().as_deref(), Some("/dev/ttyUSB0"));
/// assert_eq!(store.load_transport_kind(), TransportKind::Serial);
/// # Ok::<(), recibo::ReciboError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at `dir`.
    ///
    /// The directory is not created or touched until a save operation.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the device-config document.
    pub fn device_path(&self) -> PathBuf {
        self.dir.join(DEVICE_CONFIG_FILE)
    }

    /// Path of the transport-kind document.
    pub fn kind_path(&self) -> PathBuf {
        self.dir.join(TYPE_CONFIG_FILE)
    }

    /// Overwrite the device-config document with `{"printer": identifier}`.
    pub fn save_device(&self, identifier: &str) -> Result<(), ReciboError> {
        let doc = DeviceDocument {
            printer: identifier.to_string(),
        };
        write_document(&self.device_path(), &doc)
    }

    /// Overwrite the transport-kind document with `{"type_printer": kind}`.
    pub fn save_transport_kind(&self, kind: TransportKind) -> Result<(), ReciboError> {
        let doc = KindDocument { type_printer: kind };
        write_document(&self.kind_path(), &doc)
    }

    /// Load the stored device identifier.
    ///
    /// Returns `None` when the document is absent. Unreadable or
    /// malformed documents are logged and also treated as absent.
    pub fn load_device(&self) -> Option<String> {
        read_document::<DeviceDocument>(&self.device_path()).map(|doc| doc.printer)
    }

    /// Load the stored transport kind, defaulting to USB when the
    /// document is absent or unreadable.
    pub fn load_transport_kind(&self) -> TransportKind {
        read_document::<KindDocument>(&self.kind_path())
            .map(|doc| doc.type_printer)
            .unwrap_or_default()
    }
}

/// Serialize `doc` as pretty JSON and overwrite `path`.
fn write_document<T: Serialize>(path: &Path, doc: &T) -> Result<(), ReciboError> {
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| ReciboError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    fs::write(path, json)?;
    Ok(())
}

/// Read and deserialize a document, mapping every failure to `None`.
fn read_document<T: for<'de> Deserialize<'de>>(path: &Path) -> Option<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&contents) {
        Ok(doc) => Some(doc),
        Err(e) => {
            warn!("Malformed config document {}: {}", path.display(), e);
            None
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
