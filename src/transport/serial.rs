//! # Serial Port Transport
//!
//! Sends bytes to a thermal printer on a serial port (or a USB-serial
//! adapter exposing one, e.g. `/dev/ttyUSB0`, `COM3`).
//!
//! The port is opened at a fixed 9600 baud with a 1 second read/write
//! timeout; every write blocks until the OS accepts the bytes or the
//! timeout expires. Closing is dropping the port handle.

use std::io::Write;
use std::time::Duration;

use tracing::debug;

use super::Transport;
use crate::error::ReciboError;

/// Fixed baud rate for printer serial ports.
pub const BAUD_RATE: u32 = 9600;

/// Read/write timeout applied to the port.
pub const IO_TIMEOUT: Duration = Duration::from_secs(1);

/// # Serial Printer Transport
///
/// Wraps an open serial port; `dispose` drops the port which closes it.
pub struct SerialTransport {
    port: Option<Box<dyn serialport::SerialPort>>,
    path: String,
}

impl SerialTransport {
    /// Open `path` at [`BAUD_RATE`] with [`IO_TIMEOUT`].
    ///
    /// ## Errors
    ///
    /// - [`ReciboError::DeviceNotFound`] when the port does not exist
    /// - [`ReciboError::Transport`] for other open failures (permissions,
    ///   port in use, unsupported settings)
    pub fn open(path: &str) -> Result<Self, ReciboError> {
        let port = serialport::new(path, BAUD_RATE)
            .timeout(IO_TIMEOUT)
            .open()
            .map_err(|e| match e.kind {
                serialport::ErrorKind::NoDevice => ReciboError::DeviceNotFound(path.to_string()),
                serialport::ErrorKind::Io(std::io::ErrorKind::NotFound) => {
                    ReciboError::DeviceNotFound(path.to_string())
                }
                _ => ReciboError::Transport(format!("Failed to open {}: {}", path, e)),
            })?;

        debug!(path, baud = BAUD_RATE, "Serial transport open");

        Ok(Self {
            port: Some(port),
            path: path.to_string(),
        })
    }
}

impl std::fmt::Debug for SerialTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialTransport")
            .field("path", &self.path)
            .field("open", &self.port.is_some())
            .finish()
    }
}

impl Transport for SerialTransport {
    /// Blocking write of all of `data` to the port.
    fn write(&mut self, data: &[u8]) -> Result<(), ReciboError> {
        let port = self
            .port
            .as_mut()
            .ok_or_else(|| ReciboError::Transport(format!("{} already closed", self.path)))?;

        port.write_all(data)
            .map_err(|e| ReciboError::Transport(format!("Serial write failed: {}", e)))?;
        Ok(())
    }

    fn dispose(&mut self) {
        // Dropping the port closes it; subsequent calls are no-ops.
        self.port.take();
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_port_is_device_not_found() {
        let err = SerialTransport::open("/dev/recibo-no-such-port").unwrap_err();
        assert!(matches!(err, ReciboError::DeviceNotFound(_)));
    }

    #[test]
    fn test_fixed_port_settings() {
        assert_eq!(BAUD_RATE, 9600);
        assert_eq!(IO_TIMEOUT, Duration::from_secs(1));
    }
}
