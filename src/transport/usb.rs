//! # USB Bulk-Endpoint Transport
//!
//! Sends bytes to a USB thermal printer through its first OUT endpoint.
//!
//! ## Device Resolution
//!
//! USB device handles cannot be persisted, so configuration stores the
//! derived description string instead (see [`crate::discovery`]):
//!
//! ```text
//! 1. 003-004: Acme ThermalPrinter 2000
//! ```
//!
//! At open time every connected device's description is re-derived and
//! compared against the stored identifier. A device that moved to a
//! different bus/address — or was unplugged — no longer matches and the
//! open fails with `DeviceNotFound`. There is no fallback to a different
//! device.
//!
//! ## Endpoint Selection
//!
//! The first interface of the active configuration is claimed (detaching
//! an active kernel driver first, as generic USB printers usually bind
//! `usblp`) and the first endpoint with direction OUT carries the data.
//!
//! ## Timeouts
//!
//! Bulk transfers are issued with libusb's unlimited timeout; the serial
//! transport is the one with a bounded I/O timeout.

use std::time::Duration;

use rusb::{Direction, GlobalContext};
use tracing::debug;

use super::Transport;
use crate::discovery;
use crate::error::ReciboError;

/// # USB Printer Transport
///
/// Holds an open device handle with one claimed interface and the
/// address of its OUT endpoint.
pub struct UsbTransport {
    handle: rusb::DeviceHandle<GlobalContext>,
    interface: u8,
    endpoint: u8,
    claimed: bool,
}

impl UsbTransport {
    /// Open the device whose derived description matches `identifier`.
    ///
    /// ## Errors
    ///
    /// - [`ReciboError::DeviceNotFound`] when no connected device matches
    ///   the identifier, or the matching device has no OUT endpoint
    /// - [`ReciboError::Transport`] when enumeration, open, kernel-driver
    ///   detach, or interface claim fails
    pub fn open(identifier: &str) -> Result<Self, ReciboError> {
        let target = discovery::usb_devices()?
            .into_iter()
            .find(|info| info.description() == identifier)
            .ok_or_else(|| ReciboError::DeviceNotFound(identifier.to_string()))?;

        let devices = rusb::devices()
            .map_err(|e| ReciboError::Transport(format!("USB enumeration failed: {}", e)))?;
        let device = devices
            .iter()
            .find(|d| d.bus_number() == target.bus && d.address() == target.address)
            .ok_or_else(|| ReciboError::DeviceNotFound(identifier.to_string()))?;

        let config = device.active_config_descriptor().map_err(|e| {
            ReciboError::Transport(format!("Failed to read USB configuration: {}", e))
        })?;

        let (interface, endpoint) = first_out_endpoint(&config)
            .ok_or_else(|| ReciboError::DeviceNotFound(format!("{} (no OUT endpoint)", identifier)))?;

        let handle = device
            .open()
            .map_err(|e| ReciboError::Transport(format!("Failed to open USB device: {}", e)))?;

        if handle.kernel_driver_active(interface).unwrap_or(false) {
            handle.detach_kernel_driver(interface).map_err(|e| {
                ReciboError::Transport(format!("Failed to detach kernel driver: {}", e))
            })?;
        }

        handle
            .claim_interface(interface)
            .map_err(|e| ReciboError::Transport(format!("Failed to claim interface: {}", e)))?;

        debug!(
            bus = target.bus,
            address = target.address,
            interface,
            endpoint = format_args!("{:#04x}", endpoint),
            "USB transport open"
        );

        Ok(Self {
            handle,
            interface,
            endpoint,
            claimed: true,
        })
    }
}

impl Transport for UsbTransport {
    /// Send one bulk transfer carrying `data`.
    fn write(&mut self, data: &[u8]) -> Result<(), ReciboError> {
        // Duration::ZERO is libusb's "no timeout"
        let written = self
            .handle
            .write_bulk(self.endpoint, data, Duration::ZERO)
            .map_err(|e| ReciboError::Transport(format!("USB write failed: {}", e)))?;

        if written != data.len() {
            return Err(ReciboError::Transport(format!(
                "Short USB write: {} of {} bytes",
                written,
                data.len()
            )));
        }
        Ok(())
    }

    fn dispose(&mut self) {
        if self.claimed {
            if let Err(e) = self.handle.release_interface(self.interface) {
                debug!("Failed to release USB interface: {}", e);
            }
            self.claimed = false;
        }
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Find the first OUT endpoint in the first interface, returning
/// `(interface_number, endpoint_address)`.
fn first_out_endpoint(config: &rusb::ConfigDescriptor) -> Option<(u8, u8)> {
    let interface = config.interfaces().next()?;
    let descriptor = interface.descriptors().next()?;
    descriptor
        .endpoint_descriptors()
        .find(|endpoint| endpoint.direction() == Direction::Out)
        .map(|endpoint| (descriptor.interface_number(), endpoint.address()))
}

// Transport tests against real hardware live outside the test suite;
// write ordering and trailer behavior are covered with a mock transport
// in the printer module.
