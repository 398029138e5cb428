//! # Device Discovery
//!
//! Thin pass-through over host USB and serial enumeration, plus the
//! canonical device-description derivation shared by the USB transport
//! and the configuration flow.
//!
//! A USB device handle cannot be persisted, so the description string is
//! what configuration stores and what the transport re-derives at print
//! time to find the same physical device again.

use tracing::debug;

use crate::error::ReciboError;

/// A connected USB device as seen by enumeration.
#[derive(Debug, Clone)]
pub struct UsbDeviceInfo {
    /// 1-based position in the enumeration order.
    pub index: usize,
    /// Bus number the device is attached to.
    pub bus: u8,
    /// Device address on that bus.
    pub address: u8,
    /// Manufacturer string, `"Unknown"` when unreadable.
    pub manufacturer: String,
    /// Product string, `"Unknown"` when unreadable.
    pub product: String,
}

impl UsbDeviceInfo {
    /// The canonical identifier string stored in configuration:
    /// `"{index}. {bus:03}-{address:03}: {manufacturer} {product}"`.
    pub fn description(&self) -> String {
        format!(
            "{}. {:03}-{:03}: {} {}",
            self.index, self.bus, self.address, self.manufacturer, self.product
        )
    }
}

/// Enumerate all connected USB devices.
///
/// Descriptor strings require opening the device; devices that cannot be
/// opened (permissions, detached drivers) still appear, with their
/// strings as `"Unknown"`.
pub fn usb_devices() -> Result<Vec<UsbDeviceInfo>, ReciboError> {
    let devices = rusb::devices()
        .map_err(|e| ReciboError::Transport(format!("USB enumeration failed: {}", e)))?;

    let mut infos = Vec::new();
    for (i, device) in devices.iter().enumerate() {
        let (manufacturer, product) = read_strings(&device);
        infos.push(UsbDeviceInfo {
            index: i + 1,
            bus: device.bus_number(),
            address: device.address(),
            manufacturer,
            product,
        });
    }

    debug!(count = infos.len(), "Enumerated USB devices");
    Ok(infos)
}

/// List the available serial port device paths.
pub fn serial_ports() -> Result<Vec<String>, ReciboError> {
    let ports = serialport::available_ports()
        .map_err(|e| ReciboError::Transport(format!("Serial enumeration failed: {}", e)))?;

    Ok(ports.into_iter().map(|port| port.port_name).collect())
}

/// Read manufacturer/product strings, falling back to `"Unknown"`.
fn read_strings(device: &rusb::Device<rusb::GlobalContext>) -> (String, String) {
    let unknown = || "Unknown".to_string();

    let descriptor = match device.device_descriptor() {
        Ok(descriptor) => descriptor,
        Err(_) => return (unknown(), unknown()),
    };
    let handle = match device.open() {
        Ok(handle) => handle,
        Err(_) => return (unknown(), unknown()),
    };

    let manufacturer = handle
        .read_manufacturer_string_ascii(&descriptor)
        .unwrap_or_else(|_| unknown());
    let product = handle
        .read_product_string_ascii(&descriptor)
        .unwrap_or_else(|_| unknown());

    (manufacturer, product)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_description_format() {
        let info = UsbDeviceInfo {
            index: 1,
            bus: 3,
            address: 4,
            manufacturer: "Foo".to_string(),
            product: "Bar".to_string(),
        };
        assert_eq!(info.description(), "1. 003-004: Foo Bar");
    }

    #[test]
    fn test_description_pads_bus_and_address() {
        let info = UsbDeviceInfo {
            index: 12,
            bus: 1,
            address: 120,
            manufacturer: "Unknown".to_string(),
            product: "Unknown".to_string(),
        };
        assert_eq!(info.description(), "12. 001-120: Unknown Unknown");
    }
}
