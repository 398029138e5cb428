//! # Receipt Pipeline Tests
//!
//! End-to-end tests over the public API: configuration round trips,
//! formatter contracts, the canned test receipt, and the failure paths
//! that don't require a physical printer.
//!
//! Transport write ordering (trailer bytes, one write per line) is
//! covered with a mock transport in the printer module's unit tests;
//! real-device printing is exercised manually.

use recibo::{ConfigStore, ReceiptPrinter, ReciboError, TransportKind, format, receipt};
use tempfile::tempdir;

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn config_round_trip_survives_store_reconstruction() {
    let dir = tempdir().unwrap();

    let store = ConfigStore::new(dir.path());
    store.save_device("/dev/ttyUSB0").unwrap();
    store.save_transport_kind(TransportKind::Serial).unwrap();
    drop(store);

    // A fresh store over the same directory sees the same documents
    let store = ConfigStore::new(dir.path());
    assert_eq!(store.load_device().as_deref(), Some("/dev/ttyUSB0"));
    assert_eq!(store.load_transport_kind(), TransportKind::Serial);
}

#[test]
fn fresh_directory_has_no_device_and_usb_default() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path());

    assert_eq!(store.load_device(), None);
    assert_eq!(store.load_transport_kind(), TransportKind::Usb);
}

// ============================================================================
// FORMATTER CONTRACTS
// ============================================================================

#[test]
fn alignment_pads_to_exact_width_and_never_truncates() {
    for (out, text) in [
        (format::center("abc", 45), "abc"),
        (format::left_align("abc", 45), "abc"),
        (format::right_align("abc", 45), "abc"),
    ] {
        assert_eq!(out.chars().count(), 45);
        assert!(out.contains(text));
    }

    let long = "x".repeat(60);
    assert_eq!(format::center(&long, 45), long);
    assert_eq!(format::left_align(&long, 45), long);
    assert_eq!(format::right_align(&long, 45), long);
}

#[test]
fn item_line_matches_spec_example() {
    let line = format::item_line("Widget", 3, 2.50, &format::ItemWidths::default());
    assert_eq!(line.len(), 36);
    assert!(line.starts_with("Widget         "));
    assert!(line.ends_with("       7.5"));
}

#[test]
fn holder_line_is_all_dashes() {
    let line = format::holder_line('-', 44);
    assert_eq!(line.len(), 44);
    assert!(line.chars().all(|c| c == '-'));
}

// ============================================================================
// PRINT FAILURE PATHS
// ============================================================================

#[test]
fn print_without_configuration_fails_with_not_configured() {
    let dir = tempdir().unwrap();
    let printer = ReceiptPrinter::new(ConfigStore::new(dir.path()));

    let result = printer.print_receipt(&["hello".to_string()], None, false);
    assert!(matches!(result, Err(ReciboError::NotConfigured)));
}

#[test]
fn stale_serial_identifier_fails_with_device_not_found() {
    let dir = tempdir().unwrap();
    let store = ConfigStore::new(dir.path());

    // A port that no longer exists must fail; never fall back to
    // whichever device happens to be connected.
    store.save_device("/dev/recibo-gone").unwrap();
    store.save_transport_kind(TransportKind::Serial).unwrap();

    let printer = ReceiptPrinter::new(store);
    let result = printer.print_test_receipt();
    assert!(matches!(result, Err(ReciboError::DeviceNotFound(_))));
}

// ============================================================================
// TEST RECEIPT TEMPLATE
// ============================================================================

#[test]
fn test_receipt_total_is_55() {
    let total: f64 = receipt::sample_items()
        .iter()
        .map(receipt::ReceiptItem::extended_price)
        .sum();
    assert_eq!(total, 55.0);

    let joined = receipt::test_receipt_lines().join("\n");
    assert!(joined.contains("Total"));
    assert!(joined.contains("55"));
}

#[test]
fn test_receipt_lines_are_printer_ready() {
    let lines = receipt::test_receipt_lines();

    for line in &lines {
        // Centered to the receipt width; no line needs further wrapping
        assert!(line.chars().count() >= format::LINE_WIDTH);
        assert!(!line.contains('\n'));
    }

    // Bold markers survive UTF-8 encoding as raw bytes
    let header = lines
        .iter()
        .find(|line| line.contains("Your Company Name"))
        .unwrap();
    let bytes = header.as_bytes();
    assert!(bytes.windows(3).any(|w| w == [0x1B, 0x45, 0x01]));
    assert!(bytes.windows(3).any(|w| w == [0x1B, 0x45, 0x00]));
}
