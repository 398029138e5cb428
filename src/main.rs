//! # Recibo CLI
//!
//! Command-line interface for thermal receipt printing.
//!
//! ## Usage
//!
//! ```bash
//! # Discovery summary (devices, ports, current configuration)
//! recibo
//!
//! # List available devices
//! recibo list --type usb
//!
//! # Configure a USB printer by its list index
//! recibo config --type usb --device '1.'
//!
//! # Configure a serial printer by port path
//! recibo config --type serial --device /dev/ttyUSB0
//!
//! # Print a test receipt
//! recibo test
//!
//! # Print custom text
//! recibo print Hello World
//! ```
//!
//! Configuration lives in the current directory by default; pass
//! `--config-dir` to keep it elsewhere.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use recibo::{
    ConfigStore, ReceiptPrinter, ReciboError, TransportKind, discovery,
    notify::{ConsoleNotifier, Notifier},
};

/// Recibo - Thermal receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the printer configuration documents
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available devices
    List {
        /// Type of devices to list
        #[arg(long = "type", value_enum, default_value = "all")]
        kind: DeviceFilter,
    },

    /// Configure the printer device and transport
    Config {
        /// Printer type
        #[arg(long = "type", value_enum)]
        kind: TransportKind,

        /// Device identifier: a USB list entry (or its leading index,
        /// like "1.") or a serial port path
        #[arg(long)]
        device: Option<String>,
    },

    /// Print a test receipt
    Test,

    /// Print custom text as one receipt line
    Print {
        /// Logo image URL fetched before the text
        #[arg(long, value_name = "URL")]
        logo: Option<String>,

        /// Text to print (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Device listing filter for `list --type`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum DeviceFilter {
    Usb,
    Serial,
    All,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        ConsoleNotifier.alert("Error", &e.to_string());
    }
}

fn run() -> Result<(), ReciboError> {
    let cli = Cli::parse();
    let store = ConfigStore::new(cli.config_dir);

    match cli.command {
        Some(Commands::List { kind }) => list_devices(kind),
        Some(Commands::Config { kind, device }) => configure(&store, kind, device.as_deref()),
        Some(Commands::Test) => {
            println!("Printing test receipt...");
            let printer = ReceiptPrinter::new(store);
            printer.print_test_receipt()?;
            println!("Test receipt printed successfully");
            Ok(())
        }
        Some(Commands::Print { logo, text }) => {
            let printer = ReceiptPrinter::new(store);
            printer.print_receipt(&[text.join(" ")], logo.as_deref(), true)?;
            println!("Text printed successfully");
            Ok(())
        }
        None => summary(&store),
    }
}

/// `list` subcommand: print the requested device classes.
fn list_devices(filter: DeviceFilter) -> Result<(), ReciboError> {
    if matches!(filter, DeviceFilter::Usb | DeviceFilter::All) {
        println!("USB Devices:");
        for device in discovery::usb_devices()? {
            println!("  {}", device.description());
        }
    }

    if matches!(filter, DeviceFilter::Serial | DeviceFilter::All) {
        println!("\nSerial Ports:");
        for port in discovery::serial_ports()? {
            println!("  {}", port);
        }
    }

    Ok(())
}

/// `config` subcommand: show candidates and persist a selection.
fn configure(
    store: &ConfigStore,
    kind: TransportKind,
    device: Option<&str>,
) -> Result<(), ReciboError> {
    match kind {
        TransportKind::Usb => configure_usb(store, device),
        TransportKind::Serial => configure_serial(store, device),
    }
}

fn configure_usb(store: &ConfigStore, device: Option<&str>) -> Result<(), ReciboError> {
    let devices = discovery::usb_devices()?;
    if devices.is_empty() {
        println!("No USB devices found");
        return Ok(());
    }

    println!("Available USB devices:");
    for dev in &devices {
        println!("  {}", dev.description());
    }

    let Some(device) = device else {
        println!("\nSpecify device with --device '1. ...'");
        return Ok(());
    };

    // Select by the leading index ("1.", "2. ..."); the full stored
    // identifier is always the derived description.
    let index = device
        .split('.')
        .next()
        .and_then(|s| s.trim().parse::<usize>().ok());
    match index.and_then(|i| devices.get(i.checked_sub(1)?)) {
        Some(selected) => {
            let description = selected.description();
            store.save_device(&description)?;
            store.save_transport_kind(TransportKind::Usb)?;
            println!("Configured: {}", description);
        }
        None => println!("Invalid device. Use an index from the list, like '1.'"),
    }

    Ok(())
}

fn configure_serial(store: &ConfigStore, device: Option<&str>) -> Result<(), ReciboError> {
    let ports = discovery::serial_ports()?;
    if ports.is_empty() {
        println!("No serial ports found");
        return Ok(());
    }

    println!("Available serial ports:");
    for (i, port) in ports.iter().enumerate() {
        println!("  {}. {}", i + 1, port);
    }

    let Some(device) = device else {
        println!("\nSpecify port with --device COM3 (or /dev/ttyUSB0)");
        return Ok(());
    };

    if ports.iter().any(|port| port == device) {
        store.save_device(device)?;
        store.save_transport_kind(TransportKind::Serial)?;
        println!("Configured: {}", device);
    } else {
        println!("Invalid port. Available ports:");
        for port in &ports {
            println!("  {}", port);
        }
    }

    Ok(())
}

/// No-argument invocation: device summary, current configuration, and
/// usage hints.
fn summary(store: &ConfigStore) -> Result<(), ReciboError> {
    println!("Thermal Printer Utility");
    println!("{}", "=".repeat(50));

    match discovery::usb_devices() {
        Ok(devices) if !devices.is_empty() => {
            println!("Found {} USB device(s):", devices.len());
            for dev in &devices {
                println!("  {}", dev.description());
            }
        }
        Ok(_) => println!("No USB devices found"),
        Err(e) => println!("Error detecting USB devices: {}", e),
    }

    match discovery::serial_ports() {
        Ok(ports) if !ports.is_empty() => {
            println!("\nFound {} serial port(s):", ports.len());
            for port in &ports {
                println!("  {}", port);
            }
        }
        Ok(_) => println!("\nNo serial ports found"),
        Err(e) => println!("\nError detecting serial ports: {}", e),
    }

    match store.load_device() {
        Some(device) => {
            println!("\nCurrent printer: {} ({})", device, store.load_transport_kind());
        }
        None => {
            println!("\nNo printer configured. Configure one with:");
            println!("  recibo config --type usb --device '1. ...'");
            println!("  recibo config --type serial --device COM3");
        }
    }

    println!("\nCommands:");
    println!("  recibo list --type all");
    println!("  recibo test");
    println!("  recibo print 'Hello World'");

    Ok(())
}
