//! # Receipt Printer
//!
//! Orchestrates one print call end to end:
//!
//! ```text
//! load config -> resolve transport -> [logo?] -> lines -> trailer -> dispose
//! ```
//!
//! The pipeline is linear — no retries, no branching. The transport is
//! acquired per call and disposed before the call returns on every exit
//! path after resolution, so a failed write never leaks a claimed USB
//! interface or an open port.
//!
//! Printing is synchronous and blocking throughout. Concurrent calls
//! against the same configured device are not made safe here; callers
//! must serialize them.

use tracing::{info, warn};

use crate::config::ConfigStore;
use crate::error::ReciboError;
use crate::logo::{HttpLogoSource, LogoSource};
use crate::protocol::commands;
use crate::receipt;
use crate::transport::{self, Transport};

/// What gets written after the receipt lines.
///
/// Feed count and cut are fixed by the paper path (the cutter sits above
/// the print head); only the buzzer is caller-selected.
#[derive(Debug, Clone, Copy)]
pub struct TrailerPolicy {
    /// Line feeds written before the cut.
    pub feed_lines: usize,
    /// Whether to cut the paper.
    pub cut: bool,
    /// Whether to sound the buzzer after the cut.
    pub buzzer: bool,
}

impl TrailerPolicy {
    /// The standard trailer: 5 feed lines, always cut, buzzer as given.
    pub fn new(buzzer: bool) -> Self {
        Self {
            feed_lines: 5,
            cut: true,
            buzzer,
        }
    }
}

/// # Receipt Printer
///
/// Owns the configuration store and the logo collaborator; resolves a
/// fresh transport for every print call.
///
/// ## Example
///
/// ```no_run
/// use recibo::{ConfigStore, ReceiptPrinter, format};
///
/// let printer = ReceiptPrinter::new(ConfigStore::new("."));
/// let lines = vec![format::center("Hello", format::LINE_WIDTH)];
/// printer.print_receipt(&lines, None, true)?;
/// # Ok::<(), recibo::ReciboError>(())
/// ```
pub struct ReceiptPrinter {
    config: ConfigStore,
    logo_source: Box<dyn LogoSource>,
}

impl ReceiptPrinter {
    /// Create a printer with the HTTP logo source.
    pub fn new(config: ConfigStore) -> Self {
        Self::with_logo_source(config, Box::new(HttpLogoSource::new()))
    }

    /// Create a printer with an injected logo source.
    pub fn with_logo_source(config: ConfigStore, logo_source: Box<dyn LogoSource>) -> Self {
        Self {
            config,
            logo_source,
        }
    }

    /// Print `lines` in order, then the trailer.
    ///
    /// A logo URL is best-effort: fetch or decode failures are logged
    /// and the rest of the receipt still prints.
    ///
    /// ## Errors
    ///
    /// - [`ReciboError::NotConfigured`] when no device is saved — no
    ///   transport is touched in that case
    /// - [`ReciboError::DeviceNotFound`] / [`ReciboError::Transport`]
    ///   from transport resolution or writes
    pub fn print_receipt(
        &self,
        lines: &[String],
        logo_url: Option<&str>,
        buzzer: bool,
    ) -> Result<(), ReciboError> {
        let identifier = self.config.load_device().ok_or(ReciboError::NotConfigured)?;
        let kind = self.config.load_transport_kind();

        info!(%kind, %identifier, lines = lines.len(), "Printing receipt");

        let mut transport = transport::resolve(kind, &identifier)?;
        let result = self.write_receipt(
            transport.as_mut(),
            lines,
            logo_url,
            &TrailerPolicy::new(buzzer),
        );
        transport.dispose();
        result
    }

    /// Print the canned test receipt with the buzzer on.
    pub fn print_test_receipt(&self) -> Result<(), ReciboError> {
        self.print_receipt(&receipt::test_receipt_lines(), None, true)
    }

    /// Write logo, lines, and trailer to an already-resolved transport.
    fn write_receipt(
        &self,
        transport: &mut dyn Transport,
        lines: &[String],
        logo_url: Option<&str>,
        trailer: &TrailerPolicy,
    ) -> Result<(), ReciboError> {
        if let Some(url) = logo_url {
            match self.logo_source.fetch(url) {
                Ok(logo) => {
                    // Raster conversion is not implemented; the decoded
                    // logo is reported, not printed.
                    info!(url, width = logo.width, height = logo.height, "Logo decoded");
                }
                Err(e) => warn!(url, "Skipping logo: {}", e),
            }
        }

        for line in lines {
            transport.write(format!("{}\n", line).as_bytes())?;
        }

        for _ in 0..trailer.feed_lines {
            transport.write(&[commands::LF])?;
        }
        if trailer.cut {
            transport.write(&commands::CUT)?;
            transport.write(&[commands::LF])?;
        }
        if trailer.buzzer {
            transport.write(&commands::BUZZER)?;
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
