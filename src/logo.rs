//! # Logo Collaborator
//!
//! Fetches and decodes a receipt logo from a URL.
//!
//! The decoded image is reported by its dimensions only; converting it
//! to printer raster data is intentionally not implemented, so a logo
//! today is logged rather than printed. The [`LogoSource`] trait keeps
//! the HTTP and decoding concerns injectable — the printer takes any
//! implementation, and tests substitute a stub.

use std::time::Duration;

use image::GenericImageView;

use crate::error::ReciboError;

/// HTTP fetch timeout for logo downloads.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A decoded logo, reduced to its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Capability for resolving a logo URL into a decoded image.
pub trait LogoSource {
    /// Fetch and decode the image at `url`.
    fn fetch(&self, url: &str) -> Result<LogoImage, ReciboError>;
}

/// # HTTP Logo Source
///
/// Blocking GET with a 10 second timeout; non-2xx responses and decode
/// failures map to [`ReciboError::Image`].
#[derive(Debug, Clone, Default)]
pub struct HttpLogoSource;

impl HttpLogoSource {
    /// Create a logo source with the default timeout.
    pub fn new() -> Self {
        Self
    }
}

impl LogoSource for HttpLogoSource {
    fn fetch(&self, url: &str) -> Result<LogoImage, ReciboError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("recibo/0.1")
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| ReciboError::Image(format!("HTTP client error: {}", e)))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| ReciboError::Image(format!("Failed to download {}: {}", url, e)))?;
        if !response.status().is_success() {
            return Err(ReciboError::Image(format!(
                "Failed to download {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| ReciboError::Image(format!("Failed to read image data: {}", e)))?;
        let image = image::load_from_memory(&bytes)
            .map_err(|e| ReciboError::Image(format!("Failed to decode image: {}", e)))?;

        let (width, height) = image.dimensions();
        Ok(LogoImage { width, height })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_url_is_image_error() {
        let source = HttpLogoSource::new();
        let err = source.fetch("http://127.0.0.1:1/logo.png").unwrap_err();
        assert!(matches!(err, ReciboError::Image(_)));
    }

    #[test]
    fn test_invalid_url_is_image_error() {
        let source = HttpLogoSource::new();
        let err = source.fetch("not a url").unwrap_err();
        assert!(matches!(err, ReciboError::Image(_)));
    }
}
