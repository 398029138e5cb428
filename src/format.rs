//! # Line Formatter
//!
//! Pure, stateless transformations that turn receipt content into
//! fixed-width lines ready for a 45-column thermal printer.
//!
//! ## Control Markers
//!
//! [`bold`] and [`large`] wrap text in raw ESC/POS sequences embedded one
//! character per byte. Every control byte is below 0x80, so re-encoding
//! the finished line as UTF-8 at the transport boundary reproduces the
//! exact bytes the printer expects. Width math counts `chars`, which for
//! these markers matches the on-wire byte count.
//!
//! ## No Wrapping
//!
//! Alignment pads up to the target width and leaves longer text unchanged.
//! Lines wider than the printer's physical width must be pre-wrapped by
//! the caller.

use crate::protocol::commands;

/// Default receipt line width in characters.
pub const LINE_WIDTH: usize = 45;

/// Default holder (divider) line width in characters.
pub const HOLDER_WIDTH: usize = 44;

/// Field widths for [`item_line`].
#[derive(Debug, Clone, Copy)]
pub struct ItemWidths {
    /// Item name field (left-justified)
    pub name: usize,
    /// Quantity field (left-justified)
    pub qty: usize,
    /// Unit price field (left-justified)
    pub price: usize,
    /// Extended price field (right-justified)
    pub total: usize,
}

impl Default for ItemWidths {
    fn default() -> Self {
        Self {
            name: 15,
            qty: 4,
            price: 7,
            total: 10,
        }
    }
}

impl ItemWidths {
    /// Total line width produced by [`item_line`] with these fields.
    pub fn line_width(&self) -> usize {
        self.name + self.qty + self.price + self.total
    }
}

/// Decode a control sequence into a string, one char per byte.
fn control(seq: &[u8]) -> String {
    seq.iter().map(|&b| b as char).collect()
}

/// Wrap text in bold on/off markers.
pub fn bold(text: &str) -> String {
    format!(
        "{}{}{}",
        control(&commands::BOLD_ON),
        text,
        control(&commands::BOLD_OFF)
    )
}

/// Wrap text in large (double-height) on/off markers.
pub fn large(text: &str) -> String {
    format!(
        "{}{}{}",
        control(&commands::LARGE_ON),
        text,
        control(&commands::LARGE_OFF)
    )
}

/// Center text within `width` characters.
///
/// Text already `width` or wider is returned unchanged. Odd padding puts
/// the extra space on the right.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}

/// Left-align text within `width` characters (pad right).
pub fn left_align(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - len))
}

/// Right-align text within `width` characters (pad left).
pub fn right_align(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(width - len), text)
}

/// Repeat `ch` for `length` characters.
pub fn holder_line(ch: char, length: usize) -> String {
    std::iter::repeat(ch).take(length).collect()
}

/// A dashed holder line at the default width: `-` × 44.
pub fn dashed_line() -> String {
    holder_line('-', HOLDER_WIDTH)
}

/// An asterisk holder line at the default width: `*` × 44.
pub fn asterisk_line() -> String {
    holder_line('*', HOLDER_WIDTH)
}

/// Format a receipt item as four fixed-width fields with no separator:
/// name, quantity, and unit price left-justified, extended price
/// (qty × price) right-justified.
///
/// Numbers use their natural decimal representation; no currency rounding
/// is applied. Negative quantities or prices are not rejected here.
pub fn item_line(name: &str, qty: i64, price: f64, widths: &ItemWidths) -> String {
    let extended = qty as f64 * price;
    format!(
        "{}{}{}{}",
        left_align(name, widths.name),
        left_align(&qty.to_string(), widths.qty),
        left_align(&price.to_string(), widths.price),
        right_align(&extended.to_string(), widths.total)
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_center_pads_to_exact_width() {
        let out = center("ab", 5);
        assert_eq!(out, " ab  ");
        assert_eq!(out.chars().count(), 5);
    }

    #[test]
    fn test_center_at_or_over_width_unchanged() {
        assert_eq!(center("hello", 5), "hello");
        assert_eq!(center("hello there", 5), "hello there");
    }

    #[test]
    fn test_left_align() {
        assert_eq!(left_align("ab", 5), "ab   ");
        assert_eq!(left_align("hello", 3), "hello");
    }

    #[test]
    fn test_right_align() {
        assert_eq!(right_align("ab", 5), "   ab");
        assert_eq!(right_align("hello", 3), "hello");
    }

    #[test]
    fn test_aligned_contains_text_contiguously() {
        for out in [center("xy", 10), left_align("xy", 10), right_align("xy", 10)] {
            assert_eq!(out.chars().count(), 10);
            assert!(out.contains("xy"));
        }
    }

    #[test]
    fn test_holder_line() {
        let line = holder_line('-', 44);
        assert_eq!(line.len(), 44);
        assert!(line.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_default_holder_lines() {
        assert_eq!(dashed_line(), "-".repeat(44));
        assert_eq!(asterisk_line(), "*".repeat(44));
    }

    #[test]
    fn test_bold_wraps_with_markers() {
        let out = bold("hi");
        assert!(out.starts_with("\u{1B}E\u{01}"));
        assert!(out.ends_with("\u{1B}E\u{00}"));
        assert_eq!(out.chars().count(), 2 + 6);
    }

    #[test]
    fn test_large_wraps_with_markers() {
        let out = large("hi");
        assert!(out.starts_with("\u{1B}!\u{10}"));
        assert!(out.ends_with("\u{1B}!\u{00}"));
    }

    #[test]
    fn test_markers_survive_utf8_round_trip() {
        // The transport re-encodes lines as UTF-8; the raw control bytes
        // must come back out unchanged.
        let bytes = bold("X").into_bytes();
        assert_eq!(bytes, vec![0x1B, 0x45, 0x01, b'X', 0x1B, 0x45, 0x00]);
    }

    #[test]
    fn test_item_line_default_widths() {
        let widths = ItemWidths::default();
        let line = item_line("Widget", 3, 2.50, &widths);
        assert_eq!(line.chars().count(), 36);
        assert_eq!(widths.line_width(), 36);
        // Name left-justified in the first 15 chars
        assert_eq!(&line[..15], "Widget         ");
        // Extended price right-justified in the last 10
        assert_eq!(&line[26..], "       7.5");
    }

    #[test]
    fn test_item_line_natural_decimal() {
        let line = item_line("Item", 2, 10.0, &ItemWidths::default());
        // qty then unit price, left-justified
        assert_eq!(&line[15..19], "2   ");
        assert_eq!(&line[19..26], "10     ");
        assert!(line.ends_with("        20"));
    }

    #[test]
    fn test_item_line_negative_not_rejected() {
        let line = item_line("Refund", -1, 5.0, &ItemWidths::default());
        assert!(line.ends_with("        -5"));
    }
}
