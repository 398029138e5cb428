//! # Receipt Builders
//!
//! Receipt content types and the canned test receipt.
//!
//! Receipts are ordered sequences of pre-formatted lines built with the
//! [`format`](crate::format) module; nothing here touches a device. The
//! test receipt exercises every formatter feature (bold markers, holder
//! lines, the four-field item line) against three fixed sample items.

use chrono::Local;

use crate::format::{self, ItemWidths};

/// A purchased item, used only to build display lines.
///
/// Not persisted anywhere; quantities and prices are validated by the
/// caller, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem {
    /// Item name as printed.
    pub name: String,
    /// Units purchased.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: f64,
}

impl ReceiptItem {
    /// Create an item.
    pub fn new(name: &str, quantity: u32, unit_price: f64) -> Self {
        Self {
            name: name.to_string(),
            quantity,
            unit_price,
        }
    }

    /// Quantity × unit price.
    pub fn extended_price(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }

    /// Render this item as a fixed-width receipt line.
    pub fn to_line(&self, widths: &ItemWidths) -> String {
        format::item_line(&self.name, self.quantity as i64, self.unit_price, widths)
    }
}

/// The three fixed sample items on the test receipt.
pub fn sample_items() -> Vec<ReceiptItem> {
    vec![
        ReceiptItem::new("Item 1", 2, 10.00),
        ReceiptItem::new("Item 2", 1, 20.00),
        ReceiptItem::new("Item 3", 3, 5.00),
    ]
}

/// Build the canned test receipt: header block, the three sample items,
/// computed total, and footer — every line centered to the receipt width.
///
/// The date line is stamped with today's date.
pub fn test_receipt_lines() -> Vec<String> {
    let width = format::LINE_WIDTH;
    let widths = ItemWidths::default();
    let items = sample_items();

    let mut lines = vec![
        format::center(&format::dashed_line(), width),
        format::center(&format::bold("Your Company Name"), width),
        format::center("123 Main St, City", width),
        format::center("Phone: 123-456-7890", width),
        format::center(
            &format::bold(&format!("Date: {}", Local::now().format("%Y-%m-%d"))),
            width,
        ),
        format::center(&format::dashed_line(), width),
        format::center("Item          Qty  Price     Ext Price", width),
        format::center(&format::dashed_line(), width),
    ];

    for item in &items {
        lines.push(format::center(&item.to_line(&widths), width));
    }

    let total: f64 = items.iter().map(ReceiptItem::extended_price).sum();
    lines.extend([
        format::center(&format::dashed_line(), width),
        format::center(
            &format!(
                "{}{}",
                format::left_align("Total", 10),
                format::right_align(&total.to_string(), 8)
            ),
            width,
        ),
        format::center(&format::dashed_line(), width),
        format::center("Thank you for your business!", width),
        format::center(&format::dashed_line(), width),
    ]);

    lines
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extended_price() {
        let item = ReceiptItem::new("Widget", 3, 2.50);
        assert_eq!(item.extended_price(), 7.5);
    }

    #[test]
    fn test_sample_items_total_is_55() {
        let total: f64 = sample_items().iter().map(ReceiptItem::extended_price).sum();
        assert_eq!(total, 55.0);
    }

    #[test]
    fn test_receipt_is_not_empty() {
        let lines = test_receipt_lines();
        assert!(lines.len() > 10);
    }

    #[test]
    fn test_receipt_contains_header_and_footer() {
        let joined = test_receipt_lines().join("\n");
        assert!(joined.contains("Your Company Name"));
        assert!(joined.contains("Thank you for your business!"));
    }

    #[test]
    fn test_receipt_contains_all_items_and_total() {
        let joined = test_receipt_lines().join("\n");
        assert!(joined.contains("Item 1"));
        assert!(joined.contains("Item 2"));
        assert!(joined.contains("Item 3"));
        assert!(joined.contains("Total"));
        // 2*10 + 1*20 + 3*5
        assert!(joined.contains("55"));
    }

    #[test]
    fn test_receipt_lines_fill_the_width() {
        // Every line is centered to the receipt width; bold lines carry
        // six extra marker chars on top.
        for line in test_receipt_lines() {
            assert!(line.chars().count() >= crate::format::LINE_WIDTH);
        }
    }

    #[test]
    fn test_receipt_stamps_current_date() {
        let today = Local::now().format("%Y-%m-%d").to_string();
        let joined = test_receipt_lines().join("\n");
        assert!(joined.contains(&format!("Date: {}", today)));
    }
}
