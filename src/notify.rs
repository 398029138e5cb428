//! # Operator Notifications
//!
//! Surfaces print outcomes to whoever is standing at the terminal.
//!
//! The core never prints to the console itself; operations return
//! `Result` and the caller picks a [`Notifier`]. A desktop-alert
//! implementation can slot in behind the same trait; without one,
//! reporting degrades to the console.

/// Capability for alerting the operator.
pub trait Notifier {
    /// Show `message` under a short `title`.
    fn alert(&self, title: &str, message: &str);
}

/// Console-only notifier, writing to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, title: &str, message: &str) {
        eprintln!("{}: {}", title, message);
    }
}

// ============================================================================
// TESTS
// ============================================================================
