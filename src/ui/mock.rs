//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures every line
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use strigo::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Kubernetes 101: https://app.strigo.io/event/ev1");
//!
//! assert_eq!(ui.messages().len(), 1);
//! assert!(ui.has_message("Kubernetes 101"));
//! ```

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured output lines.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Check if any output line contains `msg`.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }
}
