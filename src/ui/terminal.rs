//! Terminal UI.

use console::Term;
use std::io::Write;

use super::UserInterface;

/// Writes every line to stdout, unstyled.
pub struct TerminalUI {
    out: Term,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }
}
