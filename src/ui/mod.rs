//! Console output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout
//! - [`MockUI`] capturing output for tests
//! - [`Table`] for fixed-width listings

pub mod mock;
pub mod table;
pub mod terminal;

pub use mock::MockUI;
pub use table::Table;
pub use terminal::TerminalUI;

/// Trait for user interface interactions.
///
/// Command results and diagnostics share one stream, so a single
/// line-oriented method covers both. This trait allows capturing output
/// in tests.
pub trait UserInterface {
    /// Print a line of output.
    fn message(&mut self, msg: &str);
}
