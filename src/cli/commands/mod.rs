//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. API commands borrow a shared
//! [`ApiClient`](crate::api::ApiClient) and issue their requests strictly
//! one after another.

pub mod completions;
pub mod create_event;
pub mod delete_event;
pub mod dispatcher;
pub mod enroll;
pub mod get_class;
pub mod get_event;
pub mod list_classes;
pub mod list_events;
pub mod modify_event;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
