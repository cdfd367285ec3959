//! Strigo - command-line client for the Strigo training platform.
//!
//! Manages events (scheduled live training sessions) and classes (lab
//! templates), and enrolls students, through the platform's REST API.
//!
//! # Modules
//!
//! - [`api`] - HTTP client, response envelope validation, payload types
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - API root and credentials
//! - [`error`] - Error types and result aliases
//! - [`roster`] - Student list files
//! - [`ui`] - Console output and tables
//!
//! # Example
//!
//! ```
//! use strigo::api::validate;
//! use strigo::api::Enrollment;
//!
//! let body = r#"{"result":"success","data":{"email":"a@x.com","status":"enrolled"}}"#;
//! let enrollment: Enrollment = validate(body).unwrap();
//! assert_eq!(enrollment.status, "enrolled");
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod roster;
pub mod ui;

pub use error::{Result, StrigoError};
