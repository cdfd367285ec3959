//! Strigo REST API access.
//!
//! - [`client`] - Blocking HTTP client with one method per endpoint
//! - [`envelope`] - `{result, data}` response validation
//! - [`models`] - Response payload types
//! - [`requests`] - Request body types

pub mod client;
pub mod envelope;
pub mod models;
pub mod requests;

pub use client::ApiClient;
pub use envelope::validate;
pub use models::{Class, Enrollment, Event, LabResource, Member, Owner};
pub use requests::{CreateEventRequest, EnrollmentRequest, ModifyEventRequest};
