//! Request bodies sent to the API.

use serde::Serialize;

/// Body of `POST events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateEventRequest {
    pub name: String,
    /// Owner email.
    pub owner: String,
    pub class_id: String,
    pub description: Option<String>,
    pub date_start: String,
    pub date_end: String,
    pub include_chat: bool,
    pub include_video: bool,
    pub use_new_console: bool,
    /// Sent as `null` when no TA was given.
    pub tas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainees: Option<Vec<String>>,
}

/// Body of `PATCH events/{id}`.
///
/// Serializes to `{}` when there is nothing to change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModifyEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trainees: Option<Vec<String>>,
}

/// Body of `POST ondemand/{class_id}/enrollments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentRequest {
    pub email: String,
}
