//! Payload types returned by the API.
//!
//! Only fields the client reads or prints are modeled. Fields that the API
//! may omit or send as `null` decode to their default.

use serde::{Deserialize, Deserializer};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Availability value marking an event as joinable with a token.
pub const PUBLIC: &str = "public";

/// Owner of an event or class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Owner {
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// A scheduled live training session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: Owner,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class_id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_start: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_end: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub include_chat: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub include_video: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub use_new_console: bool,
    /// Member ids of the event's teaching assistants.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tas: Vec<String>,
    /// Trainee emails.
    #[serde(default, deserialize_with = "null_as_default")]
    pub trainees: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub availability: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_link: String,
}

impl Event {
    /// Whether the event is public.
    pub fn is_public(&self) -> bool {
        self.availability == PUBLIC
    }

    /// The join token, or `n/a` for non-public events.
    pub fn display_token(&self) -> &str {
        if self.is_public() {
            self.token.as_deref().unwrap_or_default()
        } else {
            "n/a"
        }
    }
}

/// A lab/course template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Class {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub owner: Owner,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resources: Vec<LabResource>,
}

/// A lab machine attached to a class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LabResource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub instance_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_user: String,
}

/// An organization member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Member {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// Result of an on-demand enrollment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Enrollment {
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}
