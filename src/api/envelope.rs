//! Response envelope validation.
//!
//! Every API response is wrapped as `{ "result": ..., "data": ... }`. The
//! envelope is checked before the payload is decoded, so a failed request
//! never reaches field access.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, StrigoError};

/// `result` value reported by the API on failure.
pub const FAILURE: &str = "failure";

#[derive(Debug, Deserialize)]
struct Envelope {
    result: String,
    #[serde(default)]
    data: Value,
}

/// Validate a raw response body and decode its `data` payload.
///
/// Returns [`StrigoError::Api`] carrying the raw body when the envelope
/// reports failure or the body is not an envelope at all. The HTTP status
/// code is not consulted.
pub fn validate<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::warn!("Response is not a JSON envelope: {}", e);
            return Err(StrigoError::Api {
                body: body.to_string(),
            });
        }
    };

    if envelope.result == FAILURE {
        tracing::debug!("API reported failure");
        return Err(StrigoError::Api {
            body: body.to_string(),
        });
    }

    Ok(serde_json::from_value(envelope.data)?)
}
