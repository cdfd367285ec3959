//! API credentials loaded from the environment.
//!
//! The platform authenticates with a bearer token built from the
//! organization id and an API key: `Bearer <org_id>:<api_key>`.

use std::collections::HashMap;

use crate::error::{Result, StrigoError};

/// Environment variable holding the organization id.
pub const ORG_ID_VAR: &str = "STRIGO_ORG_ID";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "STRIGO_API_KEY";

/// Organization id and API key for the Strigo API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    org_id: String,
    api_key: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(org_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            org_id: org_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Load credentials from the process environment.
    pub fn from_env() -> Result<Self> {
        let env_vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_env_map(&env_vars)
    }

    /// Load credentials from a map of environment variables.
    ///
    /// Both variables are checked before failing, so the error lists every
    /// missing one. Empty values count as missing.
    pub fn from_env_map(env_vars: &HashMap<String, String>) -> Result<Self> {
        let lookup = |name: &str| env_vars.get(name).filter(|v| !v.is_empty()).cloned();

        let org_id = lookup(ORG_ID_VAR);
        let api_key = lookup(API_KEY_VAR);

        match (org_id, api_key) {
            (Some(org_id), Some(api_key)) => Ok(Self { org_id, api_key }),
            (org_id, api_key) => {
                let mut vars = Vec::new();
                if org_id.is_none() {
                    vars.push(ORG_ID_VAR);
                }
                if api_key.is_none() {
                    vars.push(API_KEY_VAR);
                }
                Err(StrigoError::MissingCredentials { vars })
            }
        }
    }

    /// The composite `org_id:api_key` token.
    pub fn bearer_token(&self) -> String {
        format!("{}:{}", self.org_id, self.api_key)
    }

    /// The full `Authorization` header value.
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.bearer_token())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("org_id", &self.org_id)
            .field("api_key", &"****")
            .finish()
    }
}
