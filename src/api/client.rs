//! Blocking HTTP client for the Strigo API.
//!
//! Requests are issued one at a time. Every response body goes through
//! [`validate`] before the payload is handed back to the caller.

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, Url};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{Result, StrigoError};

use super::envelope::validate;
use super::models::{Class, Enrollment, Event, Member};
use super::requests::{CreateEventRequest, EnrollmentRequest, ModifyEventRequest};

/// Client for the Strigo REST API.
///
/// # Example
///
/// ```no_run
/// use strigo::api::ApiClient;
/// use strigo::config::{ApiConfig, Credentials, DEFAULT_BASE_URL};
///
/// let config = ApiConfig::new(DEFAULT_BASE_URL, Credentials::new("org", "key")).unwrap();
/// let client = ApiClient::new(config).unwrap();
/// for event in client.list_events().unwrap() {
///     println!("{} {}", event.name, event.status);
/// }
/// ```
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client using the HTTP library's default timeouts.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("strigo-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the URL for an endpoint below the API root.
    ///
    /// Each segment is percent-encoded, so ids cannot escape their path position.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|_| StrigoError::InvalidBaseUrl {
                url: self.config.base_url().to_string(),
                message: "URL cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `POST events`
    pub fn create_event(&self, body: &CreateEventRequest) -> Result<Event> {
        self.send_json(Method::POST, &["events"], body)
    }

    /// `PATCH events/{event_id}`
    pub fn modify_event(&self, event_id: &str, body: &ModifyEventRequest) -> Result<()> {
        self.send_json::<_, IgnoredAny>(Method::PATCH, &["events", event_id], body)?;
        Ok(())
    }

    /// `GET events`
    pub fn list_events(&self) -> Result<Vec<Event>> {
        self.send(Method::GET, &["events"])
    }

    /// `GET events/{event_id}`
    pub fn get_event(&self, event_id: &str) -> Result<Event> {
        self.send(Method::GET, &["events", event_id])
    }

    /// `DELETE events/{event_id}`
    pub fn delete_event(&self, event_id: &str) -> Result<()> {
        self.send::<IgnoredAny>(Method::DELETE, &["events", event_id])?;
        Ok(())
    }

    /// `POST ondemand/{class_id}/enrollments`
    pub fn enroll(&self, class_id: &str, email: &str) -> Result<Enrollment> {
        let body = EnrollmentRequest {
            email: email.to_string(),
        };
        self.send_json(Method::POST, &["ondemand", class_id, "enrollments"], &body)
    }

    /// `GET classes`
    pub fn list_classes(&self) -> Result<Vec<Class>> {
        self.send(Method::GET, &["classes"])
    }

    /// `GET classes/{class_id}`
    pub fn get_class(&self, class_id: &str) -> Result<Class> {
        self.send(Method::GET, &["classes", class_id])
    }

    /// `GET members`
    pub fn list_members(&self) -> Result<Vec<Member>> {
        self.send(Method::GET, &["members"])
    }

    fn send<T: DeserializeOwned>(&self, method: Method, segments: &[&str]) -> Result<T> {
        let request = self.request(method, segments)?;
        self.execute(request)
    }

    fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T> {
        let request = self.request(method, segments)?.json(body);
        self.execute(request)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!("{} {}", method, url);

        Ok(self.client.request(method, url).header(
            AUTHORIZATION,
            self.config.credentials().authorization_header(),
        ))
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send()?;
        let status = response.status();
        let body = response.text()?;
        tracing::debug!("HTTP {} ({} bytes)", status, body.len());

        validate(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client_for(server: &MockServer) -> ApiClient {
        let config =
            ApiConfig::new(&server.url("/api/v1/"), Credentials::new("org1", "key1")).unwrap();
        ApiClient::new(config).unwrap()
    }

    #[test]
    fn endpoint_joins_below_base() {
        let config = ApiConfig::new(
            "https://app.strigo.io/api/v1/",
            Credentials::new("org1", "key1"),
        )
        .unwrap();
        let client = ApiClient::new(config).unwrap();

        let url = client.endpoint(&["ondemand", "cl1", "enrollments"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://app.strigo.io/api/v1/ondemand/cl1/enrollments"
        );
    }

    #[test]
    fn endpoint_encodes_ids() {
        let config =
            ApiConfig::new("https://app.strigo.io/api/v1", Credentials::new("o", "k")).unwrap();
        let client = ApiClient::new(config).unwrap();

        let url = client.endpoint(&["events", "a/b"]).unwrap();
        assert_eq!(url.as_str(), "https://app.strigo.io/api/v1/events/a%2Fb");
    }

    #[test]
    fn sends_bearer_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/classes")
                .header("Authorization", "Bearer org1:key1");
            then.status(200)
                .json_body(json!({"result": "success", "data": []}));
        });

        let classes = client_for(&server).list_classes().unwrap();

        assert!(classes.is_empty());
        mock.assert();
    }

    #[test]
    fn failure_envelope_is_error_even_with_200() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/events/missing");
            then.status(200)
                .json_body(json!({"result": "failure", "data": "Event not found"}));
        });

        let err = client_for(&server).get_event("missing").unwrap_err();
        match err {
            StrigoError::Api { body } => assert!(body.contains("Event not found")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn success_envelope_is_accepted_with_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/api/v1/events/ev1");
            then.status(202)
                .json_body(json!({"result": "success", "data": null}));
        });

        client_for(&server).delete_event("ev1").unwrap();
    }

    #[test]
    fn patch_sends_empty_object() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PATCH)
                .path("/api/v1/events/ev1")
                .json_body(json!({}));
            then.status(200)
                .json_body(json!({"result": "success", "data": {"id": "ev1"}}));
        });

        client_for(&server)
            .modify_event("ev1", &ModifyEventRequest::default())
            .unwrap();
        mock.assert();
    }

    #[test]
    fn enroll_posts_email() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/v1/ondemand/cl1/enrollments")
                .json_body(json!({"email": "a@x.com"}));
            then.status(200).json_body(
                json!({"result": "success", "data": {"email": "a@x.com", "status": "enrolled"}}),
            );
        });

        let enrollment = client_for(&server).enroll("cl1", "a@x.com").unwrap();

        assert_eq!(enrollment.status, "enrolled");
        mock.assert();
    }
}
