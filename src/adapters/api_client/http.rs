//! Shared REST client built on reqwest.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::Endpoints;
use crate::domain::{ApiConfig, AppError, Resource, delete_failure_message};

const DEFAULT_STATUS_MESSAGE: &str = "Request failed";

/// HTTP client for the escala REST API.
///
/// Every request carries `Authorization: Bearer <token>`. Failures keep the
/// server's own message. DELETE requests take a separate path that maps the
/// status code to a fixed message instead.
#[derive(Clone)]
pub struct HttpApiClient {
    token: String,
    endpoints: Endpoints,
    client: Client,
}

impl std::fmt::Debug for HttpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpApiClient")
            .field("base_url", self.endpoints.base())
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpApiClient {
    /// Create a client for the configured API using the given bearer token.
    pub fn new(token: String, config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::api(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self { token, endpoints: Endpoints::new(config.base_url.clone())?, client })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub(super) fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        self.execute(self.request(Method::GET, url))
    }

    pub(super) fn send<B, T>(&self, method: Method, url: Url, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(method, url).json(body))
    }

    /// DELETE without the shared response handling: the status code alone
    /// decides the error message.
    pub(super) fn delete(&self, url: Url, resource: Resource) -> Result<(), AppError> {
        log::debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url.clone())
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| AppError::api(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = delete_failure_message(resource, status.as_u16());
        log::warn!("DELETE {} failed with {}: {}", url, status.as_u16(), message);
        Err(AppError::DeleteFailed { resource, status: status.as_u16(), message })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        log::debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/json")
    }

    fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = request
            .send()
            .map_err(|e| AppError::api(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let url = response.url().clone();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return serde_json::from_str(&body_text).map_err(|e| {
                AppError::api(format!("Failed to parse response: {}", e), Some(status.as_u16()))
            });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else {
                status.canonical_reason().unwrap_or(DEFAULT_STATUS_MESSAGE).to_string()
            }
        });
        log::warn!("Request to {} failed with {}: {}", url, status.as_u16(), message);

        Err(AppError::Api { message, status: Some(status.as_u16()) })
    }
}

/// Pull the human-readable message out of an API error body. Validation
/// errors carry a list of messages, which are joined.
fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    let message = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .or_else(|| parsed.get("message"))?;

    match message {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|item| item.as_str()).collect();
            if parts.is_empty() { None } else { Some(parts.join("; ")) }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::Server) -> HttpApiClient {
        let config = ApiConfig { base_url: Url::parse(&server.url()).unwrap(), timeout_secs: 2 };
        HttpApiClient::new("secret-token".to_string(), &config).unwrap()
    }

    #[derive(Debug, serde::Deserialize)]
    struct Echo {
        ok: bool,
    }

    #[test]
    fn sends_bearer_token() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/absence-types/t-1")
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create();

        let client = client_for(&server);
        let echo: Echo = client.get(client.endpoints().absence_type("t-1")).unwrap();
        assert!(echo.ok);
        mock.assert();
    }

    #[test]
    fn error_message_is_passed_through() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/api/absence-types")
            .with_status(400)
            .with_body(
                r#"{"statusCode":400,"message":"Nome já cadastrado","error":"Bad Request"}"#,
            )
            .create();

        let client = client_for(&server);
        let err = client
            .send::<_, Echo>(
                Method::POST,
                client.endpoints().absence_types(),
                &serde_json::json!({}),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Nome já cadastrado");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn validation_message_lists_are_joined() {
        assert_eq!(
            extract_error_message(
                r#"{"message":["name should not be empty","color must be a hex color"]}"#
            ),
            Some("name should not be empty; color must be a hex color".to_string())
        );
        assert_eq!(
            extract_error_message(r#"{"error":{"message":"nested"}}"#),
            Some("nested".to_string())
        );
        assert_eq!(extract_error_message("not json"), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn plain_text_body_becomes_message() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", "/api/absence-types/x")
            .with_status(502)
            .with_body("upstream down")
            .create();

        let client = client_for(&server);
        let err = client.get::<Echo>(client.endpoints().absence_type("x")).unwrap_err();
        assert_eq!(err.to_string(), "upstream down");
    }

    #[test]
    fn empty_error_body_uses_status_reason() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/api/absence-types/x").with_status(503).create();

        let client = client_for(&server);
        let err = client.get::<Echo>(client.endpoints().absence_type("x")).unwrap_err();
        assert_eq!(err.to_string(), "Service Unavailable");
    }

    #[test]
    fn delete_maps_status_codes_and_ignores_body() {
        let cases = [
            (401, "Unauthorized: your session has expired or the token is invalid"),
            (404, "Absence type not found"),
            (409, "Absence type cannot be deleted because it is still in use"),
            (500, "Failed to delete absence type (HTTP 500)"),
        ];

        for (status, expected) in cases {
            let mut server = mockito::Server::new();
            let mock = server
                .mock("DELETE", "/api/absence-types/t-1")
                .match_header("authorization", "Bearer secret-token")
                .with_status(status)
                .with_body(r#"{"message":"server says something else"}"#)
                .expect(1)
                .create();

            let client = client_for(&server);
            let err = client
                .delete(client.endpoints().absence_type("t-1"), Resource::AbsenceType)
                .unwrap_err();
            assert_eq!(err.to_string(), expected);
            assert_eq!(err.status(), Some(status as u16));
            mock.assert();
        }
    }

    #[test]
    fn delete_accepts_no_content() {
        let mut server = mockito::Server::new();
        let _m = server.mock("DELETE", "/api/absence-types/t-1").with_status(204).create();

        let client = client_for(&server);
        let url = client.endpoints().absence_type("t-1");
        assert!(client.delete(url, Resource::AbsenceType).is_ok());
    }

    #[test]
    fn debug_redacts_token() {
        let server = mockito::Server::new();
        let client = client_for(&server);
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("[REDACTED]"));
    }
}
