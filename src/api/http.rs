//
//  duplo-client
//  api/http.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for the DuploCloud API
//!
//! The reqwest-backed [`Transport`] implementation. It owns the base URL,
//! the bearer token and the optional acting-user header, and turns every
//! response into either a JSON value or a classified [`ApiError`].
//!
//! ## Response Handling
//!
//! - Any status above 300 is a failure; the body becomes the error message
//! - An empty body, `null` or `""` decodes to [`Value::Null`]
//! - Anything else must be JSON
//!
//! There is no retry logic here.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

use super::common::{ApiError, HttpFailure};
use super::transport::Transport;
use crate::config::ClientConfig;

/// Header naming the user the token acts on behalf of.
pub const DUPLO_USER_HEADER: &str = "DuploUser";

/// Maximum length of a body written to the log.
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Truncates a body for logging and strips control characters.
fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };
    truncated.replace(|c: char| c.is_control(), "")
}

/// reqwest-backed transport for a single control plane host.
///
/// # Example
///
/// ```rust,no_run
/// use duplo_client::api::HttpTransport;
/// use duplo_client::config::ClientConfig;
///
/// let config = ClientConfig::new("https://acme.duplocloud.net", "secret");
/// let transport = HttpTransport::new(&config)?;
/// assert_eq!(transport.url("v3/admin/tenants"), "https://acme.duplocloud.net/v3/admin/tenants");
/// # Ok::<(), duplo_client::api::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    host: String,
}

impl HttpTransport {
    /// Builds a transport from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if host or token are missing or invalid,
    /// and [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| ApiError::Config("duplo_token contains invalid characters".to_string()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        if let Some(user) = config.user_account.as_deref().filter(|u| !u.is_empty()) {
            let value = HeaderValue::from_str(user)
                .map_err(|_| ApiError::Config("user account contains invalid characters".to_string()))?;
            let name = HeaderName::from_bytes(DUPLO_USER_HEADER.as_bytes())
                .map_err(|e| ApiError::Config(e.to_string()))?;
            headers.insert(name, value);
        }

        let http = Client::builder()
            .user_agent(format!("duplo-client/{}", crate::VERSION))
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            host: config.host.clone(),
        })
    }

    /// The normalized host this transport talks to.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Full URL for a control plane path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.host, path.trim_start_matches('/'))
    }

    async fn execute(
        &self,
        method: Method,
        label: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let operation = format!("{}API {}", method.as_str().to_lowercase(), label);
        let url = self.url(path);

        let mut request: RequestBuilder = self.http.request(method, &url);
        match &body {
            Some(body) => {
                let encoded = serde_json::to_string(body).map_err(|source| ApiError::Serialize {
                    operation: label.to_string(),
                    source,
                })?;
                tracing::trace!("{}: prepared request: {} <= ({})", operation, url, sanitize_for_log(&encoded));
                request = request.body(encoded);
            }
            None => tracing::trace!("{}: prepared request: {}", operation, url),
        }

        let response = request.send().await.map_err(|e| {
            tracing::debug!("{}: failed: {}", operation, e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or("").trim() == "application/json")
            .unwrap_or(false);
        let text = response.text().await.map_err(|e| {
            tracing::debug!("{}: failed to read body: {}", operation, e);
            ApiError::Network(e)
        })?;

        if status.as_u16() > 300 {
            let failure = HttpFailure::from_response(label, status, &url, path, &text, is_json);
            tracing::debug!("{}: failed: {}", operation, failure.message);
            return Err(ApiError::from_failure(failure));
        }

        tracing::trace!("{}: received response: {}", operation, sanitize_for_log(&text));

        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" || trimmed == "\"\"" {
            return Ok(Value::Null);
        }

        serde_json::from_str(trimmed).map_err(|source| {
            tracing::debug!("{}: cannot unmarshal response from JSON: {}", operation, source);
            ApiError::Deserialize {
                operation: label.to_string(),
                body: sanitize_for_log(&text),
                source,
            }
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_api(&self, label: &str, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::GET, label, path, None).await
    }

    async fn post_api(&self, label: &str, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        self.execute(Method::POST, label, path, body).await
    }

    async fn put_api(&self, label: &str, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        self.execute(Method::PUT, label, path, body).await
    }

    async fn delete_api(&self, label: &str, path: &str) -> Result<Value, ApiError> {
        self.execute(Method::DELETE, label, path, None).await
    }
}
