//
//  duplo-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the DuploCloud control plane
//!
//! This module provides the error type shared by every resource wrapper and the
//! small generic value holders the control plane uses across resource kinds.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`HttpFailure`] - Details of a non-success HTTP response
//! - [`StringValue`] - The `{"Value": "..."}` envelope AWS uses for enums
//! - [`KeyStringValue`] - A `{"Key": ..., "Value": ...}` pair
//! - [`NameOnly`] - A `{"Name": ...}` body
//!
//! # Example
//!
//! ```rust
//! use duplo_client::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthFailed(failure)) => println!("Check your token: {}", failure.message),
//!         Err(e) if e.is_not_found() => println!("Resource is gone"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Suffix appended to 400/404 messages from the older, non-`v3` endpoints,
/// which rarely explain that the object is simply missing.
pub const VERIFY_OBJECT_SUFFIX: &str = ". Please verify object exists in duplocloud.";

/// Details of a non-success HTTP response.
///
/// Every status-classified [`ApiError`] variant carries one of these.
///
/// # Fields
///
/// * `operation` - The operation label, e.g. `DuploAWSMQBrokerGet(t1, b-1)`
/// * `status` - The HTTP status code
/// * `url` - The full request URL
/// * `message` - Composed message: `url: ..., status: ..., message: ...`
/// * `response` - The parsed JSON error body, always holding a `Message` key
#[derive(Debug, Clone)]
pub struct HttpFailure {
    pub operation: String,
    pub status: u16,
    pub url: String,
    pub message: String,
    pub response: Map<String, Value>,
}

impl HttpFailure {
    /// Builds a failure from a raw error response.
    ///
    /// JSON bodies are parsed into `response`; any body that is not a JSON
    /// object is kept only as text. When the parsed body has no `Message`
    /// key, the composed message is stored under it so callers can always
    /// read `response["Message"]`.
    pub fn from_response(
        operation: &str,
        status: StatusCode,
        url: &str,
        path: &str,
        body: &str,
        is_json: bool,
    ) -> Self {
        let code = status.as_u16();
        let mut raw = body.to_string();
        if !path.starts_with("v3/") && (code == 400 || code == 404) {
            raw.push_str(VERIFY_OBJECT_SUFFIX);
        }

        let mut response = Map::new();
        if is_json {
            match serde_json::from_str::<Value>(body) {
                Ok(Value::Object(map)) => response = map,
                Ok(_) => {}
                Err(e) => {
                    tracing::trace!("{}: failed to parse error response JSON: {}, {}", operation, e, body)
                }
            }
        }

        let message = format!("url: {}, status: {}, message: {}", url, code, raw);
        response
            .entry("Message")
            .or_insert_with(|| Value::String(message.clone()));

        Self {
            operation: operation.to_string(),
            status: code,
            url: url.to_string(),
            message,
            response,
        }
    }
}

impl std::fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.operation, self.message)
    }
}

/// Unified error type for all DuploCloud API operations.
///
/// HTTP failures are classified by status code the same way for every
/// resource. The wrappers add no error kinds of their own: whatever the
/// transport returns is handed back unchanged.
///
/// # Variants
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `BadRequest` | Invalid request parameters | 400 |
/// | `AuthFailed` | Invalid or expired token | 401 |
/// | `Forbidden` | Insufficient permissions | 403 |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `RateLimited` | Too many requests | 429 |
/// | `ServerError` | Control plane failure | 5xx |
/// | `Http` | Any other unexpected status | other |
/// | `Network` | Connection or timeout failure | N/A |
/// | `Serialize` | Request body could not be encoded | N/A |
/// | `Deserialize` | Response body did not match the expected shape | N/A |
/// | `Config` | Client could not be configured | N/A |
#[derive(Error, Debug)]
pub enum ApiError {
    /// The control plane rejected the request as malformed (400).
    #[error("Bad request: {0}")]
    BadRequest(HttpFailure),

    /// The bearer token is missing, invalid or expired (401).
    #[error("Authentication failed: {0}")]
    AuthFailed(HttpFailure),

    /// The token does not grant access to this tenant or resource (403).
    #[error("Permission denied: {0}")]
    Forbidden(HttpFailure),

    /// The resource or endpoint does not exist (404).
    #[error("Resource not found: {0}")]
    NotFound(HttpFailure),

    /// API rate limit has been exceeded (429).
    #[error("Rate limit exceeded: {0}")]
    RateLimited(HttpFailure),

    /// The control plane failed while handling the request (5xx).
    #[error("Server error: {0}")]
    ServerError(HttpFailure),

    /// Any other non-success or unexpected status.
    #[error("HTTP error: {0}")]
    Http(HttpFailure),

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request body could not be encoded as JSON.
    #[error("{operation}: cannot marshal request to JSON: {source}")]
    Serialize {
        operation: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("{operation}: cannot unmarshal response from JSON: {source} (body: {body})")]
    Deserialize {
        operation: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The client could not be configured.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Classifies a failed response by its status code.
    pub fn from_failure(failure: HttpFailure) -> Self {
        match failure.status {
            400 => Self::BadRequest(failure),
            401 => Self::AuthFailed(failure),
            403 => Self::Forbidden(failure),
            404 => Self::NotFound(failure),
            429 => Self::RateLimited(failure),
            500..=599 => Self::ServerError(failure),
            _ => Self::Http(failure),
        }
    }

    /// Returns the HTTP failure details, if this error came from a response.
    pub fn failure(&self) -> Option<&HttpFailure> {
        match self {
            Self::BadRequest(f)
            | Self::AuthFailed(f)
            | Self::Forbidden(f)
            | Self::NotFound(f)
            | Self::RateLimited(f)
            | Self::ServerError(f)
            | Self::Http(f) => Some(f),
            _ => None,
        }
    }

    /// The HTTP status, or `None` when no response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            other => other.failure().map(|f| f.status),
        }
    }

    /// The request URL, when known.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Network(e) => e.url().map(|u| u.as_str()),
            other => other.failure().map(|f| f.url.as_str()),
        }
    }

    /// The parsed error body, when the control plane returned one.
    pub fn response(&self) -> Option<&Map<String, Value>> {
        self.failure().map(|f| &f.response)
    }

    /// Whether the endpoint may simply not exist on this control plane
    /// version. Older deployments answer unknown routes with 404 or 500.
    pub fn possible_missing_api(&self) -> bool {
        matches!(self.status(), Some(404) | Some(500))
    }

    /// Whether the control plane reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// The `{"Value": "..."}` envelope AWS wraps its enum fields in.
///
/// Kept as a nested object rather than flattened into a plain string so the
/// response shapes mirror the upstream wire contract.
///
/// # Example
///
/// ```rust
/// use duplo_client::api::common::StringValue;
///
/// let state: StringValue = serde_json::from_str(r#"{"Value": "RUNNING"}"#).unwrap();
/// assert_eq!(state.value, "RUNNING");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringValue {
    #[serde(
        rename = "Value",
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub value: String,
}

impl StringValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Generic key/value holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStringValue {
    #[serde(rename = "Key", default, deserialize_with = "null_as_default")]
    pub key: String,
    #[serde(
        rename = "Value",
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub value: String,
}

/// Generic name holder, used as a create body for named sub-resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOnly {
    #[serde(rename = "Name")]
    pub name: String,
}

/// Deserializes `null` as the field type's default.
///
/// The control plane serializes unset .NET members as `null` where the
/// Rust shape has a plain value. Use with `#[serde(deserialize_with = ...)]`
/// on a struct that also has `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
