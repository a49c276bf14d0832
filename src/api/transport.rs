//
//  duplo-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! The transport seam between resource wrappers and HTTP.
//!
//! Resource wrappers never talk to reqwest directly. They hand a label, a
//! path and an optional JSON body to a [`Transport`], which performs the call
//! and returns the decoded JSON body. [`HttpTransport`](super::http::HttpTransport)
//! is the production implementation; tests substitute a recording stub.

use async_trait::async_trait;
use serde_json::Value;

use super::common::ApiError;

/// HTTP verb of a control plane call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether calls with this verb carry a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Low-level primitives every resource wrapper is built on.
///
/// Each method performs exactly one request. `label` identifies the
/// operation in logs and errors; `path` is relative to the control plane
/// host and has no leading slash. The returned value is the decoded JSON
/// body, or [`Value::Null`] when the body was empty.
///
/// Implementations must not retry: a failure is returned to the caller as is.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_api(&self, label: &str, path: &str) -> Result<Value, ApiError>;

    async fn post_api(&self, label: &str, path: &str, body: Option<Value>)
        -> Result<Value, ApiError>;

    async fn put_api(&self, label: &str, path: &str, body: Option<Value>)
        -> Result<Value, ApiError>;

    async fn delete_api(&self, label: &str, path: &str) -> Result<Value, ApiError>;

    /// Dispatches to the primitive matching `verb`. A body passed with a
    /// body-less verb is dropped.
    async fn call(
        &self,
        verb: Verb,
        label: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        match verb {
            Verb::Get => self.get_api(label, path).await,
            Verb::Post => self.post_api(label, path, body).await,
            Verb::Put => self.put_api(label, path, body).await,
            Verb::Delete => self.delete_api(label, path).await,
        }
    }
}
