//
//  duplo-client
//  api/endpoint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Typed REST Endpoints
//!
//! Every resource wrapper in this crate is one [`Endpoint`] constant plus a
//! thin method. An endpoint knows its operation name, verb and path
//! template; the request and response shapes are carried in its type:
//!
//! ```rust
//! use duplo_client::api::endpoint::Endpoint;
//!
//! const GET_THING: Endpoint<(), serde_json::Value> =
//!     Endpoint::get("ThingGet", "v3/subscriptions/{tenant}/things/{id}");
//!
//! assert_eq!(GET_THING.path(&["t1", "r1"]), "v3/subscriptions/t1/things/r1");
//! assert_eq!(GET_THING.label(&["t1", "r1"]), "ThingGet(t1, r1)");
//! ```
//!
//! ## Response Shapes
//!
//! - `()` for endpoints that answer with no meaningful body (`null` or empty)
//! - `Option<T>` when the control plane may answer `null` for a missing object
//! - `Option<Vec<T>>` for lists, since an empty collection may come back as `null`

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::common::ApiError;
use super::transport::{Transport, Verb};

/// A control plane operation: name, verb and path template, typed by the
/// request body `Rq` and response body `Rp` it exchanges.
///
/// Placeholders in the template are `{...}` segments, substituted in order.
pub struct Endpoint<Rq: ?Sized, Rp> {
    name: &'static str,
    verb: Verb,
    template: &'static str,
    shape: PhantomData<fn(&Rq) -> Rp>,
}

impl<Rq: ?Sized, Rp> Endpoint<Rq, Rp> {
    const fn new(name: &'static str, verb: Verb, template: &'static str) -> Self {
        Self {
            name,
            verb,
            template,
            shape: PhantomData,
        }
    }

    pub const fn get(name: &'static str, template: &'static str) -> Self {
        Self::new(name, Verb::Get, template)
    }

    pub const fn post(name: &'static str, template: &'static str) -> Self {
        Self::new(name, Verb::Post, template)
    }

    pub const fn put(name: &'static str, template: &'static str) -> Self {
        Self::new(name, Verb::Put, template)
    }

    pub const fn delete(name: &'static str, template: &'static str) -> Self {
        Self::new(name, Verb::Delete, template)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Substitutes `args` into the template's placeholders, in order.
    ///
    /// Identifiers are inserted verbatim; ARNs keep their colons.
    pub fn path(&self, args: &[&str]) -> String {
        let mut out = String::with_capacity(self.template.len() + 32);
        let mut args = args.iter();
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            match args.next() {
                Some(arg) => out.push_str(arg),
                None => out.push_str(&rest[open..open + close + 1]),
            }
            rest = &rest[open + close + 1..];
        }
        out.push_str(rest);

        debug_assert!(args.next().is_none(), "too many path arguments for {}", self.template);
        out
    }

    /// Formats the operation label used in logs and errors: `Name(a, b)`.
    pub fn label(&self, args: &[&str]) -> String {
        format!("{}({})", self.name, args.join(", "))
    }
}

impl<Rq, Rp> Endpoint<Rq, Rp>
where
    Rq: Serialize + ?Sized,
    Rp: DeserializeOwned,
{
    /// Performs the call through `transport`.
    ///
    /// `path_args` fill the template; `label_args` describe the call for
    /// diagnostics and often include a name that is not part of the path.
    /// The transport's error is returned unchanged.
    pub async fn call(
        &self,
        transport: &dyn Transport,
        path_args: &[&str],
        label_args: &[&str],
        body: Option<&Rq>,
    ) -> Result<Rp, ApiError> {
        let label = self.label(label_args);
        let path = self.path(path_args);

        let body = match body {
            Some(rq) => Some(serde_json::to_value(rq).map_err(|source| ApiError::Serialize {
                operation: label.clone(),
                source,
            })?),
            None => None,
        };

        let value = transport.call(self.verb, &label, &path, body).await?;
        decode(&label, value)
    }
}

/// Decodes a response body, treating `""` like `null`.
pub(crate) fn decode<Rp: DeserializeOwned>(label: &str, value: Value) -> Result<Rp, ApiError> {
    let value = match value {
        Value::String(s) if s.is_empty() => Value::Null,
        other => other,
    };
    let body = value.to_string();
    serde_json::from_value(value).map_err(|source| ApiError::Deserialize {
        operation: label.to_string(),
        body,
        source,
    })
}

/// Resources that can be looked up by name in a list response.
pub trait Named {
    fn name(&self) -> &str;
}

/// Linear scan for the first element whose name matches exactly.
///
/// Returns `None` when nothing matches; this is not an error.
pub fn find_by_name<T: Named>(items: Vec<T>, name: &str) -> Option<T> {
    items.into_iter().find(|item| item.name() == name)
}
