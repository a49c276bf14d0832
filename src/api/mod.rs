//
//  duplo-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed wrappers over the DuploCloud control plane's REST API.
//!
//! ## Architecture
//!
//! - [`transport`]: The [`Transport`] seam; four JSON-in/JSON-out primitives
//! - [`http`]: [`HttpTransport`], the reqwest implementation
//! - [`endpoint`]: [`Endpoint`](endpoint::Endpoint), the generic typed call every wrapper uses
//! - [`client`]: [`DuploClient`], the facade resource modules extend
//! - [`aws`]: Amazon MQ brokers and configurations, SNS topics
//! - [`azure`]: Cosmos DB, MySQL, storage accounts and their sub-resources
//! - [`common`]: [`ApiError`] and shared value holders
//!
//! ## Usage
//!
//! ```rust,no_run
//! use duplo_client::api::DuploClient;
//! use duplo_client::api::azure::StorageBlobContainer;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DuploClient::from_env()?;
//!
//! for topic in client.sns_topic_list("tenant-id").await? {
//!     println!("{}", topic.name);
//! }
//!
//! let exists = client.storage_account_exists("tenant-id", "duploacct1").await?;
//! if exists {
//!     let blobs = client
//!         .storage_resource_list::<StorageBlobContainer>("tenant-id", "duploacct1")
//!         .await?;
//!     println!("{} containers", blobs.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Failures are [`ApiError`] variants classified by status:
//!
//! - `BadRequest`: 400
//! - `AuthFailed`: 401
//! - `Forbidden`: 403
//! - `NotFound`: 404
//! - `RateLimited`: 429
//! - `ServerError`: 5xx
//!
//! Lookups by name do not fail when nothing matches; they return `Ok(None)`.

/// The transport seam and HTTP verbs.
pub mod transport;

/// reqwest-backed transport.
pub mod http;

/// Generic typed REST call and list-filter helpers.
pub mod endpoint;

/// The [`DuploClient`] facade.
pub mod client;

/// AWS resources.
pub mod aws;

/// Azure resources.
pub mod azure;

/// Error type and shared value holders.
pub mod common;

pub use client::DuploClient;
pub use common::ApiError;
pub use http::HttpTransport;
pub use transport::{Transport, Verb};
