//
//  duplo-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # DuploCloud API Client
//!
//! [`DuploClient`] is the entry point for every resource operation. It holds
//! a shared [`Transport`] and nothing else: no caches, no state, no retries.
//! The resource modules under [`aws`](super::aws) and [`azure`](super::azure)
//! each add an `impl DuploClient` block with their wrappers.

use std::sync::Arc;

use super::common::ApiError;
use super::http::HttpTransport;
use super::transport::Transport;
use crate::config::ClientConfig;

/// Typed client for the DuploCloud control plane.
///
/// Cloning is cheap; clones share the transport.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use duplo_client::api::DuploClient;
/// use duplo_client::config::ClientConfig;
///
/// // From explicit settings
/// let client = DuploClient::new(&ClientConfig::new("https://acme.duplocloud.net", "secret"))?;
///
/// // From config file and DUPLO_* environment variables
/// let client = DuploClient::from_env()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Calling the API
///
/// ```rust,no_run
/// use duplo_client::api::DuploClient;
///
/// # async fn example(client: DuploClient) -> Result<(), duplo_client::api::ApiError> {
/// match client.mq_broker_get("tenant-id", "b-1234").await? {
///     Some(broker) => println!("{} is {}", broker.broker_name, broker.broker_state.value),
///     None => println!("no such broker"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DuploClient {
    transport: Arc<dyn Transport>,
}

impl DuploClient {
    /// Creates a client talking HTTP to the configured host.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the configuration is incomplete.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::with_transport(Arc::new(HttpTransport::new(config)?)))
    }

    /// Creates a client from the config file and `DUPLO_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::load()?;
        Ok(Self::new(&config)?)
    }

    /// Creates a client over any transport, e.g. a test stub.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The transport every call goes through.
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }
}

impl std::fmt::Debug for DuploClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DuploClient").finish_non_exhaustive()
    }
}
