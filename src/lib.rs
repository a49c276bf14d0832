//
//  duplo-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # DuploCloud Client Library
//!
//! A typed client for the DuploCloud control plane, creating, reading,
//! updating and deleting AWS and Azure managed resources through its REST API.
//!
//! ## Overview
//!
//! Every operation is a method on [`DuploClient`] that performs exactly one
//! HTTP call: it serializes a request struct, sends it to a fixed path under
//! the tenant, and deserializes the response. Lookups by name list the
//! resources once and scan for an exact match. There is no caching, retrying
//! or polling.
//!
//! ## Resources
//!
//! | Provider | Resource | Module |
//! |----------|----------|--------|
//! | AWS | MQ brokers and configurations | [`api::aws::mq`] |
//! | AWS | SNS topics | [`api::aws::sns`] |
//! | Azure | Cosmos DB accounts | [`api::azure::cosmos`] |
//! | Azure | MySQL servers and databases | [`api::azure::mysql`] |
//! | Azure | Storage accounts | [`api::azure::storage_account`] |
//! | Azure | Blob containers, queues, tables, file shares | [`api::azure::storage_resources`] |
//!
//! ## Module Structure
//!
//! - [`api`]: Transport, typed endpoints, the client facade and resource wrappers
//! - [`config`]: Host, token and timeout settings from file and environment
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use duplo_client::{ClientConfig, DuploClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! duplo_client::init_logging();
//!
//! let config = ClientConfig::new("https://acme.duplocloud.net", "token").with_user_account("ops@acme.io");
//! let client = DuploClient::new(&config)?;
//!
//! match client.mysql_server_get("tenant-id", "orders-db").await? {
//!     Some(server) => println!("{} runs MySQL {}", server.name, server.version),
//!     None => println!("orders-db does not exist"),
//! }
//! # Ok(())
//! # }
//! ```

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// API client, transport and resource wrappers.
pub mod api;

/// Client configuration.
///
/// Settings live in a platform-specific `config.toml`:
/// - Linux: `~/.config/duplo/config.toml`
/// - macOS: `~/Library/Application Support/duplo/config.toml`
/// - Windows: `%APPDATA%\duplo\config.toml`
///
/// `DUPLO_HOST`, `DUPLO_TOKEN`, `DUPLO_USER` and `DUPLO_TIMEOUT` override it.
pub mod config;

pub use api::{ApiError, DuploClient};
pub use config::ClientConfig;

/// Library version, sent in the `User-Agent` header.
///
/// ```rust
/// use duplo_client::VERSION;
///
/// println!("duplo-client {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter used by [`init_logging`].
pub const LOG_ENV: &str = "DUPLO_DEBUG";

/// Installs a `tracing` subscriber for applications that have none.
///
/// The filter comes from `DUPLO_DEBUG` (e.g. `duplo_client=trace`) and
/// defaults to `warn`. Calling it twice, or after another subscriber was
/// installed, is a no-op.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}
