//
//  duplo-client
//  config/hosts.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Host Utilities
//!
//! Normalization and validation of control plane host URLs.
//!
//! ```rust
//! use duplo_client::config::normalize_host;
//!
//! assert_eq!(normalize_host("  acme.duplocloud.net/ "), "https://acme.duplocloud.net");
//! assert_eq!(normalize_host("http://localhost:8080//"), "http://localhost:8080");
//! ```

use url::Url;

use crate::api::common::ApiError;

/// Normalizes a host for storage and URL building.
///
/// Trims whitespace, strips trailing slashes and adds `https://` when no
/// scheme is given. An empty input stays empty.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() {
        return String::new();
    }
    if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

/// Parses a normalized host into a URL, accepting only `http` and `https`.
pub fn host_url(host: &str) -> Result<Url, ApiError> {
    let url = Url::parse(host)
        .map_err(|e| ApiError::Config(format!("invalid duplo_host '{}': {}", host, e)))?;
    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(url),
        _ => Err(ApiError::Config(format!(
            "invalid duplo_host '{}': expected an http(s) URL",
            host
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_host() {
        assert_eq!(normalize_host("https://acme.duplocloud.net/"), "https://acme.duplocloud.net");
        assert_eq!(normalize_host("acme.duplocloud.net"), "https://acme.duplocloud.net");
        assert_eq!(normalize_host("   "), "");
    }

    #[test]
    fn test_host_url() {
        assert!(host_url("https://acme.duplocloud.net").is_ok());
        assert!(host_url("http://127.0.0.1:1234").is_ok());
        assert!(host_url("ftp://acme.duplocloud.net").is_err());
        assert!(host_url("not a url").is_err());
    }
}
