//
//  duplo-client
//  api/azure/storage_resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Storage Account Sub-resources
//!
//! Blob containers, queues, tables and file shares inside a storage account.
//! All four kinds share one REST shape under
//! `v3/subscriptions/{tenant}/azure/storageaccount/{account}/{segment}`:
//!
//! | Method | Verb | Path |
//! |--------|------|------|
//! | [`storage_resource_list`](DuploClient::storage_resource_list) | GET | `.../{segment}` |
//! | [`storage_resource_get`](DuploClient::storage_resource_get) | list + filter | |
//! | [`storage_resource_create`](DuploClient::storage_resource_create) | POST `{"Name": ...}` | `.../{segment}` |
//! | [`storage_resource_delete`](DuploClient::storage_resource_delete) | DELETE | `.../{segment}/{name}` |
//!
//! so the operations are generic over [`StorageResource`]:
//!
//! ```rust,no_run
//! use duplo_client::api::DuploClient;
//! use duplo_client::api::azure::StorageQueue;
//!
//! # async fn example(client: DuploClient) -> Result<(), duplo_client::api::ApiError> {
//! client.storage_resource_create::<StorageQueue>("tenant-id", "duploacct1", "jobs").await?;
//! if let Some(queue) = client.storage_resource_get::<StorageQueue>("tenant-id", "duploacct1", "jobs").await? {
//!     println!("{}", queue.uri);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::DuploClient;
use crate::api::common::{null_as_default, ApiError, NameOnly};
use crate::api::endpoint::{find_by_name, Endpoint, Named};

/// A kind of storage account sub-resource.
pub trait StorageResource: Named + DeserializeOwned {
    /// Path segment after the account name: `blob`, `queue`, `table` or `fileshare`.
    const SEGMENT: &'static str;
    /// Kind used in operation labels, e.g. `Queue` in `AzureStorageAccountQueueList`.
    const KIND: &'static str;

    const LIST: Endpoint<(), Option<Vec<Self>>>;
    const CREATE: Endpoint<NameOnly, Value>;
    const DELETE: Endpoint<(), ()>;
}

macro_rules! storage_resource {
    ($ty:ty, $segment:literal, $kind:literal) => {
        impl StorageResource for $ty {
            const SEGMENT: &'static str = $segment;
            const KIND: &'static str = $kind;

            const LIST: Endpoint<(), Option<Vec<Self>>> = Endpoint::get(
                concat!("AzureStorageAccount", $kind, "List"),
                concat!("v3/subscriptions/{tenant}/azure/storageaccount/{account}/", $segment),
            );
            const CREATE: Endpoint<NameOnly, Value> = Endpoint::post(
                concat!("AzureStorageAccount", $kind, "Create"),
                concat!("v3/subscriptions/{tenant}/azure/storageaccount/{account}/", $segment),
            );
            const DELETE: Endpoint<(), ()> = Endpoint::delete(
                concat!("AzureStorageAccount", $kind, "Delete"),
                concat!("v3/subscriptions/{tenant}/azure/storageaccount/{account}/", $segment, "/{name}"),
            );
        }

        impl Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

/// A blob container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageBlobContainer {
    #[serde(rename = "ServiceClient", deserialize_with = "null_as_default")]
    pub service_client: StorageServiceClient,
    #[serde(rename = "Uri", deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: StorageResourceProperties,
    #[serde(rename = "StorageUri", deserialize_with = "null_as_default")]
    pub storage_uri: StorageUri,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageQueue {
    #[serde(rename = "ServiceClient", deserialize_with = "null_as_default")]
    pub service_client: StorageServiceClient,
    #[serde(rename = "Uri", deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(rename = "StorageUri", deserialize_with = "null_as_default")]
    pub storage_uri: StorageUri,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub encode_message: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageTable {
    #[serde(rename = "ServiceClient", deserialize_with = "null_as_default")]
    pub service_client: StorageServiceClient,
    #[serde(rename = "Uri", deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(rename = "StorageUri", deserialize_with = "null_as_default")]
    pub storage_uri: StorageUri,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// An Azure Files share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageFileShare {
    #[serde(rename = "ServiceClient", deserialize_with = "null_as_default")]
    pub service_client: StorageServiceClient,
    #[serde(rename = "Uri", deserialize_with = "null_as_default")]
    pub uri: String,
    #[serde(rename = "StorageUri", deserialize_with = "null_as_default")]
    pub storage_uri: StorageUri,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub properties: StorageResourceProperties,
    pub snapshot_time: Option<DateTime<Utc>>,
}

storage_resource!(StorageBlobContainer, "blob", "Blob");
storage_resource!(StorageQueue, "queue", "Queue");
storage_resource!(StorageTable, "table", "Table");
storage_resource!(StorageFileShare, "fileshare", "FileShare");

/// Container and share properties. Lease fields are the SDK's numeric enums.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageResourceProperties {
    #[serde(rename = "ETag", deserialize_with = "null_as_default")]
    pub etag: String,
    pub last_modified: Option<DateTime<Utc>>,
    /// Share quota in GiB. Unused for blob containers.
    pub quota: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub lease_status: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub lease_state: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub lease_duration: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub public_access: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageUri {
    #[serde(rename = "PrimaryUri", deserialize_with = "null_as_default")]
    pub primary_uri: String,
    #[serde(rename = "SecondaryUri", deserialize_with = "null_as_default")]
    pub secondary_uri: String,
}

/// The storage SDK client the control plane used, as it serialized it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageServiceClient {
    #[serde(deserialize_with = "null_as_default")]
    pub authentication_scheme: i32,
    pub buffer_manager: Value,
    #[serde(deserialize_with = "null_as_default")]
    pub credentials: StorageCredentials,
    #[serde(rename = "BaseUri", deserialize_with = "null_as_default")]
    pub base_uri: String,
    #[serde(rename = "StorageUri", deserialize_with = "null_as_default")]
    pub storage_uri: StorageUri,
    pub default_request_options: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageCredentials {
    #[serde(rename = "SASToken")]
    pub sas_token: Value,
    #[serde(rename = "AccountName", deserialize_with = "null_as_default")]
    pub account_name: String,
    #[serde(rename = "KeyName")]
    pub key_name: Value,
    #[serde(rename = "IsAnonymous", deserialize_with = "null_as_default")]
    pub is_anonymous: bool,
    #[serde(rename = "IsSAS", deserialize_with = "null_as_default")]
    pub is_sas: bool,
    #[serde(rename = "IsSharedKey", deserialize_with = "null_as_default")]
    pub is_shared_key: bool,
    #[serde(rename = "SASSignature")]
    pub sas_signature: Value,
}

impl DuploClient {
    /// Lists every `R` in a storage account. A `null` body is an empty list.
    pub async fn storage_resource_list<R: StorageResource>(
        &self,
        tenant_id: &str,
        account: &str,
    ) -> Result<Vec<R>, ApiError> {
        let args = [tenant_id, account];
        let items = R::LIST.call(self.transport(), &args, &args, None).await?;
        Ok(items.unwrap_or_default())
    }

    /// Finds an `R` by exact name. `Ok(None)` when it does not exist.
    pub async fn storage_resource_get<R: StorageResource>(
        &self,
        tenant_id: &str,
        account: &str,
        name: &str,
    ) -> Result<Option<R>, ApiError> {
        let items = self.storage_resource_list::<R>(tenant_id, account).await?;
        Ok(find_by_name(items, name))
    }

    /// Creates an `R`. The control plane echoes the new object; it is not
    /// decoded. Use [`storage_resource_get`](Self::storage_resource_get) to read it.
    pub async fn storage_resource_create<R: StorageResource>(
        &self,
        tenant_id: &str,
        account: &str,
        name: &str,
    ) -> Result<(), ApiError> {
        let body = NameOnly { name: name.to_string() };
        R::CREATE
            .call(self.transport(), &[tenant_id, account], &[tenant_id, account, name], Some(&body))
            .await?;
        Ok(())
    }

    pub async fn storage_resource_delete<R: StorageResource>(
        &self,
        tenant_id: &str,
        account: &str,
        name: &str,
    ) -> Result<(), ApiError> {
        let args = [tenant_id, account, name];
        R::DELETE.call(self.transport(), &args, &args, None).await
    }
}
