//
//  duplo-client
//  api/azure/storage_account.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Azure storage accounts.
//!
//! Accounts are created and deleted by name alone; the control plane picks
//! SKU and settings. Both calls are POSTs on the older routes whose body
//! is the literal `null`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::DuploClient;
use crate::api::common::{null_as_default, ApiError, KeyStringValue};
use crate::api::endpoint::{find_by_name, Endpoint, Named};

/// A storage account, in the flattened ARM shape the control plane returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub sku: StorageSku,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(
        rename = "properties.provisioningState",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub provisioning_state: String,

    #[serde(rename = "properties.primaryEndpoints", deserialize_with = "null_as_default")]
    pub primary_endpoints: StorageEndpoints,

    #[serde(
        rename = "properties.primaryLocation",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub primary_location: String,

    #[serde(
        rename = "properties.statusOfPrimary",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub status_of_primary: String,

    #[serde(rename = "properties.creationTime", skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<DateTime<Utc>>,

    #[serde(rename = "properties.encryption", deserialize_with = "null_as_default")]
    pub encryption: StorageEncryption,

    #[serde(
        rename = "properties.accessTier",
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub access_tier: String,

    #[serde(rename = "properties.supportsHttpsTrafficOnly", deserialize_with = "null_as_default")]
    pub supports_https_traffic_only: bool,

    #[serde(rename = "properties.networkAcls", deserialize_with = "null_as_default")]
    pub network_acls: StorageNetworkAcls,

    #[serde(
        rename = "properties.privateEndpointConnections",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub private_endpoint_connections: Vec<Value>,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, Value>,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub location: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(rename = "type", deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub resource_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSku {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tier: String,
}

/// Service endpoint URLs of an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageEndpoints {
    #[serde(deserialize_with = "null_as_default")]
    pub blob: String,
    #[serde(deserialize_with = "null_as_default")]
    pub queue: String,
    #[serde(deserialize_with = "null_as_default")]
    pub table: String,
    #[serde(deserialize_with = "null_as_default")]
    pub file: String,
    #[serde(deserialize_with = "null_as_default")]
    pub web: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dfs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageEncryption {
    #[serde(deserialize_with = "null_as_default")]
    pub services: StorageEncryptionServices,
    #[serde(deserialize_with = "null_as_default")]
    pub key_source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageEncryptionServices {
    #[serde(deserialize_with = "null_as_default")]
    pub blob: StorageEncryptionService,
    #[serde(deserialize_with = "null_as_default")]
    pub file: StorageEncryptionService,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageEncryptionService {
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    pub last_enabled_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub key_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageNetworkAcls {
    #[serde(deserialize_with = "null_as_default")]
    pub bypass: String,
    #[serde(deserialize_with = "null_as_default")]
    pub virtual_network_rules: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub ip_rules: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub default_action: String,
}

impl Named for StorageAccount {
    fn name(&self) -> &str {
        &self.name
    }
}

const ACCOUNT_CREATE: Endpoint<(), ()> =
    Endpoint::post("StorageAccountCreate", "subscriptions/{tenant}/CreateStorageAccount/{name}");
const ACCOUNT_GET: Endpoint<(), Option<StorageAccount>> =
    Endpoint::get("StorageAccountGet", "subscriptions/{tenant}/GetStorageAccountDetails/{name}");
const ACCOUNT_LIST: Endpoint<(), Option<Vec<StorageAccount>>> =
    Endpoint::get("StorageAccountList", "subscriptions/{tenant}/ListStorageAccounts");
const ACCOUNT_DELETE: Endpoint<(), ()> =
    Endpoint::post("StorageAccountDelete", "subscriptions/{tenant}/DeleteStorageAccount/{name}");
const ACCOUNT_GET_KEY: Endpoint<(), Option<KeyStringValue>> =
    Endpoint::get("StorageAccountGetKey", "subscriptions/{tenant}/GetStorageAccountKeys/{name}");

impl DuploClient {
    pub async fn storage_account_create(&self, tenant_id: &str, name: &str) -> Result<(), ApiError> {
        let args = [tenant_id, name];
        ACCOUNT_CREATE.call(self.transport(), &args, &args, Some(&())).await
    }

    /// Fetches an account's details. `Ok(None)` if the control plane
    /// answers `null`; a missing account usually surfaces as a 404 instead.
    pub async fn storage_account_get(&self, tenant_id: &str, name: &str) -> Result<Option<StorageAccount>, ApiError> {
        let args = [tenant_id, name];
        ACCOUNT_GET.call(self.transport(), &args, &args, None).await
    }

    pub async fn storage_account_list(&self, tenant_id: &str) -> Result<Vec<StorageAccount>, ApiError> {
        let accounts = ACCOUNT_LIST
            .call(self.transport(), &[tenant_id], &[tenant_id], None)
            .await?;
        Ok(accounts.unwrap_or_default())
    }

    pub async fn storage_account_exists(&self, tenant_id: &str, name: &str) -> Result<bool, ApiError> {
        let accounts = self.storage_account_list(tenant_id).await?;
        Ok(find_by_name(accounts, name).is_some())
    }

    pub async fn storage_account_delete(&self, tenant_id: &str, name: &str) -> Result<(), ApiError> {
        let args = [tenant_id, name];
        ACCOUNT_DELETE.call(self.transport(), &args, &args, Some(&())).await
    }

    /// Returns the account's primary access key.
    pub async fn storage_account_get_key(&self, tenant_id: &str, name: &str) -> Result<KeyStringValue, ApiError> {
        let args = [tenant_id, name];
        let key = ACCOUNT_GET_KEY.call(self.transport(), &args, &args, None).await?;
        Ok(key.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::transport::testing::RecordingTransport;
    use crate::api::transport::Verb;

    #[tokio::test]
    async fn test_paths_and_verbs() {
        let stub = Arc::new(RecordingTransport::new());
        let client = DuploClient::with_transport(stub.clone());

        client.storage_account_create("t1", "r1").await.unwrap();
        client.storage_account_get("t1", "r1").await.unwrap();
        client.storage_account_list("t1").await.unwrap();
        client.storage_account_delete("t1", "r1").await.unwrap();
        client.storage_account_get_key("t1", "r1").await.unwrap();

        let calls = stub.calls();
        let seen: Vec<(Verb, &str)> = calls.iter().map(|c| (c.verb, c.path.as_str())).collect();
        assert_eq!(
            seen,
            vec![
                (Verb::Post, "subscriptions/t1/CreateStorageAccount/r1"),
                (Verb::Get, "subscriptions/t1/GetStorageAccountDetails/r1"),
                (Verb::Get, "subscriptions/t1/ListStorageAccounts"),
                (Verb::Post, "subscriptions/t1/DeleteStorageAccount/r1"),
                (Verb::Get, "subscriptions/t1/GetStorageAccountKeys/r1"),
            ]
        );
        let bodies: Vec<Option<Value>> = calls.iter().map(|c| c.body.clone()).collect();
        assert_eq!(bodies, vec![Some(Value::Null), None, None, Some(Value::Null), None]);
    }

    #[tokio::test]
    async fn test_exists_scans_the_list() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Get,
            "subscriptions/t1/ListStorageAccounts",
            json!([{"name": "duploacct1", "kind": "StorageV2"}, {"name": "duploacct2", "tags": null}]),
        ));
        let client = DuploClient::with_transport(stub.clone());

        assert!(client.storage_account_exists("t1", "duploacct2").await.unwrap());
        assert!(!client.storage_account_exists("t1", "duploacct3").await.unwrap());
        assert_eq!(client.storage_account_list("t1").await.unwrap().len(), 2);
        assert_eq!(stub.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_list_tolerates_nested_null_members() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Get,
            "subscriptions/t1/ListStorageAccounts",
            json!([
                {
                    "name": "duploacct1",
                    "sku": {"name": null, "tier": "Standard"},
                    "properties.primaryEndpoints": {"blob": null, "dfs": null},
                    "properties.encryption": {
                        "services": {"blob": null, "file": {"enabled": null, "keyType": null}},
                        "keySource": null
                    },
                    "properties.networkAcls": {"bypass": null, "ipRules": null, "defaultAction": "Deny"}
                },
                {"name": "duploacct2"}
            ]),
        ));
        let client = DuploClient::with_transport(stub);

        assert!(client.storage_account_exists("t1", "duploacct1").await.unwrap());
        let accounts = client.storage_account_list("t1").await.unwrap();
        assert_eq!(accounts[0].sku.name, "");
        assert_eq!(accounts[0].sku.tier, "Standard");
        assert!(!accounts[0].encryption.services.file.enabled);
        assert!(accounts[0].network_acls.ip_rules.is_empty());
        assert_eq!(accounts[0].network_acls.default_action, "Deny");
    }

    #[tokio::test]
    async fn test_get_key_tolerates_null_value() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Get,
            "subscriptions/t1/GetStorageAccountKeys/duploacct1",
            json!({"Key": "key1", "Value": null}),
        ));
        let client = DuploClient::with_transport(stub);

        let key = client.storage_account_get_key("t1", "duploacct1").await.unwrap();
        assert_eq!(key.key, "key1");
        assert_eq!(key.value, "");
    }

    #[tokio::test]
    async fn test_get_details() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Get,
            "subscriptions/t1/GetStorageAccountDetails/duploacct1",
            json!({
                "name": "duploacct1",
                "sku": {"name": "Standard_LRS", "tier": "Standard"},
                "properties.provisioningState": "Succeeded",
                "properties.primaryEndpoints": {"blob": "https://duploacct1.blob.core.windows.net/"},
                "properties.creationTime": "2024-05-02T08:00:00Z",
                "properties.encryption": {
                    "services": {"blob": {"enabled": true, "keyType": "Account"}},
                    "keySource": "Microsoft.Storage"
                },
                "properties.networkAcls": {"bypass": "AzureServices", "defaultAction": "Allow"}
            }),
        ));
        let client = DuploClient::with_transport(stub);

        let account = client.storage_account_get("t1", "duploacct1").await.unwrap().unwrap();
        assert_eq!(account.sku.name, "Standard_LRS");
        assert_eq!(account.provisioning_state, "Succeeded");
        assert_eq!(account.primary_endpoints.blob, "https://duploacct1.blob.core.windows.net/");
        assert!(account.creation_time.is_some());
        assert!(account.encryption.services.blob.enabled);
        assert_eq!(account.network_acls.default_action, "Allow");

        assert_eq!(client.storage_account_get("t1", "missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_key() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Get,
            "subscriptions/t1/GetStorageAccountKeys/duploacct1",
            json!({"Key": "key1", "Value": "c2VjcmV0"}),
        ));
        let client = DuploClient::with_transport(stub);

        let key = client.storage_account_get_key("t1", "duploacct1").await.unwrap();
        assert_eq!(key.key, "key1");
        assert_eq!(key.value, "c2VjcmV0");
    }

    #[test]
    fn test_empty_account_serializes_compactly() {
        let value = serde_json::to_value(StorageAccount::default()).unwrap();
        assert!(value.get("name").is_none());
        assert!(value.get("properties.creationTime").is_none());
        assert!(value.get("sku").is_some());
    }
}
