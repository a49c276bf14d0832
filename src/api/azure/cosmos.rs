//
//  duplo-client
//  api/azure/cosmos.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Azure Cosmos DB accounts.
//!
//! The control plane speaks a flattened ARM shape: account properties travel
//! under literal dotted keys such as `"properties.locations"`, not under a
//! nested `properties` object. The same shape is used for create, get and
//! update.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::DuploClient;
use crate::api::common::{null_as_default, ApiError};
use crate::api::endpoint::Endpoint;

/// A Cosmos DB database account.
///
/// `Option` members are omitted from requests when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmosDbAccount {
    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub name: String,

    /// API kind: `GlobalDocumentDB`, `MongoDB` or `Parse`.
    #[serde(rename = "kind", deserialize_with = "null_as_default")]
    pub kind: String,

    #[serde(rename = "identity", skip_serializing_if = "Option::is_none")]
    pub identity: Option<CosmosDbIdentity>,

    #[serde(rename = "properties.consistencyPolicy", skip_serializing_if = "Option::is_none")]
    pub consistency_policy: Option<CosmosDbConsistencyPolicy>,

    #[serde(rename = "properties.locations", deserialize_with = "null_as_default")]
    pub locations: Vec<String>,

    #[serde(rename = "properties.ipRules", deserialize_with = "null_as_default")]
    pub ip_rules: Vec<String>,

    #[serde(rename = "properties.isVirtualNetworkFilterEnabled", deserialize_with = "null_as_default")]
    pub is_virtual_network_filter_enabled: bool,

    #[serde(rename = "properties.enableAutomaticFailover", deserialize_with = "null_as_default")]
    pub enable_automatic_failover: bool,

    #[serde(rename = "properties.capabilities", skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<CosmosDbCapability>>,

    #[serde(rename = "properties.virtualNetworkRules", skip_serializing_if = "Option::is_none")]
    pub virtual_network_rules: Option<Vec<CosmosDbVirtualNetworkRule>>,

    #[serde(rename = "properties.enableMultipleWriteLocations", deserialize_with = "null_as_default")]
    pub enable_multiple_write_locations: bool,

    #[serde(rename = "properties.enableCassandraConnector", deserialize_with = "null_as_default")]
    pub enable_cassandra_connector: bool,

    #[serde(rename = "properties.connectorOffer", deserialize_with = "null_as_default")]
    pub connector_offer: String,

    #[serde(
        rename = "properties.disableKeyBasedMetadataWriteAccess",
        deserialize_with = "null_as_default"
    )]
    pub disable_key_based_metadata_write_access: bool,

    #[serde(rename = "properties.keyVaultKeyUri", deserialize_with = "null_as_default")]
    pub key_vault_key_uri: String,

    #[serde(rename = "properties.defaultIdentity", deserialize_with = "null_as_default")]
    pub default_identity: String,

    /// `Enabled`, `Disabled` or `SecuredByPerimeter`.
    #[serde(rename = "properties.publicNetworkAccess", deserialize_with = "null_as_default")]
    pub public_network_access: String,

    #[serde(rename = "properties.enableFreeTier", deserialize_with = "null_as_default")]
    pub enable_free_tier: bool,

    #[serde(rename = "properties.apiProperties", skip_serializing_if = "Option::is_none")]
    pub api_properties: Option<CosmosDbApiProperties>,

    #[serde(rename = "properties.enableAnalyticalStorage", deserialize_with = "null_as_default")]
    pub enable_analytical_storage: bool,

    #[serde(
        rename = "properties.analyticalStorageConfiguration",
        skip_serializing_if = "Option::is_none"
    )]
    pub analytical_storage_configuration: Option<CosmosDbAnalyticalStorageConfiguration>,

    /// `Default` or `Restore`.
    #[serde(rename = "properties.createMode", deserialize_with = "null_as_default")]
    pub create_mode: String,

    #[serde(rename = "properties.backupPolicy", skip_serializing_if = "Option::is_none")]
    pub backup_policy: Option<CosmosDbBackupPolicy>,

    #[serde(rename = "properties.cors", skip_serializing_if = "Option::is_none")]
    pub cors: Option<CosmosDbCorsPolicy>,

    /// `None` or `AzureServices`.
    #[serde(rename = "properties.networkAclBypass", deserialize_with = "null_as_default")]
    pub network_acl_bypass: String,

    #[serde(rename = "properties.networkAclBypassResourceIds", deserialize_with = "null_as_default")]
    pub network_acl_bypass_resource_ids: Vec<String>,

    #[serde(rename = "properties.disableLocalAuth", deserialize_with = "null_as_default")]
    pub disable_local_auth: bool,

    #[serde(rename = "properties.restoreParameters", skip_serializing_if = "Option::is_none")]
    pub restore_parameters: Option<CosmosDbRestoreParameters>,

    #[serde(rename = "properties.capacity", skip_serializing_if = "Option::is_none")]
    pub capacity: Option<CosmosDbCapacity>,

    #[serde(rename = "properties.databaseAccountOfferType", deserialize_with = "null_as_default")]
    pub database_account_offer_type: String,
}

/// Managed identity of the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbIdentity {
    #[serde(deserialize_with = "null_as_default")]
    pub principal_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tenant_id: String,
    /// `SystemAssigned`, `UserAssigned`, `SystemAssigned,UserAssigned` or `None`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub identity_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_assigned_identities: HashMap<String, CosmosDbUserAssignedIdentity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbUserAssignedIdentity {
    #[serde(deserialize_with = "null_as_default")]
    pub principal_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbConsistencyPolicy {
    #[serde(deserialize_with = "null_as_default")]
    pub max_staleness_prefix: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub max_interval_in_seconds: i32,
    /// `Eventual`, `ConsistentPrefix`, `Session`, `BoundedStaleness` or `Strong`.
    #[serde(deserialize_with = "null_as_default")]
    pub default_consistency_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbCapability {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbVirtualNetworkRule {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "ignoreMissingVNetServiceEndpoint", deserialize_with = "null_as_default")]
    pub ignore_missing_vnet_service_endpoint: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbApiProperties {
    #[serde(deserialize_with = "null_as_default")]
    pub server_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbAnalyticalStorageConfiguration {
    #[serde(deserialize_with = "null_as_default")]
    pub schema_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CosmosDbBackupPolicy {
    #[serde(rename = "migrationState", deserialize_with = "null_as_default")]
    pub migration_state: CosmosDbBackupMigrationState,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbBackupMigrationState {
    // Capitalized on the wire, unlike its siblings.
    #[serde(rename = "Status", deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub target_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbCorsPolicy {
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_origins: String,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_methods: String,
    #[serde(deserialize_with = "null_as_default")]
    pub allowed_headers: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exposed_headers: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_age_in_seconds: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbRestoreParameters {
    #[serde(deserialize_with = "null_as_default")]
    pub restore_mode: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tables_to_restore: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub databases_to_restore: CosmosDbRestoreResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbRestoreResource {
    #[serde(deserialize_with = "null_as_default")]
    pub database_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub collection_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CosmosDbCapacity {
    #[serde(deserialize_with = "null_as_default")]
    pub total_throughput_limit: i32,
}

const ACCOUNT_CREATE: Endpoint<CosmosDbAccount, Value> =
    Endpoint::post("CreateCosmosDB", "v3/subscriptions/{tenant}/azure/cosmosDb/account");
const ACCOUNT_GET: Endpoint<(), Option<CosmosDbAccount>> =
    Endpoint::get("GetCosmosDB", "v3/subscriptions/{tenant}/azure/cosmosDb/account/{name}");
const ACCOUNT_UPDATE: Endpoint<CosmosDbAccount, Value> =
    Endpoint::put("UpdateCosmosDB", "v3/subscriptions/{tenant}/azure/cosmosDb/account/{name}");
const ACCOUNT_DELETE: Endpoint<(), ()> =
    Endpoint::delete("DeleteCosmosDB", "v3/subscriptions/{tenant}/azure/cosmosDb/account/{name}");

impl DuploClient {
    /// Starts creating an account. Provisioning continues asynchronously in
    /// Azure; poll [`cosmos_db_get`](Self::cosmos_db_get) to observe it.
    ///
    /// Whatever the control plane answers is logged at debug level and
    /// otherwise discarded.
    pub async fn cosmos_db_create(&self, tenant_id: &str, rq: &CosmosDbAccount) -> Result<(), ApiError> {
        let rp = ACCOUNT_CREATE
            .call(self.transport(), &[tenant_id], &[tenant_id, rq.name.as_str()], Some(rq))
            .await?;
        tracing::debug!("CreateCosmosDB({}, {}): response: {}", tenant_id, rq.name, rp);
        Ok(())
    }

    pub async fn cosmos_db_get(&self, tenant_id: &str, name: &str) -> Result<Option<CosmosDbAccount>, ApiError> {
        let args = [tenant_id, name];
        ACCOUNT_GET.call(self.transport(), &args, &args, None).await
    }

    /// Replaces the account's settings. The response body is discarded.
    pub async fn cosmos_db_update(
        &self,
        tenant_id: &str,
        name: &str,
        rq: &CosmosDbAccount,
    ) -> Result<(), ApiError> {
        let args = [tenant_id, name];
        let rp = ACCOUNT_UPDATE.call(self.transport(), &args, &args, Some(rq)).await?;
        tracing::debug!("UpdateCosmosDB({}, {}): response: {}", tenant_id, name, rp);
        Ok(())
    }

    pub async fn cosmos_db_delete(&self, tenant_id: &str, name: &str) -> Result<(), ApiError> {
        let args = [tenant_id, name];
        ACCOUNT_DELETE.call(self.transport(), &args, &args, None).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::transport::testing::RecordingTransport;
    use crate::api::transport::Verb;

    fn account() -> CosmosDbAccount {
        CosmosDbAccount {
            name: "r1".into(),
            kind: "GlobalDocumentDB".into(),
            locations: vec!["westus2".into()],
            consistency_policy: Some(CosmosDbConsistencyPolicy {
                default_consistency_level: "Session".into(),
                max_interval_in_seconds: 5,
                max_staleness_prefix: 100.0,
            }),
            capabilities: Some(vec![CosmosDbCapability { name: "EnableServerless".into() }]),
            database_account_offer_type: "Standard".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_paths_and_verbs() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Post,
            "v3/subscriptions/t1/azure/cosmosDb/account",
            json!({"provisioningState": "Creating"}),
        ));
        let client = DuploClient::with_transport(stub.clone());

        client.cosmos_db_create("t1", &account()).await.unwrap();
        client.cosmos_db_get("t1", "r1").await.unwrap();
        client.cosmos_db_update("t1", "r1", &account()).await.unwrap();
        client.cosmos_db_delete("t1", "r1").await.unwrap();

        let seen: Vec<(Verb, String, String)> =
            stub.calls().into_iter().map(|c| (c.verb, c.path, c.label)).collect();
        assert_eq!(
            seen,
            vec![
                (
                    Verb::Post,
                    "v3/subscriptions/t1/azure/cosmosDb/account".to_string(),
                    "CreateCosmosDB(t1, r1)".to_string()
                ),
                (
                    Verb::Get,
                    "v3/subscriptions/t1/azure/cosmosDb/account/r1".to_string(),
                    "GetCosmosDB(t1, r1)".to_string()
                ),
                (
                    Verb::Put,
                    "v3/subscriptions/t1/azure/cosmosDb/account/r1".to_string(),
                    "UpdateCosmosDB(t1, r1)".to_string()
                ),
                (
                    Verb::Delete,
                    "v3/subscriptions/t1/azure/cosmosDb/account/r1".to_string(),
                    "DeleteCosmosDB(t1, r1)".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_missing_account_is_none() {
        let stub = Arc::new(RecordingTransport::new());
        let client = DuploClient::with_transport(stub);
        assert_eq!(client.cosmos_db_get("t1", "nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_tolerates_nested_null_members() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Get,
            "v3/subscriptions/t1/azure/cosmosDb/account/r1",
            json!({
                "name": "r1",
                "properties.consistencyPolicy": {"defaultConsistencyLevel": "Session", "maxStalenessPrefix": null},
                "properties.capabilities": [{"name": null}],
                "properties.backupPolicy": {"migrationState": null},
                "properties.cors": {"allowedOrigins": "*", "maxAgeInSeconds": null},
                "properties.restoreParameters": {"restoreMode": null, "databasesToRestore": null}
            }),
        ));
        let client = DuploClient::with_transport(stub);

        let account = client.cosmos_db_get("t1", "r1").await.unwrap().unwrap();
        let policy = account.consistency_policy.unwrap();
        assert_eq!(policy.default_consistency_level, "Session");
        assert_eq!(policy.max_staleness_prefix, 0.0);
        assert_eq!(account.capabilities, Some(vec![CosmosDbCapability::default()]));
        assert_eq!(account.backup_policy, Some(CosmosDbBackupPolicy::default()));
        assert_eq!(account.cors.map(|c| c.allowed_origins), Some("*".to_string()));
        assert_eq!(account.restore_parameters, Some(CosmosDbRestoreParameters::default()));
    }

    #[test]
    fn test_properties_use_dotted_keys() {
        let value = serde_json::to_value(account()).unwrap();
        assert_eq!(value["properties.locations"], json!(["westus2"]));
        assert_eq!(value["properties.consistencyPolicy"]["defaultConsistencyLevel"], json!("Session"));
        assert_eq!(value["properties.capabilities"], json!([{"name": "EnableServerless"}]));
        assert_eq!(value["properties.databaseAccountOfferType"], json!("Standard"));
        assert!(value.get("properties").is_none());
    }

    #[test]
    fn test_unset_options_are_omitted() {
        let value = serde_json::to_value(CosmosDbAccount::default()).unwrap();
        for key in [
            "identity",
            "properties.consistencyPolicy",
            "properties.capabilities",
            "properties.virtualNetworkRules",
            "properties.apiProperties",
            "properties.analyticalStorageConfiguration",
            "properties.backupPolicy",
            "properties.cors",
            "properties.restoreParameters",
            "properties.capacity",
        ] {
            assert!(value.get(key).is_none(), "{} should be omitted", key);
        }
        assert_eq!(value["properties.enableFreeTier"], json!(false));
    }

    #[test]
    fn test_request_survives_response_decoding() {
        let request = account();
        let decoded: CosmosDbAccount = serde_json::from_value(serde_json::to_value(&request).unwrap()).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_identity_type_key() {
        let identity: CosmosDbIdentity = serde_json::from_value(json!({
            "type": "SystemAssigned",
            "principalId": "p",
            "tenantId": null,
            "userAssignedIdentities": null
        }))
        .unwrap();
        assert_eq!(identity.identity_type, "SystemAssigned");
        assert_eq!(identity.tenant_id, "");
        assert!(identity.user_assigned_identities.is_empty());
    }
}
