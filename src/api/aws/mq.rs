//
//  duplo-client
//  api/aws/mq.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Amazon MQ brokers and broker configurations.
//!
//! # Broker Operations
//!
//! | Method | Verb | Path |
//! |--------|------|------|
//! | [`mq_broker_create`](DuploClient::mq_broker_create) | POST | `v3/subscriptions/{tenant}/aws/mq/broker` |
//! | [`mq_broker_get`](DuploClient::mq_broker_get) | GET | `v3/subscriptions/{tenant}/aws/mq/broker/{id}` |
//! | [`mq_broker_update`](DuploClient::mq_broker_update) | PUT | `v3/subscriptions/{tenant}/aws/mq/broker/{id}` |
//! | [`mq_broker_reboot`](DuploClient::mq_broker_reboot) | POST | `v3/subscriptions/{tenant}/aws/mq/broker/{id}/reboot` |
//! | [`mq_broker_delete`](DuploClient::mq_broker_delete) | DELETE | `v3/subscriptions/{tenant}/aws/mq/broker/{id}` |
//!
//! # Configuration Operations
//!
//! | Method | Verb | Path |
//! |--------|------|------|
//! | [`mq_config_create`](DuploClient::mq_config_create) | POST | `v3/subscriptions/{tenant}/aws/mq/config` |
//! | [`mq_config_get`](DuploClient::mq_config_get) | GET | `v3/subscriptions/{tenant}/aws/mq/config/{id}` |
//! | [`mq_config_update`](DuploClient::mq_config_update) | PUT | `v3/subscriptions/{tenant}/aws/mq/config/{id}` |
//!
//! Amazon MQ has no API to delete a configuration, so there is no delete here.
//!
//! # Example
//!
//! ```rust,no_run
//! use duplo_client::api::DuploClient;
//! use duplo_client::api::aws::mq::{EngineType, MqBrokerRequest, MqUser};
//!
//! # async fn example(client: DuploClient) -> Result<(), duplo_client::api::ApiError> {
//! let request = MqBrokerRequest {
//!     engine_type: EngineType::RabbitMq,
//!     broker_name: "orders".to_string(),
//!     host_instance_type: "mq.m5.large".to_string(),
//!     engine_version: "3.13".to_string(),
//!     users: vec![MqUser {
//!         user_name: "app".to_string(),
//!         password: "correct-horse-battery".to_string(),
//!         groups: vec![],
//!     }],
//!     ..Default::default()
//! };
//! let broker = client.mq_broker_create("tenant-id", &request).await?;
//! println!("created {}", broker.broker_id);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::DuploClient;
use crate::api::common::{null_as_default, ApiError, StringValue};
use crate::api::endpoint::Endpoint;

/// Broker engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineType {
    #[default]
    #[serde(rename = "ACTIVEMQ")]
    ActiveMq,
    #[serde(rename = "RABBITMQ")]
    RabbitMq,
}

/// Broker deployment topology.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeploymentMode {
    #[default]
    SingleInstance,
    ActiveStandbyMultiAz,
    ClusterMultiAz,
}

/// Broker storage backend. EFS is only available for ActiveMQ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrokerStorageType {
    #[default]
    Ebs,
    Efs,
}

/// How broker users authenticate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationStrategy {
    #[default]
    Simple,
    Ldap,
}

/// Cross-region data replication. `Crdr` requires
/// [`MqBrokerRequest::data_replication_primary_broker_arn`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataReplicationMode {
    #[default]
    None,
    Crdr,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    #[default]
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Request body for creating a broker.
///
/// Fields left at their defaults are still sent unless marked optional;
/// `Option` fields and empty optional strings are omitted from the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqBrokerRequest {
    pub engine_type: EngineType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_mode: Option<DeploymentMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub broker_storage_type: Option<BrokerStorageType>,

    pub broker_name: String,
    pub host_instance_type: String,
    pub engine_version: String,
    pub authentication_strategy: AuthenticationStrategy,
    pub auto_minor_version_upgrade: bool,
    pub users: Vec<MqUser>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_server_metadata: Option<MqLdapMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<MqConfigurationRef>,

    /// Passed through as given. Nothing here generates idempotency tokens.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub creator_request_id: String,

    pub data_replication_mode: DataReplicationMode,

    /// Required when `data_replication_mode` is `Crdr`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub data_replication_primary_broker_arn: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_options: Option<MqEncryptionOptions>,

    pub logs: Option<MqLogs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_start_time: Option<MqMaintenanceWindow>,

    pub publicly_accessible: bool,
    pub security_groups: Vec<String>,
    pub subnet_ids: Vec<String>,
    pub tags: HashMap<String, String>,

    /// The broker id, once known.
    #[serde(rename = "Name")]
    pub broker_id: String,
}

/// Partial update of a broker. Unset fields are left unchanged.
///
/// Most changes only take effect after [`DuploClient::mq_broker_reboot`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqBrokerUpdateRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub broker_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub host_instance_type: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub engine_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_minor_version_upgrade: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_replication_mode: Option<DataReplicationMode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_strategy: Option<AuthenticationStrategy>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldap_server_metadata: Option<MqLdapMetadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub configuration: Option<MqConfigurationRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs: Option<MqLogs>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_window_start_time: Option<MqMaintenanceWindow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqUser {
    pub user_name: String,
    pub password: String,
    pub groups: Vec<String>,
}

/// LDAP server settings for `AuthenticationStrategy::Ldap` brokers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqLdapMetadata {
    pub hosts: Vec<String>,
    pub role_base: String,
    pub role_name: String,
    pub role_search_matching: String,
    pub role_search_subtree: bool,
    pub service_account_password: String,
    pub service_account_username: String,
    pub user_base: String,
    pub user_role_name: String,
    pub user_search_matching: String,
    pub user_search_subtree: bool,
}

/// Reference to a configuration revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqConfigurationRef {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub revision: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqEncryptionOptions {
    #[serde(deserialize_with = "null_as_default")]
    pub kms_key_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub use_aws_owned_key: bool,
}

/// Log publishing switches.
///
/// `audit` does not apply to RabbitMQ and must stay `None` for it; an
/// explicit `Some(false)` is sent as `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqLogs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<bool>,
    pub general: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqMaintenanceWindow {
    pub time_of_day: String,
    pub time_zone: String,
    pub day_of_week: DayOfWeek,
}

/// A broker as described by Amazon MQ, including state reported by AWS.
///
/// Enum-like fields keep AWS's `{"Value": ...}` envelope. Members the
/// control plane reports as `null` decode to their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqBrokerResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub auto_minor_version_upgrade: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub actions_required: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub authentication_strategy: StringValue,
    #[serde(deserialize_with = "null_as_default")]
    pub broker_instances: Vec<MqBrokerInstance>,
    #[serde(deserialize_with = "null_as_default")]
    pub configurations: MqConfigurations,
    pub encryption_options: Option<MqEncryptionOptions>,
    #[serde(deserialize_with = "null_as_default")]
    pub engine_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub logs: MqLogsSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub maintenance_window_start_time: MqMaintenanceWindowSummary,
    #[serde(deserialize_with = "null_as_default")]
    pub pending_security_groups: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub publicly_accessible: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub security_groups: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub storage_type: StringValue,
    #[serde(deserialize_with = "null_as_default")]
    pub subnet_ids: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub users: Vec<MqUserSummary>,
    #[serde(deserialize_with = "null_as_default")]
    pub broker_arn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub broker_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub broker_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub broker_state: StringValue,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deployment_mode: StringValue,
    #[serde(deserialize_with = "null_as_default")]
    pub engine_type: StringValue,
    #[serde(deserialize_with = "null_as_default")]
    pub host_instance_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub resource_type: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqBrokerInstance {
    #[serde(rename = "ConsoleURL", deserialize_with = "null_as_default")]
    pub console_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub endpoints: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ip_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqConfigurations {
    pub current: Option<MqConfigurationRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub history: Vec<MqConfigurationRef>,
    pub pending: Option<MqConfigurationRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqLogsSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub audit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub audit_log_group: String,
    #[serde(deserialize_with = "null_as_default")]
    pub general: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub general_log_group: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqMaintenanceWindowSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub day_of_week: StringValue,
    #[serde(deserialize_with = "null_as_default")]
    pub time_of_day: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time_zone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqUserSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub pending_change: StringValue,
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
}

/// Request body for creating a broker configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqConfigRequest {
    pub authentication_strategy: AuthenticationStrategy,
    pub engine_type: EngineType,
    pub engine_version: String,
    pub name: String,
    pub tags: HashMap<String, String>,
}

/// Identifiers returned when a configuration is created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MqConfigCreated {
    #[serde(rename = "id", alias = "Id", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "arn", alias = "Arn", deserialize_with = "null_as_default")]
    pub arn: String,
}

/// A new revision of a configuration: the XML `data` (base64) and a
/// description of the change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqConfigUpdateRequest {
    pub configuration_id: String,
    pub data: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqConfigResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub arn: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authentication_strategy: StringValue,
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub engine_type: StringValue,
    #[serde(deserialize_with = "null_as_default")]
    pub engine_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub latest_revision: MqConfigRevision,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MqConfigRevision {
    #[serde(deserialize_with = "null_as_default")]
    pub created: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub revision: i32,
}

const BROKER_CREATE: Endpoint<MqBrokerRequest, Option<MqBrokerResponse>> =
    Endpoint::post("DuploAWSMQBrokerCreate", "v3/subscriptions/{tenant}/aws/mq/broker");
const BROKER_GET: Endpoint<(), Option<MqBrokerResponse>> =
    Endpoint::get("DuploAWSMQBrokerGet", "v3/subscriptions/{tenant}/aws/mq/broker/{broker}");
const BROKER_UPDATE: Endpoint<MqBrokerUpdateRequest, ()> =
    Endpoint::put("DuploAWSMQBrokerUpdate", "v3/subscriptions/{tenant}/aws/mq/broker/{broker}");
const BROKER_REBOOT: Endpoint<(), ()> =
    Endpoint::post("DuploAWSMQBrokerReboot", "v3/subscriptions/{tenant}/aws/mq/broker/{broker}/reboot");
const BROKER_DELETE: Endpoint<(), ()> =
    Endpoint::delete("DuploAWSMQBrokerDelete", "v3/subscriptions/{tenant}/aws/mq/broker/{broker}");

const CONFIG_CREATE: Endpoint<MqConfigRequest, Option<MqConfigCreated>> =
    Endpoint::post("DuploAWSMQConfigCreate", "v3/subscriptions/{tenant}/aws/mq/config");
const CONFIG_GET: Endpoint<(), Option<MqConfigResponse>> =
    Endpoint::get("DuploAWSMQConfigGet", "v3/subscriptions/{tenant}/aws/mq/config/{config}");
const CONFIG_UPDATE: Endpoint<MqConfigUpdateRequest, ()> =
    Endpoint::put("DuploAWSMQConfigUpdate", "v3/subscriptions/{tenant}/aws/mq/config/{config}");

impl DuploClient {
    /// Creates a broker. The response carries the new `broker_id`; an
    /// empty success body yields a default response.
    pub async fn mq_broker_create(
        &self,
        tenant_id: &str,
        rq: &MqBrokerRequest,
    ) -> Result<MqBrokerResponse, ApiError> {
        let rp = BROKER_CREATE
            .call(self.transport(), &[tenant_id], &[tenant_id, rq.broker_name.as_str()], Some(rq))
            .await?;
        Ok(rp.unwrap_or_default())
    }

    /// Fetches a broker by id. `None` if the control plane answers `null`.
    pub async fn mq_broker_get(
        &self,
        tenant_id: &str,
        broker_id: &str,
    ) -> Result<Option<MqBrokerResponse>, ApiError> {
        let args = [tenant_id, broker_id];
        BROKER_GET.call(self.transport(), &args, &args, None).await
    }

    pub async fn mq_broker_update(
        &self,
        tenant_id: &str,
        broker_id: &str,
        rq: &MqBrokerUpdateRequest,
    ) -> Result<(), ApiError> {
        let args = [tenant_id, broker_id];
        BROKER_UPDATE.call(self.transport(), &args, &args, Some(rq)).await
    }

    /// Reboots a broker, applying pending changes. Returns once the reboot
    /// is accepted; it does not wait for the broker to come back.
    ///
    /// The request body is the literal `null`.
    pub async fn mq_broker_reboot(
        &self,
        tenant_id: &str,
        broker_id: &str,
        broker_name: &str,
    ) -> Result<(), ApiError> {
        BROKER_REBOOT
            .call(
                self.transport(),
                &[tenant_id, broker_id],
                &[tenant_id, broker_id, broker_name],
                Some(&()),
            )
            .await
    }

    /// Deletes a broker by its short id (not its ARN).
    pub async fn mq_broker_delete(&self, tenant_id: &str, broker_id: &str) -> Result<(), ApiError> {
        let args = [tenant_id, broker_id];
        BROKER_DELETE.call(self.transport(), &args, &args, None).await
    }

    pub async fn mq_config_create(
        &self,
        tenant_id: &str,
        rq: &MqConfigRequest,
    ) -> Result<MqConfigCreated, ApiError> {
        let created = CONFIG_CREATE
            .call(self.transport(), &[tenant_id], &[tenant_id, rq.name.as_str()], Some(rq))
            .await?;
        Ok(created.unwrap_or_default())
    }

    pub async fn mq_config_get(
        &self,
        tenant_id: &str,
        config_id: &str,
    ) -> Result<Option<MqConfigResponse>, ApiError> {
        let args = [tenant_id, config_id];
        CONFIG_GET.call(self.transport(), &args, &args, None).await
    }

    /// Adds a revision to a configuration.
    pub async fn mq_config_update(
        &self,
        tenant_id: &str,
        config_id: &str,
        rq: &MqConfigUpdateRequest,
    ) -> Result<(), ApiError> {
        let args = [tenant_id, config_id];
        CONFIG_UPDATE.call(self.transport(), &args, &args, Some(rq)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::api::transport::testing::RecordingTransport;
    use crate::api::transport::Verb;

    fn client(stub: &Arc<RecordingTransport>) -> DuploClient {
        DuploClient::with_transport(stub.clone())
    }

    #[tokio::test]
    async fn test_broker_paths_and_verbs() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Post,
            "v3/subscriptions/t1/aws/mq/broker",
            json!({"BrokerId": "r1"}),
        ));
        let client = client(&stub);

        let rq = MqBrokerRequest {
            broker_name: "b1".into(),
            ..Default::default()
        };
        client.mq_broker_create("t1", &rq).await.unwrap();
        let call = stub.last();
        assert_eq!((call.verb, call.path.as_str()), (Verb::Post, "v3/subscriptions/t1/aws/mq/broker"));
        assert_eq!(call.label, "DuploAWSMQBrokerCreate(t1, b1)");

        client.mq_broker_get("t1", "r1").await.unwrap();
        let call = stub.last();
        assert_eq!((call.verb, call.path.as_str()), (Verb::Get, "v3/subscriptions/t1/aws/mq/broker/r1"));
        assert_eq!(call.body, None);

        client
            .mq_broker_update("t1", "r1", &MqBrokerUpdateRequest::default())
            .await
            .unwrap();
        let call = stub.last();
        assert_eq!((call.verb, call.path.as_str()), (Verb::Put, "v3/subscriptions/t1/aws/mq/broker/r1"));
        assert_eq!(call.body, Some(json!({})));

        client.mq_broker_reboot("t1", "r1", "b1").await.unwrap();
        let call = stub.last();
        assert_eq!(
            (call.verb, call.path.as_str()),
            (Verb::Post, "v3/subscriptions/t1/aws/mq/broker/r1/reboot")
        );
        assert_eq!(call.label, "DuploAWSMQBrokerReboot(t1, r1, b1)");
        assert_eq!(call.body, Some(Value::Null));

        client.mq_broker_delete("t1", "r1").await.unwrap();
        let call = stub.last();
        assert_eq!((call.verb, call.path.as_str()), (Verb::Delete, "v3/subscriptions/t1/aws/mq/broker/r1"));
        assert_eq!(call.label, "DuploAWSMQBrokerDelete(t1, r1)");
    }

    #[tokio::test]
    async fn test_config_paths_and_verbs() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Post,
            "v3/subscriptions/t1/aws/mq/config",
            json!({"id": "c-1", "arn": "arn:aws:mq:us-west-2:1:configuration:c-1"}),
        ));
        let client = client(&stub);

        let created = client
            .mq_config_create("t1", &MqConfigRequest { name: "cfg".into(), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(created.id, "c-1");
        assert_eq!(stub.last().label, "DuploAWSMQConfigCreate(t1, cfg)");

        client.mq_config_get("t1", "r1").await.unwrap();
        let call = stub.last();
        assert_eq!((call.verb, call.path.as_str()), (Verb::Get, "v3/subscriptions/t1/aws/mq/config/r1"));

        client
            .mq_config_update("t1", "r1", &MqConfigUpdateRequest::default())
            .await
            .unwrap();
        let call = stub.last();
        assert_eq!((call.verb, call.path.as_str()), (Verb::Put, "v3/subscriptions/t1/aws/mq/config/r1"));
    }

    #[tokio::test]
    async fn test_create_then_get_by_returned_id() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Post,
            "v3/subscriptions/tenantA/aws/mq/broker",
            json!({"BrokerId": "abc123", "BrokerName": "b1"}),
        ));
        let client = client(&stub);

        let rq = MqBrokerRequest {
            broker_name: "b1".into(),
            ..Default::default()
        };
        let created = client.mq_broker_create("tenantA", &rq).await.unwrap();
        assert_eq!(created.broker_id, "abc123");

        client.mq_broker_get("tenantA", &created.broker_id).await.unwrap();
        assert_eq!(stub.last().path, "v3/subscriptions/tenantA/aws/mq/broker/abc123");
    }

    #[tokio::test]
    async fn test_create_with_empty_answer_succeeds() {
        let stub = Arc::new(RecordingTransport::new());
        let client = client(&stub);

        let rq = MqBrokerRequest {
            broker_name: "b1".into(),
            ..Default::default()
        };
        let created = client.mq_broker_create("t1", &rq).await.unwrap();
        assert_eq!(created.broker_id, "");

        let rq = MqConfigRequest {
            name: "cfg".into(),
            ..Default::default()
        };
        let created = client.mq_config_create("t1", &rq).await.unwrap();
        assert_eq!(created.id, "");
    }

    #[tokio::test]
    async fn test_get_tolerates_nested_null_members() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Get,
            "v3/subscriptions/t1/aws/mq/broker/b-1",
            json!({
                "BrokerId": "b-1",
                "Users": [{"Username": "app", "PendingChange": null}],
                "Logs": {"Audit": null, "AuditLogGroup": null, "General": true, "GeneralLogGroup": "/aws/mq/b-1"},
                "BrokerInstances": [{"ConsoleURL": null, "Endpoints": null, "IpAddress": "10.0.0.1"}],
                "Configurations": {"Current": {"Id": "c-1", "Revision": null}, "History": null},
                "MaintenanceWindowStartTime": {"DayOfWeek": null, "TimeOfDay": "02:00", "TimeZone": null},
                "EncryptionOptions": {"KmsKeyId": null, "UseAwsOwnedKey": true},
                "AuthenticationStrategy": {"Value": null}
            }),
        ));

        let broker = client(&stub).mq_broker_get("t1", "b-1").await.unwrap().unwrap();
        assert_eq!(broker.users[0].username, "app");
        assert_eq!(broker.users[0].pending_change, StringValue::default());
        assert!(broker.logs.general);
        assert_eq!(broker.logs.audit_log_group, "");
        assert!(broker.broker_instances[0].endpoints.is_empty());
        assert_eq!(broker.configurations.current.as_ref().map(|c| c.revision), Some(0));
        assert!(broker.configurations.history.is_empty());
        assert_eq!(broker.maintenance_window_start_time.time_of_day, "02:00");
        assert_eq!(broker.encryption_options.map(|e| e.use_aws_owned_key), Some(true));
        assert_eq!(broker.authentication_strategy.value, "");
    }

    #[tokio::test]
    async fn test_config_get_tolerates_null_revision_members() {
        let stub = Arc::new(RecordingTransport::new().reply(
            Verb::Get,
            "v3/subscriptions/t1/aws/mq/config/c-1",
            json!({"Id": "c-1", "LatestRevision": {"Created": null, "Description": null, "Revision": 2}}),
        ));

        let config = client(&stub).mq_config_get("t1", "c-1").await.unwrap().unwrap();
        assert_eq!(config.latest_revision.revision, 2);
        assert_eq!(config.latest_revision.description, "");
    }

    #[tokio::test]
    async fn test_get_null_is_none() {
        let stub = Arc::new(RecordingTransport::new());
        assert!(client(&stub).mq_broker_get("t1", "r1").await.unwrap().is_none());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(EngineType::ActiveMq).unwrap(), json!("ACTIVEMQ"));
        assert_eq!(serde_json::to_value(EngineType::RabbitMq).unwrap(), json!("RABBITMQ"));
        assert_eq!(
            serde_json::to_value(DeploymentMode::ActiveStandbyMultiAz).unwrap(),
            json!("ACTIVE_STANDBY_MULTI_AZ")
        );
        assert_eq!(serde_json::to_value(BrokerStorageType::Efs).unwrap(), json!("EFS"));
        assert_eq!(serde_json::to_value(AuthenticationStrategy::Ldap).unwrap(), json!("LDAP"));
        assert_eq!(serde_json::to_value(DataReplicationMode::Crdr).unwrap(), json!("CRDR"));
        assert_eq!(serde_json::to_value(DayOfWeek::Sunday).unwrap(), json!("SUNDAY"));
    }

    #[test]
    fn test_create_request_omits_unset_optionals() {
        let value = serde_json::to_value(MqBrokerRequest::default()).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "DeploymentMode",
            "BrokerStorageType",
            "LdapServerMetadata",
            "Configuration",
            "CreatorRequestId",
            "DataReplicationPrimaryBrokerArn",
            "EncryptionOptions",
            "MaintenanceWindowStartTime",
        ] {
            assert!(!obj.contains_key(key), "{} should be omitted", key);
        }
        // Not marked optional on the wire, so sent even when unset.
        assert_eq!(obj["Logs"], Value::Null);
        assert_eq!(obj["DataReplicationMode"], json!("NONE"));
        assert_eq!(obj["Name"], json!(""));
    }

    #[test]
    fn test_create_request_includes_set_optionals() {
        let rq = MqBrokerRequest {
            deployment_mode: Some(DeploymentMode::ClusterMultiAz),
            broker_storage_type: Some(BrokerStorageType::Ebs),
            creator_request_id: "req-1".into(),
            maintenance_window_start_time: Some(MqMaintenanceWindow {
                time_of_day: "02:00".into(),
                time_zone: "UTC".into(),
                day_of_week: DayOfWeek::Saturday,
            }),
            ..Default::default()
        };
        let value = serde_json::to_value(&rq).unwrap();
        assert_eq!(value["DeploymentMode"], json!("CLUSTER_MULTI_AZ"));
        assert_eq!(value["BrokerStorageType"], json!("EBS"));
        assert_eq!(value["CreatorRequestId"], json!("req-1"));
        assert_eq!(value["MaintenanceWindowStartTime"]["DayOfWeek"], json!("SATURDAY"));
    }

    #[test]
    fn test_update_request_explicit_false_is_sent() {
        let rq = MqBrokerUpdateRequest {
            auto_minor_version_upgrade: Some(false),
            logs: Some(MqLogs { audit: Some(false), general: true }),
            ..Default::default()
        };
        let value = serde_json::to_value(&rq).unwrap();
        assert_eq!(value["AutoMinorVersionUpgrade"], json!(false));
        assert_eq!(value["Logs"], json!({"Audit": false, "General": true}));
        assert!(value.get("BrokerId").is_none());
        assert!(value.get("SecurityGroups").is_none());

        let rabbit_logs = MqLogs { audit: None, general: true };
        assert_eq!(serde_json::to_value(rabbit_logs).unwrap(), json!({"General": true}));
    }

    #[test]
    fn test_request_and_response_share_field_names() {
        let request = serde_json::to_value(MqBrokerRequest::default()).unwrap();
        let response = serde_json::to_value(MqBrokerResponse::default()).unwrap();
        for key in [
            "EngineType",
            "BrokerName",
            "HostInstanceType",
            "EngineVersion",
            "AuthenticationStrategy",
            "AutoMinorVersionUpgrade",
            "Users",
            "Logs",
            "PubliclyAccessible",
            "SecurityGroups",
            "SubnetIds",
            "Tags",
            "Name",
        ] {
            assert!(request.get(key).is_some(), "request lacks {}", key);
            assert!(response.get(key).is_some(), "response lacks {}", key);
        }
    }

    #[test]
    fn test_response_keeps_value_envelopes() {
        let rp: MqBrokerResponse = serde_json::from_value(json!({
            "BrokerId": "b-1",
            "BrokerState": {"Value": "RUNNING"},
            "EngineType": {"Value": "RABBITMQ"},
            "MaintenanceWindowStartTime": {"DayOfWeek": {"Value": "MONDAY"}, "TimeOfDay": "01:00", "TimeZone": "UTC"},
            "Users": [{"Username": "app", "PendingChange": {"Value": "CREATE"}}],
            "BrokerInstances": [{"ConsoleURL": "https://console", "Endpoints": ["amqps://x"], "IpAddress": "10.0.0.1"}]
        }))
        .unwrap();
        assert_eq!(rp.broker_state, StringValue::new("RUNNING"));
        assert_eq!(rp.engine_type.value, "RABBITMQ");
        assert_eq!(rp.maintenance_window_start_time.day_of_week.value, "MONDAY");
        assert_eq!(rp.users[0].pending_change.value, "CREATE");
        assert_eq!(rp.broker_instances[0].console_url, "https://console");
    }

    #[test]
    fn test_response_tolerates_null_members() {
        let rp: MqBrokerResponse = serde_json::from_value(json!({
            "BrokerId": "b-1",
            "BrokerName": null,
            "MaintenanceWindowStartTime": null,
            "Configurations": null,
            "EncryptionOptions": null,
            "Users": null
        }))
        .unwrap();
        assert_eq!(rp.broker_id, "b-1");
        assert_eq!(rp.broker_name, "");
        assert!(rp.users.is_empty());
        assert!(rp.encryption_options.is_none());
    }
}
