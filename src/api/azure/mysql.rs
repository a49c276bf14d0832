//
//  duplo-client
//  api/azure/mysql.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Azure Database for MySQL servers and their databases.
//!
//! These live on the older `subscriptions/{tenant}/...` routes, which
//! use RPC-style names and delete with POST.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::DuploClient;
use crate::api::common::{null_as_default, ApiError};
use crate::api::endpoint::{find_by_name, Endpoint, Named};

/// Request body for creating a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MySqlServerRequest {
    pub name: String,
    pub version: String,
    pub admin_username: String,
    pub admin_password: String,
    pub backup_retention_days: i32,
    /// `Enabled` or `Disabled`.
    pub geo_redundant_backup: String,
    #[serde(rename = "StorageMB")]
    pub storage_mb: i32,
    /// SKU name, e.g. `GP_Gen5_2`.
    pub size: String,
}

/// A server as listed by the control plane.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MySqlServer {
    #[serde(deserialize_with = "null_as_default")]
    pub sku: MySqlSku,

    #[serde(rename = "properties.administratorLogin", deserialize_with = "null_as_default")]
    pub administrator_login: String,

    #[serde(rename = "properties.version", deserialize_with = "null_as_default")]
    pub version: String,

    #[serde(rename = "properties.sslEnforcement", deserialize_with = "null_as_default")]
    pub ssl_enforcement: String,

    #[serde(rename = "properties.minimalTlsVersion", deserialize_with = "null_as_default")]
    pub minimal_tls_version: String,

    #[serde(rename = "properties.byokEnforcement", deserialize_with = "null_as_default")]
    pub byok_enforcement: String,

    #[serde(rename = "properties.infrastructureEncryption", deserialize_with = "null_as_default")]
    pub infrastructure_encryption: String,

    #[serde(rename = "properties.userVisibleState", deserialize_with = "null_as_default")]
    pub user_visible_state: String,

    #[serde(rename = "properties.fullyQualifiedDomainName", deserialize_with = "null_as_default")]
    pub fully_qualified_domain_name: String,

    #[serde(rename = "properties.earliestRestoreDate")]
    pub earliest_restore_date: Option<DateTime<Utc>>,

    #[serde(rename = "properties.storageProfile", deserialize_with = "null_as_default")]
    pub storage_profile: MySqlStorageProfile,

    #[serde(rename = "properties.replicationRole", deserialize_with = "null_as_default")]
    pub replication_role: String,

    #[serde(rename = "properties.masterServerId", deserialize_with = "null_as_default")]
    pub master_server_id: String,

    #[serde(rename = "properties.publicNetworkAccess", deserialize_with = "null_as_default")]
    pub public_network_access: String,

    #[serde(rename = "properties.privateEndpointConnections", deserialize_with = "null_as_default")]
    pub private_endpoint_connections: Vec<Value>,

    #[serde(deserialize_with = "null_as_default")]
    pub tags: HashMap<String, Value>,

    #[serde(deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub resource_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MySqlSku {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tier: String,
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub family: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MySqlStorageProfile {
    #[serde(deserialize_with = "null_as_default")]
    pub backup_retention_days: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub geo_redundant_backup: String,
    #[serde(rename = "storageMB", deserialize_with = "null_as_default")]
    pub storage_mb: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub storage_autogrow: String,
}

/// A database on a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MySqlDatabase {
    #[serde(rename = "properties.charset", deserialize_with = "null_as_default")]
    pub charset: String,

    #[serde(rename = "properties.collation", deserialize_with = "null_as_default")]
    pub collation: String,

    #[serde(deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub resource_type: String,
}

impl Named for MySqlServer {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for MySqlDatabase {
    fn name(&self) -> &str {
        &self.name
    }
}

const SERVER_CREATE: Endpoint<MySqlServerRequest, ()> =
    Endpoint::post("MySqlServerCreate", "subscriptions/{tenant}/CreateMySql");
const SERVER_LIST: Endpoint<(), Option<Vec<MySqlServer>>> =
    Endpoint::get("MySqlServerList", "subscriptions/{tenant}/ListMySqls");
const SERVER_DELETE: Endpoint<(), ()> =
    Endpoint::post("MySqlServerDelete", "subscriptions/{tenant}/DeleteMySql/{name}");
const DATABASE_LIST: Endpoint<(), Option<Vec<MySqlDatabase>>> =
    Endpoint::get("MySqlDatabaseList", "subscriptions/{tenant}/ListMySqlDatabases/{server}");

impl DuploClient {
    pub async fn mysql_server_create(&self, tenant_id: &str, rq: &MySqlServerRequest) -> Result<(), ApiError> {
        SERVER_CREATE
            .call(self.transport(), &[tenant_id], &[tenant_id, rq.name.as_str()], Some(rq))
            .await
    }

    pub async fn mysql_server_list(&self, tenant_id: &str) -> Result<Vec<MySqlServer>, ApiError> {
        let servers = SERVER_LIST
            .call(self.transport(), &[tenant_id], &[tenant_id], None)
            .await?;
        Ok(servers.unwrap_or_default())
    }

    /// Finds a server by exact name. `Ok(None)` when absent.
    pub async fn mysql_server_get(&self, tenant_id: &str, name: &str) -> Result<Option<MySqlServer>, ApiError> {
        let servers = self.mysql_server_list(tenant_id).await?;
        Ok(find_by_name(servers, name))
    }

    pub async fn mysql_server_exists(&self, tenant_id: &str, name: &str) -> Result<bool, ApiError> {
        Ok(self.mysql_server_get(tenant_id, name).await?.is_some())
    }

    /// Lists the databases hosted on `server`.
    pub async fn mysql_database_list(&self, tenant_id: &str, server: &str) -> Result<Vec<MySqlDatabase>, ApiError> {
        let args = [tenant_id, server];
        let databases = DATABASE_LIST.call(self.transport(), &args, &args, None).await?;
        Ok(databases.unwrap_or_default())
    }

    /// Deletes a server. The remote API uses POST for this.
    pub async fn mysql_server_delete(&self, tenant_id: &str, name: &str) -> Result<(), ApiError> {
        let args = [tenant_id, name];
        SERVER_DELETE.call(self.transport(), &args, &args, Some(&())).await
    }
}
