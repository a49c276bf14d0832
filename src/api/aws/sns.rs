//
//  duplo-client
//  api/aws/sns.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! SNS topics.
//!
//! Topics are identified by ARN everywhere except on create, where the
//! request carries a short name and the response carries the ARN in `Name`.
//! ARNs are inserted into paths as-is.

use serde::{Deserialize, Serialize};

use crate::api::client::DuploClient;
use crate::api::common::{null_as_default, ApiError};
use crate::api::endpoint::{find_by_name, Endpoint, Named};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Request body for creating a topic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SnsTopicRequest {
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub kms_key_id: String,

    pub extra_topic_attributes: SnsTopicAttributesCreate,
}

/// Topic attributes settable at creation. Empty values are not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SnsTopicAttributesCreate {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub delivery_policy: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    #[serde(skip_serializing_if = "is_false")]
    pub fifo_topic: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub policy: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub signature_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tracing_config: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub kms_master_key_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub archive_policy: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub beginning_archive_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content_based_deduplication: String,
}

/// A topic as listed by the control plane. `name` holds the topic ARN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SnsTopic {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub resource_type: i32,

    #[serde(deserialize_with = "null_as_default")]
    pub extra_topic_attributes: SnsTopicAttributes,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

/// Attributes AWS reports for an existing topic.
///
/// SNS reports booleans as strings, so `fifo_topic` is `"true"` or `"false"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SnsTopicAttributes {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub fifo_topic: String,
}

impl SnsTopicAttributes {
    pub fn is_fifo(&self) -> bool {
        self.fifo_topic.eq_ignore_ascii_case("true")
    }
}

impl Named for SnsTopic {
    fn name(&self) -> &str {
        &self.name
    }
}

const TOPIC_CREATE: Endpoint<SnsTopicRequest, Option<SnsTopic>> =
    Endpoint::post("DuploSnsTopicCreate", "v3/subscriptions/{tenant}/aws/snsTopic");
const TOPIC_LIST: Endpoint<(), Option<Vec<SnsTopic>>> =
    Endpoint::get("TenantListSnsTopic", "v3/subscriptions/{tenant}/aws/snsTopic");
const TOPIC_ATTRIBUTES: Endpoint<(), Option<SnsTopicAttributes>> = Endpoint::get(
    "TenantGetSnsTopicAttributes",
    "v3/subscriptions/{tenant}/aws/snsTopic/{arn}/attributes",
);
const TOPIC_DELETE: Endpoint<(), ()> =
    Endpoint::delete("DuploSnsTopicDelete", "v3/subscriptions/{tenant}/aws/snsTopic/{arn}");

impl DuploClient {
    pub async fn sns_topic_create(
        &self,
        tenant_id: &str,
        rq: &SnsTopicRequest,
    ) -> Result<SnsTopic, ApiError> {
        let topic = TOPIC_CREATE
            .call(self.transport(), &[tenant_id], &[tenant_id, rq.name.as_str()], Some(rq))
            .await?;
        Ok(topic.unwrap_or_default())
    }

    /// Lists the tenant's topics. A `null` body is an empty list.
    pub async fn sns_topic_list(&self, tenant_id: &str) -> Result<Vec<SnsTopic>, ApiError> {
        let topics = TOPIC_LIST
            .call(self.transport(), &[tenant_id], &[tenant_id], None)
            .await?;
        Ok(topics.unwrap_or_default())
    }

    /// Finds a topic by ARN in the tenant's topic list.
    ///
    /// Returns `Ok(None)` when no topic matches; callers must check.
    pub async fn sns_topic_get(&self, tenant_id: &str, arn: &str) -> Result<Option<SnsTopic>, ApiError> {
        let topics = self.sns_topic_list(tenant_id).await?;
        Ok(find_by_name(topics, arn))
    }

    /// Fetches a topic's live attributes.
    ///
    /// Right after creation AWS may still answer 400 here. This call does
    /// not retry; check [`ApiError::status`] and try again if needed.
    pub async fn sns_topic_attributes(
        &self,
        tenant_id: &str,
        arn: &str,
    ) -> Result<SnsTopicAttributes, ApiError> {
        let args = [tenant_id, arn];
        let attributes = TOPIC_ATTRIBUTES.call(self.transport(), &args, &args, None).await?;
        Ok(attributes.unwrap_or_default())
    }

    /// Deletes a topic by ARN.
    pub async fn sns_topic_delete(&self, tenant_id: &str, arn: &str) -> Result<(), ApiError> {
        let args = [tenant_id, arn];
        TOPIC_DELETE.call(self.transport(), &args, &args, None).await
    }
}
