//! Request payloads, one per remote operation.
//!
//! Each payload holds exactly the fields the remote call accepts. Optional
//! fields that were not supplied are left out of the serialized form, which
//! is also what gets logged.

use crate::types::{ApiStage, QuotaSettings, ThrottleSettings};
use serde::{Deserialize, Serialize};

/// Create an API key.
///
/// Exactly one of `value` and `generate_distinct_id` is set by the helper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeyRequest {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generate_distinct_id: Option<bool>,
}

/// Create a usage plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUsagePlanRequest {
    pub name: String,
    pub description: String,
    pub api_stages: Vec<ApiStage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<QuotaSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttle: Option<ThrottleSettings>,
}

/// Attach an API key to a usage plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUsagePlanKeyRequest {
    pub key_id: String,
    pub key_type: String,
    pub usage_plan_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteApiKeyRequest {
    pub api_key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUsagePlanRequest {
    pub usage_plan_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUsagePlanKeyRequest {
    pub key_id: String,
    pub usage_plan_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApiKeyRequest {
    pub api_key: String,
}
