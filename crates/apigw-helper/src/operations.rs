//! Public operation surface of the helper.

use apigw_kernel::error::HelperResult;
use apigw_kernel::types::{
    ApiKey, ApiStage, EmptyResponse, QuotaSettings, ThrottleSettings, UsagePlan, UsagePlanKey,
};
use async_trait::async_trait;

/// Action labels used in log entries and validation messages.
pub mod action {
    pub const CREATE_API_KEY: &str = "APIGatewayHelper.CreateApiKeyAsync";
    pub const CREATE_USAGE_PLAN: &str = "APIGatewayHelper.CreateUsagePlanAsync";
    pub const CREATE_USAGE_PLAN_KEY: &str = "APIGatewayHelper.CreateUsagePlanKeyAsync";
    pub const DELETE_API_KEY: &str = "APIGatewayHelper.DeleteApiKeyAsync";
    pub const DELETE_USAGE_PLAN: &str = "APIGatewayHelper.DeleteUsagePlanAsync";
    pub const DELETE_USAGE_PLAN_KEY: &str = "APIGatewayHelper.DeleteUsagePlanKeyAsync";
    pub const GET_API_KEY: &str = "APIGatewayHelper.GetApiKeyAsync";
}

/// API Gateway management operations.
///
/// Every method validates its required inputs first and fails with
/// [`HelperError::MissingField`](apigw_kernel::HelperError::MissingField)
/// without touching the network when one is blank. Otherwise it performs one
/// remote call and returns its result unchanged.
#[async_trait]
pub trait ApiGatewayOperations: Send + Sync {
    /// Create an API key.
    ///
    /// When `value` is absent or blank the service generates the key value.
    async fn create_api_key(
        &self,
        name: &str,
        description: &str,
        value: Option<&str>,
    ) -> HelperResult<ApiKey>;

    /// Create a usage plan attached to at least one API stage.
    async fn create_usage_plan(
        &self,
        name: &str,
        description: &str,
        api_stages: Vec<ApiStage>,
        quota: Option<QuotaSettings>,
        throttle: Option<ThrottleSettings>,
    ) -> HelperResult<UsagePlan>;

    /// Attach the key `key_id` (of type `key_type`, e.g. `"API_KEY"`) to a usage plan.
    async fn create_usage_plan_key(
        &self,
        key_id: &str,
        key_type: &str,
        usage_plan_id: &str,
    ) -> HelperResult<UsagePlanKey>;

    async fn delete_api_key(&self, api_key: &str) -> HelperResult<EmptyResponse>;

    async fn delete_usage_plan(&self, usage_plan_id: &str) -> HelperResult<EmptyResponse>;

    /// Detach a key from a usage plan.
    async fn delete_usage_plan_key(
        &self,
        key_id: &str,
        usage_plan_id: &str,
    ) -> HelperResult<EmptyResponse>;

    async fn get_api_key(&self, api_key: &str) -> HelperResult<ApiKey>;
}
