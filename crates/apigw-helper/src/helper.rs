//! The API Gateway helper
//!
//! Every operation runs the same sequence:
//!
//! 1. log the raw inputs
//! 2. run the guard clauses in order, failing on the first blank input
//! 3. assemble the request payload and log it
//! 4. make exactly one repository call
//! 5. log the response and hand it back unchanged
//!
//! Repository failures are not caught or rewritten; they reach the caller as
//! [`HelperError::Remote`](apigw_kernel::HelperError::Remote).

use crate::operations::{ApiGatewayOperations, action};
use apigw_kernel::error::{HelperError, HelperResult};
use apigw_kernel::logging::LogHelper;
use apigw_kernel::repository::ApiGatewayRepository;
use apigw_kernel::request::{
    CreateApiKeyRequest, CreateUsagePlanKeyRequest, CreateUsagePlanRequest, DeleteApiKeyRequest,
    DeleteUsagePlanKeyRequest, DeleteUsagePlanRequest, GetApiKeyRequest,
};
use apigw_kernel::types::{
    ApiKey, ApiStage, EmptyResponse, QuotaSettings, ThrottleSettings, UsagePlan, UsagePlanKey,
};
use apigw_kernel::validation::{DefaultObjectOperations, ObjectOperations, slice_len};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Field text reported when a usage plan is requested without stages.
const AT_LEAST_ONE_API_STAGE: &str = "at least one apiStage";

/// Validating, logging wrapper around an [`ApiGatewayRepository`].
///
/// Holds no state besides its three collaborators, so one instance can serve
/// any number of concurrent calls.
#[derive(Clone)]
pub struct ApiGatewayHelper {
    repository: Arc<dyn ApiGatewayRepository>,
    log_helper: Arc<dyn LogHelper>,
    object_operations: Arc<dyn ObjectOperations>,
}

impl ApiGatewayHelper {
    /// Build a helper around an existing repository.
    pub fn with_repository(
        log_helper: Arc<dyn LogHelper>,
        repository: Arc<dyn ApiGatewayRepository>,
    ) -> Self {
        Self {
            repository,
            log_helper,
            object_operations: Arc::new(DefaultObjectOperations),
        }
    }

    /// Build a helper, creating the AWS-backed repository if none is given.
    ///
    /// `options` is only consulted when `repository` is `None`; an absent
    /// configuration means the standard AWS resolution chain.
    #[cfg(feature = "aws")]
    pub async fn new(
        log_helper: Arc<dyn LogHelper>,
        repository: Option<Arc<dyn ApiGatewayRepository>>,
        options: Option<apigw_kernel::ClientConfig>,
    ) -> Self {
        let repository = match repository {
            Some(repository) => repository,
            None => {
                let config = options.unwrap_or_default();
                Arc::new(crate::aws::AwsApiGatewayRepository::new(config).await)
            }
        };
        Self::with_repository(log_helper, repository)
    }

    /// Replace the blank/empty checks used by the guard clauses.
    pub fn with_object_operations(mut self, object_operations: Arc<dyn ObjectOperations>) -> Self {
        self.object_operations = object_operations;
        self
    }

    /// The repository all calls are delegated to.
    pub fn repository(&self) -> &Arc<dyn ApiGatewayRepository> {
        &self.repository
    }

    fn reject(&self, action: &'static str, field: &'static str) -> HelperError {
        tracing::debug!(action, field, "guard clause rejected input");
        HelperError::missing_field(action, field)
    }

    fn require(&self, action: &'static str, field: &'static str, value: &str) -> HelperResult<()> {
        if self.object_operations.is_null_or_whitespace(Some(value)) {
            return Err(self.reject(action, field));
        }
        Ok(())
    }

    fn log_request<T: Serialize>(&self, action: &str, request: &T) {
        self.log_helper.log_request(action, &payload(request));
    }

    fn log_response<T: Serialize>(&self, action: &str, response: &T) {
        self.log_helper.log_response(action, &payload(response));
    }
}

/// JSON form of a value for logging. Never fails the operation.
fn payload<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|e| json!({ "unserializable": e.to_string() }))
}

#[async_trait]
impl ApiGatewayOperations for ApiGatewayHelper {
    async fn create_api_key(
        &self,
        name: &str,
        description: &str,
        value: Option<&str>,
    ) -> HelperResult<ApiKey> {
        let action = action::CREATE_API_KEY;
        self.log_helper.log_inputs(
            action,
            &json!({ "name": name, "description": description, "value": value }),
        );

        // guard clauses
        self.require(action, "name", name)?;
        self.require(action, "description", description)?;

        let mut request = CreateApiKeyRequest {
            name: name.to_string(),
            description: description.to_string(),
            value: None,
            generate_distinct_id: None,
        };
        match value {
            Some(v) if !self.object_operations.is_null_or_whitespace(Some(v)) => {
                request.value = Some(v.to_string());
            }
            _ => request.generate_distinct_id = Some(true),
        }
        self.log_request(action, &request);

        let response = self.repository.create_api_key(&request).await?;
        self.log_response(action, &response);

        Ok(response)
    }

    async fn create_usage_plan(
        &self,
        name: &str,
        description: &str,
        api_stages: Vec<ApiStage>,
        quota: Option<QuotaSettings>,
        throttle: Option<ThrottleSettings>,
    ) -> HelperResult<UsagePlan> {
        let action = action::CREATE_USAGE_PLAN;
        self.log_helper.log_inputs(
            action,
            &json!({
                "name": name,
                "description": description,
                "apiStages": payload(&api_stages),
                "quota": payload(&quota),
                "throttle": payload(&throttle),
            }),
        );

        // guard clauses
        self.require(action, "name", name)?;
        self.require(action, "description", description)?;
        if self
            .object_operations
            .is_null_or_empty_slice(slice_len(Some(api_stages.as_slice())))
        {
            return Err(self.reject(action, AT_LEAST_ONE_API_STAGE));
        }

        let request = CreateUsagePlanRequest {
            name: name.to_string(),
            description: description.to_string(),
            api_stages,
            quota,
            throttle,
        };
        self.log_request(action, &request);

        let response = self.repository.create_usage_plan(&request).await?;
        self.log_response(action, &response);

        Ok(response)
    }

    async fn create_usage_plan_key(
        &self,
        key_id: &str,
        key_type: &str,
        usage_plan_id: &str,
    ) -> HelperResult<UsagePlanKey> {
        let action = action::CREATE_USAGE_PLAN_KEY;
        self.log_helper.log_inputs(
            action,
            &json!({ "keyId": key_id, "keyType": key_type, "usagePlanId": usage_plan_id }),
        );

        // guard clauses
        self.require(action, "keyId", key_id)?;
        self.require(action, "keyType", key_type)?;
        self.require(action, "usagePlanId", usage_plan_id)?;

        let request = CreateUsagePlanKeyRequest {
            key_id: key_id.to_string(),
            key_type: key_type.to_string(),
            usage_plan_id: usage_plan_id.to_string(),
        };
        self.log_request(action, &request);

        let response = self.repository.create_usage_plan_key(&request).await?;
        self.log_response(action, &response);

        Ok(response)
    }

    async fn delete_api_key(&self, api_key: &str) -> HelperResult<EmptyResponse> {
        let action = action::DELETE_API_KEY;
        self.log_helper
            .log_inputs(action, &json!({ "apiKey": api_key }));

        // guard clauses
        self.require(action, "apiKey", api_key)?;

        let request = DeleteApiKeyRequest {
            api_key: api_key.to_string(),
        };
        self.log_request(action, &request);

        let response = self.repository.delete_api_key(&request).await?;
        self.log_response(action, &response);

        Ok(response)
    }

    async fn delete_usage_plan(&self, usage_plan_id: &str) -> HelperResult<EmptyResponse> {
        let action = action::DELETE_USAGE_PLAN;
        self.log_helper
            .log_inputs(action, &json!({ "usagePlanId": usage_plan_id }));

        // guard clauses
        self.require(action, "usagePlanId", usage_plan_id)?;

        let request = DeleteUsagePlanRequest {
            usage_plan_id: usage_plan_id.to_string(),
        };
        self.log_request(action, &request);

        let response = self.repository.delete_usage_plan(&request).await?;
        self.log_response(action, &response);

        Ok(response)
    }

    async fn delete_usage_plan_key(
        &self,
        key_id: &str,
        usage_plan_id: &str,
    ) -> HelperResult<EmptyResponse> {
        let action = action::DELETE_USAGE_PLAN_KEY;
        self.log_helper.log_inputs(
            action,
            &json!({ "keyId": key_id, "usagePlanId": usage_plan_id }),
        );

        // guard clauses
        self.require(action, "keyId", key_id)?;
        self.require(action, "usagePlanId", usage_plan_id)?;

        let request = DeleteUsagePlanKeyRequest {
            key_id: key_id.to_string(),
            usage_plan_id: usage_plan_id.to_string(),
        };
        self.log_request(action, &request);

        let response = self.repository.delete_usage_plan_key(&request).await?;
        self.log_response(action, &response);

        Ok(response)
    }

    async fn get_api_key(&self, api_key: &str) -> HelperResult<ApiKey> {
        let action = action::GET_API_KEY;
        self.log_helper
            .log_inputs(action, &json!({ "apiKey": api_key }));

        // guard clauses
        self.require(action, "apiKey", api_key)?;

        let request = GetApiKeyRequest {
            api_key: api_key.to_string(),
        };
        self.log_request(action, &request);

        let response = self.repository.get_api_key(&request).await?;
        self.log_response(action, &response);

        Ok(response)
    }
}
