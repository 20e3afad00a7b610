//! AWS API Gateway repository
//!
//! Implements [`ApiGatewayRepository`] with the official
//! `aws-sdk-apigateway` crate. Setting `endpoint_url` points the client at
//! an emulator such as LocalStack.
//!
//! # Authentication
//!
//! Credentials are resolved in the standard AWS order:
//! environment variables → shared credentials file → IAM instance profile.
//! `profile_name` selects a named profile from the shared files.
//!
//! SDK errors are boxed into [`RemoteError`] as-is, so callers can still
//! downcast to the typed `SdkError`.

#[macro_use]
mod convert;

use apigw_kernel::config::ClientConfig;
use apigw_kernel::error::RemoteError;
use apigw_kernel::repository::{ApiGatewayRepository, RemoteResult};
use apigw_kernel::request::{
    CreateApiKeyRequest, CreateUsagePlanKeyRequest, CreateUsagePlanRequest, DeleteApiKeyRequest,
    DeleteUsagePlanKeyRequest, DeleteUsagePlanRequest, GetApiKeyRequest,
};
use apigw_kernel::types::{ApiKey, EmptyResponse, UsagePlan, UsagePlanKey};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_apigateway::Client;
use aws_sdk_apigateway::config::Builder as ApiGatewayBuilder;

/// API Gateway management client backed by the AWS SDK.
#[derive(Debug, Clone)]
pub struct AwsApiGatewayRepository {
    client: Client,
}

impl AwsApiGatewayRepository {
    /// Build the repository from a [`ClientConfig`], loading credentials
    /// through the standard AWS SDK chain.
    pub async fn new(config: ClientConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(region) = &config.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }

        if let Some(profile) = &config.profile_name {
            loader = loader.profile_name(profile);
        }

        let sdk_config = loader.load().await;

        let mut builder = ApiGatewayBuilder::from(&sdk_config);

        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        tracing::info!(
            region = ?sdk_config.region().map(|r| r.to_string()),
            endpoint = ?config.endpoint_url,
            "API Gateway client initialized"
        );

        Self {
            client: Client::from_conf(builder.build()),
        }
    }

    /// Wrap an already configured SDK client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl ApiGatewayRepository for AwsApiGatewayRepository {
    async fn create_api_key(&self, request: &CreateApiKeyRequest) -> RemoteResult<ApiKey> {
        let output = self
            .client
            .create_api_key()
            .name(&request.name)
            .description(&request.description)
            .set_value(request.value.clone())
            .set_generate_distinct_id(request.generate_distinct_id)
            .send()
            .await
            .map_err(RemoteError::new)?;

        Ok(api_key!(output))
    }

    async fn create_usage_plan(&self, request: &CreateUsagePlanRequest) -> RemoteResult<UsagePlan> {
        let stages = request.api_stages.iter().map(convert::sdk_api_stage).collect();

        let output = self
            .client
            .create_usage_plan()
            .name(&request.name)
            .description(&request.description)
            .set_api_stages(Some(stages))
            .set_quota(request.quota.as_ref().map(convert::sdk_quota))
            .set_throttle(request.throttle.as_ref().map(convert::sdk_throttle))
            .send()
            .await
            .map_err(RemoteError::new)?;

        Ok(UsagePlan {
            id: output.id().map(str::to_string),
            name: output.name().map(str::to_string),
            description: output.description().map(str::to_string),
            api_stages: output.api_stages().iter().map(convert::api_stage).collect(),
            throttle: output.throttle().map(convert::throttle),
            quota: output.quota().map(convert::quota),
            product_code: output.product_code().map(str::to_string),
            tags: output.tags().cloned().unwrap_or_default(),
        })
    }

    async fn create_usage_plan_key(
        &self,
        request: &CreateUsagePlanKeyRequest,
    ) -> RemoteResult<UsagePlanKey> {
        let output = self
            .client
            .create_usage_plan_key()
            .key_id(&request.key_id)
            .key_type(&request.key_type)
            .usage_plan_id(&request.usage_plan_id)
            .send()
            .await
            .map_err(RemoteError::new)?;

        Ok(UsagePlanKey {
            id: output.id().map(str::to_string),
            key_type: output.r#type().map(str::to_string),
            value: output.value().map(str::to_string),
            name: output.name().map(str::to_string),
        })
    }

    async fn delete_api_key(&self, request: &DeleteApiKeyRequest) -> RemoteResult<EmptyResponse> {
        self.client
            .delete_api_key()
            .api_key(&request.api_key)
            .send()
            .await
            .map_err(RemoteError::new)?;
        Ok(EmptyResponse {})
    }

    async fn delete_usage_plan(
        &self,
        request: &DeleteUsagePlanRequest,
    ) -> RemoteResult<EmptyResponse> {
        self.client
            .delete_usage_plan()
            .usage_plan_id(&request.usage_plan_id)
            .send()
            .await
            .map_err(RemoteError::new)?;
        Ok(EmptyResponse {})
    }

    async fn delete_usage_plan_key(
        &self,
        request: &DeleteUsagePlanKeyRequest,
    ) -> RemoteResult<EmptyResponse> {
        self.client
            .delete_usage_plan_key()
            .key_id(&request.key_id)
            .usage_plan_id(&request.usage_plan_id)
            .send()
            .await
            .map_err(RemoteError::new)?;
        Ok(EmptyResponse {})
    }

    async fn get_api_key(&self, request: &GetApiKeyRequest) -> RemoteResult<ApiKey> {
        let output = self
            .client
            .get_api_key()
            .api_key(&request.api_key)
            .send()
            .await
            .map_err(RemoteError::new)?;

        Ok(api_key!(output))
    }
}
