//! Remote gateway client abstraction
//!
//! [`ApiGatewayRepository`] is the seam between the helper and the network.
//! The production implementation wraps the AWS SDK client; tests substitute
//! an in-memory stub.

use crate::error::RemoteError;
use crate::request::{
    CreateApiKeyRequest, CreateUsagePlanKeyRequest, CreateUsagePlanRequest, DeleteApiKeyRequest,
    DeleteUsagePlanKeyRequest, DeleteUsagePlanRequest, GetApiKeyRequest,
};
use crate::types::{ApiKey, EmptyResponse, UsagePlan, UsagePlanKey};
use async_trait::async_trait;

/// Result of a single remote call.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote API Gateway management operations.
///
/// One method per remote call. Implementations perform the call once and
/// report the outcome as-is; retries, signing and transport belong to the
/// implementation, not to callers.
///
/// # Example
///
/// ```rust,ignore
/// use apigw_kernel::repository::ApiGatewayRepository;
/// use apigw_kernel::request::GetApiKeyRequest;
///
/// async fn lookup(repo: &dyn ApiGatewayRepository, id: &str) {
///     let request = GetApiKeyRequest { api_key: id.to_string() };
///     let key = repo.get_api_key(&request).await.unwrap();
///     println!("{:?}", key.name);
/// }
/// ```
#[async_trait]
pub trait ApiGatewayRepository: Send + Sync {
    async fn create_api_key(&self, request: &CreateApiKeyRequest) -> RemoteResult<ApiKey>;

    async fn create_usage_plan(&self, request: &CreateUsagePlanRequest) -> RemoteResult<UsagePlan>;

    async fn create_usage_plan_key(
        &self,
        request: &CreateUsagePlanKeyRequest,
    ) -> RemoteResult<UsagePlanKey>;

    async fn delete_api_key(&self, request: &DeleteApiKeyRequest) -> RemoteResult<EmptyResponse>;

    async fn delete_usage_plan(
        &self,
        request: &DeleteUsagePlanRequest,
    ) -> RemoteResult<EmptyResponse>;

    async fn delete_usage_plan_key(
        &self,
        request: &DeleteUsagePlanKeyRequest,
    ) -> RemoteResult<EmptyResponse>;

    async fn get_api_key(&self, request: &GetApiKeyRequest) -> RemoteResult<ApiKey>;
}
