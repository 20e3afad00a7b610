use apigw_kernel::error::RemoteError;
use apigw_kernel::repository::{ApiGatewayRepository, RemoteResult};
use apigw_kernel::request::{
    CreateApiKeyRequest, CreateUsagePlanKeyRequest, CreateUsagePlanRequest, DeleteApiKeyRequest,
    DeleteUsagePlanKeyRequest, DeleteUsagePlanRequest, GetApiKeyRequest,
};
use apigw_kernel::types::{ApiKey, EmptyResponse, UsagePlan, UsagePlanKey};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The seven remote calls, for call-count assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    CreateApiKey,
    CreateUsagePlan,
    CreateUsagePlanKey,
    DeleteApiKey,
    DeleteUsagePlan,
    DeleteUsagePlanKey,
    GetApiKey,
}

/// A request as received by the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedRequest {
    CreateApiKey(CreateApiKeyRequest),
    CreateUsagePlan(CreateUsagePlanRequest),
    CreateUsagePlanKey(CreateUsagePlanKeyRequest),
    DeleteApiKey(DeleteApiKeyRequest),
    DeleteUsagePlan(DeleteUsagePlanRequest),
    DeleteUsagePlanKey(DeleteUsagePlanKeyRequest),
    GetApiKey(GetApiKeyRequest),
}

impl RecordedRequest {
    pub fn operation(&self) -> RemoteOperation {
        match self {
            RecordedRequest::CreateApiKey(_) => RemoteOperation::CreateApiKey,
            RecordedRequest::CreateUsagePlan(_) => RemoteOperation::CreateUsagePlan,
            RecordedRequest::CreateUsagePlanKey(_) => RemoteOperation::CreateUsagePlanKey,
            RecordedRequest::DeleteApiKey(_) => RemoteOperation::DeleteApiKey,
            RecordedRequest::DeleteUsagePlan(_) => RemoteOperation::DeleteUsagePlan,
            RecordedRequest::DeleteUsagePlanKey(_) => RemoteOperation::DeleteUsagePlanKey,
            RecordedRequest::GetApiKey(_) => RemoteOperation::GetApiKey,
        }
    }
}

/// Error produced by a failing [`MockApiGatewayRepository`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct MockAwsError {
    pub message: String,
}

/// In-memory stand-in for the remote API Gateway client.
///
/// Responses default to empty records. Every call is recorded, including
/// calls that are configured to fail.
#[derive(Clone, Default)]
pub struct MockApiGatewayRepository {
    pub api_key: Arc<RwLock<ApiKey>>,
    pub usage_plan: Arc<RwLock<UsagePlan>>,
    pub usage_plan_key: Arc<RwLock<UsagePlanKey>>,
    /// When set, every call fails with this message
    pub failure: Arc<RwLock<Option<String>>>,
    /// Track all requests passed to this repository
    pub call_history: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl MockApiGatewayRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Arc::new(RwLock::new(Some(message.into()))),
            ..Self::default()
        }
    }

    pub async fn set_api_key(&self, api_key: ApiKey) {
        *self.api_key.write().await = api_key;
    }

    pub async fn set_usage_plan(&self, usage_plan: UsagePlan) {
        *self.usage_plan.write().await = usage_plan;
    }

    pub async fn set_usage_plan_key(&self, usage_plan_key: UsagePlanKey) {
        *self.usage_plan_key.write().await = usage_plan_key;
    }

    /// Make subsequent calls fail with `message`.
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    /// Retrieve the history of requests made to this repository
    pub async fn history(&self) -> Vec<RecordedRequest> {
        self.call_history.read().await.clone()
    }

    /// Number of calls made to one operation
    pub async fn call_count(&self, operation: RemoteOperation) -> usize {
        self.call_history
            .read()
            .await
            .iter()
            .filter(|r| r.operation() == operation)
            .count()
    }

    /// Number of calls made across all operations
    pub async fn total_calls(&self) -> usize {
        self.call_history.read().await.len()
    }

    /// Most recent request received by any operation
    pub async fn last_request(&self) -> Option<RecordedRequest> {
        self.call_history.read().await.last().cloned()
    }

    async fn record<T: Clone>(&self, request: RecordedRequest, response: &RwLock<T>) -> RemoteResult<T> {
        self.call_history.write().await.push(request);
        if let Some(message) = self.failure.read().await.clone() {
            return Err(RemoteError::new(MockAwsError { message }));
        }
        Ok(response.read().await.clone())
    }

    async fn record_empty(&self, request: RecordedRequest) -> RemoteResult<EmptyResponse> {
        self.record(request, &RwLock::new(EmptyResponse {})).await
    }
}

#[async_trait]
impl ApiGatewayRepository for MockApiGatewayRepository {
    async fn create_api_key(&self, request: &CreateApiKeyRequest) -> RemoteResult<ApiKey> {
        self.record(RecordedRequest::CreateApiKey(request.clone()), &self.api_key)
            .await
    }

    async fn create_usage_plan(&self, request: &CreateUsagePlanRequest) -> RemoteResult<UsagePlan> {
        self.record(
            RecordedRequest::CreateUsagePlan(request.clone()),
            &self.usage_plan,
        )
        .await
    }

    async fn create_usage_plan_key(
        &self,
        request: &CreateUsagePlanKeyRequest,
    ) -> RemoteResult<UsagePlanKey> {
        self.record(
            RecordedRequest::CreateUsagePlanKey(request.clone()),
            &self.usage_plan_key,
        )
        .await
    }

    async fn delete_api_key(&self, request: &DeleteApiKeyRequest) -> RemoteResult<EmptyResponse> {
        self.record_empty(RecordedRequest::DeleteApiKey(request.clone()))
            .await
    }

    async fn delete_usage_plan(
        &self,
        request: &DeleteUsagePlanRequest,
    ) -> RemoteResult<EmptyResponse> {
        self.record_empty(RecordedRequest::DeleteUsagePlan(request.clone()))
            .await
    }

    async fn delete_usage_plan_key(
        &self,
        request: &DeleteUsagePlanKeyRequest,
    ) -> RemoteResult<EmptyResponse> {
        self.record_empty(RecordedRequest::DeleteUsagePlanKey(request.clone()))
            .await
    }

    async fn get_api_key(&self, request: &GetApiKeyRequest) -> RemoteResult<ApiKey> {
        self.record(RecordedRequest::GetApiKey(request.clone()), &self.api_key)
            .await
    }
}

/// Assert how many times the mock saw an operation.
#[macro_export]
macro_rules! assert_remote_called {
    ($repo:expr, $operation:expr, $expected_count:expr) => {
        let count = $repo.call_count($operation).await;
        assert_eq!(
            count, $expected_count,
            "Expected {:?} to be called {} times, but was called {} times",
            $operation, $expected_count, count
        );
    };
}
