use apigw_kernel::ApiGatewayRepository;
use apigw_kernel::LogHelper;
use apigw_kernel::request::{DeleteUsagePlanRequest, GetApiKeyRequest};
use apigw_kernel::types::ApiKey;
use apigw_testing::values::*;
use apigw_testing::{
    LogStage, MockApiGatewayRepository, MockAwsError, RecordedRequest, RecordingLogHelper,
    RemoteOperation,
};
use serde_json::json;

#[tokio::test]
async fn test_mock_repository_records_and_responds() {
    let repo = MockApiGatewayRepository::new();
    let key = ApiKey {
        id: Some(KEY.to_string()),
        ..Default::default()
    };
    repo.set_api_key(key.clone()).await;

    let request = GetApiKeyRequest {
        api_key: KEY.to_string(),
    };
    let response = repo.get_api_key(&request).await.unwrap();

    assert_eq!(response, key);
    assert_eq!(repo.call_count(RemoteOperation::GetApiKey).await, 1);
    assert_eq!(repo.call_count(RemoteOperation::DeleteApiKey).await, 0);
    assert_eq!(repo.history().await, vec![RecordedRequest::GetApiKey(request)]);

    apigw_testing::assert_remote_called!(repo, RemoteOperation::GetApiKey, 1);
}

#[tokio::test]
async fn test_failing_mock_still_records() {
    let repo = MockApiGatewayRepository::failing(AWS_ERROR);

    let request = DeleteUsagePlanRequest {
        usage_plan_id: USAGE_PLAN_ID.to_string(),
    };
    let err = repo.delete_usage_plan(&request).await.unwrap_err();

    assert_eq!(err.to_string(), AWS_ERROR);
    assert!(err.downcast_ref::<MockAwsError>().is_some());
    assert_eq!(repo.total_calls().await, 1);
    assert_eq!(
        repo.last_request().await.map(|r| r.operation()),
        Some(RemoteOperation::DeleteUsagePlan)
    );
}

#[test]
fn test_recording_log_helper() {
    let logger = RecordingLogHelper::new();

    logger.log_inputs("A.Op", &json!({ "x": 1 }));
    logger.log_request("A.Op", &json!({ "x": 1 }));
    logger.log_inputs("B.Op", &json!({}));
    logger.log_response("A.Op", &json!({ "ok": true }));

    assert_eq!(
        logger.stages("A.Op"),
        vec![LogStage::Inputs, LogStage::Request, LogStage::Response]
    );
    assert_eq!(logger.stages("B.Op"), vec![LogStage::Inputs]);
    assert_eq!(logger.last_payload(LogStage::Inputs), Some(json!({})));
    assert_eq!(logger.entries().len(), 4);

    logger.clear();
    assert!(logger.entries().is_empty());
}
