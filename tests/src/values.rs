//! Shared fixture values.

use apigw_kernel::types::ApiStage;

pub const AWS_ERROR: &str = "AWS Error";
pub const MUST_SUPPLY: &str = "Must supply";

pub const EMPTY_STRING: &str = "";
pub const WHITESPACE: &str = "   ";

pub const DESCRIPTION: &str = "description";
pub const NAME: &str = "name";
pub const KEY: &str = "key";
pub const KEY_TYPE: &str = "API_KEY";
pub const STRING_VALUE: &str = "value";
pub const USAGE_PLAN_ID: &str = "usage-plan-id";

/// A single stage with only `apiId` set.
pub fn api_stage_array() -> Vec<ApiStage> {
    vec![ApiStage {
        api_id: Some(STRING_VALUE.to_string()),
        ..Default::default()
    }]
}
