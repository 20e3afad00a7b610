//! Conversions between SDK shapes and the kernel records.

use apigw_kernel::types::{ApiStage, QuotaPeriod, QuotaSettings, ThrottleSettings};
use aws_sdk_apigateway::primitives::DateTime as SdkDateTime;
use aws_sdk_apigateway::types as sdk;
use chrono::{DateTime, Utc};

/// Build an [`ApiKey`](apigw_kernel::types::ApiKey) from any SDK output that
/// exposes the API key accessors (create and get share the same shape).
macro_rules! api_key {
    ($output:expr) => {{
        let output = &$output;
        apigw_kernel::types::ApiKey {
            id: output.id().map(str::to_string),
            value: output.value().map(str::to_string),
            name: output.name().map(str::to_string),
            customer_id: output.customer_id().map(str::to_string),
            description: output.description().map(str::to_string),
            enabled: Some(output.enabled()),
            created_date: output.created_date().and_then($crate::aws::convert::timestamp),
            last_updated_date: output
                .last_updated_date()
                .and_then($crate::aws::convert::timestamp),
            stage_keys: output.stage_keys().to_vec(),
            tags: output.tags().cloned().unwrap_or_default(),
        }
    }};
}

pub(crate) fn timestamp(value: &SdkDateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(value.secs(), value.subsec_nanos())
}

pub(crate) fn throttle(value: &sdk::ThrottleSettings) -> ThrottleSettings {
    ThrottleSettings {
        burst_limit: Some(value.burst_limit()),
        rate_limit: Some(value.rate_limit()),
    }
}

pub(crate) fn sdk_throttle(value: &ThrottleSettings) -> sdk::ThrottleSettings {
    sdk::ThrottleSettings::builder()
        .set_burst_limit(value.burst_limit)
        .set_rate_limit(value.rate_limit)
        .build()
}

pub(crate) fn quota(value: &sdk::QuotaSettings) -> QuotaSettings {
    let period = match value.period() {
        Some(sdk::QuotaPeriodType::Day) => Some(QuotaPeriod::Day),
        Some(sdk::QuotaPeriodType::Week) => Some(QuotaPeriod::Week),
        Some(sdk::QuotaPeriodType::Month) => Some(QuotaPeriod::Month),
        _ => None,
    };
    QuotaSettings {
        limit: Some(value.limit()),
        offset: Some(value.offset()),
        period,
    }
}

pub(crate) fn sdk_quota(value: &QuotaSettings) -> sdk::QuotaSettings {
    sdk::QuotaSettings::builder()
        .set_limit(value.limit)
        .set_offset(value.offset)
        .set_period(value.period.map(|p| sdk::QuotaPeriodType::from(p.as_str())))
        .build()
}

pub(crate) fn api_stage(value: &sdk::ApiStage) -> ApiStage {
    ApiStage {
        api_id: value.api_id().map(str::to_string),
        stage: value.stage().map(str::to_string),
        throttle: value
            .throttle()
            .map(|m| m.iter().map(|(k, v)| (k.clone(), throttle(v))).collect())
            .unwrap_or_default(),
    }
}

pub(crate) fn sdk_api_stage(value: &ApiStage) -> sdk::ApiStage {
    let throttle = (!value.throttle.is_empty()).then(|| {
        value
            .throttle
            .iter()
            .map(|(k, v)| (k.clone(), sdk_throttle(v)))
            .collect()
    });
    sdk::ApiStage::builder()
        .set_api_id(value.api_id.clone())
        .set_stage(value.stage.clone())
        .set_throttle(throttle)
        .build()
}
