//! APIGW Helper - a validating, logging wrapper over API Gateway management
//!
//! [`ApiGatewayHelper`] exposes seven operations (create/delete API keys,
//! usage plans and usage plan keys, and fetching an API key). Each one
//! checks its required inputs, builds the request payload, makes a single
//! remote call and returns the response untouched. Entries are written to
//! the injected [`LogHelper`](apigw_kernel::LogHelper) for the inputs, the
//! request and the response.
//!
//! # Features
//!
//! | Feature | What it enables |
//! |---------|-----------------|
//! | `aws`   | `AwsApiGatewayRepository` and [`ApiGatewayHelper::new`], which builds it by default |
//!
//! # Quick-start
//!
//! ```rust,no_run
//! # #[cfg(feature = "aws")]
//! # async fn _doc() {
//! use apigw_helper::{ApiGatewayHelper, ApiGatewayOperations};
//! use apigw_kernel::{ClientConfig, TracingLogHelper};
//! use std::sync::Arc;
//!
//! let options = ClientConfig::new().with_region("us-east-1");
//! let helper = ApiGatewayHelper::new(Arc::new(TracingLogHelper::new()), None, Some(options)).await;
//!
//! let key = helper.create_api_key("partner", "Partner access", None).await.unwrap();
//! println!("created {:?}", key.id);
//! # }
//! ```

pub mod helper;
pub mod operations;

#[cfg(feature = "aws")]
pub mod aws;

pub use helper::ApiGatewayHelper;
pub use operations::{ApiGatewayOperations, action};

#[cfg(feature = "aws")]
pub use aws::AwsApiGatewayRepository;
