//! APIGW Kernel - shared building blocks for the API Gateway helper
//!
//! This crate holds everything the helper depends on but does not itself
//! implement: the resource records, the per-operation request payloads, and
//! the three injected collaborators.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | `ApiKey`, `UsagePlan`, `UsagePlanKey`, `ApiStage`, quota and throttle settings |
//! | [`request`] | One request payload per remote operation |
//! | [`repository`] | `ApiGatewayRepository`, the remote client seam |
//! | [`logging`] | `LogHelper` and its `tracing`-backed implementation |
//! | [`validation`] | `ObjectOperations` blank/empty checks |
//! | [`error`] | `HelperError` and the opaque `RemoteError` |
//! | `config` | `ClientConfig` and file/env loaders (feature `config`) |

// error module
pub mod error;
pub use error::{HelperError, HelperResult, RemoteError};

// types module
pub mod types;
pub use types::*;

// request module
pub mod request;

// repository module
pub mod repository;
pub use repository::ApiGatewayRepository;

// logging module
pub mod logging;
pub use logging::{LogHelper, NoopLogHelper, TracingLogHelper};

// validation module
pub mod validation;
pub use validation::{DefaultObjectOperations, ObjectOperations};

// config module
#[cfg(feature = "config")]
pub mod config;
#[cfg(feature = "config")]
pub use crate::config::ClientConfig;
