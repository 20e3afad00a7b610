//! APIGW Testing Framework
//!
//! Stand-ins for the helper's collaborators so operations can be exercised
//! without network access or AWS credentials.

pub mod logger;
pub mod repository;
pub mod values;

pub use logger::{LogEntry, LogStage, RecordingLogHelper};
pub use repository::{MockApiGatewayRepository, MockAwsError, RecordedRequest, RemoteOperation};

/// Route `tracing` output to the test harness.
///
/// Honours `RUST_LOG`. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
