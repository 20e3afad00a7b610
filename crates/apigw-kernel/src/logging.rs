//! Logging capability injected into the helper
//!
//! The helper logs at three points of every operation: the raw inputs, the
//! assembled request and the response. Where those entries end up is decided
//! by the [`LogHelper`] implementation handed to the helper.

use serde_json::Value;
use tracing::Level;

/// Structured log sink for helper operations.
///
/// `action` is the `"<Helper>.<Operation>"` label; `payload` is the JSON
/// form of the inputs, request or response.
pub trait LogHelper: Send + Sync {
    fn log_inputs(&self, action: &str, payload: &Value);

    fn log_request(&self, action: &str, payload: &Value);

    fn log_response(&self, action: &str, payload: &Value);
}

macro_rules! emit {
    ($level:expr, $stage:literal, $action:expr, $payload:expr) => {
        let level = $level;
        if level == Level::TRACE {
            tracing::trace!(action = $action, payload = %$payload, $stage);
        } else if level == Level::DEBUG {
            tracing::debug!(action = $action, payload = %$payload, $stage);
        } else if level == Level::INFO {
            tracing::info!(action = $action, payload = %$payload, $stage);
        } else if level == Level::WARN {
            tracing::warn!(action = $action, payload = %$payload, $stage);
        } else {
            tracing::error!(action = $action, payload = %$payload, $stage);
        }
    };
}

/// [`LogHelper`] that forwards entries to `tracing`.
///
/// Events are emitted at `DEBUG` unless another level is chosen with
/// [`TracingLogHelper::with_level`].
#[derive(Debug, Clone, Copy)]
pub struct TracingLogHelper {
    level: Level,
}

impl TracingLogHelper {
    pub fn new() -> Self {
        Self {
            level: Level::DEBUG,
        }
    }

    pub fn with_level(level: Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingLogHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl LogHelper for TracingLogHelper {
    fn log_inputs(&self, action: &str, payload: &Value) {
        emit!(self.level, "inputs", action, payload);
    }

    fn log_request(&self, action: &str, payload: &Value) {
        emit!(self.level, "request", action, payload);
    }

    fn log_response(&self, action: &str, payload: &Value) {
        emit!(self.level, "response", action, payload);
    }
}

/// [`LogHelper`] that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogHelper;

impl LogHelper for NoopLogHelper {
    fn log_inputs(&self, _action: &str, _payload: &Value) {}

    fn log_request(&self, _action: &str, _payload: &Value) {}

    fn log_response(&self, _action: &str, _payload: &Value) {}
}
