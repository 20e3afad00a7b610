use apigw_kernel::logging::LogHelper;
use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

/// Which of the three logging points produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStage {
    Inputs,
    Request,
    Response,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub stage: LogStage,
    pub action: String,
    pub payload: Value,
}

/// A [`LogHelper`] that keeps every entry for later assertions.
#[derive(Clone, Default)]
pub struct RecordingLogHelper {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl RecordingLogHelper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Stages logged for one action, in order.
    pub fn stages(&self, action: &str) -> Vec<LogStage> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.action == action)
            .map(|e| e.stage)
            .collect()
    }

    /// Payload of the most recent entry with the given stage.
    pub fn last_payload(&self, stage: LogStage) -> Option<Value> {
        self.entries
            .lock()
            .iter()
            .rev()
            .find(|e| e.stage == stage)
            .map(|e| e.payload.clone())
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, stage: LogStage, action: &str, payload: &Value) {
        self.entries.lock().push(LogEntry {
            stage,
            action: action.to_string(),
            payload: payload.clone(),
        });
    }
}

impl LogHelper for RecordingLogHelper {
    fn log_inputs(&self, action: &str, payload: &Value) {
        self.push(LogStage::Inputs, action, payload);
    }

    fn log_request(&self, action: &str, payload: &Value) {
        self.push(LogStage::Request, action, payload);
    }

    fn log_response(&self, action: &str, payload: &Value) {
        self.push(LogStage::Response, action, payload);
    }
}
