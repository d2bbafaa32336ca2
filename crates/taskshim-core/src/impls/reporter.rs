//! StdoutReporter / RecordingReporter

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::ports::{OutputReporter, ReportError, Streams};
use crate::protocol::ProtocolMessage;

/// 出力を `airplane_output <json>` の 1 行としてホストに渡す
pub struct StdoutReporter {
    streams: Arc<dyn Streams>,
}

impl StdoutReporter {
    pub fn new(streams: Arc<dyn Streams>) -> Self {
        Self { streams }
    }
}

#[async_trait]
impl OutputReporter for StdoutReporter {
    async fn report(&self, value: &serde_json::Value) -> Result<(), ReportError> {
        let line = ProtocolMessage::output(value.clone()).render();
        self.streams.stdout_line(&line)?;
        Ok(())
    }
}

/// 受け取った値を順に保持する
#[derive(Debug, Default)]
pub struct RecordingReporter {
    values: Mutex<Vec<serde_json::Value>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> Vec<serde_json::Value> {
        self.values.lock().clone()
    }
}

#[async_trait]
impl OutputReporter for RecordingReporter {
    async fn report(&self, value: &serde_json::Value) -> Result<(), ReportError> {
        self.values.lock().push(value.clone());
        Ok(())
    }
}
