// lib/src/workflows/output.rs

use models::errors::ClinicError;

/// Destination for the human-readable results of a workflow or listing.
/// Rendering (color, stream) is up to the implementation.
#[cfg_attr(test, mockall::automock)]
pub trait OutputSink {
    fn success(&mut self, message: &str);
    fn failure(&mut self, error: &ClinicError);
    fn line(&mut self, text: &str);

    /// Clears whatever the sink renders to; a no-op for non-terminal sinks.
    fn clear(&mut self) {}
}

/// Collects everything it is given; used by tests and by callers that want
/// to inspect output before printing it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BufferedOutput {
    pub successes: Vec<String>,
    pub failures: Vec<String>,
    pub lines: Vec<String>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for BufferedOutput {
    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn failure(&mut self, error: &ClinicError) {
        self.failures.push(error.to_string());
    }

    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
