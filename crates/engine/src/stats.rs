use crate::error::EngineError;

/// Outcome of displaying one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub source: String,
    pub lines: usize,
    pub nonblank: usize,
    pub bytes: u64,
    /// Lines that lost bytes to the line-length bound.
    pub truncated_lines: usize,
}

impl StreamStats {
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }
}

/// Result of a full run over all sources.
#[derive(Debug, Default)]
pub struct RunResult {
    pub stats: Vec<StreamStats>,
    pub errors: Vec<(String, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
