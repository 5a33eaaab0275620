use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open '{path}': {source}")]
    SourceOpen {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{source_name}': {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Write error: {0}")]
    Write(#[source] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// 出力先の書き込み失敗か（後続ソースも同様に失敗する）
    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self, Self::Write(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
