//! Tabular source errors. The only fatal failures in an analysis run.

/// Errors raised when the external tabular source cannot be read at all.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Input source unavailable: {0}")]
    InputUnavailable(String),

    #[error("Dictionary source unavailable: {0}")]
    DictionaryUnavailable(String),
}
