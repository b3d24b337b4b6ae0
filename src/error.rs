use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Rejected before any I/O: bad extension or unknown language code.
    #[error("{0}")]
    Validation(String),

    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// Provider or transport failure, surfaced verbatim. Never retried.
    #[error("generating audio failed: {0}")]
    Synthesis(#[from] reqwest::Error),
}

impl ConvertError {
    pub fn io(context: &'static str, source: std::io::Error) -> Self {
        ConvertError::Io { context, source }
    }
}
