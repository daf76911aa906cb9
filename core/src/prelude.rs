use std::path::PathBuf;

/// Common error type for signal generation and document handling.
#[derive(thiserror::Error, Debug)]
pub enum SignalError {
    #[error("i/o failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("encoding failure: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("decoding failure: {0}")]
    Decode(#[from] bson::de::Error),
    #[error("unsupported document version {0}")]
    UnsupportedVersion(i32),
}

pub type SignalResult<T> = Result<T, SignalError>;

impl SignalError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SignalError::Io {
            path: path.into(),
            source,
        }
    }
}
