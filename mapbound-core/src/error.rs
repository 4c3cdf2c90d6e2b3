use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("malformed JSON in {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid {axis} bound: {value}")]
    InvalidBound { axis: &'static str, value: f32 },
}
