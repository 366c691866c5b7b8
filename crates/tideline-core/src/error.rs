// File: crates/tideline-core/src/error.rs
// Summary: Error type for the fallible boundary of the engine (dataset loading).

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read dataset file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
