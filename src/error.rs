use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read record: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

impl StatsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StatsError::Io {
            path: path.into(),
            source,
        }
    }
}
