use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("failed to read records file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid records payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("records service temporarily unavailable")]
    Unavailable,
}
