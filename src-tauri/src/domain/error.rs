//! Data Source Errors

/// Common result type for data source operations
pub type SourceResult<T> = Result<T, DataSourceError>;

/// Every variant counts as a network failure for the screen
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid photo payload: {0}")]
    Decode(#[from] serde_json::Error),
}
