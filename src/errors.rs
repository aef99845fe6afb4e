use thiserror::Error;

use crate::api::ApiError;

pub type Result<T> = std::result::Result<T, Error>;

/// Error type that captures the failures a query can surface.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("State file error: {0}")]
    State(#[from] serde_json::Error),
    /// Upstream failure that escaped classification; the host logs it as-is.
    #[error(transparent)]
    Api(#[from] ApiError),
}
