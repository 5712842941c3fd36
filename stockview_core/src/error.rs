use thiserror::Error;

pub type Result<T> = std::result::Result<T, StockviewCoreError>;

/// Error type used across `stockview_core`
#[derive(Error, Debug)]
pub enum StockviewCoreError {
    /// Error reported from `std::io`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Error reported from `serde_json`.
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error reported by a `Navigator` implementation that failed to deliver
    /// a navigation request.
    #[error("navigation error: {0}")]
    NavigationError(String),

    /// Error returned when the lock protecting a `MaterialStore` has been
    /// poisoned by a panicking writer.
    #[error("material store unavailable: {0}")]
    StoreLockError(String),

    /// Error returned when `stockview_core` cannot process the request because
    /// of an invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameterError(String),

    /// Error returned when selecting a material by id, that isn't part of the
    /// currently displayed rows.
    #[error("material not found: {0}")]
    MaterialNotFoundError(String),
}
