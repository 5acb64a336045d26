use thiserror::Error;

/// Top-level error type returned by the engine clients.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Engine did not answer, or answered with something unusable.
    #[error("engine error: {message}")]
    Engine { message: String },

    /// Index creation failed.
    #[error("failed to create index '{index}': {message}")]
    IndexCreate { index: String, message: String },

    /// Index deletion failed.
    #[error("failed to delete index '{index}': {message}")]
    IndexDelete { index: String, message: String },

    /// A range filter whose bounds are inverted. Raised by
    /// [`EmployeeSearchFilter::validate`](crate::filter::EmployeeSearchFilter::validate)
    /// before a filter ever reaches the compiler.
    #[error("invalid range on '{field}': gte {gte} is greater than lte {lte}")]
    InvalidFilterRange {
        field: &'static str,
        gte: f64,
        lte: f64,
    },

    /// Invalid input supplied to a client operation.
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    /// Transport-level failure talking to the engine.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A payload that could not be serialized or parsed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A source row that could not be read or decoded.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
