use thiserror::Error;

/// Errors surfaced by the search engine for bad caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum SizingError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl SizingError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput { field, reason: reason.into() }
    }
}

/// Errors raised while reading the capacity data source.
///
/// None of these are fatal: the loader logs them and falls back to the
/// built-in capacity table.
#[derive(Debug, Error)]
pub(crate) enum CapacityDataError {
    #[error("failed to read capacity data: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed capacity data: {0}")]
    Csv(#[from] csv::Error),

    #[error("capacity data has {accepted} usable row(s), need at least 2")]
    TooFewRows { accepted: usize },
}
