/// Convenience result type used across the crate.
pub type SegmentResult<T> = Result<T, SegmentError>;

/// Top-level error taxonomy used by segment APIs.
#[derive(thiserror::Error, Debug)]
pub enum SegmentError {
    /// An endpoint that is not a finite number or a recognized percentage expression.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Invalid construction or request input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing draw requests.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SegmentError {
    /// Build a [`SegmentError::InvalidValue`] value.
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    /// Build a [`SegmentError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SegmentError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SegmentError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
