/// Convenience result type used across bmpover.
pub type OverResult<T> = Result<T, OverError>;

/// Top-level error taxonomy used by codec and blend APIs.
#[derive(thiserror::Error, Debug)]
pub enum OverError {
    /// A pixel buffer could not be sized or allocated.
    #[error("allocation error: {0}")]
    Allocation(String),

    /// Input bytes are not a readable 32-bit BM bitmap (bad magic, truncated header or payload).
    #[error("malformed input: {0}")]
    Malformed(String),

    /// An output sink could not be opened or did not accept every byte.
    #[error("write error: {0}")]
    Write(String),

    /// The foreground placement does not fit inside the background.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// Invalid caller-provided options or pixel coordinates.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OverError {
    /// Build an [`OverError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build an [`OverError::Malformed`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Build an [`OverError::Write`] value.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Build an [`OverError::OutOfBounds`] value.
    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::OutOfBounds(msg.into())
    }

    /// Build an [`OverError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
