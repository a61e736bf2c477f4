/// Convenience result type used across the compositor.
pub type BoothResult<T> = Result<T, BoothError>;

/// Top-level error taxonomy used by compositor APIs.
///
/// Every error propagates to the immediate caller; no stage substitutes a
/// silent default or emits a partial composite. Recovery (re-capture,
/// re-upload, user notification) belongs to the embedding UI.
#[derive(thiserror::Error, Debug)]
pub enum BoothError {
    /// A supplied image source could not be turned into a valid bitmap.
    #[error("decode error: {0}")]
    Decode(String),

    /// The photo set length does not match the layout's pose count.
    #[error("photo count mismatch: layout expects {expected} poses, got {actual}")]
    CountMismatch {
        /// Pose count required by the active layout.
        expected: usize,
        /// Number of photos actually supplied.
        actual: usize,
    },

    /// No valid raster surface is available to draw into.
    #[error("render target unavailable: {0}")]
    RenderTarget(String),

    /// Static encode could not produce bytes from a valid buffer.
    #[error("encode failure: {0}")]
    Encode(String),

    /// Animated export was invoked; it fails by design until an external
    /// encoder is plugged in.
    #[error("animated export is not implemented: {0}")]
    UnimplementedExport(String),

    /// Invalid user-provided or model data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BoothError {
    /// Build a [`BoothError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`BoothError::RenderTarget`] value.
    pub fn render_target(msg: impl Into<String>) -> Self {
        Self::RenderTarget(msg.into())
    }

    /// Build a [`BoothError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BoothError::UnimplementedExport`] value.
    pub fn unimplemented_export(msg: impl Into<String>) -> Self {
        Self::UnimplementedExport(msg.into())
    }

    /// Build a [`BoothError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether retrying the failed operation with the same inputs can ever
    /// succeed.
    ///
    /// [`BoothError::UnimplementedExport`] is a permanent, by-design failure;
    /// callers must not treat it like a transient encode error.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Encode(_) | Self::RenderTarget(_) | Self::Other(_) => true,
            Self::Decode(_)
            | Self::CountMismatch { .. }
            | Self::UnimplementedExport(_)
            | Self::Validation(_) => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
