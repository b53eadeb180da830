/// Convenience result alias used across the crate.
pub type KineticResult<T> = Result<T, KineticError>;

/// Top-level error type for project loading, validation, and playback commands.
#[derive(thiserror::Error, Debug)]
pub enum KineticError {
    /// Structural project data is invalid (duration, frame rate, layer windows, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// An animation definition cannot be honored.
    #[error("animation error: {0}")]
    Animation(String),

    /// A playback command was rejected; engine state is unchanged.
    #[error("playback error: {0}")]
    Playback(String),

    /// Reading or writing project JSON failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error propagated from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KineticError {
    /// Build a [`KineticError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`KineticError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`KineticError::Playback`] value.
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }

    /// Build a [`KineticError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for KineticError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
