/// Convenience result type used across Easel.
pub type EaselResult<T> = Result<T, EaselError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum EaselError {
    /// Caller precondition violated (bad aspect ratio, negative counts, unknown keys).
    #[error("validation error: {0}")]
    Validation(String),

    /// An observer failed while a subject was delivering a notification.
    #[error("observer error: {0}")]
    Observer(String),

    /// Invalid timeline window or animation behaviour parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// A shared node was re-entered while it was already borrowed during a traversal.
    #[error("borrow conflict: {0}")]
    Borrow(String),

    /// Errors when serializing or deserializing control values.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EaselError {
    /// Build a [`EaselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EaselError::Observer`] value.
    pub fn observer(msg: impl Into<String>) -> Self {
        Self::Observer(msg.into())
    }

    /// Build a [`EaselError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`EaselError::Borrow`] value.
    pub fn borrow(msg: impl Into<String>) -> Self {
        Self::Borrow(msg.into())
    }

    /// Build a [`EaselError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
