// paycard/src/error.rs
//! Crate-wide error type.

use thiserror::Error;

/// Common error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A name outside the card's recognized attribute set was read.
    #[error("undefined property: {0}")]
    UndefinedProperty(String),

    /// Caller data rejected before any request: unknown keys, blank ids.
    #[error("{0}")]
    InvalidArgument(String),

    /// A derived value needs an attribute the card does not carry.
    #[error("missing attribute: {0}")]
    MissingAttribute(&'static str),

    /// A recognized attribute has a value of the wrong shape.
    #[error("invalid attribute {name}: {reason}")]
    InvalidAttribute {
        /// Wire name of the attribute.
        name: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The response body lacked the expected envelope.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Failure reported by the transport.
    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    pub(crate) fn invalid_attribute(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
