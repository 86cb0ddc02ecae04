use std::string::FromUtf8Error;

/// Errors raised while serializing a request body.
///
/// Every failure is local to a single build: no document is produced and the
/// builder itself is left untouched, so the caller can fix its input and retry.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A PROPFIND identifier is not part of the supported vocabulary.
    #[error("unsupported property `{property}`, known properties are: {}", .supported.join(", "))]
    UnsupportedProperty {
        property: String,
        supported: Vec<&'static str>,
    },

    /// Caller input that cannot be turned into a well-formed document.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("xml writer i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialized document is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl BuildError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(%message, "rejecting request input");
        BuildError::InvalidArgument(message)
    }
}

pub type Result<T> = std::result::Result<T, BuildError>;
