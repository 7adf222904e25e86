use thiserror::Error;

/// Coarse classification of a fatal [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedPayload,
    UnexpectedShape,
}

/// The only failures extraction surfaces; everything below the top-level
/// shape check is absorbed as zero values.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("payload is not valid JSON: {source}")]
    MalformedPayload {
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected payload shape: {reason}")]
    UnexpectedShape { reason: String },
}

impl ParseError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MalformedPayload { .. } => ErrorKind::MalformedPayload,
            ParseError::UnexpectedShape { .. } => ErrorKind::UnexpectedShape,
        }
    }

    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        ParseError::UnexpectedShape {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(source: serde_json::Error) -> Self {
        ParseError::MalformedPayload { source }
    }
}
