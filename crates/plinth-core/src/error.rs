//! The dispatch error taxonomy.

use plinth_store::StoreError;
use thiserror::Error;

/// Result alias for handler and pipeline code.
pub type PlinthResult<T> = Result<T, PlinthError>;

/// A failure surfaced while a handler ran.
///
/// Whatever the variant, `Display` is the text the default exception
/// policy writes into the 500 body, so messages stay short and
/// user-shaped rather than diagnostic.
#[derive(Debug, Error)]
pub enum PlinthError {
    /// A failure raised by application handler code.
    #[error("{message}")]
    Handler {
        /// Human-readable failure text.
        message: String,
    },

    /// A persistence failure from the store collaborator.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Any other failure, wrapped with its context chain.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl PlinthError {
    /// Creates a handler failure from message text.
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_displays_message_only() {
        let err = PlinthError::handler("AttributeError: oops");
        assert_eq!(err.to_string(), "AttributeError: oops");
    }

    #[test]
    fn test_store_error_converts() {
        let err: PlinthError = StoreError::MissingId {
            table: "book".to_string(),
        }
        .into();
        assert!(matches!(err, PlinthError::Store(_)));
    }

    #[test]
    fn test_internal_error_is_transparent() {
        let err: PlinthError = anyhow::anyhow!("broken pipe").into();
        assert_eq!(err.to_string(), "broken pipe");
    }
}
