//! Registration-time configuration errors.
//!
//! Everything in this module fails loudly at setup time. None of these
//! errors can occur while serving a request.

use thiserror::Error;

/// Errors raised while registering routes or resolving verb helpers.
///
/// Registration errors are hard failures: a duplicate pattern or an
/// unsupported verb name never degrades into a silent no-op or a
/// request-time surprise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The exact pattern string was already registered.
    ///
    /// Uniqueness is keyed on the literal pattern alone; registering the
    /// same pattern under a different verb is still rejected.
    #[error("route '{pattern}' is already registered")]
    DuplicateRoute {
        /// The offending pattern string.
        pattern: String,
    },

    /// A verb name outside the closed method set was looked up.
    #[error("unsupported HTTP method '{name}'")]
    UnsupportedMethod {
        /// The verb name as given by the caller.
        name: String,
    },

    /// The pattern string could not be parsed.
    #[error("invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern string.
        pattern: String,
        /// Why parsing failed.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_route_message() {
        let err = RegistryError::DuplicateRoute {
            pattern: "/home".to_string(),
        };
        assert_eq!(err.to_string(), "route '/home' is already registered");
    }

    #[test]
    fn test_unsupported_method_names_the_verb() {
        let err = RegistryError::UnsupportedMethod {
            name: "TRACE".to_string(),
        };
        assert!(err.to_string().contains("TRACE"));
    }

    #[test]
    fn test_invalid_pattern_message() {
        let err = RegistryError::InvalidPattern {
            pattern: "/x/{id:uuid}".to_string(),
            reason: "unknown converter 'uuid'".to_string(),
        };
        assert!(err.to_string().contains("/x/{id:uuid}"));
        assert!(err.to_string().contains("unknown converter"));
    }
}
