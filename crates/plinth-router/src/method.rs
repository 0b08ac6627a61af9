//! The closed set of HTTP methods.
//!
//! Plinth supports a fixed verb set; looking up anything outside it is a
//! configuration error, never a silent no-op. The set doubles as the
//! source for the per-verb registration helpers on the application facade.

use crate::RegistryError;

/// HTTP methods supported by the dispatch pipeline.
///
/// The set is closed and process-wide: GET, HEAD, PUT, DELETE, OPTIONS,
/// POST and PATCH, per RFC 7231 and RFC 5789. Methods act both as the
/// dispatch key for function handlers and as the naming convention for
/// resource hooks (`Method::Get` selects a resource's `get` hook).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Retrieve a representation of a resource (safe).
    Get,
    /// Same as GET but headers only (safe).
    Head,
    /// Replace a resource with the request payload (idempotent).
    Put,
    /// Remove the specified resource (idempotent).
    Delete,
    /// Describe communication options for the target (idempotent).
    Options,
    /// Submit data for processing, typically creating a resource.
    Post,
    /// Apply partial modifications to a resource.
    Patch,
}

impl Method {
    /// All supported methods, in a stable order.
    pub const ALL: [Method; 7] = [
        Method::Get,
        Method::Head,
        Method::Put,
        Method::Delete,
        Method::Options,
        Method::Post,
        Method::Patch,
    ];

    /// Looks a method up by its upper-case wire name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnsupportedMethod`] for any name outside
    /// the closed set, including lower-case spellings.
    pub fn from_name(name: &str) -> Result<Self, RegistryError> {
        match name {
            "GET" => Ok(Method::Get),
            "HEAD" => Ok(Method::Head),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "OPTIONS" => Ok(Method::Options),
            "POST" => Ok(Method::Post),
            "PATCH" => Ok(Method::Patch),
            _ => Err(RegistryError::UnsupportedMethod {
                name: name.to_string(),
            }),
        }
    }

    /// Maps a wire-level `http::Method` into the closed set.
    ///
    /// Returns `None` for methods the pipeline does not dispatch on
    /// (TRACE, CONNECT, extension methods).
    #[must_use]
    pub fn from_http(method: &http::Method) -> Option<Self> {
        match *method {
            http::Method::GET => Some(Method::Get),
            http::Method::HEAD => Some(Method::Head),
            http::Method::PUT => Some(Method::Put),
            http::Method::DELETE => Some(Method::Delete),
            http::Method::OPTIONS => Some(Method::Options),
            http::Method::POST => Some(Method::Post),
            http::Method::PATCH => Some(Method::Patch),
            _ => None,
        }
    }

    /// Returns the upper-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Post => "POST",
            Method::Patch => "PATCH",
        }
    }

    /// Returns the lower-case name used to select resource hooks.
    #[must_use]
    pub const fn handler_name(self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Head => "head",
            Method::Put => "put",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Post => "post",
            Method::Patch => "patch",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_round_trip() {
        for method in Method::ALL {
            assert_eq!(Method::from_name(method.as_str()), Ok(method));
        }
    }

    #[test]
    fn test_from_name_unknown_fails_loudly() {
        let err = Method::from_name("TRACE").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnsupportedMethod {
                name: "TRACE".to_string()
            }
        );
    }

    #[test]
    fn test_from_name_rejects_lower_case() {
        assert!(Method::from_name("get").is_err());
    }

    #[test]
    fn test_from_http() {
        assert_eq!(Method::from_http(&http::Method::GET), Some(Method::Get));
        assert_eq!(Method::from_http(&http::Method::POST), Some(Method::Post));
        assert_eq!(Method::from_http(&http::Method::TRACE), None);
        assert_eq!(Method::from_http(&http::Method::CONNECT), None);
    }

    #[test]
    fn test_handler_name_is_lower_cased_verb() {
        assert_eq!(Method::Get.handler_name(), "get");
        assert_eq!(Method::Patch.handler_name(), "patch");
    }

    #[test]
    fn test_all_is_the_whole_closed_set() {
        assert_eq!(Method::ALL.len(), 7);
    }
}
