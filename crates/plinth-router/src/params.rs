//! Extracted path parameters.
//!
//! Parameter storage uses a small-vector optimization so the common case
//! (one to four parameters) never touches the heap for the backing array.

use smallvec::SmallVec;

/// Maximum number of parameters stored inline.
const INLINE_PARAMS: usize = 4;

/// A single converted path parameter value.
///
/// The variant is decided by the pattern's converter: `{name}` captures a
/// [`ParamValue::Str`], `{name:int}` captures a [`ParamValue::Int`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// An untyped string segment.
    Str(String),
    /// An integer segment that passed conversion.
    Int(i64),
}

impl ParamValue {
    /// Returns the string form if this is a string parameter.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            ParamValue::Int(_) => None,
        }
    }

    /// Returns the integer form if this is an integer parameter.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            ParamValue::Str(_) => None,
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{n}"),
        }
    }
}

/// Named parameters extracted from a matched route.
///
/// # Example
///
/// ```rust
/// use plinth_router::{ParamValue, PathParams};
///
/// let mut params = PathParams::new();
/// params.push("name", ParamValue::Str("Ada".to_string()));
/// params.push("page", ParamValue::Int(2));
///
/// assert_eq!(params.get_str("name"), Some("Ada"));
/// assert_eq!(params.get_int("page"), Some(2));
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathParams {
    inner: SmallVec<[(String, ParamValue); INLINE_PARAMS]>,
}

impl PathParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: ParamValue) {
        self.inner.push((name.into(), value));
    }

    /// Returns the value for a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.inner.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Returns a string parameter by name.
    #[must_use]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_str)
    }

    /// Returns an integer parameter by name.
    #[must_use]
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ParamValue::as_int)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over the parameters in capture order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_new_is_empty() {
        let params = PathParams::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
    }

    #[test]
    fn test_push_and_get() {
        let mut params = PathParams::new();
        params.push("id", ParamValue::Int(123));
        params.push("name", ParamValue::Str("alice".to_string()));

        assert_eq!(params.get_int("id"), Some(123));
        assert_eq!(params.get_str("name"), Some("alice"));
        assert_eq!(params.get("unknown"), None);
    }

    #[test]
    fn test_typed_accessors_do_not_cross() {
        let mut params = PathParams::new();
        params.push("id", ParamValue::Int(7));

        assert_eq!(params.get_str("id"), None);
        assert_eq!(params.get_int("id"), Some(7));
    }

    #[test]
    fn test_display() {
        assert_eq!(ParamValue::Str("abc".to_string()).to_string(), "abc");
        assert_eq!(ParamValue::Int(-4).to_string(), "-4");
    }

    #[test]
    fn test_iter_preserves_capture_order() {
        let mut params = PathParams::new();
        params.push("a", ParamValue::Int(1));
        params.push("b", ParamValue::Int(2));

        let names: Vec<_> = params.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut params = PathParams::new();
        for i in 0..10 {
            params.push(format!("key{i}"), ParamValue::Int(i));
        }
        assert_eq!(params.len(), 10);
        assert_eq!(params.get_int("key5"), Some(5));
    }
}
