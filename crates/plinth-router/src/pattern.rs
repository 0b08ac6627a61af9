//! Path pattern parsing and matching.
//!
//! A pattern is a sequence of literal segments and named placeholders,
//! parsed once at registration time. Placeholders are `{name}` for a
//! string capture or `{name:int}` for an integer capture (`{name:d}` is
//! accepted as an alias). A segment that fails its declared conversion
//! does not match the pattern; the caller moves on to the next route.

use crate::error::RegistryError;
use crate::params::{ParamValue, PathParams};

/// Converter applied to a placeholder segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Capture the segment as-is.
    Str,
    /// Capture the segment as an `i64`; non-numeric segments fail the match.
    Int,
}

impl Converter {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "str" => Some(Converter::Str),
            // "d" is the spelling the parse-style format language used.
            "int" | "d" => Some(Converter::Int),
            _ => None,
        }
    }

    fn convert(self, segment: &str) -> Option<ParamValue> {
        match self {
            Converter::Str => Some(ParamValue::Str(segment.to_string())),
            Converter::Int => segment.parse::<i64>().ok().map(ParamValue::Int),
        }
    }
}

/// One parsed segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A literal path segment, matched by string equality.
    Literal(String),
    /// A named placeholder with its converter.
    Param {
        /// The placeholder name.
        name: String,
        /// The conversion the captured segment must pass.
        converter: Converter,
    },
}

/// A parsed path pattern.
///
/// # Example
///
/// ```rust
/// use plinth_router::Pattern;
///
/// let pattern = Pattern::parse("/math/{op}/{a:int}/{b:int}").unwrap();
///
/// let params = pattern.match_path("/math/add/1/2").unwrap();
/// assert_eq!(params.get_str("op"), Some("add"));
/// assert_eq!(params.get_int("a"), Some(1));
///
/// // Conversion failure means no match, not an error.
/// assert!(pattern.match_path("/math/add/x/2").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPattern`] for malformed
    /// placeholders, empty names, or unknown converters.
    pub fn parse(pattern: &str) -> Result<Self, RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        let mut segments = Vec::new();
        for raw_segment in pattern.split('/').filter(|s| !s.is_empty()) {
            if let Some(inner) = raw_segment
                .strip_prefix('{')
                .and_then(|s| s.strip_suffix('}'))
            {
                // Leftover braces mean the segment was not one single
                // placeholder, e.g. "{a}{b}".
                if inner.contains(['{', '}']) {
                    return Err(invalid(format!("malformed placeholder '{raw_segment}'")));
                }
                let (name, converter) = match inner.split_once(':') {
                    Some((name, conv)) => {
                        let converter = Converter::from_name(conv)
                            .ok_or_else(|| invalid(format!("unknown converter '{conv}'")))?;
                        (name, converter)
                    }
                    None => (inner, Converter::Str),
                };
                if name.is_empty() {
                    return Err(invalid("empty placeholder name".to_string()));
                }
                segments.push(Segment::Param {
                    name: name.to_string(),
                    converter,
                });
            } else if raw_segment.contains(['{', '}']) {
                return Err(invalid(format!("malformed placeholder '{raw_segment}'")));
            } else {
                segments.push(Segment::Literal(raw_segment.to_string()));
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Returns the original pattern string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Matches a request path against this pattern.
    ///
    /// Empty segments are filtered on both sides, so trailing slashes are
    /// normalized away. Returns the captured parameters on success.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<PathParams> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = PathParams::new();
        for (spec, segment) in self.segments.iter().zip(segments) {
            match spec {
                Segment::Literal(literal) => {
                    if literal != segment {
                        return None;
                    }
                }
                Segment::Param { name, converter } => {
                    let value = converter.convert(segment)?;
                    params.push(name.clone(), value);
                }
            }
        }
        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal_only() {
        let pattern = Pattern::parse("/users/list").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("users".to_string()),
                Segment::Literal("list".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_untyped_param() {
        let pattern = Pattern::parse("/hello/{name}").unwrap();
        assert_eq!(
            pattern.segments()[1],
            Segment::Param {
                name: "name".to_string(),
                converter: Converter::Str,
            }
        );
    }

    #[test]
    fn test_parse_int_param_and_alias() {
        let pattern = Pattern::parse("/items/{id:int}").unwrap();
        assert_eq!(
            pattern.segments()[1],
            Segment::Param {
                name: "id".to_string(),
                converter: Converter::Int,
            }
        );

        // The parse-style ":d" spelling is equivalent.
        let alias = Pattern::parse("/items/{id:d}").unwrap();
        assert_eq!(pattern.segments(), alias.segments());
    }

    #[test]
    fn test_parse_rejects_unknown_converter() {
        let err = Pattern::parse("/items/{id:uuid}").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPattern { .. }));
        assert!(err.to_string().contains("uuid"));
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert!(Pattern::parse("/items/{}").is_err());
        assert!(Pattern::parse("/items/{:int}").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_placeholder() {
        assert!(Pattern::parse("/items/{id").is_err());
        assert!(Pattern::parse("/items/id}").is_err());
    }

    #[test]
    fn test_parse_rejects_multiple_placeholders_in_one_segment() {
        // "{a}{b}" must not register a single parameter named "a}{b".
        let err = Pattern::parse("/x/{a}{b}").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidPattern { .. }));
        assert!(err.to_string().contains("{a}{b}"));

        assert!(Pattern::parse("/x/{a{b}").is_err());
        assert!(Pattern::parse("/x/{a}b}").is_err());
    }

    #[test]
    fn test_match_literal() {
        let pattern = Pattern::parse("/home").unwrap();
        assert!(pattern.match_path("/home").is_some());
        assert!(pattern.match_path("/away").is_none());
    }

    #[test]
    fn test_match_captures_string_param() {
        let pattern = Pattern::parse("/hello/{name}").unwrap();
        let params = pattern.match_path("/hello/Ada").unwrap();
        assert_eq!(params.get_str("name"), Some("Ada"));
    }

    #[test]
    fn test_match_converts_int_param() {
        let pattern = Pattern::parse("/math/{a:int}/{b:int}").unwrap();
        let params = pattern.match_path("/math/3/-4").unwrap();
        assert_eq!(params.get_int("a"), Some(3));
        assert_eq!(params.get_int("b"), Some(-4));
    }

    #[test]
    fn test_conversion_failure_is_no_match() {
        let pattern = Pattern::parse("/math/{op}/{a:int}/{b:int}").unwrap();
        assert!(pattern.match_path("/math/add/x/2").is_none());
    }

    #[test]
    fn test_segment_count_must_agree() {
        let pattern = Pattern::parse("/a/{b}").unwrap();
        assert!(pattern.match_path("/a").is_none());
        assert!(pattern.match_path("/a/b/c").is_none());
    }

    #[test]
    fn test_trailing_slash_normalized() {
        let pattern = Pattern::parse("/users").unwrap();
        assert!(pattern.match_path("/users/").is_some());
    }

    #[test]
    fn test_root_pattern() {
        let pattern = Pattern::parse("/").unwrap();
        assert!(pattern.match_path("/").is_some());
        assert!(pattern.match_path("/x").is_none());
    }
}
