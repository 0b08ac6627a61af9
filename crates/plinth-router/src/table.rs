//! The ordered route table.
//!
//! The table is generic over its payload so the routing rules can be
//! exercised without dragging in handler types; the application facade
//! instantiates it with its handler enum.

use crate::error::RegistryError;
use crate::params::PathParams;
use crate::pattern::Pattern;

/// A registered route: a parsed pattern plus the caller's payload.
#[derive(Debug, Clone)]
pub struct RouteEntry<T> {
    /// The parsed pattern.
    pub pattern: Pattern,
    /// Whatever the caller dispatches to (handler, operation id, ...).
    pub payload: T,
}

/// An ordered collection of routes with first-match-wins semantics.
///
/// Routes are scanned in registration order on every match. This is a
/// deliberate contract: earlier registrations shadow later ones for
/// overlapping patterns, and the table never reorders or ranks entries.
///
/// The table is built at setup time and treated as read-only once traffic
/// starts (single-writer-then-many-readers; mutation during traffic is
/// unsupported).
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    entries: Vec<RouteEntry<T>>,
}

// Manual impl; the derive would add a `T: Default` bound.
impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a route.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateRoute`] if the exact pattern
    /// string was registered before (regardless of any verb associated
    /// with the payload), or [`RegistryError::InvalidPattern`] if the
    /// pattern does not parse. The failed registration leaves the table
    /// unchanged.
    pub fn register(&mut self, pattern: &str, payload: T) -> Result<(), RegistryError> {
        if self.entries.iter().any(|e| e.pattern.as_str() == pattern) {
            return Err(RegistryError::DuplicateRoute {
                pattern: pattern.to_string(),
            });
        }
        let pattern = Pattern::parse(pattern)?;
        self.entries.push(RouteEntry { pattern, payload });
        Ok(())
    }

    /// Returns the first entry whose pattern matches `path`, along with
    /// the extracted parameters.
    ///
    /// A route whose typed conversion fails is skipped, not fatal: the
    /// scan continues with subsequent routes.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<(&RouteEntry<T>, PathParams)> {
        self.entries
            .iter()
            .find_map(|entry| entry.pattern.match_path(path).map(|params| (entry, params)))
    }

    /// Returns the registered entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry<T>] {
        &self.entries
    }

    /// Returns the number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no routes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
