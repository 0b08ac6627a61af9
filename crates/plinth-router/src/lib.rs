//! Ordered route table with typed path parameters for Plinth.
//!
//! This crate owns the registration-time half of the dispatch pipeline:
//! the closed HTTP method set, the path pattern language, and the route
//! table that maps an incoming path to a registered payload.
//!
//! Unlike tree-based routers, the table is a plain ordered collection:
//! patterns are tried in registration order and the **first** structural
//! match wins. Registration order is an observable guarantee, not an
//! implementation detail.
//!
//! # Example
//!
//! ```rust
//! use plinth_router::{RouteTable, ParamValue};
//!
//! let mut table: RouteTable<&str> = RouteTable::new();
//! table.register("/users", "listUsers").unwrap();
//! table.register("/users/{id:int}", "getUser").unwrap();
//!
//! let (entry, params) = table.match_path("/users/42").unwrap();
//! assert_eq!(entry.payload, "getUser");
//! assert_eq!(params.get("id"), Some(&ParamValue::Int(42)));
//!
//! // A segment that fails the declared conversion skips the route.
//! assert!(table.match_path("/users/alice").is_none());
//! ```

mod error;
mod method;
mod params;
mod pattern;
mod table;

pub use error::RegistryError;
pub use method::Method;
pub use params::{ParamValue, PathParams};
pub use pattern::{Converter, Pattern, Segment};
pub use table::{RouteEntry, RouteTable};
