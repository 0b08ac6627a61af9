//! Core types for the Plinth dispatch pipeline.
//!
//! This crate defines the small typed surface the pipeline reads from an
//! inbound request, the [`Response`] it produces and mutates in place,
//! the polymorphic [`Handler`] model (plain functions and class-style
//! resources), the dispatch error taxonomy, and the [`Endpoint`] seam
//! the middleware chain terminates on.

mod error;
mod handler;
mod response;
mod types;

pub use error::{PlinthError, PlinthResult};
pub use handler::{Handler, HandlerFn, HandlerFuture, Resource};
pub use response::Response;
pub use types::{BoxFuture, Endpoint, Request};
