//! Request type and the dispatch seam.

use crate::response::Response;
use bytes::Bytes;
use http_body_util::Full;
use std::future::Future;
use std::pin::Pin;

/// The HTTP request type flowing through the pipeline.
///
/// A standard `http::Request` with a `Full<Bytes>` body. The pipeline
/// itself only reads the method and path; everything else is there for
/// handlers and middleware.
pub type Request = http::Request<Full<Bytes>>;

/// A boxed future, the object-safe async seam used throughout Plinth.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The innermost target of the middleware chain.
///
/// The application facade implements this with its raw dispatch
/// (route match, handler resolution, failure containment). Middleware
/// never sees the facade type directly, only this seam.
pub trait Endpoint: Send + Sync {
    /// Handles one request and produces a response.
    fn call<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Response>;
}
