//! Onion-style middleware for the Plinth pipeline.
//!
//! A [`Chain`] wraps the application endpoint in layers. Each layer sees
//! the request on the way in and the response on the way out; the most
//! recently added layer sits outermost, so it touches the request first
//! and the response last.

mod chain;
mod middleware;

pub use chain::Chain;
pub use middleware::Middleware;
