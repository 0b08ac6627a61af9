//! The middleware contract.

use plinth_core::{BoxFuture, Request, Response};

/// One layer of the request/response onion.
///
/// Both hooks default to pass-through, so a layer only overrides the
/// side it cares about. `process_request` may mutate the request before
/// inner layers and the handler see it; `process_response` takes the
/// response by value and may return a replacement.
#[allow(unused_variables)]
pub trait Middleware: Send + Sync {
    /// A short name used in dispatch logging.
    fn name(&self) -> &'static str;

    /// Runs before inner layers, with mutable access to the request.
    fn process_request<'a>(&'a self, request: &'a mut Request) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }

    /// Runs after inner layers, with the response they produced.
    fn process_response<'a>(
        &'a self,
        request: &'a Request,
        response: Response,
    ) -> BoxFuture<'a, Response> {
        Box::pin(async move { response })
    }
}
