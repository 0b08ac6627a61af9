//! The middleware chain.

use plinth_core::{BoxFuture, Endpoint, Request, Response};

use crate::middleware::Middleware;

/// An ordered stack of middleware around an [`Endpoint`].
///
/// Layers are stored in registration order and applied outside-in from
/// the end of the stack: the last layer added runs its request hook
/// first and its response hook last.
#[derive(Default)]
pub struct Chain {
    layers: Vec<Box<dyn Middleware>>,
}

impl Chain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer outside all existing ones.
    pub fn add(&mut self, middleware: impl Middleware + 'static) {
        self.layers.push(Box::new(middleware));
    }

    /// Returns the number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if no layers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Runs the request through every layer and the endpoint.
    pub fn handle<'a>(
        &'a self,
        request: &'a mut Request,
        endpoint: &'a dyn Endpoint,
    ) -> BoxFuture<'a, Response> {
        Self::run(&self.layers, request, endpoint)
    }

    fn run<'a>(
        layers: &'a [Box<dyn Middleware>],
        request: &'a mut Request,
        endpoint: &'a dyn Endpoint,
    ) -> BoxFuture<'a, Response> {
        Box::pin(async move {
            match layers.split_last() {
                Some((outer, inner)) => {
                    outer.process_request(&mut *request).await;
                    let response = Self::run(inner, &mut *request, endpoint).await;
                    outer.process_response(&*request, response).await
                }
                None => endpoint.call(request).await,
            }
        })
    }
}

impl std::fmt::Debug for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.layers.iter().map(|m| m.name()))
            .finish()
    }
}
