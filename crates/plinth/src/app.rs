//! The application facade.

use http::StatusCode;
use tracing::{debug, error};

use plinth_core::{
    BoxFuture, Endpoint, Handler, HandlerFuture, PlinthError, Request, Resource, Response,
};
use plinth_middleware::{Chain, Middleware};
use plinth_router::{Method, PathParams, RegistryError, RouteTable};

/// A replacement policy for handler failures.
///
/// Receives the request, the response as the failed handler left it,
/// and the error. Whatever state the policy leaves in the response is
/// what goes out.
pub type ExceptionHandler = Box<dyn Fn(&Request, &mut Response, &PlinthError) + Send + Sync>;

/// Generates one registration helper per verb in the registry.
macro_rules! verb_helpers {
    ($(($helper:ident, $method:ident, $verb:literal)),* $(,)?) => {
        $(
            #[doc = concat!("Registers a ", $verb, " handler at `pattern`.")]
            ///
            /// # Errors
            ///
            /// Same as [`App::add_route`].
            pub fn $helper<F>(&mut self, pattern: &str, handler: F) -> Result<(), RegistryError>
            where
                F: for<'a> Fn(&'a Request, &'a mut Response, &'a PathParams) -> HandlerFuture<'a>
                    + Send
                    + Sync
                    + 'static,
            {
                self.add_route(pattern, Method::$method, handler)
            }
        )*
    };
}

/// The application: a route table, a middleware chain, and an
/// exception policy, wired together into one dispatch entry point.
///
/// Configure at startup, then treat as read-only while serving. All
/// registration methods take `&mut self`; [`App::dispatch`] takes
/// `&self` and is safe to call concurrently.
#[derive(Default)]
pub struct App {
    routes: RouteTable<Handler>,
    chain: Chain,
    exception_handler: Option<ExceptionHandler>,
}

impl App {
    /// Creates an application with no routes, no middleware, and the
    /// default exception policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function handler for `method` at `pattern`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::DuplicateRoute`] if the pattern is already
    /// taken (patterns are unique across all verbs), or
    /// [`RegistryError::InvalidPattern`] if it does not parse.
    pub fn add_route<F>(
        &mut self,
        pattern: &str,
        method: Method,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: for<'a> Fn(&'a Request, &'a mut Response, &'a PathParams) -> HandlerFuture<'a>
            + Send
            + Sync
            + 'static,
    {
        self.routes.register(pattern, Handler::function(method, handler))
    }

    /// Registers a function handler for the verb named by `method`,
    /// e.g. `"GET"` or `"POST"`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnsupportedMethod`] for names outside the verb
    /// registry, plus the same pattern errors as [`App::add_route`].
    pub fn register<F>(
        &mut self,
        method: &str,
        pattern: &str,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: for<'a> Fn(&'a Request, &'a mut Response, &'a PathParams) -> HandlerFuture<'a>
            + Send
            + Sync
            + 'static,
    {
        self.add_route(pattern, Method::from_name(method)?, handler)
    }

    /// Registers a GET handler. The unannotated default.
    ///
    /// # Errors
    ///
    /// Same as [`App::add_route`].
    pub fn route<F>(&mut self, pattern: &str, handler: F) -> Result<(), RegistryError>
    where
        F: for<'a> Fn(&'a Request, &'a mut Response, &'a PathParams) -> HandlerFuture<'a>
            + Send
            + Sync
            + 'static,
    {
        self.add_route(pattern, Method::Get, handler)
    }

    verb_helpers! {
        (get, Get, "GET"),
        (head, Head, "HEAD"),
        (put, Put, "PUT"),
        (delete, Delete, "DELETE"),
        (options, Options, "OPTIONS"),
        (post, Post, "POST"),
        (patch, Patch, "PATCH"),
    }

    /// Registers a resource handler at `pattern`. The resource answers
    /// whichever verbs it implements; the rest get 405.
    ///
    /// # Errors
    ///
    /// Same pattern errors as [`App::add_route`].
    pub fn resource<R: Resource + 'static>(
        &mut self,
        pattern: &str,
        resource: R,
    ) -> Result<(), RegistryError> {
        self.routes.register(pattern, Handler::resource(resource))
    }

    /// Adds a middleware layer outside all existing ones.
    pub fn add_middleware(&mut self, middleware: impl Middleware + 'static) {
        self.chain.add(middleware);
    }

    /// Replaces the default exception policy (500 with the error text).
    pub fn add_exception_handler(
        &mut self,
        handler: impl Fn(&Request, &mut Response, &PlinthError) + Send + Sync + 'static,
    ) {
        self.exception_handler = Some(Box::new(handler));
    }

    /// Dispatches one request through the middleware chain and the
    /// route table, always producing a response.
    pub async fn dispatch(&self, mut request: Request) -> Response {
        debug!(method = %request.method(), path = request.uri().path(), "dispatching");
        self.chain.handle(&mut request, self).await
    }

    /// Raw dispatch, inside the middleware chain: route match, verb
    /// resolution, handler invocation, failure containment.
    async fn handle_request(&self, request: &Request) -> Response {
        let mut response = Response::new();
        let path = request.uri().path();

        let Some(matched) = self.routes.match_path(path) else {
            debug!(path, "no route matched");
            response.set_canonical(StatusCode::NOT_FOUND);
            return response;
        };
        let (entry, params) = matched;

        // Verbs outside the registry (TRACE, CONNECT, extensions) are
        // never answerable, even on a matched path.
        let Some(method) = Method::from_http(request.method()) else {
            response.set_canonical(StatusCode::METHOD_NOT_ALLOWED);
            return response;
        };

        // Run the invocation to completion before inspecting the
        // outcome, so the handler's borrow of the response has ended.
        let outcome = match entry.payload.invoke(method, request, &mut response, &params) {
            Some(invocation) => Some(invocation.await),
            None => None,
        };

        match outcome {
            None => response.set_canonical(StatusCode::METHOD_NOT_ALLOWED),
            Some(Err(err)) => {
                error!(pattern = entry.pattern.as_str(), %err, "handler failed");
                self.contain_failure(request, &mut response, &err);
            }
            Some(Ok(())) => {}
        }
        response
    }

    /// Applies the exception policy. The default answers 500 with the
    /// error's display text as a plain-text body.
    fn contain_failure(&self, request: &Request, response: &mut Response, err: &PlinthError) {
        match &self.exception_handler {
            Some(handler) => handler(request, response, err),
            None => {
                response.set_status(StatusCode::INTERNAL_SERVER_ERROR);
                response.set_text(err.to_string());
            }
        }
    }
}

impl Endpoint for App {
    fn call<'a>(&'a self, request: &'a Request) -> BoxFuture<'a, Response> {
        Box::pin(self.handle_request(request))
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("routes", &self.routes.len())
            .field("middleware", &self.chain)
            .field("custom_exception_handler", &self.exception_handler.is_some())
            .finish()
    }
}
