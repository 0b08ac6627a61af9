//! The two handler shapes routes dispatch to.

use std::fmt;

use plinth_router::{Method, PathParams};

use crate::error::PlinthResult;
use crate::response::Response;
use crate::types::{BoxFuture, Request};

/// The future a handler invocation returns.
///
/// `Ok(())` means the handler finished and the response it mutated is
/// the answer. `Err` routes the failure to the exception policy.
pub type HandlerFuture<'a> = BoxFuture<'a, PlinthResult<()>>;

/// A boxed handler function.
pub type HandlerFn =
    Box<dyn for<'a> Fn(&'a Request, &'a mut Response, &'a PathParams) -> HandlerFuture<'a> + Send + Sync>;

/// A class-style handler grouping one resource's verb implementations.
///
/// Override the hooks for the verbs the resource supports; each returns
/// the work as a future, or `None` (the default) to signal the verb is
/// not implemented. Dispatch turns `None` into 405 Method Not Allowed.
#[allow(unused_variables)]
pub trait Resource: Send + Sync {
    /// Handles GET.
    fn get<'a>(
        &'a self,
        request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> Option<HandlerFuture<'a>> {
        None
    }

    /// Handles HEAD.
    fn head<'a>(
        &'a self,
        request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> Option<HandlerFuture<'a>> {
        None
    }

    /// Handles PUT.
    fn put<'a>(
        &'a self,
        request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> Option<HandlerFuture<'a>> {
        None
    }

    /// Handles DELETE.
    fn delete<'a>(
        &'a self,
        request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> Option<HandlerFuture<'a>> {
        None
    }

    /// Handles OPTIONS.
    fn options<'a>(
        &'a self,
        request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> Option<HandlerFuture<'a>> {
        None
    }

    /// Handles POST.
    fn post<'a>(
        &'a self,
        request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> Option<HandlerFuture<'a>> {
        None
    }

    /// Handles PATCH.
    fn patch<'a>(
        &'a self,
        request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> Option<HandlerFuture<'a>> {
        None
    }

    /// Looks up the hook for `method` and returns its bound invocation,
    /// or `None` when the verb is not implemented.
    fn call<'a>(
        &'a self,
        method: Method,
        request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> Option<HandlerFuture<'a>> {
        match method {
            Method::Get => self.get(request, response, params),
            Method::Head => self.head(request, response, params),
            Method::Put => self.put(request, response, params),
            Method::Delete => self.delete(request, response, params),
            Method::Options => self.options(request, response, params),
            Method::Post => self.post(request, response, params),
            Method::Patch => self.patch(request, response, params),
        }
    }
}

/// What a route dispatches to.
pub enum Handler {
    /// A plain function bound to exactly one verb.
    Function {
        /// The single verb the function answers.
        method: Method,
        /// The handler body.
        fun: HandlerFn,
    },
    /// A resource answering whichever verbs it implements.
    Resource(Box<dyn Resource>),
}

impl Handler {
    /// Wraps a function handler bound to `method`.
    pub fn function<F>(method: Method, fun: F) -> Self
    where
        F: for<'a> Fn(&'a Request, &'a mut Response, &'a PathParams) -> HandlerFuture<'a>
            + Send
            + Sync
            + 'static,
    {
        Self::Function {
            method,
            fun: Box::new(fun),
        }
    }

    /// Wraps a resource handler.
    pub fn resource<R: Resource + 'static>(resource: R) -> Self {
        Self::Resource(Box::new(resource))
    }

    /// Resolves the invocation for `method`.
    ///
    /// `None` means the route matched but the verb is not answerable
    /// here, which dispatch reports as 405 Method Not Allowed.
    pub fn invoke<'a>(
        &'a self,
        method: Method,
        request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> Option<HandlerFuture<'a>> {
        match self {
            Self::Function { method: bound, fun } => {
                if *bound == method {
                    Some(fun(request, response, params))
                } else {
                    None
                }
            }
            Self::Resource(resource) => resource.call(method, request, response, params),
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function { method, .. } => {
                f.debug_struct("Function").field("method", method).finish_non_exhaustive()
            }
            Self::Resource(_) => f.write_str("Resource"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http_body_util::Full;
    use plinth_router::ParamValue;

    fn request(path: &str) -> Request {
        http::Request::builder()
            .uri(path)
            .body(Full::new(Bytes::new()))
            .unwrap()
    }

    fn hello<'a>(
        _request: &'a Request,
        response: &'a mut Response,
        params: &'a PathParams,
    ) -> HandlerFuture<'a> {
        Box::pin(async move {
            let name = params.get_str("name").unwrap_or("world");
            response.set_text(format!("Hello, {name}!"));
            Ok(())
        })
    }

    struct Greeter;

    impl Resource for Greeter {
        fn get<'a>(
            &'a self,
            _request: &'a Request,
            response: &'a mut Response,
            _params: &'a PathParams,
        ) -> Option<HandlerFuture<'a>> {
            Some(Box::pin(async move {
                response.set_text("from resource");
                Ok(())
            }))
        }
    }

    #[tokio::test]
    async fn test_function_runs_on_bound_verb() {
        let handler = Handler::function(Method::Get, hello);
        let request = request("/hello/Ada");
        let mut response = Response::new();
        let mut params = PathParams::new();
        params.push("name", ParamValue::Str("Ada".to_string()));

        let fut = handler
            .invoke(Method::Get, &request, &mut response, &params)
            .expect("verb is bound");
        fut.await.unwrap();
        assert_eq!(response.text(), Some("Hello, Ada!"));
    }

    #[tokio::test]
    async fn test_function_refuses_other_verbs() {
        let handler = Handler::function(Method::Get, hello);
        let request = request("/hello/Ada");
        let mut response = Response::new();
        let params = PathParams::new();

        assert!(handler
            .invoke(Method::Post, &request, &mut response, &params)
            .is_none());
    }

    #[tokio::test]
    async fn test_resource_dispatches_by_verb() {
        let handler = Handler::resource(Greeter);
        let request = request("/greet");
        let mut response = Response::new();
        let params = PathParams::new();

        let fut = handler
            .invoke(Method::Get, &request, &mut response, &params)
            .expect("get is implemented");
        fut.await.unwrap();
        assert_eq!(response.text(), Some("from resource"));
    }

    #[tokio::test]
    async fn test_resource_unimplemented_verb_is_none() {
        let handler = Handler::resource(Greeter);
        let request = request("/greet");
        let mut response = Response::new();
        let params = PathParams::new();

        for verb in [Method::Post, Method::Delete, Method::Patch] {
            assert!(handler
                .invoke(verb, &request, &mut response, &params)
                .is_none());
        }
    }
}
