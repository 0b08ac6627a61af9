//! A minimal HTTP application toolkit.
//!
//! Plinth wires four pieces into one dispatch pipeline: an ordered
//! route table with typed path parameters, a closed HTTP verb
//! registry, a polymorphic handler model (plain functions and
//! class-style resources), and an onion middleware chain. An
//! [`App`] holds all of them and turns any request into exactly one
//! response; failures inside handlers become 500s through a
//! replaceable exception policy instead of escaping the pipeline.
//!
//! # Example
//!
//! ```rust
//! use plinth::{App, HandlerFuture, PathParams, Request, Response};
//!
//! fn hello<'a>(
//!     _request: &'a Request,
//!     response: &'a mut Response,
//!     params: &'a PathParams,
//! ) -> HandlerFuture<'a> {
//!     Box::pin(async move {
//!         let name = params.get_str("name").unwrap_or("world");
//!         response.set_text(format!("Hello, {name}!"));
//!         Ok(())
//!     })
//! }
//!
//! let mut app = App::new();
//! app.route("/hello/{name}", hello).unwrap();
//! ```
//!
//! Persistence lives in the companion [`store`] module, a thin
//! schema-driven SQL mapper the handlers can collaborate with.

mod app;

pub use app::{App, ExceptionHandler};

pub use plinth_core::{
    BoxFuture, Endpoint, Handler, HandlerFn, HandlerFuture, PlinthError, PlinthResult, Request,
    Resource, Response,
};
pub use plinth_middleware::{Chain, Middleware};
pub use plinth_router::{
    Converter, Method, ParamValue, PathParams, Pattern, RegistryError, RouteEntry, RouteTable,
};

/// Schema-driven persistence, re-exported from `plinth-store`.
pub mod store {
    pub use plinth_store::{
        sql, Field, FieldKind, MemoryStore, Record, Schema, Store, StoreError, Value,
    };
}

/// The toolkit's working set in one import.
pub mod prelude {
    pub use crate::{
        App, HandlerFuture, Method, Middleware, PathParams, PlinthError, PlinthResult, Request,
        Resource, Response,
    };
}
