//! In-process test client for Plinth applications.
//!
//! [`TestClient`] drives an [`plinth::App`] without opening a socket:
//! requests go straight into the dispatch pipeline and come back as a
//! [`TestResponse`] with the finalized status, headers, and body.
//!
//! ```rust
//! use plinth::{App, HandlerFuture, PathParams, Request, Response};
//! use plinth_test::TestClient;
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
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut app = App::new();
//! app.route("/hello/{name}", hello).unwrap();
//!
//! let client = TestClient::new(app);
//! let response = client.get("/hello/Ada").send().await.unwrap();
//! assert_eq!(response.status(), http::StatusCode::OK);
//! assert_eq!(response.text().unwrap(), "Hello, Ada!");
//! # });
//! ```

mod client;
mod error;
mod request;
mod response;

pub use client::TestClient;
pub use error::TestError;
pub use request::TestRequest;
pub use response::TestResponse;
