//! The client wrapping an application under test.

use plinth::App;

use crate::request::TestRequest;

/// Drives an [`App`] in process.
///
/// One client per app under test; requests are issued through the verb
/// builders and sent with [`TestRequest::send`].
#[derive(Debug)]
pub struct TestClient {
    app: App,
}

impl TestClient {
    /// Wraps a configured application.
    #[must_use]
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// The application under test.
    #[must_use]
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Starts a request with an arbitrary verb name. Useful for verbs
    /// outside the registry, like TRACE.
    #[must_use]
    pub fn request(&self, method: &str, path: &str) -> TestRequest<'_> {
        TestRequest::new(&self.app, method, path)
    }

    /// Starts a GET request.
    #[must_use]
    pub fn get(&self, path: &str) -> TestRequest<'_> {
        self.request("GET", path)
    }

    /// Starts a HEAD request.
    #[must_use]
    pub fn head(&self, path: &str) -> TestRequest<'_> {
        self.request("HEAD", path)
    }

    /// Starts a PUT request.
    #[must_use]
    pub fn put(&self, path: &str) -> TestRequest<'_> {
        self.request("PUT", path)
    }

    /// Starts a DELETE request.
    #[must_use]
    pub fn delete(&self, path: &str) -> TestRequest<'_> {
        self.request("DELETE", path)
    }

    /// Starts an OPTIONS request.
    #[must_use]
    pub fn options(&self, path: &str) -> TestRequest<'_> {
        self.request("OPTIONS", path)
    }

    /// Starts a POST request.
    #[must_use]
    pub fn post(&self, path: &str) -> TestRequest<'_> {
        self.request("POST", path)
    }

    /// Starts a PATCH request.
    #[must_use]
    pub fn patch(&self, path: &str) -> TestRequest<'_> {
        self.request("PATCH", path)
    }
}
