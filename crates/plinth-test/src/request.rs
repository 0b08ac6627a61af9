//! Request builder for the test client.

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use plinth::App;

use crate::error::TestError;
use crate::response::TestResponse;

/// A request under construction, bound to the app it will be sent to.
#[derive(Debug)]
pub struct TestRequest<'a> {
    app: &'a App,
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl<'a> TestRequest<'a> {
    pub(crate) fn new(app: &'a App, method: &str, path: &str) -> Self {
        Self {
            app,
            method: method.to_string(),
            path: path.to_string(),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets a JSON body with the matching content type.
    ///
    /// # Errors
    ///
    /// [`TestError::Json`] if the value does not serialize.
    pub fn json(self, value: &serde_json::Value) -> Result<Self, TestError> {
        let body = serde_json::to_vec(value)?;
        Ok(self
            .header("content-type", "application/json")
            .body(body))
    }

    /// Sends the request through the app's dispatch pipeline.
    ///
    /// # Errors
    ///
    /// [`TestError::Request`] if the parts do not assemble into a valid
    /// request (bad verb name, bad header, malformed path).
    pub async fn send(self) -> Result<TestResponse, TestError> {
        let mut builder = http::Request::builder()
            .method(self.method.as_str())
            .uri(self.path);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let request = builder.body(Full::new(self.body))?;

        let response = self.app.dispatch(request).await.finalize();
        let (parts, body) = response.into_parts();
        // Full<Bytes> cannot fail to collect.
        let bytes = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(_) => Bytes::new(),
        };
        Ok(TestResponse::new(parts.status, parts.headers, bytes))
    }
}
