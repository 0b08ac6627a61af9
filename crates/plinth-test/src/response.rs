//! The collected response a test inspects.

use bytes::Bytes;
use http::{HeaderMap, StatusCode};

use crate::error::TestError;

/// A finalized response: status, headers, and the collected body.
#[derive(Debug)]
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl TestResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// The response status.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// All response headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single header value as a string, if present and printable.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// The raw body bytes.
    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// The body as text.
    ///
    /// # Errors
    ///
    /// [`TestError::NonUtf8Body`] if the body is not UTF-8.
    pub fn text(&self) -> Result<String, TestError> {
        Ok(String::from_utf8(self.body.to_vec())?)
    }

    /// The body parsed as JSON.
    ///
    /// # Errors
    ///
    /// [`TestError::Json`] if the body does not parse.
    pub fn json(&self) -> Result<serde_json::Value, TestError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}
