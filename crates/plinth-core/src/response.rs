//! The mutable response handlers write into.

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use http::StatusCode;
use http_body_util::Full;

/// A response under construction.
///
/// Starts as an empty 200 and is mutated in place by middleware and the
/// matched handler. [`Response::finalize`] turns it into the wire form,
/// picking the body with a fixed precedence: a JSON payload wins over
/// text, text wins over raw bytes.
#[derive(Debug, Default)]
pub struct Response {
    status: Option<StatusCode>,
    json: Option<serde_json::Value>,
    text: Option<String>,
    body: Bytes,
    content_type: Option<String>,
    headers: Vec<(String, String)>,
}

impl Response {
    /// Creates an empty response. Status defaults to 200 OK.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The status the response will carry (200 unless set).
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    /// Sets the status code.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    /// Sets the status and writes its canonical reason phrase as the
    /// text body, e.g. "Not Found" for 404.
    pub fn set_canonical(&mut self, status: StatusCode) {
        self.set_status(status);
        self.text = Some(
            status
                .canonical_reason()
                .unwrap_or_else(|| status.as_str())
                .to_string(),
        );
    }

    /// Sets the plain-text body.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Sets the JSON body. Takes precedence over text and raw bytes.
    pub fn set_json(&mut self, value: serde_json::Value) {
        self.json = Some(value);
    }

    /// Sets the raw byte body and its content type.
    pub fn set_body(&mut self, body: impl Into<Bytes>, content_type: impl Into<String>) {
        self.body = body.into();
        self.content_type = Some(content_type.into());
    }

    /// Adds a header pair. Later pairs with the same name append rather
    /// than replace. An explicitly inserted `Content-Type` suppresses
    /// the automatic one from the body setters.
    pub fn insert_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// The text body, if one was set.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The JSON body, if one was set.
    #[must_use]
    pub fn json(&self) -> Option<&serde_json::Value> {
        self.json.as_ref()
    }

    /// Converts to the wire response.
    ///
    /// Body precedence is JSON, then text, then raw bytes. JSON bodies
    /// get `application/json`, text bodies `text/plain; charset=utf-8`,
    /// raw bodies whatever content type came with them. A `Content-Type`
    /// set through [`Response::insert_header`] wins over all of these.
    #[must_use]
    pub fn finalize(self) -> http::Response<Full<Bytes>> {
        let explicit_content_type = self
            .headers
            .iter()
            .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));

        let (body, content_type) = if let Some(json) = self.json {
            let encoded = serde_json::to_vec(&json).expect("JSON value serializes");
            (Bytes::from(encoded), Some("application/json".to_string()))
        } else if let Some(text) = self.text {
            (
                Bytes::from(text),
                Some("text/plain; charset=utf-8".to_string()),
            )
        } else {
            (self.body, self.content_type)
        };

        let mut builder = http::Response::builder().status(self.status.unwrap_or(StatusCode::OK));
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::try_from(name.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                builder = builder.header(name, value);
            }
        }
        if !explicit_content_type {
            if let Some(content_type) = content_type {
                if let Ok(value) = HeaderValue::try_from(content_type) {
                    builder = builder.header(CONTENT_TYPE, value);
                }
            }
        }
        builder
            .body(Full::new(body))
            .expect("response parts are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_text(response: http::Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_defaults_to_empty_200() {
        let response = Response::new().finalize();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(CONTENT_TYPE).is_none());
        assert!(body_text(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_text_body_sets_content_type() {
        let mut response = Response::new();
        response.set_text("hello");
        let wire = response.finalize();

        assert_eq!(
            wire.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_text(wire).await, "hello");
    }

    #[tokio::test]
    async fn test_json_wins_over_text() {
        let mut response = Response::new();
        response.set_text("ignored");
        response.set_json(serde_json::json!({"name": "plinth"}));
        let wire = response.finalize();

        assert_eq!(
            wire.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(body_text(wire).await, r#"{"name":"plinth"}"#);
    }

    #[tokio::test]
    async fn test_raw_body_keeps_its_content_type() {
        let mut response = Response::new();
        response.set_body(&b"<p>hi</p>"[..], "text/html");
        let wire = response.finalize();

        assert_eq!(wire.headers().get(CONTENT_TYPE).unwrap(), "text/html");
        assert_eq!(body_text(wire).await, "<p>hi</p>");
    }

    #[test]
    fn test_canonical_writes_reason_phrase() {
        let mut response = Response::new();
        response.set_canonical(StatusCode::NOT_FOUND);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.text(), Some("Not Found"));

        let mut response = Response::new();
        response.set_canonical(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.text(), Some("Method Not Allowed"));
    }

    #[tokio::test]
    async fn test_explicit_content_type_header_is_not_duplicated() {
        let mut response = Response::new();
        response.set_text("<p>hi</p>");
        response.insert_header("content-type", "text/html");
        let wire = response.finalize();

        let values: Vec<_> = wire.headers().get_all(CONTENT_TYPE).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "text/html");
        assert_eq!(body_text(wire).await, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_custom_headers_are_carried() {
        let mut response = Response::new();
        response.insert_header("x-request-id", "abc123");
        let wire = response.finalize();
        assert_eq!(wire.headers().get("x-request-id").unwrap(), "abc123");
    }
}
