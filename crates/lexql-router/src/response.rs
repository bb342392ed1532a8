//! HTTP response type.

use std::collections::HashMap;

use serde::Serialize;

/// An HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HashMap<String, String>,
    /// Response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a new response with the given status.
    #[must_use]
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Creates a 200 OK response.
    #[must_use]
    pub fn ok() -> Self {
        Self::new(200)
    }

    /// Creates a 200 response with JSON content.
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self::json_with_status(200, data)
    }

    /// Creates a response with JSON content and the given status.
    pub fn json_with_status<T: Serialize>(status: u16, data: &T) -> Self {
        match serde_json::to_vec(data) {
            Ok(body) => Self::new(status)
                .header("Content-Type", "application/json")
                .body(body),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response body");
                Self::internal_server_error()
            }
        }
    }

    /// Creates a response with plain text content.
    pub fn text(body: impl Into<String>) -> Self {
        Self::ok()
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(body.into())
    }

    /// Creates a 500 Internal Server Error response.
    #[must_use]
    pub fn internal_server_error() -> Self {
        Self::new(500).body("Internal Server Error")
    }

    /// Sets a header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the body as a string.
    #[must_use]
    pub fn body_string(&self) -> Option<String> {
        String::from_utf8(self.body.clone()).ok()
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the body is not valid JSON.
    pub fn body_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Returns the status text for the current status code.
    #[must_use]
    pub const fn status_text(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            413 => "Payload Too Large",
            500 => "Internal Server Error",
            _ => "Unknown",
        }
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_json() {
        let res = Response::json(&serde_json::json!({"status": "ok"}));
        assert_eq!(res.status, 200);
        assert_eq!(
            res.headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(res.body_json().unwrap()["status"], "ok");
    }

    #[test]
    fn test_response_json_with_status() {
        let res = Response::json_with_status(400, &serde_json::json!({"status": "error"}));
        assert_eq!(res.status, 400);
        assert_eq!(res.status_text(), "Bad Request");
    }

    #[test]
    fn test_response_text() {
        let res = Response::text("hello");
        assert_eq!(res.body_string(), Some("hello".to_string()));
    }
}
