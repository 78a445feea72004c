//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On WASM, `reqwest::Response` is not `Send` because it wraps JS values, so the
//! request is spawned on the JS thread with `wasm_bindgen_futures::spawn_local`
//! and the finished [`Response`] is handed back through a `flume` channel.
//! On native targets reqwest is used directly.
//!
//! Backend calls for the users view need two things beyond a plain fetch:
//! query parameters (`startIndex`) and the browser-style "include credentials"
//! behaviour, expressed here as a `cookie` header.

use std::collections::HashMap;

use serde::Deserialize;

/// HTTP method for requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Delete,
}

/// A simplified HTTP response that contains only Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body as bytes
    pub body: Vec<u8>,
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Attempt to deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The `message` field of a JSON body, if the backend sent one.
    ///
    /// Non-JSON bodies and bodies without the field yield `None`.
    pub fn message(&self) -> Option<String> {
        serde_json::from_slice::<MessageBody>(&self.body)
            .ok()
            .and_then(|body| body.message)
    }
}

/// HTTP client error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: String,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
}

impl RequestBuilder {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            headers: HashMap::new(),
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Append a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Attach session credentials, if any.
    ///
    /// `None` leaves the request anonymous; the backend decides what that means.
    pub fn credentials(self, session_cookie: Option<&str>) -> Self {
        match session_cookie {
            Some(cookie) if !cookie.is_empty() => self.header("cookie", cookie),
            _ => self,
        }
    }

    /// The URL including the encoded query string.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.url)
    }

    /// Send the request and return a Send-safe future.
    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.method, self.full_url(), self.headers).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);
        let method = self.method;
        let url = self.full_url();
        let headers = self.headers;

        wasm_bindgen_futures::spawn_local(async move {
            let result = execute(method, url, headers).await;
            let _ = tx.send_async(result).await;
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("Request cancelled"))?
    }
}

async fn execute(
    method: Method,
    url: String,
    headers: HashMap<String, String>,
) -> HttpResult<Response> {
    let client = reqwest::Client::new();

    let mut request = match method {
        Method::Get => client.get(&url),
        Method::Delete => client.delete(&url),
    };

    #[cfg(target_arch = "wasm32")]
    {
        request = request.fetch_credentials_include();
    }

    for (name, value) in &headers {
        request = request.header(name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();

    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}

/// HTTP client with Send-safe futures on all platforms.
pub struct Client;

impl Client {
    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Get, url)
    }

    /// Create a DELETE request.
    pub fn delete(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(Method::Delete, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            status,
            body: body.to_vec(),
        }
    }

    #[test]
    fn test_response_is_success() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(404, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn test_response_message_from_json_body() {
        let response = response(403, br#"{"message": "You are not allowed"}"#);
        assert_eq!(response.message().as_deref(), Some("You are not allowed"));
    }

    #[test]
    fn test_response_message_absent() {
        assert_eq!(response(500, br#"{"error": "boom"}"#).message(), None);
        assert_eq!(response(502, b"<html>bad gateway</html>").message(), None);
        assert_eq!(response(500, b"").message(), None);
    }

    #[test]
    fn test_full_url_without_query() {
        let builder = Client::get("http://localhost/server/student/getusers");
        assert_eq!(
            builder.full_url(),
            "http://localhost/server/student/getusers"
        );
    }

    #[test]
    fn test_full_url_with_query() {
        let builder = Client::get("http://localhost/server/student/getusers").query("startIndex", 9);
        assert_eq!(
            builder.full_url(),
            "http://localhost/server/student/getusers?startIndex=9"
        );
    }

    #[test]
    fn test_credentials_sets_cookie_header() {
        let builder = Client::delete("http://localhost").credentials(Some("access_token=abc"));
        assert_eq!(
            builder.headers.get("cookie"),
            Some(&"access_token=abc".to_owned())
        );
    }

    #[test]
    fn test_credentials_none_or_empty_is_anonymous() {
        let builder = Client::get("http://localhost").credentials(None);
        assert!(builder.headers.is_empty());

        let builder = Client::get("http://localhost").credentials(Some(""));
        assert!(builder.headers.is_empty());
    }
}
