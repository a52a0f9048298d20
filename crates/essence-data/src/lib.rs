//! HTTP client utilities for Essence.
//!
//! A thin async wrapper over `reqwest` with automatic JSON handling and a
//! builder API shaped for the storefront's needs: a fixed base URL, default
//! headers, and per-request bearer credentials.
//!
//! # Example
//!
//! ```rust,ignore
//! use essence_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Health { ok: bool }
//!
//! let client = FetchClient::new().with_base_url("https://api.example.com");
//! let health: Health = client
//!     .get("/health")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod response;

pub use error::FetchError;
pub use response::Response;

use std::collections::HashMap;
use std::time::Duration;

/// HTTP request methods the storefront uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// HTTP client for making outbound requests.
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::InvalidRequest(e.to_string()))?;
        Ok(Self {
            http,
            base_url: None,
            default_headers: HashMap::new(),
        })
    }

    /// Set a base URL that will be prepended to relative request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in every request.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a PUT request.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Put, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Create a request with an explicit method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}{}", base.trim_end_matches('/'), url)
            }
            _ => url,
        };

        let mut inner = self.http.request(method.into(), full_url);
        for (key, value) in &self.default_headers {
            inner = inner.header(key, value);
        }

        RequestBuilder {
            inner,
            json_error: None,
        }
    }
}

/// A request being built against a [`FetchClient`].
pub struct RequestBuilder {
    inner: reqwest::RequestBuilder,
    // Serialization failures are deferred to send() so the builder chain
    // stays infallible.
    json_error: Option<FetchError>,
}

impl RequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        self.inner = self.inner.header(key.as_ref(), value.as_ref());
        self
    }

    /// Add query parameters. Pairs with empty values are dropped, matching
    /// the backend convention that an omitted key means "unconstrained".
    pub fn query(mut self, pairs: &[(&str, &str)]) -> Self {
        let pairs: Vec<(&str, &str)> = pairs.iter().copied().filter(|(_, v)| !v.is_empty()).collect();
        if !pairs.is_empty() {
            self.inner = self.inner.query(&pairs);
        }
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => {
                self.inner = self
                    .inner
                    .header("content-type", "application/json")
                    .body(body);
            }
            Err(e) => self.json_error = Some(FetchError::Json(e.to_string())),
        }
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(mut self, token: impl AsRef<str>) -> Self {
        self.inner = self.inner.bearer_auth(token.as_ref());
        self
    }

    /// Send the request and buffer the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        if let Some(err) = self.json_error {
            return Err(err);
        }
        let response = self.inner.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(Response::new(status, body))
    }
}
