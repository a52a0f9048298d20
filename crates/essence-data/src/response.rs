//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;

/// A buffered HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The error message is the raw body, which is where this backend puts
    /// its human-readable rejection reasons.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::Http {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(Response::new(200, Vec::new()).is_success());
        assert!(Response::new(201, Vec::new()).is_success());
        assert!(!Response::new(404, Vec::new()).is_success());
        assert!(!Response::new(500, Vec::new()).is_success());
    }

    #[test]
    fn test_text() {
        let resp = Response::new(200, b"hola".to_vec());
        assert_eq!(resp.text().unwrap(), "hola");
    }

    #[test]
    fn test_json() {
        #[derive(serde::Deserialize)]
        struct Data {
            value: i32,
        }
        let resp = Response::new(200, br#"{"value": 42}"#.to_vec());
        let data: Data = resp.json().unwrap();
        assert_eq!(data.value, 42);
    }

    #[test]
    fn test_json_invalid() {
        let resp = Response::new(200, b"not json".to_vec());
        assert!(resp.json::<serde_json::Value>().is_err());
    }

    #[test]
    fn test_error_for_status_carries_body() {
        let resp = Response::new(409, b"Stock insuficiente".to_vec());
        match resp.error_for_status() {
            Err(FetchError::Http { status, message }) => {
                assert_eq!(status, 409);
                assert_eq!(message, "Stock insuficiente");
            }
            other => panic!("unexpected: {:?}", other.map(|r| r.status)),
        }
    }

    #[test]
    fn test_error_for_status_passes_success() {
        assert!(Response::new(204, Vec::new()).error_for_status().is_ok());
    }
}
