//! HTTP transport seam
//!
//! The two request mechanisms the page offers are equivalent in semantics
//! and differ only in machinery, so both sit behind [`HttpTransport`].
//! A transport only fails on network-level trouble; non-2xx statuses come
//! back as ordinary responses because each dispatcher branches on status
//! differently.

pub mod fetch;
pub mod xhr;

pub use fetch::FetchTransport;
pub use xhr::XhrTransport;

use crate::error::Result;
use async_trait::async_trait;
use http::Method;
use serde::de::DeserializeOwned;

pub const CONTENT_TYPE_JSON: (&str, &str) = ("Content-type", "application/json");

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<TransportResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(TransportResponse { status: 200, body: String::new() }.is_success());
        assert!(TransportResponse { status: 201, body: String::new() }.is_success());
        assert!(!TransportResponse { status: 404, body: String::new() }.is_success());
        assert!(!TransportResponse { status: 500, body: String::new() }.is_success());
    }

    #[test]
    fn test_json_decode_failure() {
        let response = TransportResponse {
            status: 200,
            body: "not json".to_string(),
        };
        let decoded: Result<serde_json::Value> = response.json();
        assert!(decoded.is_err());
    }
}
