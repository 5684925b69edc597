//! Promise-style transport backed by `reqwest`

use super::{HttpTransport, TransportResponse};
use crate::error::Result;
use async_trait::async_trait;
use http::Method;

#[derive(Clone, Default)]
pub struct FetchTransport {
    client: reqwest::Client,
}

impl FetchTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for FetchTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<TransportResponse> {
        let mut request = self.client.request(method, url);

        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
