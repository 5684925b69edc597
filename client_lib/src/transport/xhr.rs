//! Callback-style transport backed by a blocking `ureq` agent
//!
//! The agent blocks the calling thread, so each request runs on the
//! blocking pool and completion is delivered back to the handler when the
//! task joins.

use super::{HttpTransport, TransportResponse};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use http::Method;

#[derive(Clone)]
pub struct XhrTransport {
    agent: ureq::Agent,
}

impl XhrTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for XhrTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for XhrTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        headers: &[(&str, &str)],
        body: Option<String>,
    ) -> Result<TransportResponse> {
        let agent = self.agent.clone();
        let method = method.as_str().to_string();
        let url = url.to_string();
        let headers: Vec<(String, String)> = headers
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        tokio::task::spawn_blocking(move || {
            let mut request = agent.request(&method, &url);
            for (name, value) in &headers {
                request = request.set(name, value);
            }

            let result = match body {
                Some(body) => request.send_string(&body),
                None => request.call(),
            };

            match result {
                Ok(response) => read_response(response),
                // ureq reports non-2xx as an error; fold it back into an
                // ordinary response so status branching stays in the handlers.
                Err(ureq::Error::Status(_, response)) => read_response(response),
                Err(ureq::Error::Transport(err)) => Err(AppError::Transport(err.to_string())),
            }
        })
        .await
        .map_err(|err| AppError::Transport(err.to_string()))?
    }
}

fn read_response(response: ureq::Response) -> Result<TransportResponse> {
    let status = response.status();
    let body = response
        .into_string()
        .map_err(|err| AppError::Transport(err.to_string()))?;

    Ok(TransportResponse { status, body })
}
