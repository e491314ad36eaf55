//! HTTP transport boundary.
//!
//! The dispatcher assembles requests; a [`Transport`] executes them. The
//! production implementation is a thin reqwest wrapper. Unit tests swap in
//! a recording transport so request construction can be asserted without a
//! network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::config::EmtConfig;
use crate::error::{EmtError, Result};
use crate::request::{AssembledRequest, RequestMethod};

const USER_AGENT: &str = concat!("emtmadrid/", env!("CARGO_PKG_VERSION"));

/// Executes an assembled request and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &AssembledRequest) -> Result<String>;
}

/// reqwest-backed production transport.
///
/// Cheaply cloneable; clones reference the same underlying connection
/// pool, so one pool serves every facade of a client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build the transport for the given configuration.
    ///
    /// TLS certificate verification follows
    /// [`EmtConfig::verify_tls`](crate::EmtConfig); the default is to
    /// accept the self-signed certificates the EMT endpoints serve.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &EmtConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .map_err(EmtError::Transport)?;

        Ok(Self { http })
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<String> {
        let status = response.status();

        if status.is_success() {
            return response.text().await.map_err(EmtError::Transport);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(EmtError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Extract an error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        // EMT errors carry a Description field; fall back to the common
        // message/error keys, then the raw body.
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("Description").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        body
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: &AssembledRequest) -> Result<String> {
        tracing::debug!(method = %request.method, target = %request.target, "executing request");

        let response = match request.method {
            RequestMethod::Post => {
                let mut builder = self.http.post(&request.target);
                if let Some(payload) = &request.payload {
                    builder = builder.form(payload);
                }
                builder.send().await.map_err(EmtError::Transport)?
            }
            RequestMethod::Get => {
                // Bike-share targets carry everything in the path; a
                // payload would only appear for future GET endpoints.
                let mut builder = self.http.get(&request.target);
                if let Some(payload) = &request.payload {
                    if !payload.is_empty() {
                        builder = builder.query(payload);
                    }
                }
                builder.send().await.map_err(EmtError::Transport)?
            }
        };

        Self::check_response(response).await
    }
}

#[cfg(test)]
pub(crate) mod recording {
    //! Recording transport for unit tests.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::Transport;
    use crate::error::{EmtError, Result};
    use crate::request::AssembledRequest;

    enum Canned {
        Body(String),
        Status { status: u16, message: String },
    }

    /// Records every request it executes and answers a canned response.
    pub(crate) struct RecordingTransport {
        canned: Canned,
        requests: Mutex<Vec<AssembledRequest>>,
    }

    impl RecordingTransport {
        /// Answer every request with the given body.
        pub(crate) fn with_response(body: &str) -> Arc<Self> {
            Arc::new(Self {
                canned: Canned::Body(body.to_string()),
                requests: Mutex::new(Vec::new()),
            })
        }

        /// Fail every request with the given HTTP status.
        pub(crate) fn with_status(status: u16, message: &str) -> Arc<Self> {
            Arc::new(Self {
                canned: Canned::Status {
                    status,
                    message: message.to_string(),
                },
                requests: Mutex::new(Vec::new()),
            })
        }

        /// Every request executed so far, in order.
        pub(crate) fn recorded(&self) -> Vec<AssembledRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// The single request this transport saw; panics otherwise.
        pub(crate) fn only_request(&self) -> AssembledRequest {
            let requests = self.recorded();
            assert_eq!(requests.len(), 1, "expected exactly one request");
            requests.into_iter().next().unwrap()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn execute(&self, request: &AssembledRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.canned {
                Canned::Body(body) => Ok(body.clone()),
                Canned::Status { status, message } => Err(EmtError::Status {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_default_config() {
        let transport = HttpTransport::new(&EmtConfig::default());
        assert!(transport.is_ok());
    }

    #[test]
    fn test_builds_with_verification_enabled() {
        let config = EmtConfig::default().with_verify_tls(true);
        assert!(HttpTransport::new(&config).is_ok());
    }
}
