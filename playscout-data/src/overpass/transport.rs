//! HTTP transport for the Overpass interpreter.
//!
//! [`HttpOverpassTransport`] sends one query per call and maps every
//! outcome onto [`FetchFailure`] so the retry loop can pick a backoff.

use std::time::Duration;

use playscout_core::FetchFailure;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::{OverpassQuery, OverpassResponse};

/// Public Overpass interpreter.
pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// Default user agent for Overpass requests.
pub const DEFAULT_USER_AGENT: &str = concat!("playscout/", env!("CARGO_PKG_VERSION"));

/// Default per-attempt timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Sends a single query and returns the decoded response.
pub trait OverpassTransport {
    /// Endpoint the transport talks to, used in diagnostics.
    fn endpoint(&self) -> &str;

    /// Execute `query` once.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchFailure`] describing why the attempt failed.
    fn execute(&self, query: &OverpassQuery) -> Result<OverpassResponse, FetchFailure>;
}

/// Errors raised while constructing an [`HttpOverpassTransport`].
#[derive(Debug, Error)]
pub enum TransportBuildError {
    /// The endpoint is not an absolute URL.
    #[error("invalid Overpass endpoint {endpoint:?}")]
    InvalidEndpoint {
        /// Endpoint as configured.
        endpoint: String,
        /// Parser error.
        #[source]
        source: url::ParseError,
    },
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
    /// The Tokio runtime could not be built.
    #[error("failed to build Tokio runtime")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`HttpOverpassTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverpassConfig {
    /// Interpreter URL receiving the POSTed query.
    pub endpoint: String,
    /// Per-attempt timeout.
    pub timeout: Duration,
    /// User agent sent with each request.
    pub user_agent: String,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl OverpassConfig {
    /// Configuration for `endpoint` with default timeout and user agent.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Set the per-attempt timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Blocking Overpass transport built on `reqwest`.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the transport blocks on the current-thread
/// runtime it owns. Inside a multi-threaded runtime it blocks on that
/// runtime's handle via [`tokio::task::block_in_place`]. Inside a
/// `current_thread` runtime it falls back to its own runtime, which avoids
/// the `block_in_place` panic but can deadlock if the caller's runtime is
/// needed to make progress.
pub struct HttpOverpassTransport {
    client: Client,
    endpoint: Url,
    timeout: Duration,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpOverpassTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpOverpassTransport")
            .field("endpoint", &self.endpoint.as_str())
            .field("timeout", &self.timeout)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish_non_exhaustive()
    }
}

impl HttpOverpassTransport {
    /// Transport for `endpoint` with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a URL or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, TransportBuildError> {
        Self::with_config(OverpassConfig::new(endpoint))
    }

    /// Transport with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a URL or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: OverpassConfig) -> Result<Self, TransportBuildError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|source| TransportBuildError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(TransportBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(TransportBuildError::Runtime)?;
        Ok(Self {
            client,
            endpoint,
            timeout: config.timeout,
            runtime,
        })
    }

    async fn execute_async(&self, query: &OverpassQuery) -> Result<OverpassResponse, FetchFailure> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .form(&[("data", query.as_str())])
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchFailure::HttpStatus {
                url: self.endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<OverpassResponse>()
            .await
            .map_err(|err| self.convert_reqwest_error(&err))
    }

    fn convert_reqwest_error(&self, error: &reqwest::Error) -> FetchFailure {
        let url = self.endpoint.to_string();
        if error.is_timeout() {
            return FetchFailure::Timeout {
                url,
                timeout_secs: self.timeout.as_secs(),
            };
        }
        if error.is_decode() {
            return FetchFailure::Decode {
                url,
                message: error.to_string(),
            };
        }
        FetchFailure::Network {
            url,
            message: error.to_string(),
        }
    }
}

impl OverpassTransport for HttpOverpassTransport {
    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    fn execute(&self, query: &OverpassQuery) -> Result<OverpassResponse, FetchFailure> {
        let future = self.execute_async(query);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }
}
