// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the grill controller.

use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::json;

use crate::error::{DecodeError, Error, ProtocolError};
use crate::protocol::StatusSnapshot;
use crate::response::{InfoResponse, StateResponse};

const GET_INFO: &str = "Sys.GetInfo";
const GET_STATE: &str = "PB.GetState";
const SEND_MCU_COMMAND: &str = "PB.SendMCUCommand";
const SET_UPDATE_FREQUENCY: &str = "PB.SetMCU_UpdateFrequency";

// ============================================================================
// HttpConfig
// ============================================================================

/// Configuration for the controller's HTTP API.
///
/// # Examples
///
/// ```
/// use pitboss_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.60");
/// assert_eq!(config.base_url(), "http://192.168.1.60/rpc");
///
/// let config = HttpConfig::new("192.168.1.60")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(3));
/// assert_eq!(config.base_url(), "http://192.168.1.60:8080/rpc");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Path prefix of every RPC method.
    pub const RPC_PATH: &'static str = "/rpc";

    /// Creates a configuration for the specified host.
    ///
    /// `host` may carry an explicit `http://` prefix.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the RPC base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self
            .host
            .trim_start_matches("http://")
            .trim_end_matches('/');
        let port_suffix = if self.port == Self::DEFAULT_PORT {
            String::new()
        } else {
            format!(":{}", self.port)
        };
        format!("http://{host}{port_suffix}{}", Self::RPC_PATH)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError::InvalidAddress` for an empty host, or
    /// `ProtocolError::Http` if the HTTP client cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        if self.host.starts_with("https://") {
            return Err(ProtocolError::InvalidAddress(format!(
                "{}: the controller only speaks plain HTTP",
                self.host
            )));
        }

        let base_url = self.base_url();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            base_url,
            client,
            timeout: self.timeout,
        })
    }
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for one grill controller.
///
/// Holds nothing but the base URL and a connection pool; every call is a
/// single request with no retry.
///
/// # Examples
///
/// ```no_run
/// use pitboss_lib::protocol::HttpClient;
/// use pitboss_lib::codec;
///
/// # async fn example() -> pitboss_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.60")?;
/// let id = client.get_unique_id().await?;
/// let snapshot = client.get_raw_status().await?;
/// let state = codec::decode_status(id, &snapshot.status_a, &snapshot.status_b)?;
///
/// client.send_command(&codec::set_power(true)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the RPC base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url)
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    async fn read_body(&self, response: Response) -> Result<String, ProtocolError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProtocolError::from_reqwest(e, self.timeout_ms()))?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(body)
    }

    async fn get(&self, method: &str) -> Result<String, ProtocolError> {
        let url = self.build_url(method);

        tracing::debug!(url = %url, "Sending HTTP GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProtocolError::from_reqwest(e, self.timeout_ms()))?;

        self.read_body(response).await
    }

    async fn post(&self, method: &str, body: &serde_json::Value) -> Result<String, ProtocolError> {
        let url = self.build_url(method);

        tracing::debug!(url = %url, body = %body, "Sending HTTP POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ProtocolError::from_reqwest(e, self.timeout_ms()))?;

        self.read_body(response).await
    }

    /// Fetches the device identifier from `Sys.GetInfo`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` on connectivity failure or non-2xx status,
    /// `Error::Decode` if the body has no usable `id`.
    pub async fn get_unique_id(&self) -> Result<String, Error> {
        let body = self.get(GET_INFO).await?;
        let info: InfoResponse = serde_json::from_str(&body).map_err(DecodeError::from)?;
        Ok(info.into_id()?)
    }

    /// Fetches and hex-decodes both status buffers from `PB.GetState`.
    ///
    /// The buffers are returned as received; an empty buffer is not an
    /// error at this layer.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` on connectivity failure or non-2xx status,
    /// `Error::Decode` if the body or its hex fields are malformed.
    pub async fn get_raw_status(&self) -> Result<StatusSnapshot, Error> {
        let body = self.get(GET_STATE).await?;
        let state: StateResponse = serde_json::from_str(&body).map_err(DecodeError::from)?;
        let (status_a, status_b) = state.into_buffers()?;
        Ok(StatusSnapshot::new(status_a, status_b))
    }

    /// Posts a hex command frame to `PB.SendMCUCommand`.
    ///
    /// The response body is ignored beyond the status check.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on connectivity failure or non-2xx status.
    pub async fn send_command(&self, frame: &str) -> Result<(), ProtocolError> {
        self.post(SEND_MCU_COMMAND, &json!({ "command": frame }))
            .await
            .map(drop)
    }

    /// Sets how often the controller refreshes its status buffers.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` on connectivity failure or non-2xx status.
    pub async fn set_poll_frequency(&self, frequency: u32) -> Result<(), ProtocolError> {
        self.post(SET_UPDATE_FREQUENCY, &json!({ "frequency": frequency }))
            .await
            .map(drop)
    }
}
