// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Rachio API.
//!
//! The transport issues plain GET/PUT requests against the vendor origin and
//! hands back the raw status and body. It knows nothing about authorization
//! or payload shapes; that lives in [`crate::client`].

use std::time::Duration;

use reqwest::Client;

use crate::error::TransportError;

/// Configuration for the HTTP transport.
///
/// Requests are stateless; each call is an independent request against the
/// configured origin. The base URL can be overridden, which is also the
/// seam used by the integration tests to point at a mock server.
///
/// # Examples
///
/// ```
/// use rachio_lib::transport::TransportConfig;
/// use std::time::Duration;
///
/// let config = TransportConfig::new()
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://api.rach.io/1/public");
/// ```
#[derive(Debug, Clone)]
pub struct TransportConfig {
    base_url: String,
    timeout: Duration,
}

impl TransportConfig {
    /// The vendor API origin all relative paths resolve against.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.rach.io/1/public";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration pointing at the vendor API.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the base URL. A trailing slash is stripped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates an [`HttpTransport`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn into_transport(self) -> Result<HttpTransport, TransportError> {
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(TransportError::Http)?;

        Ok(HttpTransport {
            base_url: self.base_url,
            client,
        })
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A raw HTTP response: status code plus body text.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: String,
}

impl RawResponse {
    /// Returns true for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP transport for the Rachio API.
///
/// Cheap to clone; the underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    /// Returns the base URL requests resolve against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Issues a GET request for the given relative path.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request cannot be completed.
    pub async fn get(
        &self,
        path: &str,
        headers: &[(&str, String)],
    ) -> Result<RawResponse, TransportError> {
        let url = self.url_for(path);

        tracing::debug!(url = %url, "sending GET request");

        let mut request = self.client.get(&url);
        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request.send().await.map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(status, "received GET response");

        Ok(RawResponse { status, body })
    }

    /// Issues a PUT request with a pre-serialized JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request cannot be completed.
    pub async fn put(
        &self,
        path: &str,
        headers: &[(&str, String)],
        body: String,
    ) -> Result<RawResponse, TransportError> {
        let url = self.url_for(path);

        tracing::debug!(url = %url, "sending PUT request");

        let mut request = self.client.put(&url).body(body);
        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request.send().await.map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::Http)?;

        tracing::debug!(status, "received PUT response");

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = TransportConfig::new();
        assert_eq!(config.base_url(), "https://api.rach.io/1/public");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn config_with_base_url_strips_trailing_slash() {
        let config = TransportConfig::new().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn config_with_timeout() {
        let config = TransportConfig::new().with_timeout(Duration::from_secs(30));
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn transport_builds_relative_urls() {
        let transport = TransportConfig::new().into_transport().unwrap();
        assert_eq!(
            transport.url_for("person/info"),
            "https://api.rach.io/1/public/person/info"
        );
    }

    #[test]
    fn raw_response_success_range() {
        let ok = RawResponse {
            status: 204,
            body: String::new(),
        };
        let err = RawResponse {
            status: 404,
            body: String::new(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }
}
