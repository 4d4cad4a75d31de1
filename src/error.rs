// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Rachio client library.
//!
//! This module provides the error hierarchy for handling failures across
//! the library: transport failures, authorization rejections, unknown
//! endpoints, zone lookups, and response decoding.

use thiserror::Error;

/// The main error type for this library.
///
/// Variants distinguish three failure classes: bad input
/// ([`Error::UnknownEndpoint`], [`Error::ZoneNotFound`],
/// [`Error::EmptyZoneList`]), remote rejection ([`Error::Authentication`],
/// [`Error::NotFound`]), and communication failure ([`Error::Transport`],
/// [`Error::Decode`]).
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP transport failed to complete the request.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The identity call was rejected or returned no person id.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// A by-id lookup returned 404.
    #[error("resource not found: {path}")]
    NotFound {
        /// The relative API path that was requested.
        path: String,
    },

    /// The resource router was given a name outside the known set.
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),

    /// A zone number did not match any zone on the device.
    #[error("no zone numbered {zone_number} on device {device_id}")]
    ZoneNotFound {
        /// The zone number that was requested.
        zone_number: u8,
        /// The device whose zone list was searched.
        device_id: String,
    },

    /// The response body did not decode into the expected shape.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The account has no devices to operate on.
    #[error("account has no devices")]
    NoDevice,

    /// A zone start was requested with an empty run list.
    #[error("no zones given to start")]
    EmptyZoneList,
}

/// Errors raised by the HTTP transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying HTTP request failed (connection, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an unexpected non-success status.
    #[error("unexpected HTTP status {status} for {path}")]
    Status {
        /// The HTTP status code returned.
        status: u16,
        /// The relative API path that was requested.
        path: String,
    },
}

/// Errors raised while decoding API responses.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(&'static str),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_not_found_display() {
        let err = Error::ZoneNotFound {
            zone_number: 9,
            device_id: "0123456789".to_string(),
        };
        assert_eq!(err.to_string(), "no zone numbered 9 on device 0123456789");
    }

    #[test]
    fn unknown_endpoint_display() {
        let err = Error::UnknownEndpoint("sprinkler".to_string());
        assert_eq!(err.to_string(), "unknown endpoint: sprinkler");
    }

    #[test]
    fn error_from_decode_error() {
        let decode_err = DecodeError::MissingField("id");
        let err: Error = decode_err.into();
        assert!(matches!(err, Error::Decode(DecodeError::MissingField("id"))));
    }

    #[test]
    fn transport_status_display() {
        let err = TransportError::Status {
            status: 500,
            path: "person/info".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected HTTP status 500 for person/info");
    }
}
