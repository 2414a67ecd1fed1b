// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `pitboss_lib` library.
//!
//! Failures fall in three families: value validation (a target temperature
//! the grill would refuse), connectivity (the controller could not be
//! reached or answered with a non-success status), and decoding (the
//! controller answered, but its status buffers could not be parsed).
//!
//! Error flags reported by the grill itself (`Err1`, `NoPellets`, ...) are
//! not errors in this sense; they are part of the decoded
//! [`DeviceState`](crate::state::DeviceState).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The controller could not be reached or rejected the request.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The controller answered but the payload could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Returns `true` if this is a connectivity failure.
    ///
    /// Connectivity failures are what a poll scheduler should treat as
    /// "device unavailable".
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }

    /// Returns `true` if this is a decode failure.
    ///
    /// After a decode failure the previously published state is still valid.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A numeric value is in range but not a multiple of the allowed step.
    #[error("value {actual} is not a multiple of {step}")]
    InvalidStep {
        /// Required step between accepted values.
        step: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// An invalid power state string was provided.
    #[error("invalid power state: {0}")]
    InvalidPowerState(String),
}

/// Connectivity errors talking to the grill controller over HTTP.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed (connection refused, DNS, TLS, body read...).
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The controller answered with a non-success status code.
    #[error("HTTP {status} - {reason}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase, or `"Unknown"`.
        reason: String,
    },

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl ProtocolError {
    /// Wraps a reqwest error, keeping timeouts as their own variant.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else {
            Self::Http(err)
        }
    }
}

/// Errors decoding the controller's responses and status buffers.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A status buffer was empty after hex decoding.
    #[error("status buffer {buffer} is empty")]
    EmptyBuffer {
        /// Wire name of the buffer (`sc_12` or `sc_11`).
        buffer: &'static str,
    },

    /// A status buffer does not match its fixed layout length.
    #[error("status buffer {buffer} has wrong length: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Wire name of the buffer (`sc_12` or `sc_11`).
        buffer: &'static str,
        /// Bytes required by the layout.
        expected: usize,
        /// Bytes actually received.
        actual: usize,
    },

    /// A hex field in the response could not be decoded.
    #[error("invalid hex in {field}: {source}")]
    InvalidHex {
        /// The JSON field holding the hex string.
        field: &'static str,
        /// Underlying hex error.
        #[source]
        source: hex::FromHexError,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 130,
            max: 400,
            actual: 450,
        };
        assert_eq!(err.to_string(), "value 450 is out of range [130, 400]");
    }

    #[test]
    fn step_error_display() {
        let err = ValueError::InvalidStep {
            step: 10,
            actual: 225,
        };
        assert_eq!(err.to_string(), "value 225 is not a multiple of 10");
    }

    #[test]
    fn length_mismatch_display() {
        let err = DecodeError::LengthMismatch {
            buffer: "sc_11",
            expected: 45,
            actual: 12,
        };
        assert_eq!(
            err.to_string(),
            "status buffer sc_11 has wrong length: expected 45 bytes, got 12"
        );
    }

    #[test]
    fn http_status_display() {
        let err = ProtocolError::HttpStatus {
            status: 503,
            reason: "Service Unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 - Service Unavailable");
    }

    #[test]
    fn error_classification() {
        let err: Error = DecodeError::EmptyBuffer { buffer: "sc_12" }.into();
        assert!(err.is_decode());
        assert!(!err.is_connectivity());

        let err: Error = ProtocolError::Timeout(10_000).into();
        assert!(err.is_connectivity());
        assert!(!err.is_decode());

        let err: Error = ValueError::InvalidPowerState("maybe".to_string()).into();
        assert!(!err.is_connectivity());
        assert!(!err.is_decode());
    }
}
