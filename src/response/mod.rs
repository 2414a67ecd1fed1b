// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the controller's RPC endpoints.
//!
//! Fields are optional at the serde level so a missing field surfaces as
//! [`DecodeError::MissingField`] rather than a generic JSON error.

use serde::Deserialize;

use crate::codec::{STATUS_A_FIELD, STATUS_B_FIELD};
use crate::error::DecodeError;

/// Body of `GET /rpc/Sys.GetInfo`.
///
/// # Examples
///
/// ```
/// use pitboss_lib::response::InfoResponse;
///
/// let info: InfoResponse = serde_json::from_str(r#"{"id":"pitboss-a1b2c3","fw":"1.2"}"#).unwrap();
/// assert_eq!(info.into_id().unwrap(), "pitboss-a1b2c3");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct InfoResponse {
    id: Option<String>,
}

impl InfoResponse {
    /// Returns the device id.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::MissingField` if the body has no `id`.
    pub fn into_id(self) -> Result<String, DecodeError> {
        self.id
            .ok_or_else(|| DecodeError::MissingField("id".to_string()))
    }
}

/// Body of `GET /rpc/PB.GetState`.
#[derive(Debug, Clone, Deserialize)]
pub struct StateResponse {
    sc_12: Option<String>,
    sc_11: Option<String>,
}

impl StateResponse {
    /// Hex-decodes both status buffers, `(sc_12, sc_11)`.
    ///
    /// Empty strings decode to empty buffers; rejecting those is left to
    /// the status decoder.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::MissingField` or `DecodeError::InvalidHex`.
    pub fn into_buffers(self) -> Result<(Vec<u8>, Vec<u8>), DecodeError> {
        let status_a = decode_field(self.sc_12, STATUS_A_FIELD)?;
        let status_b = decode_field(self.sc_11, STATUS_B_FIELD)?;
        Ok((status_a, status_b))
    }
}

fn decode_field(value: Option<String>, field: &'static str) -> Result<Vec<u8>, DecodeError> {
    let value = value.ok_or_else(|| DecodeError::MissingField(field.to_string()))?;
    hex::decode(value.trim()).map_err(|source| DecodeError::InvalidHex { field, source })
}
