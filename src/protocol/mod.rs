// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport to the grill's WiFi controller.
//!
//! The controller exposes a small JSON-RPC style API under `/rpc`. Each
//! call is one request; nothing is retried here.
//!
//! - [`HttpConfig`]: host, port and timeout
//! - [`HttpClient`]: the four RPC calls

mod http;

pub use http::{HttpClient, HttpConfig};

/// The two raw status buffers from one `PB.GetState` response.
///
/// The buffers are produced independently by the MCU and are not
/// guaranteed to be consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusSnapshot {
    /// Hex-decoded `sc_12`.
    pub status_a: Vec<u8>,
    /// Hex-decoded `sc_11`.
    pub status_b: Vec<u8>,
}

impl StatusSnapshot {
    /// Creates a snapshot from both buffers.
    #[must_use]
    pub fn new(status_a: Vec<u8>, status_b: Vec<u8>) -> Self {
        Self { status_a, status_b }
    }
}
