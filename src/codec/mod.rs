// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire codec for the grill MCU.
//!
//! Everything in this module is pure: no I/O, no shared state, safe to call
//! from any thread.
//!
//! - Temperatures: [`encode_temp`] / [`decode_temp`]
//! - Command frames: [`build_command`] and the `set_*` frame builders
//! - Status buffers: [`decode_status`] and its two halves
//!
//! # Examples
//!
//! ```
//! use pitboss_lib::codec;
//!
//! assert_eq!(codec::encode_temp(225).unwrap(), "020205");
//! assert_eq!(codec::set_power(false), "FE0102FF");
//!
//! assert!(codec::decode_status("grill", &[], &[]).is_err());
//! ```

mod frame;
mod status;
mod temperature;

pub use frame::{
    CommandCode, FRAME_POSTAMBLE, FRAME_PREAMBLE, TemperatureTarget, build_command,
    set_grill_temp, set_power, set_prime, set_probe1_temp, temperature_payload,
};
pub use status::{
    STATUS_A_FIELD, STATUS_B_FIELD, StatusA, StatusB, decode_status, decode_status_a,
    decode_status_b, merge_status, status_a_layout, status_b_layout,
};
pub use temperature::{
    TEMP_MAX_ENCODABLE, TEMP_NOT_AVAILABLE, decode_temp, encode_temp, encode_temp_bytes,
};

pub(crate) use temperature::digits;

#[cfg(test)]
pub(crate) use status::fixtures;
