// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One-decimal-digit-per-byte temperature encoding.
//!
//! The controller stores a temperature as three bytes, each holding one
//! decimal digit of the value: 225 is `[0x02, 0x02, 0x05]`. This is not
//! packed BCD; every digit gets a whole byte.

use crate::error::ValueError;

/// Raw value the controller reports when a probe is unplugged.
///
/// Decodes to 0. This means a genuine reading of 960 cannot be told apart
/// from "not available"; 960 is above every range the grill supports.
pub const TEMP_NOT_AVAILABLE: u16 = 960;

/// Largest value representable in three decimal digits.
pub const TEMP_MAX_ENCODABLE: u16 = 999;

/// Splits a value into its three decimal digits, most significant first.
///
/// Values above 999 wrap; callers pass validated values only.
pub(crate) const fn digits(value: u16) -> [u8; 3] {
    let value = value % 1000;
    #[allow(clippy::cast_possible_truncation)]
    [
        (value / 100) as u8,
        (value / 10 % 10) as u8,
        (value % 10) as u8,
    ]
}

/// Encodes a temperature as the three digit bytes the controller expects.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` if `value` exceeds 999.
///
/// # Examples
///
/// ```
/// use pitboss_lib::codec::encode_temp_bytes;
///
/// assert_eq!(encode_temp_bytes(225).unwrap(), [0x02, 0x02, 0x05]);
/// ```
pub fn encode_temp_bytes(value: u16) -> Result<[u8; 3], ValueError> {
    if value > TEMP_MAX_ENCODABLE {
        return Err(ValueError::OutOfRange {
            min: 0,
            max: TEMP_MAX_ENCODABLE,
            actual: value,
        });
    }
    Ok(digits(value))
}

/// Encodes a temperature as a 6-character hex string.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` if `value` exceeds 999.
///
/// # Examples
///
/// ```
/// use pitboss_lib::codec::encode_temp;
///
/// assert_eq!(encode_temp(225).unwrap(), "020205");
/// assert_eq!(encode_temp(0).unwrap(), "000000");
/// assert_eq!(encode_temp(999).unwrap(), "090909");
/// ```
pub fn encode_temp(value: u16) -> Result<String, ValueError> {
    encode_temp_bytes(value).map(hex::encode_upper)
}

/// Decodes three digit bytes into a temperature.
///
/// Returns 0 for [`TEMP_NOT_AVAILABLE`]. Bytes are not range-checked: a
/// digit byte above 9 still contributes its full weight, as the
/// controller's own arithmetic does.
///
/// # Examples
///
/// ```
/// use pitboss_lib::codec::decode_temp;
///
/// assert_eq!(decode_temp(0x02, 0x02, 0x05), 225);
/// assert_eq!(decode_temp(9, 6, 0), 0);
/// ```
#[must_use]
pub fn decode_temp(b0: u8, b1: u8, b2: u8) -> u16 {
    let value = u16::from(b0) * 100 + u16::from(b1) * 10 + u16::from(b2);
    if value == TEMP_NOT_AVAILABLE { 0 } else { value }
}
