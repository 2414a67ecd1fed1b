// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status buffer decoding.
//!
//! The controller exposes two fixed-width status buffers, fetched in one
//! `PB.GetState` response but produced independently by the MCU:
//!
//! - `sc_12` ([`StatusA`]): setpoints and readings, including the grill
//!   setpoint and chamber reading.
//! - `sc_11` ([`StatusB`]): probe readings again, power, error flags,
//!   actuator states and the recipe timer.
//!
//! Temperatures are three digit bytes each (see [`decode_temp`]). Booleans
//! are one byte, nonzero meaning true.

use super::temperature::decode_temp;
use crate::error::DecodeError;
use crate::state::{DeviceState, ErrorFlag, ErrorFlags, Recipe};

/// Byte offsets within the `sc_12` buffer.
pub mod status_a_layout {
    pub const PROBE1_SET: usize = 2;
    pub const PROBE1_ACTUAL: usize = 5;
    pub const PROBE2_ACTUAL: usize = 8;
    pub const PROBE3_ACTUAL: usize = 11;
    pub const PROBE4_ACTUAL: usize = 14;
    pub const SMOKER_ACTUAL: usize = 17;
    pub const GRILL_SET: usize = 20;
    pub const GRILL_ACTUAL: usize = 23;
    pub const IS_FAHRENHEIT: usize = 26;
    /// Full layout length, including one trailing pad byte.
    pub const LEN: usize = 28;
}

/// Byte offsets within the `sc_11` buffer.
pub mod status_b_layout {
    pub const PROBE1_SET: usize = 2;
    pub const PROBE1_ACTUAL: usize = 5;
    pub const PROBE2_ACTUAL: usize = 8;
    pub const PROBE3_ACTUAL: usize = 11;
    pub const PROBE4_ACTUAL: usize = 14;
    pub const SMOKER_ACTUAL: usize = 17;
    pub const MISC_TEMP: usize = 20;
    pub const MISC_TEMP_SELECTOR: usize = 23;
    pub const MODULE_IS_ON: usize = 24;
    /// First of nine error flag bytes, in [`ErrorFlag::ALL`](crate::state::ErrorFlag::ALL) order.
    pub const ERROR_FLAGS: usize = 25;
    pub const FAN_ON: usize = 34;
    pub const IGNITER_ON: usize = 35;
    pub const MOTOR_ON: usize = 36;
    pub const LIGHT_ON: usize = 37;
    pub const PRIMING: usize = 38;
    pub const IS_FAHRENHEIT: usize = 39;
    pub const RECIPE_STEP: usize = 40;
    pub const RECIPE_HOURS: usize = 41;
    pub const RECIPE_MINUTES: usize = 42;
    pub const RECIPE_SECONDS: usize = 43;
    /// Full layout length, including one trailing pad byte.
    pub const LEN: usize = 45;
}

/// Wire name of the first status buffer.
pub const STATUS_A_FIELD: &str = "sc_12";

/// Wire name of the second status buffer.
pub const STATUS_B_FIELD: &str = "sc_11";

/// Decoded `sc_12` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusA {
    pub probe1_set: u16,
    pub probe1_actual: u16,
    pub probe2_actual: u16,
    pub probe3_actual: u16,
    pub probe4_actual: u16,
    pub smoker_actual: u16,
    pub grill_set: u16,
    pub grill_actual: u16,
    pub is_fahrenheit: bool,
}

/// Decoded `sc_11` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusB {
    pub probe1_set: u16,
    pub probe1_actual: u16,
    pub probe2_actual: u16,
    pub probe3_actual: u16,
    pub probe4_actual: u16,
    pub smoker_actual: u16,
    /// Auxiliary reading; its meaning depends on `misc_temp_selector`.
    pub misc_temp: u16,
    pub misc_temp_selector: u8,
    /// Raw power byte. Only exactly `1` means on.
    pub module_is_on: u8,
    pub errors: ErrorFlags,
    pub fan_on: bool,
    pub igniter_on: bool,
    pub motor_on: bool,
    pub light_on: bool,
    pub priming: bool,
    pub is_fahrenheit: bool,
    pub recipe: Recipe,
}

impl StatusB {
    /// Whether the grill reports itself as powered on.
    #[must_use]
    pub const fn is_power_on(&self) -> bool {
        self.module_is_on == 1
    }
}

fn check_len(buf: &[u8], buffer: &'static str, expected: usize) -> Result<(), DecodeError> {
    if buf.is_empty() {
        return Err(DecodeError::EmptyBuffer { buffer });
    }
    if buf.len() != expected {
        return Err(DecodeError::LengthMismatch {
            buffer,
            expected,
            actual: buf.len(),
        });
    }
    Ok(())
}

fn temp_at(buf: &[u8], start: usize) -> u16 {
    decode_temp(buf[start], buf[start + 1], buf[start + 2])
}

fn flag_at(buf: &[u8], offset: usize) -> bool {
    buf[offset] != 0
}

/// Decodes the `sc_12` buffer.
///
/// # Errors
///
/// Returns `DecodeError::EmptyBuffer` or `DecodeError::LengthMismatch` if the
/// buffer does not match the layout.
pub fn decode_status_a(buf: &[u8]) -> Result<StatusA, DecodeError> {
    use status_a_layout as at;

    check_len(buf, STATUS_A_FIELD, at::LEN)?;

    Ok(StatusA {
        probe1_set: temp_at(buf, at::PROBE1_SET),
        probe1_actual: temp_at(buf, at::PROBE1_ACTUAL),
        probe2_actual: temp_at(buf, at::PROBE2_ACTUAL),
        probe3_actual: temp_at(buf, at::PROBE3_ACTUAL),
        probe4_actual: temp_at(buf, at::PROBE4_ACTUAL),
        smoker_actual: temp_at(buf, at::SMOKER_ACTUAL),
        grill_set: temp_at(buf, at::GRILL_SET),
        grill_actual: temp_at(buf, at::GRILL_ACTUAL),
        is_fahrenheit: flag_at(buf, at::IS_FAHRENHEIT),
    })
}

/// Decodes the `sc_11` buffer.
///
/// # Errors
///
/// Returns `DecodeError::EmptyBuffer` or `DecodeError::LengthMismatch` if the
/// buffer does not match the layout.
pub fn decode_status_b(buf: &[u8]) -> Result<StatusB, DecodeError> {
    use status_b_layout as at;

    check_len(buf, STATUS_B_FIELD, at::LEN)?;

    let errors = ErrorFlag::ALL
        .iter()
        .enumerate()
        .filter(|(i, _)| flag_at(buf, at::ERROR_FLAGS + i))
        .map(|(_, flag)| *flag)
        .collect();

    Ok(StatusB {
        probe1_set: temp_at(buf, at::PROBE1_SET),
        probe1_actual: temp_at(buf, at::PROBE1_ACTUAL),
        probe2_actual: temp_at(buf, at::PROBE2_ACTUAL),
        probe3_actual: temp_at(buf, at::PROBE3_ACTUAL),
        probe4_actual: temp_at(buf, at::PROBE4_ACTUAL),
        smoker_actual: temp_at(buf, at::SMOKER_ACTUAL),
        misc_temp: temp_at(buf, at::MISC_TEMP),
        misc_temp_selector: buf[at::MISC_TEMP_SELECTOR],
        module_is_on: buf[at::MODULE_IS_ON],
        errors,
        fan_on: flag_at(buf, at::FAN_ON),
        igniter_on: flag_at(buf, at::IGNITER_ON),
        motor_on: flag_at(buf, at::MOTOR_ON),
        light_on: flag_at(buf, at::LIGHT_ON),
        priming: flag_at(buf, at::PRIMING),
        is_fahrenheit: flag_at(buf, at::IS_FAHRENHEIT),
        recipe: Recipe {
            step: buf[at::RECIPE_STEP],
            hours: buf[at::RECIPE_HOURS],
            minutes: buf[at::RECIPE_MINUTES],
            seconds: buf[at::RECIPE_SECONDS],
        },
    })
}

/// Merges both decoded buffers into one snapshot.
///
/// Fields present in both buffers are taken from `sc_12` first and then
/// overwritten by `sc_11`. That includes the unit flag, which the firmware
/// can transiently report differently in the two buffers; `sc_11` must win
/// even though carrying it twice looks redundant. Grill setpoint and
/// chamber reading exist only in `sc_12`; power only in `sc_11`.
#[must_use]
pub fn merge_status(id: impl Into<String>, a: &StatusA, b: &StatusB) -> DeviceState {
    DeviceState {
        id: id.into(),
        power_on: b.is_power_on(),
        fan_on: b.fan_on,
        igniter_on: b.igniter_on,
        motor_on: b.motor_on,
        light_on: b.light_on,
        priming: b.priming,
        // sc_11 wins over a.is_fahrenheit; see above.
        is_fahrenheit: b.is_fahrenheit,
        probe1_set: b.probe1_set,
        probe1_actual: b.probe1_actual,
        probe2_actual: b.probe2_actual,
        probe3_actual: b.probe3_actual,
        probe4_actual: b.probe4_actual,
        smoker_actual: b.smoker_actual,
        grill_set: a.grill_set,
        grill_actual: a.grill_actual,
        errors: b.errors,
        recipe: b.recipe,
    }
}

/// Decodes both status buffers into a [`DeviceState`].
///
/// # Errors
///
/// Returns a [`DecodeError`] if either buffer is empty or not exactly its
/// layout length. No partial state is produced.
pub fn decode_status(
    id: impl Into<String>,
    status_a: &[u8],
    status_b: &[u8],
) -> Result<DeviceState, DecodeError> {
    let a = decode_status_a(status_a)?;
    let b = decode_status_b(status_b)?;
    Ok(merge_status(id, &a, &b))
}


#[cfg(test)]
mod tests {
    use super::fixtures::{status_a, status_b};
    use super::*;

    #[test]
    fn decode_status_a_fields() {
        let a = decode_status_a(&status_a()).unwrap();
        assert_eq!(a.probe1_set, 165);
        assert_eq!(a.probe1_actual, 120);
        assert_eq!(a.probe2_actual, 0);
        assert_eq!(a.smoker_actual, 210);
        assert_eq!(a.grill_set, 225);
        assert_eq!(a.grill_actual, 218);
        assert!(a.is_fahrenheit);
    }

    #[test]
    fn decode_status_b_fields() {
        let b = decode_status_b(&status_b()).unwrap();
        assert_eq!(b.probe1_actual, 121);
        assert_eq!(b.misc_temp, 75);
        assert!(b.is_power_on());
        assert!(b.fan_on);
        assert!(!b.igniter_on);
        assert!(b.motor_on);
        assert!(b.errors.is_empty());
        assert_eq!(
            b.recipe,
            Recipe {
                step: 2,
                hours: 1,
                minutes: 30,
                seconds: 15
            }
        );
    }

    #[test]
    fn power_requires_exactly_one() {
        for (raw, expected) in [(1u8, true), (0, false), (2, false), (255, false)] {
            let mut buf = status_b();
            buf[status_b_layout::MODULE_IS_ON] = raw;
            let state = decode_status("grill", &status_a(), &buf).unwrap();
            assert_eq!(state.is_power_on(), expected, "module_is_on = {raw}");
        }
    }

    #[test]
    fn no_error_flags() {
        let state = decode_status("grill", &status_a(), &status_b()).unwrap();
        assert!(!state.error_active());
        assert_eq!(state.error_summary(), "");
    }

    #[test]
    fn error_flags_summary_order() {
        let mut buf = status_b();
        // Any nonzero byte counts as set.
        buf[status_b_layout::ERROR_FLAGS + 4] = 1;
        buf[status_b_layout::ERROR_FLAGS + 1] = 7;
        let state = decode_status("grill", &status_a(), &buf).unwrap();
        assert!(state.error_active());
        assert_eq!(state.error_summary(), " Err2 FanErr");
        assert!(state.errors().contains(ErrorFlag::Err2));
        assert!(state.errors().contains(ErrorFlag::FanErr));
        assert!(!state.errors().contains(ErrorFlag::NoPellets));
    }

    #[test]
    fn status_b_unit_flag_wins() {
        let mut a = status_a();
        let mut b = status_b();
        a[status_a_layout::IS_FAHRENHEIT] = 1;
        b[status_b_layout::IS_FAHRENHEIT] = 0;
        let state = decode_status("grill", &a, &b).unwrap();
        assert!(!state.is_fahrenheit());

        a[status_a_layout::IS_FAHRENHEIT] = 0;
        b[status_b_layout::IS_FAHRENHEIT] = 1;
        let state = decode_status("grill", &a, &b).unwrap();
        assert!(state.is_fahrenheit());
    }

    #[test]
    fn shared_temperatures_come_from_status_b() {
        let state = decode_status("grill", &status_a(), &status_b()).unwrap();
        assert_eq!(state.probe1_actual(), 121);
        assert_eq!(state.smoker_actual(), 211);
        assert_eq!(state.grill_set(), 225);
        assert_eq!(state.grill_actual(), 218);
        assert_eq!(state.id(), "grill");
    }

    #[test]
    fn empty_buffers_fail() {
        assert!(matches!(
            decode_status("grill", &[], &status_b()),
            Err(DecodeError::EmptyBuffer { buffer: "sc_12" })
        ));
        assert!(matches!(
            decode_status("grill", &status_a(), &[]),
            Err(DecodeError::EmptyBuffer { buffer: "sc_11" })
        ));
    }

    #[test]
    fn short_buffer_fails() {
        let buf = status_b();
        let err = decode_status_b(&buf[..20]).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::LengthMismatch {
                buffer: "sc_11",
                expected: 45,
                actual: 20
            }
        ));
    }

    #[test]
    fn long_buffer_fails() {
        let mut a = status_a();
        a.extend_from_slice(&[0xAA, 0xBB, 0xCC]);
        assert!(matches!(
            decode_status_a(&a),
            Err(DecodeError::LengthMismatch {
                buffer: "sc_12",
                expected: 28,
                actual: 31
            })
        ));

        let mut b = status_b();
        b.resize(55, 0);
        assert!(matches!(
            decode_status("grill", &status_a(), &b),
            Err(DecodeError::LengthMismatch {
                buffer: "sc_11",
                expected: 45,
                actual: 55
            })
        ));
    }
}
