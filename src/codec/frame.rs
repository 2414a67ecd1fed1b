// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! MCU command framing.
//!
//! A frame is `FE <code> <payload...> FF`, hex-encoded in uppercase and
//! posted as a JSON string to the controller, which forwards it to the
//! grill's MCU.

use std::fmt;

use super::temperature::encode_temp;
use crate::error::ValueError;

/// Byte opening every command frame.
pub const FRAME_PREAMBLE: u8 = 0xFE;

/// Byte closing every command frame.
pub const FRAME_POSTAMBLE: u8 = 0xFF;

/// MCU command codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
    /// Turn the grill on (`01`) or off (`02`).
    SetPowerState,
    /// Set a temperature target; payload starts with a [`TemperatureTarget`].
    SetTemperature,
    /// Report app connection state to the MCU.
    SetConnectedStatus,
    /// Request the `sc_11` status buffer.
    GetStatus11,
    /// Request the `sc_12` status buffer.
    GetStatus12,
    /// Run (`01`) or stop (`00`) the auger to prime the fire pot.
    ControlPrimeMotor,
    /// Switch the grill light.
    ControlLight,
    /// Switch the display unit between Fahrenheit and Celsius.
    SetTempFC,
}

impl CommandCode {
    /// Returns the wire byte for this command.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::SetPowerState => 0x01,
            Self::ControlLight => 0x02,
            Self::SetTemperature => 0x05,
            Self::ControlPrimeMotor => 0x08,
            Self::SetTempFC => 0x09,
            Self::GetStatus11 => 0x0B,
            Self::GetStatus12 => 0x0C,
            Self::SetConnectedStatus => 0x24,
        }
    }

    /// Looks up a command by its wire byte.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0x01 => Some(Self::SetPowerState),
            0x02 => Some(Self::ControlLight),
            0x05 => Some(Self::SetTemperature),
            0x08 => Some(Self::ControlPrimeMotor),
            0x09 => Some(Self::SetTempFC),
            0x0B => Some(Self::GetStatus11),
            0x0C => Some(Self::GetStatus12),
            0x24 => Some(Self::SetConnectedStatus),
            _ => None,
        }
    }
}

impl fmt::Display for CommandCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}", self.code())
    }
}

/// Which setpoint a `SetTemperature` command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureTarget {
    /// Grill chamber setpoint.
    Grill,
    /// Meat probe 1 setpoint.
    Probe1,
}

impl TemperatureTarget {
    /// Returns the selector byte.
    #[must_use]
    pub const fn selector(&self) -> u8 {
        match self {
            Self::Grill => 0x01,
            Self::Probe1 => 0x02,
        }
    }
}

/// Wraps an already hex-encoded payload into a command frame.
///
/// The payload is inserted verbatim.
///
/// # Examples
///
/// ```
/// use pitboss_lib::codec::{build_command, CommandCode};
///
/// assert_eq!(build_command(CommandCode::SetPowerState, "01"), "FE0101FF");
/// assert_eq!(build_command(CommandCode::GetStatus11, ""), "FE0BFF");
/// ```
#[must_use]
pub fn build_command(code: CommandCode, payload_hex: &str) -> String {
    format!("{FRAME_PREAMBLE:02X}{code}{payload_hex}{FRAME_POSTAMBLE:02X}")
}

/// Builds the payload for a `SetTemperature` command.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` if `value` exceeds 999.
pub fn temperature_payload(target: TemperatureTarget, value: u16) -> Result<String, ValueError> {
    Ok(format!("{:02X}{}", target.selector(), encode_temp(value)?))
}

/// Frame setting the grill chamber target.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` if `value` exceeds 999.
///
/// # Examples
///
/// ```
/// use pitboss_lib::codec::set_grill_temp;
///
/// assert_eq!(set_grill_temp(225).unwrap(), "FE0501020205FF");
/// ```
pub fn set_grill_temp(value: u16) -> Result<String, ValueError> {
    let payload = temperature_payload(TemperatureTarget::Grill, value)?;
    Ok(build_command(CommandCode::SetTemperature, &payload))
}

/// Frame setting the probe 1 target.
///
/// # Errors
///
/// Returns `ValueError::OutOfRange` if `value` exceeds 999.
pub fn set_probe1_temp(value: u16) -> Result<String, ValueError> {
    let payload = temperature_payload(TemperatureTarget::Probe1, value)?;
    Ok(build_command(CommandCode::SetTemperature, &payload))
}

/// Frame switching the grill on or off.
///
/// Off is `02`, not `00`.
///
/// # Examples
///
/// ```
/// use pitboss_lib::codec::set_power;
///
/// assert_eq!(set_power(true), "FE0101FF");
/// assert_eq!(set_power(false), "FE0102FF");
/// ```
#[must_use]
pub fn set_power(on: bool) -> String {
    build_command(CommandCode::SetPowerState, if on { "01" } else { "02" })
}

/// Frame starting or stopping the priming auger.
#[must_use]
pub fn set_prime(on: bool) -> String {
    build_command(CommandCode::ControlPrimeMotor, if on { "01" } else { "00" })
}
