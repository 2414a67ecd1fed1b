// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power and priming commands.

use crate::command::{Command, CommandCode};
use crate::types::PowerState;

/// Command to switch the grill on or off.
///
/// # Examples
///
/// ```
/// use pitboss_lib::command::{Command, PowerCommand};
///
/// assert_eq!(PowerCommand::on().payload(), "01");
/// assert_eq!(PowerCommand::off().payload(), "02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerCommand {
    state: PowerState,
}

impl PowerCommand {
    /// Creates a command for the given state.
    #[must_use]
    pub const fn new(state: PowerState) -> Self {
        Self { state }
    }

    /// Creates a command to turn the grill on.
    #[must_use]
    pub const fn on() -> Self {
        Self::new(PowerState::On)
    }

    /// Creates a command to turn the grill off.
    #[must_use]
    pub const fn off() -> Self {
        Self::new(PowerState::Off)
    }

    /// Returns the requested state.
    #[must_use]
    pub const fn state(&self) -> PowerState {
        self.state
    }
}

impl Command for PowerCommand {
    fn code(&self) -> CommandCode {
        CommandCode::SetPowerState
    }

    fn payload(&self) -> String {
        format!("{:02X}", self.state.wire_byte())
    }
}

/// Command to run or stop the priming auger.
///
/// # Examples
///
/// ```
/// use pitboss_lib::command::{Command, PrimeCommand};
///
/// assert_eq!(PrimeCommand::Start.to_frame(), "FE0801FF");
/// assert_eq!(PrimeCommand::Stop.to_frame(), "FE0800FF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeCommand {
    /// Start feeding pellets.
    Start,
    /// Stop feeding pellets.
    Stop,
}

impl From<bool> for PrimeCommand {
    fn from(on: bool) -> Self {
        if on { Self::Start } else { Self::Stop }
    }
}

impl Command for PrimeCommand {
    fn code(&self) -> CommandCode {
        CommandCode::ControlPrimeMotor
    }

    fn payload(&self) -> String {
        match self {
            Self::Start => "01",
            Self::Stop => "00",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn power_frames_match_codec() {
        assert_eq!(PowerCommand::on().to_frame(), codec::set_power(true));
        assert_eq!(PowerCommand::off().to_frame(), codec::set_power(false));
        assert_eq!(PowerCommand::off().to_frame(), "FE0102FF");
    }

    #[test]
    fn prime_frames_match_codec() {
        assert_eq!(PrimeCommand::from(true).to_frame(), codec::set_prime(true));
        assert_eq!(PrimeCommand::from(false).to_frame(), codec::set_prime(false));
    }

    #[test]
    fn power_command_state() {
        assert_eq!(PowerCommand::new(PowerState::On).state(), PowerState::On);
    }
}
