// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature target commands.

use crate::codec::{self, TemperatureTarget};
use crate::command::{Command, CommandCode};
use crate::types::{GrillTarget, ProbeTarget};

/// Command to change a temperature setpoint.
///
/// The payload is the target selector byte followed by the three digit
/// bytes of the value.
///
/// # Examples
///
/// ```
/// use pitboss_lib::command::{Command, TemperatureCommand};
/// use pitboss_lib::types::ProbeTarget;
///
/// let cmd = TemperatureCommand::Probe1(ProbeTarget::new(165).unwrap());
/// assert_eq!(cmd.payload(), "02010605");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureCommand {
    /// Grill chamber target.
    Grill(GrillTarget),
    /// Meat probe 1 target.
    Probe1(ProbeTarget),
}

impl TemperatureCommand {
    /// Which setpoint this command addresses.
    #[must_use]
    pub const fn target(&self) -> TemperatureTarget {
        match self {
            Self::Grill(_) => TemperatureTarget::Grill,
            Self::Probe1(_) => TemperatureTarget::Probe1,
        }
    }

    /// The requested temperature.
    #[must_use]
    pub const fn value(&self) -> u16 {
        match self {
            Self::Grill(t) => t.value(),
            Self::Probe1(t) => t.value(),
        }
    }
}

impl Command for TemperatureCommand {
    fn code(&self) -> CommandCode {
        CommandCode::SetTemperature
    }

    fn payload(&self) -> String {
        let [d0, d1, d2] = codec::digits(self.value());
        hex::encode_upper([self.target().selector(), d0, d1, d2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grill_frame_matches_codec() {
        let cmd = TemperatureCommand::Grill(GrillTarget::new(230).unwrap());
        assert_eq!(cmd.to_frame(), codec::set_grill_temp(230).unwrap());
        assert_eq!(cmd.to_frame(), "FE0501020300FF");
    }

    #[test]
    fn probe_frame_matches_codec() {
        for value in [0, 7, 95, 165, 400] {
            let cmd = TemperatureCommand::Probe1(ProbeTarget::new(value).unwrap());
            assert_eq!(cmd.to_frame(), codec::set_probe1_temp(value).unwrap());
        }
    }

    #[test]
    fn target_and_value() {
        let cmd = TemperatureCommand::Grill(GrillTarget::MAX);
        assert_eq!(cmd.target(), TemperatureTarget::Grill);
        assert_eq!(cmd.value(), 400);
    }
}
