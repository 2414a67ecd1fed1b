// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grill MCU command definitions.
//!
//! Typed commands built from validated values. Each one knows its
//! [`CommandCode`] and hex payload; [`Command::to_frame`] wraps them into
//! the frame posted to `PB.SendMCUCommand`.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Example frame |
//! |-------------|---------|---------|
//! | [`PowerCommand`] | Turn the grill on or off | `FE0101FF` |
//! | [`TemperatureCommand`] | Set grill or probe 1 target | `FE0501020205FF` |
//! | [`PrimeCommand`] | Start or stop the priming auger | `FE0801FF` |
//! | [`RawCommand`] | Any other code with a hand-built payload | `FE0BFF` |
//!
//! # Examples
//!
//! ```
//! use pitboss_lib::command::{Command, PowerCommand, TemperatureCommand};
//! use pitboss_lib::types::GrillTarget;
//!
//! assert_eq!(PowerCommand::off().to_frame(), "FE0102FF");
//!
//! let cmd = TemperatureCommand::Grill(GrillTarget::new(250).unwrap());
//! assert_eq!(cmd.to_frame(), "FE0501020500FF");
//! ```

mod power;
mod temperature;

pub use power::{PowerCommand, PrimeCommand};
pub use temperature::TemperatureCommand;

pub use crate::codec::{CommandCode, TemperatureTarget};

use crate::codec;

/// A command that can be sent to the grill MCU.
pub trait Command {
    /// Returns the command code.
    fn code(&self) -> CommandCode;

    /// Returns the hex-encoded payload, possibly empty.
    fn payload(&self) -> String;

    /// Returns the full hex frame.
    fn to_frame(&self) -> String {
        codec::build_command(self.code(), &self.payload())
    }
}

/// A command with a caller-supplied payload.
///
/// Useful for codes without a typed wrapper, such as
/// [`CommandCode::ControlLight`] or [`CommandCode::SetTempFC`].
///
/// # Examples
///
/// ```
/// use pitboss_lib::command::{Command, CommandCode, RawCommand};
///
/// let cmd = RawCommand::new(CommandCode::GetStatus12, "");
/// assert_eq!(cmd.to_frame(), "FE0CFF");
///
/// let cmd = RawCommand::from_bytes(CommandCode::ControlLight, &[0x01]);
/// assert_eq!(cmd.to_frame(), "FE0201FF");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    code: CommandCode,
    payload: String,
}

impl RawCommand {
    /// Creates a command from a hex payload, used verbatim.
    #[must_use]
    pub fn new(code: CommandCode, payload_hex: impl Into<String>) -> Self {
        Self {
            code,
            payload: payload_hex.into(),
        }
    }

    /// Creates a command from payload bytes.
    #[must_use]
    pub fn from_bytes(code: CommandCode, payload: &[u8]) -> Self {
        Self {
            code,
            payload: hex::encode_upper(payload),
        }
    }
}

impl Command for RawCommand {
    fn code(&self) -> CommandCode {
        self.code
    }

    fn payload(&self) -> String {
        self.payload.clone()
    }
}
