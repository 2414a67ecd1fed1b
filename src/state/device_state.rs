// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decoded grill state.

use std::fmt;

use serde::Serialize;
use serde::ser::Serializer;

use crate::types::{PowerState, TemperatureUnit};

/// Error conditions the grill reports in its status buffer.
///
/// These are device state, not library errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorFlag {
    /// Generic error 1.
    Err1,
    /// Generic error 2.
    Err2,
    /// Generic error 3.
    Err3,
    /// Grill over temperature.
    HighTempErr,
    /// Combustion fan fault.
    FanErr,
    /// Hot start condition.
    HotErr,
    /// Auger motor fault.
    MotorErr,
    /// Hopper out of pellets.
    NoPellets,
    /// Low temperature / flame out.
    ErL,
}

impl ErrorFlag {
    /// All flags in status buffer order.
    pub const ALL: [Self; 9] = [
        Self::Err1,
        Self::Err2,
        Self::Err3,
        Self::HighTempErr,
        Self::FanErr,
        Self::HotErr,
        Self::MotorErr,
        Self::NoPellets,
        Self::ErL,
    ];

    /// Returns the flag name as shown in error summaries.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Err1 => "Err1",
            Self::Err2 => "Err2",
            Self::Err3 => "Err3",
            Self::HighTempErr => "HighTempErr",
            Self::FanErr => "FanErr",
            Self::HotErr => "HotErr",
            Self::MotorErr => "MotorErr",
            Self::NoPellets => "NoPellets",
            Self::ErL => "ErL",
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

impl fmt::Display for ErrorFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of active [`ErrorFlag`]s.
///
/// Iteration always follows [`ErrorFlag::ALL`] order.
///
/// # Examples
///
/// ```
/// use pitboss_lib::state::{ErrorFlag, ErrorFlags};
///
/// let flags: ErrorFlags = [ErrorFlag::FanErr, ErrorFlag::Err2].into_iter().collect();
/// assert_eq!(flags.summary(), " Err2 FanErr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ErrorFlags(u16);

impl ErrorFlags {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Adds a flag.
    pub fn insert(&mut self, flag: ErrorFlag) {
        self.0 |= flag.bit();
    }

    /// Returns `true` if the flag is set.
    #[must_use]
    pub const fn contains(&self, flag: ErrorFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of active flags.
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterates over active flags in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = ErrorFlag> + '_ {
        ErrorFlag::ALL.into_iter().filter(|flag| self.contains(*flag))
    }

    /// Each active flag name prefixed by a single space.
    ///
    /// The leading space is kept; consumers of the summary expect it.
    #[must_use]
    pub fn summary(&self) -> String {
        self.iter().fold(String::new(), |mut out, flag| {
            out.push(' ');
            out.push_str(flag.name());
            out
        })
    }
}

impl FromIterator<ErrorFlag> for ErrorFlags {
    fn from_iter<I: IntoIterator<Item = ErrorFlag>>(iter: I) -> Self {
        let mut flags = Self::new();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl Serialize for ErrorFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Recipe program progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Recipe {
    /// Current recipe step.
    pub step: u8,
    /// Remaining hours.
    pub hours: u8,
    /// Remaining minutes.
    pub minutes: u8,
    /// Remaining seconds.
    pub seconds: u8,
}

/// What the grill is currently doing, derived from its actuators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GrillAction {
    /// Powered off.
    Off,
    /// Igniter rod is heating.
    Preheating,
    /// Priming auger is feeding pellets.
    Heating,
    /// Only the combustion fan is running.
    Fan,
    /// Powered on with nothing running.
    Idle,
}

/// Whether probe 1 has reached its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProbeStatus {
    /// Reading is at or above the target.
    Done,
    /// Reading is still below the target.
    Waiting,
}

/// Snapshot of a grill, decoded from one pair of status buffers.
///
/// A `DeviceState` is immutable: each successful poll produces a new one
/// which replaces the previous snapshot as a whole. Temperatures are in
/// the unit given by [`unit`](Self::unit); unplugged probes read 0.
///
/// # Examples
///
/// ```
/// use pitboss_lib::state::DeviceState;
///
/// let state = DeviceState::default();
/// assert!(!state.is_power_on());
/// assert!(!state.error_active());
/// assert_eq!(state.error_summary(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeviceState {
    pub(crate) id: String,
    pub(crate) power_on: bool,
    pub(crate) fan_on: bool,
    pub(crate) igniter_on: bool,
    pub(crate) motor_on: bool,
    pub(crate) light_on: bool,
    pub(crate) priming: bool,
    pub(crate) is_fahrenheit: bool,
    pub(crate) probe1_set: u16,
    pub(crate) probe1_actual: u16,
    pub(crate) probe2_actual: u16,
    pub(crate) probe3_actual: u16,
    pub(crate) probe4_actual: u16,
    pub(crate) smoker_actual: u16,
    pub(crate) grill_set: u16,
    pub(crate) grill_actual: u16,
    pub(crate) errors: ErrorFlags,
    pub(crate) recipe: Recipe,
}

impl DeviceState {
    /// Device identifier reported by `Sys.GetInfo`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    // ========== Power and actuators ==========

    /// Returns `true` if the grill is on.
    #[must_use]
    pub fn is_power_on(&self) -> bool {
        self.power_on
    }

    /// Power as a [`PowerState`].
    #[must_use]
    pub fn power(&self) -> PowerState {
        PowerState::from(self.power_on)
    }

    /// Combustion fan running.
    #[must_use]
    pub fn is_fan_on(&self) -> bool {
        self.fan_on
    }

    /// Igniter rod heating.
    #[must_use]
    pub fn is_igniter_on(&self) -> bool {
        self.igniter_on
    }

    /// Auger motor running.
    #[must_use]
    pub fn is_motor_on(&self) -> bool {
        self.motor_on
    }

    /// Grill light on.
    #[must_use]
    pub fn is_light_on(&self) -> bool {
        self.light_on
    }

    /// Priming cycle running.
    #[must_use]
    pub fn is_priming(&self) -> bool {
        self.priming
    }

    // ========== Temperatures ==========

    /// Returns `true` if temperatures are in Fahrenheit.
    #[must_use]
    pub fn is_fahrenheit(&self) -> bool {
        self.is_fahrenheit
    }

    /// Unit of every temperature in this snapshot.
    #[must_use]
    pub fn unit(&self) -> TemperatureUnit {
        TemperatureUnit::from_fahrenheit_flag(self.is_fahrenheit)
    }

    /// Probe 1 target.
    #[must_use]
    pub fn probe1_set(&self) -> u16 {
        self.probe1_set
    }

    /// Probe 1 reading.
    #[must_use]
    pub fn probe1_actual(&self) -> u16 {
        self.probe1_actual
    }

    /// Probe 2 reading.
    #[must_use]
    pub fn probe2_actual(&self) -> u16 {
        self.probe2_actual
    }

    /// Probe 3 reading.
    #[must_use]
    pub fn probe3_actual(&self) -> u16 {
        self.probe3_actual
    }

    /// Probe 4 reading.
    #[must_use]
    pub fn probe4_actual(&self) -> u16 {
        self.probe4_actual
    }

    /// Smoke chamber reading.
    #[must_use]
    pub fn smoker_actual(&self) -> u16 {
        self.smoker_actual
    }

    /// Grill chamber target.
    #[must_use]
    pub fn grill_set(&self) -> u16 {
        self.grill_set
    }

    /// Grill chamber reading.
    #[must_use]
    pub fn grill_actual(&self) -> u16 {
        self.grill_actual
    }

    // ========== Errors ==========

    /// Active error flags.
    #[must_use]
    pub fn errors(&self) -> ErrorFlags {
        self.errors
    }

    /// Returns `true` if any error flag is set.
    #[must_use]
    pub fn error_active(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Space-prefixed names of active error flags, e.g. `" Err2 FanErr"`.
    #[must_use]
    pub fn error_summary(&self) -> String {
        self.errors.summary()
    }

    // ========== Recipe ==========

    /// Recipe program progress.
    #[must_use]
    pub fn recipe(&self) -> Recipe {
        self.recipe
    }

    // ========== Derived ==========

    /// What the grill is doing right now.
    ///
    /// The igniter takes precedence over priming, priming over the fan.
    #[must_use]
    pub fn grill_action(&self) -> GrillAction {
        if !self.power_on {
            GrillAction::Off
        } else if self.igniter_on {
            GrillAction::Preheating
        } else if self.priming {
            GrillAction::Heating
        } else if self.fan_on {
            GrillAction::Fan
        } else {
            GrillAction::Idle
        }
    }

    /// Whether probe 1 has reached its target.
    #[must_use]
    pub fn probe1_status(&self) -> ProbeStatus {
        if self.probe1_actual >= self.probe1_set {
            ProbeStatus::Done
        } else {
            ProbeStatus::Waiting
        }
    }

    /// Returns a copy of this state carrying another device id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
