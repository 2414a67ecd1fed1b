// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature target types.
//!
//! The controller accepts any three-digit value on the wire; these types
//! carry the ranges the grill's own control panel allows, so a target is
//! validated once at construction and never re-checked by the codec.

use std::fmt;

use crate::error::ValueError;

/// Unit the controller reports and accepts temperatures in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemperatureUnit {
    /// Degrees Fahrenheit.
    #[default]
    Fahrenheit,
    /// Degrees Celsius.
    Celsius,
}

impl TemperatureUnit {
    /// Returns the unit symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "°F",
            Self::Celsius => "°C",
        }
    }

    /// Maps the controller's unit flag.
    #[must_use]
    pub const fn from_fahrenheit_flag(is_fahrenheit: bool) -> Self {
        if is_fahrenheit {
            Self::Fahrenheit
        } else {
            Self::Celsius
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Grill chamber target temperature (130-400, in steps of 10).
///
/// # Examples
///
/// ```
/// use pitboss_lib::types::GrillTarget;
///
/// let target = GrillTarget::new(225).unwrap_err();
/// assert_eq!(target.to_string(), "value 225 is not a multiple of 10");
///
/// let target = GrillTarget::new(250).unwrap();
/// assert_eq!(target.value(), 250);
///
/// assert!(GrillTarget::new(120).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GrillTarget(u16);

impl GrillTarget {
    /// Lowest accepted target.
    pub const MIN: Self = Self(130);
    /// Highest accepted target.
    pub const MAX: Self = Self(400);
    /// Step between accepted targets.
    pub const STEP: u16 = 10;

    /// Creates a new grill target.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` outside 130-400 and
    /// `ValueError::InvalidStep` when not a multiple of 10.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(ValueError::OutOfRange {
                min: Self::MIN.0,
                max: Self::MAX.0,
                actual: value,
            });
        }
        if value % Self::STEP != 0 {
            return Err(ValueError::InvalidStep {
                step: Self::STEP,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Creates a target, clamping to the range and rounding to the nearest step.
    ///
    /// # Examples
    ///
    /// ```
    /// use pitboss_lib::types::GrillTarget;
    ///
    /// assert_eq!(GrillTarget::clamped(226).value(), 230);
    /// assert_eq!(GrillTarget::clamped(1000).value(), 400);
    /// assert_eq!(GrillTarget::clamped(0).value(), 130);
    /// ```
    #[must_use]
    pub const fn clamped(value: u16) -> Self {
        let value = if value < Self::MIN.0 {
            Self::MIN.0
        } else if value > Self::MAX.0 {
            Self::MAX.0
        } else {
            value
        };
        let rounded = (value + Self::STEP / 2) / Self::STEP * Self::STEP;
        if rounded > Self::MAX.0 {
            Self::MAX
        } else {
            Self(rounded)
        }
    }

    /// Returns the temperature value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for GrillTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Meat probe target temperature (0-400).
///
/// # Examples
///
/// ```
/// use pitboss_lib::types::ProbeTarget;
///
/// assert_eq!(ProbeTarget::new(165).unwrap().value(), 165);
/// assert!(ProbeTarget::new(401).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ProbeTarget(u16);

impl ProbeTarget {
    /// Lowest accepted target.
    pub const MIN: Self = Self(0);
    /// Highest accepted target.
    pub const MAX: Self = Self(400);

    /// Creates a new probe target.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 400.
    pub fn new(value: u16) -> Result<Self, ValueError> {
        if value > Self::MAX.0 {
            return Err(ValueError::OutOfRange {
                min: Self::MIN.0,
                max: Self::MAX.0,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Returns the temperature value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
