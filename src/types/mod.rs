// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for grill control.
//!
//! Each type ensures values are within their valid ranges at construction
//! time, so commands built from them are always accepted by the controller.
//!
//! # Types
//!
//! - [`PowerState`] - On/Off
//! - [`GrillTarget`] - Grill chamber target (130-400, step 10)
//! - [`ProbeTarget`] - Meat probe target (0-400)
//! - [`TemperatureUnit`] - Fahrenheit or Celsius

mod power;
mod temperature;

pub use power::PowerState;
pub use temperature::{GrillTarget, ProbeTarget, TemperatureUnit};
