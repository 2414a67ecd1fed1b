// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `pitboss_lib` - A Rust library to monitor and control Pit Boss WiFi
//! pellet grills over their local HTTP API.
//!
//! The grill's WiFi controller relays two binary status buffers from the
//! grill MCU and forwards hex command frames back to it. This crate
//! decodes the former into a [`DeviceState`](state::DeviceState) and
//! builds the latter from typed commands.
//!
//! # Supported Features
//!
//! - **Status**: grill and probe temperatures, actuators, error flags,
//!   recipe timer
//! - **Control**: power, grill target, probe 1 target, priming
//! - **Polling**: background refresh with availability tracking
//!
//! # Quick Start
//!
//! ```no_run
//! use pitboss_lib::Device;
//! use pitboss_lib::types::GrillTarget;
//!
//! #[tokio::main]
//! async fn main() -> pitboss_lib::Result<()> {
//!     // Returns (device, initial_state) tuple
//!     let (device, state) = Device::http("192.168.1.60").build().await?;
//!
//!     if state.error_active() {
//!         eprintln!("grill reports:{}", state.error_summary());
//!     }
//!
//!     device.power_on().await?;
//!     device.set_grill_temperature(GrillTarget::new(230)?).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Codec Only
//!
//! The codec is pure and usable without the HTTP client:
//!
//! ```
//! use pitboss_lib::codec;
//! use pitboss_lib::types::GrillTarget;
//!
//! let target = GrillTarget::new(230).unwrap();
//! assert_eq!(codec::set_grill_temp(target.value()).unwrap(), "FE0501020300FF");
//! assert_eq!(codec::encode_temp(225).unwrap(), "020205");
//! assert_eq!(codec::set_power(true), "FE0101FF");
//! assert_eq!(codec::decode_temp(9, 6, 0), 0); // probe not plugged in
//! ```
//!
//! ## Background Polling
//!
//! ```no_run
//! use pitboss_lib::{Device, Poller};
//!
//! # async fn example() -> pitboss_lib::Result<()> {
//! let device = Device::http("192.168.1.60").build_without_probe()?;
//! let handle = Poller::new(device.clone()).spawn();
//!
//! // ... read device.state() from anywhere ...
//!
//! handle.stop().await;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod command;
mod device;
pub mod error;
mod poller;
pub mod protocol;
pub mod response;
pub mod state;
pub mod types;

pub use command::{Command, PowerCommand, PrimeCommand, RawCommand, TemperatureCommand};
pub use device::{Device, DeviceBuilder};
pub use error::{DecodeError, Error, ProtocolError, Result, ValueError};
pub use poller::{Availability, Poller, PollerHandle};
pub use protocol::{HttpClient, HttpConfig, StatusSnapshot};
pub use state::{DeviceState, DeviceStateStore, ErrorFlag, ErrorFlags, GrillAction, ProbeStatus};
pub use types::{GrillTarget, PowerState, ProbeTarget, TemperatureUnit};
