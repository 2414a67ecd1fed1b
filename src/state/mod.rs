// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Grill state types.
//!
//! [`DeviceState`] is an immutable snapshot decoded from one pair of status
//! buffers. [`DeviceStateStore`] keeps the last good snapshot and replaces
//! it as a whole on every successful decode.
//!
//! # Examples
//!
//! ```
//! use pitboss_lib::state::{DeviceState, DeviceStateStore, GrillAction};
//!
//! let store = DeviceStateStore::new();
//! store.publish(DeviceState::default());
//!
//! let state = store.read().unwrap();
//! assert_eq!(state.grill_action(), GrillAction::Off);
//! ```

mod device_state;
mod store;

pub use device_state::{DeviceState, ErrorFlag, ErrorFlags, GrillAction, ProbeStatus, Recipe};
pub use store::DeviceStateStore;
