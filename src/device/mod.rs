// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level handle to one grill.
//!
//! A [`Device`] pairs an [`HttpClient`] with a [`DeviceStateStore`].
//! Polls and commands go through one async lock, so at most one request is
//! in flight per grill and the two status buffers of a poll are never
//! interleaved with a command.
//!
//! ```no_run
//! use pitboss_lib::Device;
//! use pitboss_lib::types::GrillTarget;
//!
//! # async fn example() -> pitboss_lib::Result<()> {
//! let (device, initial) = Device::http("192.168.1.60").build().await?;
//! println!("{} is at {}{}", initial.id(), initial.grill_actual(), initial.unit());
//!
//! device.power_on().await?;
//! device.set_grill_temperature(GrillTarget::new(230)?).await?;
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::DeviceBuilder;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::{Mutex, watch};

use crate::command::{Command, PowerCommand, PrimeCommand, TemperatureCommand};
use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};
use crate::state::{DeviceState, DeviceStateStore};
use crate::types::{GrillTarget, PowerState, ProbeTarget};

/// A grill controlled over its local HTTP API.
///
/// Cloning is cheap; clones share the client, the state store and the
/// request lock.
#[derive(Debug, Clone)]
pub struct Device {
    client: Arc<HttpClient>,
    store: Arc<DeviceStateStore>,
    id: Arc<RwLock<Option<String>>>,
    io: Arc<Mutex<()>>,
}

impl Device {
    /// Starts building a device for the given host.
    #[must_use]
    pub fn http(host: impl Into<String>) -> DeviceBuilder {
        DeviceBuilder::new(HttpConfig::new(host))
    }

    /// Starts building a device from a full HTTP configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> DeviceBuilder {
        DeviceBuilder::new(config)
    }

    pub(crate) fn new(client: HttpClient, id: Option<String>) -> Self {
        Self {
            client: Arc::new(client),
            store: Arc::new(DeviceStateStore::new()),
            id: Arc::new(RwLock::new(id)),
            io: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the device id, once known.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        self.id.read().clone()
    }

    /// Returns the last successfully decoded state.
    #[must_use]
    pub fn state(&self) -> Option<Arc<DeviceState>> {
        self.store.read()
    }

    /// Subscribes to state updates.
    #[must_use]
    pub fn watch_state(&self) -> watch::Receiver<Option<Arc<DeviceState>>> {
        self.store.subscribe()
    }

    async fn ensure_id(&self) -> Result<String, Error> {
        if let Some(id) = self.id() {
            return Ok(id);
        }
        let id = self.client.get_unique_id().await?;
        tracing::debug!(id = %id, "Fetched device id");
        *self.id.write() = Some(id.clone());
        Ok(id)
    }

    /// Polls the grill once and publishes the decoded state.
    ///
    /// Fetches the device id first if it is not known yet.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the grill cannot be reached and
    /// `Error::Decode` if its answer cannot be decoded. In both cases the
    /// previously published state is kept.
    pub async fn refresh(&self) -> Result<Arc<DeviceState>, Error> {
        let _guard = self.io.lock().await;

        let id = self.ensure_id().await?;
        let snapshot = self.client.get_raw_status().await?;
        let state = self
            .store
            .update(id, &snapshot.status_a, &snapshot.status_b)?;
        Ok(state)
    }

    /// Sends a command to the grill.
    ///
    /// # Errors
    ///
    /// Returns `Error::Protocol` if the request fails.
    pub async fn send_command<C: Command + Sync>(&self, command: &C) -> Result<(), Error> {
        let frame = command.to_frame();
        let _guard = self.io.lock().await;

        tracing::debug!(code = %command.code(), frame = %frame, "Sending MCU command");

        self.client
            .send_command(&frame)
            .await
            .map_err(Error::Protocol)
    }

    // ========== Power Control ==========

    /// Turns the grill on.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn power_on(&self) -> Result<(), Error> {
        self.set_power(PowerState::On).await
    }

    /// Turns the grill off.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn power_off(&self) -> Result<(), Error> {
        self.set_power(PowerState::Off).await
    }

    /// Sets the grill power state.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_power(&self, state: PowerState) -> Result<(), Error> {
        self.send_command(&PowerCommand::new(state)).await
    }

    // ========== Temperatures ==========

    /// Sets the grill chamber target.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_grill_temperature(&self, target: GrillTarget) -> Result<(), Error> {
        self.send_command(&TemperatureCommand::Grill(target)).await
    }

    /// Sets the probe 1 target.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_probe1_temperature(&self, target: ProbeTarget) -> Result<(), Error> {
        self.send_command(&TemperatureCommand::Probe1(target)).await
    }

    // ========== Priming ==========

    /// Starts or stops the priming auger.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn set_prime(&self, on: bool) -> Result<(), Error> {
        self.send_command(&PrimeCommand::from(on)).await
    }

    // ========== Controller ==========

    /// Sets how often the controller refreshes its status buffers.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails.
    pub async fn set_poll_frequency(&self, frequency: u32) -> Result<(), Error> {
        let _guard = self.io.lock().await;
        self.client
            .set_poll_frequency(frequency)
            .await
            .map_err(Error::Protocol)
    }
}
