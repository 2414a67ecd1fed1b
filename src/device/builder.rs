// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device builder.

use std::sync::Arc;
use std::time::Duration;

use crate::device::Device;
use crate::error::Error;
use crate::protocol::HttpConfig;
use crate::state::DeviceState;

/// Builder for [`Device`].
///
/// # Examples
///
/// ```no_run
/// use pitboss_lib::Device;
/// use std::time::Duration;
///
/// # async fn example() -> pitboss_lib::Result<()> {
/// // Fetch id and first state
/// let (device, state) = Device::http("192.168.1.60")
///     .with_timeout(Duration::from_secs(3))
///     .build()
///     .await?;
///
/// // No network access until the first call
/// let device = Device::http("192.168.1.60")
///     .with_id("pitboss-a1b2c3")
///     .build_without_probe()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeviceBuilder {
    config: HttpConfig,
    id: Option<String>,
}

impl DeviceBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config, id: None }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Uses a known device id instead of asking `Sys.GetInfo`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the device and performs the first poll.
    ///
    /// Returns the device together with its initial state.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The client cannot be created
    /// - The grill cannot be reached
    /// - The first status cannot be decoded
    pub async fn build(self) -> Result<(Device, Arc<DeviceState>), Error> {
        let device = self.build_without_probe()?;
        let state = device.refresh().await?;

        tracing::info!(
            id = %state.id(),
            base_url = %device.client().base_url(),
            "Connected to grill"
        );

        Ok((device, state))
    }

    /// Builds the device without any network access.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn build_without_probe(self) -> Result<Device, Error> {
        let client = self.config.into_client().map_err(Error::Protocol)?;
        Ok(Device::new(client, self.id))
    }
}
