// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Background polling.
//!
//! A [`Poller`] refreshes a [`Device`] on a fixed interval in a tokio task
//! and tracks whether the grill is reachable. Connectivity failures mark
//! the grill unavailable; decode failures are logged and the last good
//! state stays published. Nothing is retried early: the next attempt is
//! simply the next tick.
//!
//! ```no_run
//! use std::time::Duration;
//! use pitboss_lib::{Device, Poller};
//!
//! # async fn example() -> pitboss_lib::Result<()> {
//! let device = Device::http("192.168.1.60").build_without_probe()?;
//! let mut states = device.watch_state();
//!
//! let handle = Poller::new(device)
//!     .with_interval(Duration::from_secs(2))
//!     .spawn();
//!
//! while states.changed().await.is_ok() {
//!     if let Some(state) = states.borrow_and_update().as_ref() {
//!         println!("grill at {}", state.grill_actual());
//!     }
//! }
//!
//! handle.stop().await;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::device::Device;

/// Whether the grill answered the last poll.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Availability {
    /// No poll has completed yet.
    #[default]
    Unknown,
    /// The last poll reached the grill.
    Available,
    /// The last poll could not reach the grill.
    Unavailable(String),
}

impl Availability {
    /// Returns `true` if the grill answered the last poll.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Periodic refresher for one [`Device`].
#[derive(Debug)]
pub struct Poller {
    device: Device,
    interval: Duration,
}

impl Poller {
    /// Default time between polls.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    /// Creates a poller with the default interval.
    #[must_use]
    pub fn new(device: Device) -> Self {
        Self {
            device,
            interval: Self::DEFAULT_INTERVAL,
        }
    }

    /// Sets the time between polls.
    ///
    /// A zero interval is raised to one millisecond.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval.max(Duration::from_millis(1));
        self
    }

    /// Returns the configured interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts polling in a background task.
    ///
    /// The first poll happens immediately. Polling stops when
    /// [`PollerHandle::stop`] is called or the handle is dropped.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn spawn(self) -> PollerHandle {
        let (availability_tx, availability_rx) = watch::channel(Availability::Unknown);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();
        let Self { device, interval } = self;

        let task = tokio::spawn(async move {
            tracing::debug!(?interval, "Starting grill poller");

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {}
                }

                match device.refresh().await {
                    Ok(_) => set_availability(&availability_tx, Availability::Available),
                    Err(e) if e.is_decode() => {
                        tracing::warn!(error = %e, "Could not decode grill status, keeping previous state");
                    }
                    Err(e) => {
                        set_availability(&availability_tx, Availability::Unavailable(e.to_string()));
                    }
                }
            }

            tracing::debug!("Grill poller stopped");
        });

        PollerHandle {
            availability: availability_rx,
            shutdown: shutdown_tx,
            task,
        }
    }
}

fn set_availability(tx: &watch::Sender<Availability>, next: Availability) {
    tx.send_if_modified(|current| {
        if *current == next {
            return false;
        }
        tracing::info!(from = ?current, to = ?next, "Grill availability changed");
        *current = next;
        true
    });
}

/// Handle to a running [`Poller`].
#[derive(Debug)]
pub struct PollerHandle {
    availability: watch::Receiver<Availability>,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Returns the current availability.
    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability.borrow().clone()
    }

    /// Subscribes to availability changes.
    #[must_use]
    pub fn watch_availability(&self) -> watch::Receiver<Availability> {
        self.availability.clone()
    }

    /// Stops polling and waits for the task to finish.
    ///
    /// A poll already in flight completes first.
    pub async fn stop(self) {
        // Err means the task already ended.
        let _ = self.shutdown.send(());
        if let Err(e) = self.task.await {
            tracing::warn!(error = %e, "Grill poller task failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_device() -> Device {
        Device::http("192.168.1.60")
            .with_id("grill")
            .build_without_probe()
            .unwrap()
    }

    #[test]
    fn default_interval_is_one_second() {
        let poller = Poller::new(offline_device());
        assert_eq!(poller.interval(), Duration::from_secs(1));
    }

    #[test]
    fn zero_interval_is_raised() {
        let poller = Poller::new(offline_device()).with_interval(Duration::ZERO);
        assert_eq!(poller.interval(), Duration::from_millis(1));
    }

    #[test]
    fn availability_transitions_are_deduplicated() {
        let (tx, mut rx) = watch::channel(Availability::Unknown);

        set_availability(&tx, Availability::Available);
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_available());

        set_availability(&tx, Availability::Available);
        assert!(!rx.has_changed().unwrap());

        set_availability(&tx, Availability::Unavailable("timeout".to_string()));
        assert_eq!(
            *rx.borrow_and_update(),
            Availability::Unavailable("timeout".to_string())
        );
    }
}
