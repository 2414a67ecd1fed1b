// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Last-known-good state holder.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use super::DeviceState;
use crate::codec;
use crate::error::DecodeError;

/// Holds the most recent successfully decoded [`DeviceState`].
///
/// Publishing swaps an `Arc<DeviceState>` under a write lock, so a reader
/// gets either the whole previous snapshot or the whole new one. A failed
/// decode never touches the stored snapshot.
///
/// # Examples
///
/// ```
/// use pitboss_lib::state::DeviceStateStore;
///
/// let store = DeviceStateStore::new();
/// assert!(store.read().is_none());
///
/// // Empty buffers fail to decode and leave the store untouched.
/// assert!(store.update("grill", &[], &[]).is_err());
/// assert!(store.read().is_none());
/// ```
#[derive(Debug)]
pub struct DeviceStateStore {
    current: RwLock<Option<Arc<DeviceState>>>,
    tx: watch::Sender<Option<Arc<DeviceState>>>,
}

impl Default for DeviceStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceStateStore {
    /// Creates an uninitialized store.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self {
            current: RwLock::new(None),
            tx,
        }
    }

    /// Returns the current snapshot, or `None` before the first publish.
    #[must_use]
    pub fn read(&self) -> Option<Arc<DeviceState>> {
        self.current.read().clone()
    }

    /// Returns `true` once a state has been published.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.current.read().is_some()
    }

    /// Decodes a pair of status buffers and publishes the result.
    ///
    /// # Errors
    ///
    /// Returns the [`DecodeError`] if either buffer is invalid; the stored
    /// state is left as it was.
    pub fn update(
        &self,
        id: impl Into<String>,
        status_a: &[u8],
        status_b: &[u8],
    ) -> Result<Arc<DeviceState>, DecodeError> {
        let state = codec::decode_status(id, status_a, status_b)?;
        Ok(self.publish(state))
    }

    /// Publishes an already decoded state, replacing the current one.
    pub fn publish(&self, state: DeviceState) -> Arc<DeviceState> {
        let state = Arc::new(state);
        let mut current = self.current.write();
        *current = Some(Arc::clone(&state));
        // Notify under the lock so watchers see publishes in order.
        self.tx.send_replace(Some(Arc::clone(&state)));
        drop(current);

        tracing::debug!(
            id = %state.id(),
            power_on = state.is_power_on(),
            grill_actual = state.grill_actual(),
            error_active = state.error_active(),
            "Published device state"
        );
        state
    }

    /// Subscribes to published states.
    ///
    /// The receiver starts with the current value marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<DeviceState>>> {
        self.tx.subscribe()
    }

    /// Forgets the current state.
    pub fn clear(&self) {
        let mut current = self.current.write();
        *current = None;
        self.tx.send_replace(None);
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::codec::fixtures;

    #[test]
    fn update_publishes_decoded_state() {
        let store = DeviceStateStore::new();
        let state = store
            .update("abc", &fixtures::status_a(), &fixtures::status_b())
            .unwrap();
        assert_eq!(state.grill_set(), 225);
        assert_eq!(store.read().unwrap().id(), "abc");
        assert!(store.is_initialized());
    }

    #[test]
    fn failed_update_keeps_previous_state() {
        let store = DeviceStateStore::new();
        let first = store
            .update("abc", &fixtures::status_a(), &fixtures::status_b())
            .unwrap();

        let err = store.update("abc", &[], &fixtures::status_b()).unwrap_err();
        assert!(matches!(err, DecodeError::EmptyBuffer { .. }));

        let current = store.read().unwrap();
        assert!(Arc::ptr_eq(&first, &current));
    }

    #[test]
    fn subscribers_see_publishes() {
        let store = DeviceStateStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.publish(DeviceState::default().with_id("x"));
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref().unwrap().id(), "x");

        store.clear();
        assert!(rx.borrow_and_update().is_none());
        assert!(store.read().is_none());
    }

    #[test]
    fn readers_never_see_torn_state() {
        fn uniform(value: u16) -> DeviceState {
            DeviceState {
                probe1_set: value,
                probe1_actual: value,
                probe2_actual: value,
                probe3_actual: value,
                probe4_actual: value,
                smoker_actual: value,
                grill_set: value,
                grill_actual: value,
                ..DeviceState::default()
            }
        }

        let store = Arc::new(DeviceStateStore::new());
        store.publish(uniform(0));

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..2_000u16 {
                    store.publish(uniform(i % 400));
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..2_000 {
                        let s = store.read().unwrap();
                        let v = s.grill_actual();
                        assert_eq!(s.probe1_set(), v);
                        assert_eq!(s.probe4_actual(), v);
                        assert_eq!(s.smoker_actual(), v);
                        assert_eq!(s.grill_set(), v);
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
