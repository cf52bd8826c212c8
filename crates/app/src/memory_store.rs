//! In-process device state store guarded by a tokio [`RwLock`].

use std::future::Future;

use tokio::sync::RwLock;

use devstate_domain::command::ControlCommand;
use devstate_domain::device_state::DeviceState;
use devstate_domain::error::DevStateError;
use devstate_domain::time::now;

use crate::ports::DeviceStateRepository;

/// Volatile store for the device state record.
///
/// Readers share the lock; [`apply`](DeviceStateRepository::apply) holds the
/// write lock across the read-modify-write, so concurrent commands resolve
/// as last-write-wins in lock order. Everything is lost when the process exits.
pub struct InMemoryDeviceStateStore {
    state: RwLock<DeviceState>,
}

impl InMemoryDeviceStateStore {
    /// Create a store holding `initial`.
    #[must_use]
    pub fn new(initial: DeviceState) -> Self {
        Self {
            state: RwLock::new(initial),
        }
    }
}

impl Default for InMemoryDeviceStateStore {
    fn default() -> Self {
        Self::new(DeviceState::new(now()))
    }
}

impl DeviceStateRepository for InMemoryDeviceStateStore {
    fn get(&self) -> impl Future<Output = Result<DeviceState, DevStateError>> + Send {
        async move { Ok(self.state.read().await.clone()) }
    }

    fn apply(
        &self,
        command: ControlCommand,
    ) -> impl Future<Output = Result<DeviceState, DevStateError>> + Send {
        async move {
            let mut state = self.state.write().await;
            // stamped under the lock so `lastUpdated` follows write order
            state.apply(&command, now());
            Ok(state.clone())
        }
    }
}
