//! State store port — access to the single device state record.

use std::future::Future;

use devstate_domain::command::ControlCommand;
use devstate_domain::device_state::DeviceState;
use devstate_domain::error::DevStateError;

/// Owns the device state record and serializes access to it.
///
/// Implementations must make [`apply`](Self::apply) atomic: the write and
/// its timestamp happen under one exclusive section, and the returned
/// snapshot reflects exactly that write.
pub trait DeviceStateRepository {
    /// Return a snapshot of the current record.
    fn get(&self) -> impl Future<Output = Result<DeviceState, DevStateError>> + Send;

    /// Apply a command, stamp the record, and return the updated snapshot.
    fn apply(
        &self,
        command: ControlCommand,
    ) -> impl Future<Output = Result<DeviceState, DevStateError>> + Send;
}

impl<T: DeviceStateRepository + Send + Sync> DeviceStateRepository for std::sync::Arc<T> {
    fn get(&self) -> impl Future<Output = Result<DeviceState, DevStateError>> + Send {
        (**self).get()
    }

    fn apply(
        &self,
        command: ControlCommand,
    ) -> impl Future<Output = Result<DeviceState, DevStateError>> + Send {
        (**self).apply(command)
    }
}
