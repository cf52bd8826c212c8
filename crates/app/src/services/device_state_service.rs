//! Device state service — use-cases for reading and commanding the device.

use devstate_domain::command::ControlCommand;
use devstate_domain::device_state::DeviceState;
use devstate_domain::error::DevStateError;

use crate::ports::DeviceStateRepository;

/// Application service over the single device state record.
pub struct DeviceStateService<R> {
    repo: R,
}

impl<R: DeviceStateRepository> DeviceStateService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Return the current record.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    pub async fn current_state(&self) -> Result<DeviceState, DevStateError> {
        self.repo.get().await
    }

    /// Store `command` and return the record as it stands after the write.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the repository.
    #[tracing::instrument(skip(self, command), fields(command = %command))]
    pub async fn send_command(&self, command: ControlCommand) -> Result<DeviceState, DevStateError> {
        let state = self.repo.apply(command).await?;
        tracing::info!(last_updated = %state.last_updated(), "command applied");
        Ok(state)
    }
}
