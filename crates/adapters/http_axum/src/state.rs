//! Shared application state for axum handlers.

use std::sync::Arc;

use devstate_app::ports::DeviceStateRepository;
use devstate_app::services::device_state_service::DeviceStateService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Device state read/command service.
    pub device_state_service: Arc<DeviceStateService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            device_state_service: Arc::clone(&self.device_state_service),
        }
    }
}

impl<R> AppState<R>
where
    R: DeviceStateRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(device_state_service: DeviceStateService<R>) -> Self {
        Self {
            device_state_service: Arc::new(device_state_service),
        }
    }
}
