//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod device_state;

use axum::Router;
use axum::routing::{get, post};

use devstate_app::ports::DeviceStateRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: DeviceStateRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/state", get(device_state::read_state::<R>))
        .route("/control", post(device_state::send_command::<R>))
        .route("/device", get(device_state::poll_device::<R>))
}
