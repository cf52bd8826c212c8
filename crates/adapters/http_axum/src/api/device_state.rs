//! JSON handlers for reading and commanding the device state.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use devstate_app::ports::DeviceStateRepository;
use devstate_domain::command::ControlCommand;
use devstate_domain::device_state::DeviceState;
use devstate_domain::time::{Timestamp, now};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `GET /api/state`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateEnvelope {
    pub success: bool,
    pub device_state: DeviceState,
    #[serde(with = "devstate_domain::time::iso8601")]
    pub server_time: Timestamp,
}

/// Body of a successful `POST /api/control`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandAccepted {
    pub success: bool,
    pub message: String,
    pub device_state: DeviceState,
}

/// Possible responses from the state endpoint.
pub enum StateResponse {
    Ok(Json<StateEnvelope>),
}

impl IntoResponse for StateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the control endpoint.
pub enum ControlResponse {
    Ok(Json<CommandAccepted>),
}

impl IntoResponse for ControlResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the device poll endpoint.
pub enum PollResponse {
    Ok(Json<DeviceState>),
}

impl IntoResponse for PollResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/state`
pub async fn read_state<R>(State(state): State<AppState<R>>) -> Result<StateResponse, ApiError>
where
    R: DeviceStateRepository + Send + Sync + 'static,
{
    tracing::info!("GET /api/state");
    let device_state = state.device_state_service.current_state().await?;
    Ok(StateResponse::Ok(Json(StateEnvelope {
        success: true,
        device_state,
        server_time: now(),
    })))
}

/// `POST /api/control`
///
/// The body is taken as raw JSON so presence is judged by
/// [`ControlCommand::from_json`]: anything other than an object carrying
/// both `command` and `value` counts as missing.
pub async fn send_command<R>(
    State(state): State<AppState<R>>,
    Json(body): Json<Value>,
) -> Result<ControlResponse, ApiError>
where
    R: DeviceStateRepository + Send + Sync + 'static,
{
    tracing::info!("POST /api/control");
    tracing::debug!(%body, "control request");

    let command = ControlCommand::from_json(body.get("command"), body.get("value"))?;
    let message = format!("Command {command} received");
    let device_state = state.device_state_service.send_command(command).await?;
    Ok(ControlResponse::Ok(Json(CommandAccepted {
        success: true,
        message,
        device_state,
    })))
}

/// `GET /api/device` — polled by the embedded device.
pub async fn poll_device<R>(State(state): State<AppState<R>>) -> Result<PollResponse, ApiError>
where
    R: DeviceStateRepository + Send + Sync + 'static,
{
    tracing::info!("GET /api/device - device polling");
    let device_state = state.device_state_service.current_state().await?;
    Ok(PollResponse::Ok(Json(device_state)))
}
