//! Axum router assembly.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use devstate_app::ports::DeviceStateRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API routes under `/api` next to the service description at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level, and a permissive [`CorsLayer`] so any origin may call in.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: DeviceStateRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(describe))
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Body of `GET /`.
#[derive(Serialize)]
pub struct ServiceDescription {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

/// Labels for each API endpoint listed by `GET /`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub get_state: &'static str,
    pub send_command: &'static str,
    pub device_commands: &'static str,
}

/// The static description served at `/`.
pub const DESCRIPTION: ServiceDescription = ServiceDescription {
    message: "ESP32 Backend API is running!",
    endpoints: Endpoints {
        get_state: "GET /api/state",
        send_command: "POST /api/control",
        device_commands: "GET /api/device",
    },
};

async fn describe() -> Json<ServiceDescription> {
    tracing::info!("GET /");
    Json(DESCRIPTION)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use devstate_app::memory_store::InMemoryDeviceStateStore;
    use devstate_app::services::device_state_service::DeviceStateService;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state() -> AppState<InMemoryDeviceStateStore> {
        AppState::new(DeviceStateService::new(
            InMemoryDeviceStateStore::default(),
        ))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_list_endpoints_at_root() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value =
            serde_json::from_slice(&response.into_body().collect().await.unwrap().to_bytes())
                .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "message": "ESP32 Backend API is running!",
                "endpoints": {
                    "getState": "GET /api/state",
                    "sendCommand": "POST /api/control",
                    "deviceCommands": "GET /api/device",
                }
            })
        );
    }

    #[tokio::test]
    async fn should_allow_any_origin() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/device")
                    .header(header::ORIGIN, "http://192.168.1.50")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn should_answer_cors_preflight() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/api/control")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_success());
        assert!(
            response
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
        );
    }
}
