use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;
use crate::utils::response::success;

pub mod dev_events;
pub mod speakers;

pub use dev_events::{
    create_dev_event, delete_dev_event, get_dev_event, list_dev_events, update_dev_event,
};
pub use speakers::create_speaker;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
    store: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "devevents-api",
        store: state.repository.backend(),
    };

    success(payload, "Health check successful").into_response()
}
