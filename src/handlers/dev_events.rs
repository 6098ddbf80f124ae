use axum::extract::State;
use axum::response::Response;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use crate::models::{DevEvent, DevEventInput, DevEventView};
use crate::repository::DevEventRepository;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{ApiPath, ValidatedJson};
use crate::utils::response::{created, no_content};

pub const DEV_EVENTS_PATH: &str = "/api/dev-events";

/// Resolves `id` to an event that has not been soft-deleted. Deleted rows are reported exactly
/// like missing ones.
async fn find_active(
    repository: &dyn DevEventRepository,
    id: Uuid,
    include_speakers: bool,
) -> Result<DevEvent, AppError> {
    repository
        .find_event_by_id(id, include_speakers)
        .await?
        .filter(|event| !event.is_deleted)
        .ok_or_else(|| AppError::NotFound(format!("Dev event '{}'", id)))
}

pub async fn list_dev_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<DevEventView>>, AppError> {
    let events = state.repository.find_all_active_events().await?;

    Ok(Json(events.into_iter().map(DevEventView::from).collect()))
}

pub async fn get_dev_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<DevEventView>, AppError> {
    let event = find_active(state.repository.as_ref(), id, true).await?;

    Ok(Json(DevEventView::from(event)))
}

pub async fn create_dev_event(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<DevEventInput>,
) -> Result<Response, AppError> {
    let event = input.into_dev_event();
    state.repository.insert_event(&event).await?;

    info!(dev_event_id = %event.id, "Dev event created");

    let location = format!("{}/{}", DEV_EVENTS_PATH, event.id);
    Ok(created(location, DevEventView::from(event)))
}

pub async fn update_dev_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(input): ValidatedJson<DevEventInput>,
) -> Result<Response, AppError> {
    let mut event = find_active(state.repository.as_ref(), id, false).await?;

    event.apply(input);
    state.repository.update_event(&event).await?;

    info!(dev_event_id = %id, "Dev event updated");

    Ok(no_content())
}

pub async fn delete_dev_event(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Response, AppError> {
    let event = find_active(state.repository.as_ref(), id, false).await?;

    state.repository.soft_delete_event(event.id).await?;

    info!(dev_event_id = %id, "Dev event soft deleted");

    Ok(no_content())
}
