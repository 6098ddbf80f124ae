use axum::extract::State;
use axum::response::Response;
use tracing::info;
use uuid::Uuid;

use crate::models::DevEventSpeakerInput;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::{ApiPath, ValidatedJson};
use crate::utils::response::no_content;

/// Attaches a speaker to the event in the path. Only existence of the parent is checked; a
/// soft-deleted event still accepts speakers.
pub async fn create_speaker(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ValidatedJson(input): ValidatedJson<DevEventSpeakerInput>,
) -> Result<Response, AppError> {
    let speaker = input.into_speaker(id);

    if !state.repository.event_exists(id).await? {
        return Err(AppError::NotFound(format!("Dev event '{}'", id)));
    }

    state.repository.insert_speaker(&speaker).await?;

    info!(dev_event_id = %id, speaker_id = %speaker.id, "Speaker added");

    Ok(no_content())
}
