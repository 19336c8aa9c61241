pub mod routes;

use crate::{ApiResult, WorkoutAppData};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use log::{debug, info};
use serde::Serialize;
use serde_json::Value;
use workout_core::{WorkoutDraft, WorkoutRecord};

#[derive(Serialize)]
pub struct WorkoutCreatedResponse {
    pub message: &'static str,
    pub workout: WorkoutRecord,
}

pub async fn workout_list_api_action(
    State(state): State<WorkoutAppData>,
) -> Json<Vec<WorkoutRecord>> {
    Json(state.store.load().await)
}

/// Accepts any body; one that is not a JSON object is treated as having no
/// fields at all.
pub async fn workout_create_api_action(
    State(state): State<WorkoutAppData>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<WorkoutCreatedResponse>)> {
    let draft = serde_json::from_slice::<Value>(&body)
        .map(|value| WorkoutDraft::from_json(&value))
        .unwrap_or_default();

    let workout = draft.validate().inspect_err(|e| {
        debug!("rejected workout request: {}", e);
    })?;

    let record = state.store.add(workout).await?;

    info!("workout {} added via api: {}", record.id, record.workout_name);

    Ok((
        StatusCode::CREATED,
        Json(WorkoutCreatedResponse {
            message: "Workout added successfully",
            workout: record,
        }),
    ))
}
