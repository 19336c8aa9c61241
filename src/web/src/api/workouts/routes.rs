use crate::WorkoutAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<WorkoutAppData> {
    Router::new().route(
        "/api/workouts",
        get(super::workout_list_api_action).post(super::workout_create_api_action),
    )
}
