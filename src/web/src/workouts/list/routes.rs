use crate::WorkoutAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<WorkoutAppData> {
    Router::new().route("/workouts", get(super::workout_list_action))
}
