use crate::WorkoutAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<WorkoutAppData> {
    Router::new().route(
        "/add_workout",
        get(super::add_workout_page_action).post(super::add_workout_action),
    )
}
