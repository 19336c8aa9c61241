use crate::WorkoutAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<WorkoutAppData> {
    Router::new().route("/", get(super::summary_action))
}
