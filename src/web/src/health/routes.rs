use crate::WorkoutAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<WorkoutAppData> {
    Router::new().route("/health", get(super::health_action))
}
