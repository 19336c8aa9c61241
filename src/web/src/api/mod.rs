pub mod workouts;

use crate::WorkoutAppData;
use axum::Router;

pub fn api_routes() -> Router<WorkoutAppData> {
    Router::new().merge(workouts::routes::routes())
}
