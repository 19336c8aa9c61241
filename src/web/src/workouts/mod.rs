pub mod add;
pub mod list;

use crate::WorkoutAppData;
use axum::Router;

pub fn workout_routes() -> Router<WorkoutAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(add::routes::routes())
}
