use crate::WorkoutAppData;
use crate::api::api_routes;
use crate::common::default_handler::default_handler;
use crate::health::health_routes;
use crate::summary::summary_routes;
use crate::workouts::workout_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<WorkoutAppData> {
        Router::<WorkoutAppData>::new()
            .merge(summary_routes())
            .merge(workout_routes())
            .merge(api_routes())
            .merge(health_routes())
            .fallback(default_handler)
    }
}
