pub mod routes;

use crate::WorkoutAppData;
use axum::Json;
use axum::Router;
use chrono::Local;
use serde::Serialize;

pub fn health_routes() -> Router<WorkoutAppData> {
    routes::routes()
}

#[derive(Serialize)]
pub struct HealthViewModel {
    pub status: &'static str,
    pub timestamp: String,
}

pub async fn health_action() -> Json<HealthViewModel> {
    Json(HealthViewModel {
        status: "healthy",
        timestamp: Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    })
}
