mod api;
mod common;
mod error;
mod health;
mod routes;
mod summary;
mod views;
mod workouts;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use axum::Router;
use axum::response::IntoResponse;
use database::WorkoutStore;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct WorkoutTrackerServer {
    data: WorkoutAppData,
}

impl WorkoutTrackerServer {
    pub fn new(data: WorkoutAppData) -> Self {
        WorkoutTrackerServer { data }
    }

    pub fn router(&self) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        (
                            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                            "Internal server error - handler panicked".to_string(),
                        )
                            .into_response()
                    })),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self, addr: SocketAddr) -> std::io::Result<()> {
        let app = self.router();

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://{}", addr);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            error!("Server stopped unexpectedly, but not crashing the process");
        }

        Ok(())
    }
}

pub struct WorkoutAppData {
    pub store: Arc<WorkoutStore>,
}

impl WorkoutAppData {
    pub fn new(store: WorkoutStore) -> Self {
        WorkoutAppData {
            store: Arc::new(store),
        }
    }
}

impl Clone for WorkoutAppData {
    fn clone(&self) -> Self {
        WorkoutAppData {
            store: Arc::clone(&self.store),
        }
    }
}
