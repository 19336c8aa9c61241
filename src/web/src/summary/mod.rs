pub mod routes;

use crate::WorkoutAppData;
use crate::views::{self, FlashMessage, FlashQuery, MenuSection};
use askama::Template;
use axum::Router;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use workout_core::{WorkoutRecord, WorkoutSummary};

pub fn summary_routes() -> Router<WorkoutAppData> {
    routes::routes()
}

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "summary/index.html")]
pub struct SummaryTemplate {
    pub title: String,
    pub sub_title: String,
    pub menu_sections: Vec<MenuSection>,
    pub flash: Option<FlashMessage>,
    pub total_workouts: usize,
    pub total_duration: i128,
    pub recent_workouts: Vec<WorkoutRecord>,
}

pub async fn summary_action(
    State(state): State<WorkoutAppData>,
    Query(query): Query<FlashQuery>,
) -> impl IntoResponse {
    let workouts = state.store.load().await;

    let summary = WorkoutSummary::from_records(&workouts);

    SummaryTemplate {
        title: "ACEestFitness".to_string(),
        sub_title: "Welcome to ACEestFitness".to_string(),
        menu_sections: views::main_menu(views::SUMMARY_URL),
        flash: query.message(),
        total_workouts: summary.total_workouts,
        total_duration: summary.total_duration,
        recent_workouts: summary.recent_workouts,
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{TestApp, body_text};
    use axum::http::StatusCode;
    use workout_core::NewWorkout;

    #[tokio::test]
    async fn test_summary_empty() {
        let app = TestApp::new();

        let response = app.get("/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("ACEestFitness"));
        assert!(body.contains("Welcome to ACEestFitness"));
        assert!(body.contains("No workouts logged yet"));
    }

    #[tokio::test]
    async fn test_summary_totals_and_recent() {
        let app = TestApp::new();

        let workouts = [
            ("Alpha", 10),
            ("Bravo", 20),
            ("Charlie", 30),
            ("Delta", 40),
            ("Echo", 50),
            ("Foxtrot", 60),
        ];

        for (name, duration) in workouts {
            app.data
                .store
                .add(NewWorkout {
                    workout_name: name.to_string(),
                    duration,
                    calories: 0,
                })
                .await
                .unwrap();
        }

        let body = body_text(app.get("/").await).await;

        assert!(body.contains(r#"<span class="stat-value" id="total-workouts">6</span>"#));
        assert!(body.contains(r#"<span class="stat-value" id="total-duration">210</span>"#));
        assert!(!body.contains("Alpha"));
        assert!(body.contains("Bravo"));
        assert!(body.contains("Foxtrot"));
    }

    #[tokio::test]
    async fn test_summary_total_past_i64_range() {
        let app = TestApp::new();

        for _ in 0..2 {
            let response = app
                .post_json(
                    "/api/workouts",
                    r#"{"workout_name": "Ultra", "duration": 9223372036854775807}"#,
                )
                .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app.get("/").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains(
            r#"<span class="stat-value" id="total-duration">18446744073709551614</span>"#
        ));
    }

    #[tokio::test]
    async fn test_summary_shows_flash() {
        let app = TestApp::new();

        let body = body_text(app.get("/?flash=workout_added").await).await;

        assert!(body.contains("Workout added successfully!"));
    }
}
