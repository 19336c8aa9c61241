pub mod routes;

use crate::WorkoutAppData;
use crate::views::{self, MenuSection};
use askama::Template;
use axum::extract::State;
use axum::response::IntoResponse;
use workout_core::WorkoutRecord;

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "workouts/list/index.html")]
pub struct WorkoutListTemplate {
    pub title: String,
    pub sub_title: String,
    pub menu_sections: Vec<MenuSection>,
    pub workouts: Vec<WorkoutRecord>,
}

pub async fn workout_list_action(State(state): State<WorkoutAppData>) -> impl IntoResponse {
    let workouts = state.store.load().await;

    WorkoutListTemplate {
        title: "All Workouts".to_string(),
        sub_title: format!("{} logged", workouts.len()),
        menu_sections: views::main_menu(views::WORKOUTS_URL),
        workouts,
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{TestApp, body_text};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_empty() {
        let app = TestApp::new();

        let response = app.get("/workouts").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("No workouts found"));
    }

    #[tokio::test]
    async fn test_list_shows_every_workout_in_order() {
        let app = TestApp::new();

        for form in [
            "workout_name=Running&duration=30&calories=200",
            "workout_name=Yoga&duration=60&calories=100",
            "workout_name=Swimming&duration=45&calories=400",
        ] {
            app.post_form("/add_workout", form).await;
        }

        let body = body_text(app.get("/workouts").await).await;

        let running = body.find("Running").unwrap();
        let yoga = body.find("Yoga").unwrap();
        let swimming = body.find("Swimming").unwrap();
        assert!(running < yoga && yoga < swimming);
        assert!(body.contains("30 min"));
        assert!(body.contains("45 min"));
    }

    #[tokio::test]
    async fn test_list_escapes_workout_names() {
        let app = TestApp::new();

        app.post_form("/add_workout", "workout_name=%3Cb%3ELegs%3C%2Fb%3E&duration=20")
            .await;

        let body = body_text(app.get("/workouts").await).await;

        assert!(!body.contains("<b>Legs</b>"));
        assert!(body.contains("Legs"));
    }
}
