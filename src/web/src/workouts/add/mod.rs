pub mod routes;

use crate::views::{self, Flash, FlashMessage, FlashQuery, MenuSection};
use crate::{ApiResult, WorkoutAppData};
use askama::Template;
use axum::Form;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Redirect};
use log::{debug, info};
use serde::Deserialize;
use workout_core::{WorkoutDraft, WorkoutError};

#[derive(Template, askama_web::WebTemplate)]
#[template(path = "workouts/add/index.html")]
pub struct AddWorkoutTemplate {
    pub title: String,
    pub sub_title: String,
    pub menu_sections: Vec<MenuSection>,
    pub flash: Option<FlashMessage>,
}

#[derive(Deserialize)]
pub struct AddWorkoutForm {
    pub workout_name: Option<String>,
    pub duration: Option<String>,
    pub calories: Option<String>,
}

pub async fn add_workout_page_action(Query(query): Query<FlashQuery>) -> impl IntoResponse {
    AddWorkoutTemplate {
        title: "Add New Workout".to_string(),
        sub_title: "Log a training session".to_string(),
        menu_sections: views::main_menu(views::ADD_WORKOUT_URL),
        flash: query.message(),
    }
}

pub async fn add_workout_action(
    State(state): State<WorkoutAppData>,
    Form(form): Form<AddWorkoutForm>,
) -> ApiResult<Redirect> {
    let draft = WorkoutDraft::new(form.workout_name, form.duration, form.calories);

    let workout = match draft.validate() {
        Ok(workout) => workout,
        Err(e) => {
            debug!("rejected workout form: {}", e);

            let flash = match e {
                WorkoutError::MissingField(_) => Flash::MissingFields,
                WorkoutError::InvalidType(_) => Flash::InvalidNumbers,
            };

            return Ok(Redirect::to(&flash.redirect_url(views::ADD_WORKOUT_URL)));
        }
    };

    let record = state.store.add(workout).await?;

    info!("workout {} added: {}", record.id, record.workout_name);

    Ok(Redirect::to(
        &Flash::WorkoutAdded.redirect_url(views::SUMMARY_URL),
    ))
}
