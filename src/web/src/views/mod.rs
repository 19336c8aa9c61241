use serde::Deserialize;

pub const SUMMARY_URL: &str = "/";
pub const ADD_WORKOUT_URL: &str = "/add_workout";
pub const WORKOUTS_URL: &str = "/workouts";

pub struct MenuSection {
    pub items: Vec<MenuItem>,
}

pub struct MenuItem {
    pub title: String,
    pub url: String,
    pub icon: String,
    pub active: bool,
}

pub fn main_menu(current_path: &str) -> Vec<MenuSection> {
    let item = |title: &str, url: &str, icon: &str| MenuItem {
        title: title.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
        active: current_path == url,
    };

    vec![
        MenuSection {
            items: vec![item("Home", SUMMARY_URL, "fa-home")],
        },
        MenuSection {
            items: vec![
                item("Add Workout", ADD_WORKOUT_URL, "fa-plus"),
                item("All Workouts", WORKOUTS_URL, "fa-list"),
            ],
        },
    ]
}

/// Feedback carried across a redirect in the `flash` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    WorkoutAdded,
    MissingFields,
    InvalidNumbers,
}

impl Flash {
    pub fn key(self) -> &'static str {
        match self {
            Flash::WorkoutAdded => "workout_added",
            Flash::MissingFields => "missing_fields",
            Flash::InvalidNumbers => "invalid_numbers",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "workout_added" => Some(Flash::WorkoutAdded),
            "missing_fields" => Some(Flash::MissingFields),
            "invalid_numbers" => Some(Flash::InvalidNumbers),
            _ => None,
        }
    }

    pub fn redirect_url(self, path: &str) -> String {
        format!("{}?flash={}", path, self.key())
    }

    pub fn message(self) -> FlashMessage {
        let (kind, text) = match self {
            Flash::WorkoutAdded => ("success", "Workout added successfully!"),
            Flash::MissingFields => ("error", "Please fill in all required fields!"),
            Flash::InvalidNumbers => ("error", "Duration and calories must be valid numbers!"),
        };

        FlashMessage {
            kind: kind.to_string(),
            text: text.to_string(),
        }
    }
}

pub struct FlashMessage {
    pub kind: String,
    pub text: String,
}

#[derive(Deserialize, Default)]
pub struct FlashQuery {
    pub flash: Option<String>,
}

impl FlashQuery {
    pub fn message(&self) -> Option<FlashMessage> {
        self.flash
            .as_deref()
            .and_then(Flash::from_key)
            .map(Flash::message)
    }
}
