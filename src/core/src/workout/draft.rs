use crate::{NewWorkout, WorkoutError, WorkoutResult};
use serde_json::Value;

/// Raw value of a single submitted field, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DraftField {
    #[default]
    Absent,
    Text(String),
    /// Present, but of a type that can never be accepted (e.g. a JSON array).
    Unusable,
}

impl DraftField {
    fn is_missing(&self) -> bool {
        match self {
            DraftField::Absent => true,
            DraftField::Text(text) => text.is_empty(),
            DraftField::Unusable => false,
        }
    }

    fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => DraftField::Absent,
            Some(Value::String(text)) => DraftField::Text(text.clone()),
            Some(Value::Number(number)) => {
                if let Some(int) = number.as_i64() {
                    DraftField::Text(int.to_string())
                } else if let Some(whole) =
                    number.as_f64().map(f64::trunc).filter(|f| fits_i64(*f))
                {
                    // fractional minutes are cut off, not rounded
                    DraftField::Text(format!("{}", whole as i64))
                } else {
                    DraftField::Unusable
                }
            }
            Some(_) => DraftField::Unusable,
        }
    }
}

impl From<Option<String>> for DraftField {
    fn from(value: Option<String>) -> Self {
        value.map(DraftField::Text).unwrap_or_default()
    }
}

/// Untrusted workout fields as received from a form or a JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub workout_name: DraftField,
    pub duration: DraftField,
    pub calories: DraftField,
}

impl WorkoutDraft {
    pub fn new(
        workout_name: Option<String>,
        duration: Option<String>,
        calories: Option<String>,
    ) -> Self {
        WorkoutDraft {
            workout_name: workout_name.into(),
            duration: duration.into(),
            calories: calories.into(),
        }
    }

    /// Builds a draft from a decoded JSON body. Anything other than an object
    /// yields a draft with every field absent.
    pub fn from_json(body: &Value) -> Self {
        let Some(object) = body.as_object() else {
            return WorkoutDraft::default();
        };

        let workout_name = match object.get("workout_name") {
            None | Some(Value::Null) => DraftField::Absent,
            Some(Value::String(name)) => DraftField::Text(name.clone()),
            Some(_) => DraftField::Unusable,
        };

        WorkoutDraft {
            workout_name,
            duration: DraftField::from_json(object.get("duration")),
            calories: DraftField::from_json(object.get("calories")),
        }
    }

    /// Checks required fields first, then numeric fields.
    pub fn validate(self) -> WorkoutResult<NewWorkout> {
        if self.workout_name.is_missing() {
            return Err(WorkoutError::MissingField("workout_name"));
        }

        if self.duration.is_missing() {
            return Err(WorkoutError::MissingField("duration"));
        }

        let workout_name = match self.workout_name {
            DraftField::Text(name) => name,
            _ => return Err(WorkoutError::InvalidType("workout_name")),
        };

        let duration = parse_integer(&self.duration, "duration")?;

        let calories = if self.calories.is_missing() {
            0
        } else {
            parse_integer(&self.calories, "calories")?
        };

        Ok(NewWorkout {
            workout_name,
            duration,
            calories,
        })
    }
}

/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn fits_i64(value: f64) -> bool {
    value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64
}

fn parse_integer(field: &DraftField, name: &'static str) -> WorkoutResult<i64> {
    match field {
        DraftField::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| WorkoutError::InvalidType(name)),
        _ => Err(WorkoutError::InvalidType(name)),
    }
}
