use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const WORKOUT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged exercise session as it is persisted and returned by the API.
///
/// Field names are part of the on-disk format and must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: u64,
    pub workout_name: String,
    pub duration: i64,
    #[serde(default)]
    pub calories: i64,
    #[serde(default)]
    pub date: String,
}

impl WorkoutRecord {
    pub fn new(id: u64, workout: NewWorkout, created_at: NaiveDateTime) -> Self {
        WorkoutRecord {
            id,
            workout_name: workout.workout_name,
            duration: workout.duration,
            calories: workout.calories,
            date: created_at.format(WORKOUT_DATE_FORMAT).to_string(),
        }
    }
}

/// A validated workout that has not been given an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    pub workout_name: String,
    pub duration: i64,
    pub calories: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn created_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(18, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_new_record_formats_date() {
        let workout = NewWorkout {
            workout_name: "Running".to_string(),
            duration: 30,
            calories: 200,
        };

        let record = WorkoutRecord::new(1, workout, created_at());

        assert_eq!(record.id, 1);
        assert_eq!(record.workout_name, "Running");
        assert_eq!(record.duration, 30);
        assert_eq!(record.calories, 200);
        assert_eq!(record.date, "2024-07-01 18:05:09");
    }

    #[test]
    fn test_serialized_field_names() {
        let record = WorkoutRecord {
            id: 3,
            workout_name: "Yoga".to_string(),
            duration: 60,
            calories: 100,
            date: "2024-07-01 18:05:09".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(
            json,
            r#"{"id":3,"workout_name":"Yoga","duration":60,"calories":100,"date":"2024-07-01 18:05:09"}"#
        );
    }

    #[test]
    fn test_missing_calories_and_date_default() {
        let record: WorkoutRecord =
            serde_json::from_str(r#"{"id":1,"workout_name":"Running","duration":30}"#).unwrap();

        assert_eq!(record.calories, 0);
        assert!(record.date.is_empty());
    }
}
