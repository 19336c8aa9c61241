use crate::WorkoutRecord;

pub const RECENT_WORKOUTS_LIMIT: usize = 5;

/// Totals over the whole collection plus its most recent entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSummary {
    pub total_workouts: usize,
    /// Wider than a single duration so the total cannot overflow.
    pub total_duration: i128,
    /// Oldest first, same order as the collection.
    pub recent_workouts: Vec<WorkoutRecord>,
}

impl WorkoutSummary {
    pub fn from_records(records: &[WorkoutRecord]) -> Self {
        let recent_start = records.len().saturating_sub(RECENT_WORKOUTS_LIMIT);

        WorkoutSummary {
            total_workouts: records.len(),
            total_duration: records.iter().map(|record| i128::from(record.duration)).sum(),
            recent_workouts: records[recent_start..].to_vec(),
        }
    }
}
