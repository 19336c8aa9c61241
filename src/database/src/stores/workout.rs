use chrono::{Local, NaiveDateTime};
use log::{debug, warn};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use workout_core::{NewWorkout, WorkoutRecord};

/// Flat JSON file holding the whole workout collection.
///
/// Every write reads and rewrites the file wholesale. There is no locking, so
/// two concurrent `add` calls can lose one of the records.
pub struct WorkoutStore {
    path: PathBuf,
}

impl WorkoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        WorkoutStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full collection. A missing or unreadable file is an empty
    /// collection.
    pub async fn load(&self) -> Vec<WorkoutRecord> {
        let mut file = match File::options().read(true).open(&self.path).await {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("workouts file not found: {}", self.path.display());
                return Vec::new();
            }
            Err(e) => {
                warn!("failed to open {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        let mut contents = Vec::new();

        if let Err(e) = file.read_to_end(&mut contents).await {
            warn!("failed to read {}: {}", self.path.display(), e);
            return Vec::new();
        }

        match serde_json::from_slice::<Vec<WorkoutRecord>>(&contents) {
            Ok(workouts) => {
                debug!("loaded {} workouts from {}", workouts.len(), self.path.display());
                workouts
            }
            Err(e) => {
                warn!("ignoring unparsable workouts file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    pub async fn save(&self, workouts: &[WorkoutRecord]) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_vec_pretty(workouts)?;

        let mut file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .await?;

        file.write_all(&data).await?;
        file.flush().await?;

        debug!("saved {} workouts to {}", workouts.len(), self.path.display());

        Ok(())
    }

    /// Collection length plus one. Ids repeat if records are ever removed
    /// from the file.
    pub fn next_id(workouts: &[WorkoutRecord]) -> u64 {
        u64::try_from(workouts.len()).map_or(u64::MAX, |len| len.saturating_add(1))
    }

    pub async fn add(&self, workout: NewWorkout) -> io::Result<WorkoutRecord> {
        self.add_at(workout, Local::now().naive_local()).await
    }

    pub async fn add_at(
        &self,
        workout: NewWorkout,
        created_at: NaiveDateTime,
    ) -> io::Result<WorkoutRecord> {
        let mut workouts = self.load().await;

        let record = WorkoutRecord::new(Self::next_id(&workouts), workout, created_at);

        workouts.push(record.clone());

        self.save(&workouts).await?;

        Ok(record)
    }
}
