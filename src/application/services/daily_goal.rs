// src/application/services/daily_goal.rs
use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::services::storage::{KeyValueStorage, DAILY_GOAL_KEY};
use tracing::{instrument, warn};

/// Single free-text learning goal.
///
/// Stored as the raw trimmed string rather than JSON, matching what the
/// browser dashboard wrote.
#[derive(Debug)]
pub struct DailyGoalStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl DailyGoalStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    #[instrument(skip(self), level = "debug")]
    pub fn get(&self) -> Option<String> {
        match self.storage.get(DAILY_GOAL_KEY) {
            Ok(goal) => goal.filter(|g| !g.trim().is_empty()),
            Err(e) => {
                warn!("Cannot read daily goal: {}", e);
                None
            }
        }
    }

    /// Stores the goal. Blank input is ignored and returns `false`.
    #[instrument(skip(self), level = "debug")]
    pub fn set(&self, goal: &str) -> ApplicationResult<bool> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Ok(false);
        }
        self.storage
            .set(DAILY_GOAL_KEY, goal)
            .map_err(|source| ApplicationError::Storage {
                key: DAILY_GOAL_KEY.to_string(),
                source,
            })?;
        Ok(true)
    }
}
