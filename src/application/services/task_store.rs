// src/application/services/task_store.rs
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::services::persistence::{load_list, save_list, unique_millis};
use crate::domain::notification::Notification;
use crate::domain::services::notifier::Notifier;
use crate::domain::services::storage::{KeyValueStorage, TASKS_KEY};
use crate::domain::task::{Task, TaskFilter, TaskStats};
use chrono::Utc;
use tracing::{debug, instrument};

/// Transient, unpersisted editing state for a single task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: String,
    pub draft: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(Task),
    /// Blank text: nothing stored, session left open
    Abandoned,
    NotFound,
}

/// Persisted, ordered to-do list with completion and in-place editing.
///
/// Persistence follows the same write-through contract as the bookmark store.
#[derive(Debug)]
pub struct TaskStore {
    storage: Arc<dyn KeyValueStorage>,
    notifier: Arc<dyn Notifier>,
    tasks: Vec<Task>,
    editing: Option<EditSession>,
}

impl TaskStore {
    #[instrument(skip_all, level = "debug")]
    pub fn load(storage: Arc<dyn KeyValueStorage>, notifier: Arc<dyn Notifier>) -> Self {
        let tasks = load_list(storage.as_ref(), TASKS_KEY);
        Self {
            storage,
            notifier,
            tasks,
            editing: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Adds a task. Blank text is ignored and returns `None`.
    #[instrument(skip(self), level = "debug")]
    pub fn add(&mut self, text: &str) -> ApplicationResult<Option<Task>> {
        let now = Utc::now();
        let millis = unique_millis(now, |m| {
            let candidate = m.to_string();
            self.tasks.iter().any(|t| t.id == candidate)
        });
        let Some(task) = Task::new(millis.to_string(), text, now) else {
            debug!("Ignoring blank task");
            return Ok(None);
        };

        self.tasks.push(task.clone());
        self.persist()?;
        self.notifier
            .notify(Notification::success("Task added successfully!"));
        Ok(Some(task))
    }

    /// Flips completion. Returns the new state, or `None` for an unknown id.
    #[instrument(skip(self), level = "debug")]
    pub fn toggle(&mut self, id: &str) -> ApplicationResult<Option<bool>> {
        let state = self.tasks.iter_mut().find(|t| t.id == id).map(|t| {
            t.toggle();
            t.completed
        });

        self.persist()?;
        self.notifier.notify(Notification::info("Task status updated!"));
        Ok(state)
    }

    /// Opens an edit session with the task's current text as draft.
    ///
    /// An uncommitted session for another task is dropped without warning.
    #[instrument(skip(self), level = "debug")]
    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(session) = self.get(id).map(|task| EditSession {
            task_id: task.id.clone(),
            draft: task.text.clone(),
        }) else {
            return false;
        };
        if let Some(previous) = &self.editing {
            debug!("Discarding uncommitted edit of {}", previous.task_id);
        }
        self.editing = Some(session);
        true
    }

    pub fn update_draft(&mut self, text: &str) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = text.to_string();
        }
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    #[instrument(skip(self), level = "debug")]
    pub fn commit_edit(&mut self, id: &str, new_text: &str) -> ApplicationResult<EditOutcome> {
        // session stays open on a blank draft
        if new_text.trim().is_empty() {
            debug!("Blank edit abandoned");
            return Ok(EditOutcome::Abandoned);
        }
        if self.editing.as_ref().is_some_and(|s| s.task_id == id) {
            self.editing = None;
        }

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(EditOutcome::NotFound);
        };
        task.rename(new_text);
        let updated = task.clone();

        self.persist()?;
        self.notifier
            .notify(Notification::success("Task updated successfully!"));
        Ok(EditOutcome::Updated(updated))
    }

    /// Commits the open session using its draft
    pub fn commit_current_edit(&mut self) -> ApplicationResult<Option<EditOutcome>> {
        match self.editing.clone() {
            Some(session) => self
                .commit_edit(&session.task_id, &session.draft)
                .map(Some),
            None => Ok(None),
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    #[instrument(skip(self), level = "debug")]
    pub fn remove(&mut self, id: &str) -> ApplicationResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if self.editing.as_ref().is_some_and(|s| s.task_id == id) {
            self.editing = None;
        }

        self.persist()?;
        self.notifier
            .notify(Notification::success("Task deleted successfully!"));
        Ok(removed)
    }

    pub fn filter(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(&self.tasks)
    }

    fn persist(&self) -> ApplicationResult<()> {
        save_list(self.storage.as_ref(), TASKS_KEY, &self.tasks).map_err(|e| {
            self.notifier
                .notify(Notification::error(format!("Could not save tasks: {}", e)));
            e
        })
    }
}
