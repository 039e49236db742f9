// src/domain/services/storage.rs
use crate::domain::error::DomainResult;

/// Storage keys, kept compatible with the browser dashboard's localStorage
pub const BOOKMARKS_KEY: &str = "learnify_bookmarks";
pub const TASKS_KEY: &str = "learnify_tasks";
pub const DAILY_GOAL_KEY: &str = "learnify_daily_goal";

/// String key-value storage holding one serialized blob per key.
///
/// `set` must replace the whole value in one step: readers see either the old
/// or the new blob, never a mix.
pub trait KeyValueStorage: std::fmt::Debug + Send + Sync {
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}
