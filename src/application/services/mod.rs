pub mod bookmark_store;
pub mod daily_goal;
mod persistence;
pub mod search_service;
pub mod task_store;
