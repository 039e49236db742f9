// src/application/mod.rs
pub mod error;
pub mod services;

// Re-export key services for easier imports
pub use services::bookmark_store::BookmarkStore;
pub use services::daily_goal::DailyGoalStore;
pub use services::search_service::SearchService;
pub use services::task_store::TaskStore;
