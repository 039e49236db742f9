pub mod notifier;
pub mod search_source;
pub mod storage;
