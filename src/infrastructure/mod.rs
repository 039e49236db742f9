pub mod di;
pub mod error;
pub(crate) mod json;
pub mod notifier;
pub mod search;
pub mod storage;
