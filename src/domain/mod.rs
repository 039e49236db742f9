// src/domain/mod.rs
pub mod bookmark;
pub mod error;
pub mod notification;
pub mod search;
pub mod services;
pub mod task;
