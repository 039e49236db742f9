// src/infrastructure/storage/mod.rs
mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
