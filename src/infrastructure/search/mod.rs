// src/infrastructure/search/mod.rs
mod documentation;
pub mod fallback;
mod youtube;

pub use documentation::DocumentationSource;
pub use youtube::YoutubeSource;
