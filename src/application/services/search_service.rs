// src/application/services/search_service.rs
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::search::{Category, SearchResults};
use crate::domain::services::search_source::SearchSource;
use crate::infrastructure::search::fallback;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Results of the newest search, now stored as the latest results
    Applied(SearchResults),
    /// A newer search started while this one was in flight; results dropped
    Superseded,
}

/// Runs the video and documentation sources side by side.
///
/// Source failures never reach the caller: videos fall back to placeholder
/// entries, documentation to an empty list. Each search takes a generation
/// number and only the newest generation may publish its results.
#[derive(Debug)]
pub struct SearchService {
    videos: Arc<dyn SearchSource>,
    docs: Arc<dyn SearchSource>,
    generation: AtomicU64,
    latest: RwLock<Option<SearchResults>>,
}

impl SearchService {
    pub fn new(videos: Arc<dyn SearchSource>, docs: Arc<dyn SearchSource>) -> Self {
        Self {
            videos,
            docs,
            generation: AtomicU64::new(0),
            latest: RwLock::new(None),
        }
    }

    #[instrument(skip(self), level = "debug")]
    pub async fn search(&self, query: &str) -> ApplicationResult<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApplicationError::Validation(
                "Search query cannot be empty".to_string(),
            ));
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("Search generation {} for '{}'", generation, query);

        let (videos, docs) = tokio::join!(self.videos.search(query), self.docs.search(query));

        let videos = videos.unwrap_or_else(|e| {
            warn!("{} failed, using placeholders: {}", self.videos.name(), e);
            fallback::videos(query)
        });
        let docs = docs.unwrap_or_else(|e| {
            warn!("{} failed: {}", self.docs.name(), e);
            Vec::new()
        });
        let results = SearchResults {
            query: query.to_string(),
            videos,
            docs,
        };

        let mut latest = self
            .latest
            .write()
            .map_err(|e| ApplicationError::Other(format!("Write lock error: {}", e)))?;
        if self.generation.load(Ordering::SeqCst) != generation {
            info!("Dropping results of superseded search '{}'", query);
            return Ok(SearchOutcome::Superseded);
        }
        *latest = Some(results.clone());
        Ok(SearchOutcome::Applied(results))
    }

    pub async fn search_category(&self, category: Category) -> ApplicationResult<SearchOutcome> {
        self.search(category.name()).await
    }

    /// Results of the most recent applied search
    pub fn latest(&self) -> Option<SearchResults> {
        self.latest.read().ok().and_then(|guard| guard.clone())
    }
}
