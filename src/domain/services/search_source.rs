// src/domain/services/search_source.rs
use crate::domain::error::DomainResult;
use crate::domain::search::SearchResult;
use async_trait::async_trait;

/// External search collaborator, e.g. a video API or a documentation index.
#[async_trait]
pub trait SearchSource: std::fmt::Debug + Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    async fn search(&self, query: &str) -> DomainResult<Vec<SearchResult>>;
}
