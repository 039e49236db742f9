// src/infrastructure/search/documentation.rs
use crate::domain::error::DomainResult;
use crate::domain::search::{DocumentationResult, SearchResult};
use crate::domain::services::search_source::SearchSource;
use async_trait::async_trait;
use tracing::instrument;

/// Offline documentation index pointing at MDN, DevDocs and the official docs.
#[derive(Debug, Default, Clone)]
pub struct DocumentationSource;

impl DocumentationSource {
    pub fn new() -> Self {
        Self
    }

    fn entries(query: &str) -> Vec<SearchResult> {
        let mdn_path = query.replacen(' ', "_", 1);
        let devdocs_path = query.to_lowercase().replacen(' ', "-", 1);

        vec![
            SearchResult::Documentation(DocumentationResult {
                id: "1".to_string(),
                title: format!("{} - MDN Web Docs", query),
                description: Some(format!(
                    "Comprehensive guide and reference for {} on MDN Web Docs. Trusted by developers worldwide.",
                    query
                )),
                site: Some("MDN Web Docs".to_string()),
                icon: Some("📘".to_string()),
                link: format!("https://developer.mozilla.org/en-US/docs/Web/{}", mdn_path),
            }),
            SearchResult::Documentation(DocumentationResult {
                id: "2".to_string(),
                title: format!("{} - DevDocs API Documentation", query),
                description: Some(format!(
                    "Complete API documentation and examples for {} on DevDocs.",
                    query
                )),
                site: Some("DevDocs".to_string()),
                icon: Some("📚".to_string()),
                link: format!("https://devdocs.io/{}/", devdocs_path),
            }),
            SearchResult::Documentation(DocumentationResult {
                id: "3".to_string(),
                title: format!("{} - Official Documentation", query),
                description: Some(format!(
                    "Official documentation and getting started guide for {}.",
                    query
                )),
                site: Some("Official Docs".to_string()),
                icon: Some("🔧".to_string()),
                link: "#".to_string(),
            }),
        ]
    }
}

#[async_trait]
impl SearchSource for DocumentationSource {
    fn name(&self) -> &str {
        "documentation"
    }

    #[instrument(skip(self), level = "debug")]
    async fn search(&self, query: &str) -> DomainResult<Vec<SearchResult>> {
        Ok(Self::entries(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::ResourceType;

    #[tokio::test]
    async fn given_multi_word_query_when_search_then_only_first_space_replaced() {
        let results = DocumentationSource::new()
            .search("Web Development Basics")
            .await
            .unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].link(),
            "https://developer.mozilla.org/en-US/docs/Web/Web_Development Basics"
        );
        assert_eq!(
            results[1].link(),
            "https://devdocs.io/web-development basics/"
        );
        assert_eq!(results[2].link(), "#");
        assert!(results
            .iter()
            .all(|r| r.resource_type() == ResourceType::Documentation));
    }
}
