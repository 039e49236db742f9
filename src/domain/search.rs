// src/domain/search.rs
use crate::domain::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of learning resource. Together with the link it forms the bookmark key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    Documentation,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Video => "video",
            ResourceType::Documentation => "documentation",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "video" => Ok(ResourceType::Video),
            "documentation" | "doc" | "docs" => Ok(ResourceType::Documentation),
            other => Err(DomainError::InvalidResourceType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoResult {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationResult {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub link: String,
}

/// A single hit returned by a search source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Video(VideoResult),
    Documentation(DocumentationResult),
}

impl SearchResult {
    pub fn resource_type(&self) -> ResourceType {
        match self {
            SearchResult::Video(_) => ResourceType::Video,
            SearchResult::Documentation(_) => ResourceType::Documentation,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            SearchResult::Video(v) => &v.id,
            SearchResult::Documentation(d) => &d.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            SearchResult::Video(v) => &v.title,
            SearchResult::Documentation(d) => &d.title,
        }
    }

    pub fn link(&self) -> &str {
        match self {
            SearchResult::Video(v) => &v.link,
            SearchResult::Documentation(d) => &d.link,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            SearchResult::Video(v) => v.description.as_deref(),
            SearchResult::Documentation(d) => d.description.as_deref(),
        }
    }
}

/// Results of one search, videos and documentation kept apart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub videos: Vec<SearchResult>,
    pub docs: Vec<SearchResult>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty() && self.docs.is_empty()
    }

    /// Videos first, then documentation; the order used for numbering in the CLI.
    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.videos.iter().chain(self.docs.iter())
    }
}

/// Browse categories offered next to the free-text search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    WebDevelopment,
    AiMl,
    Design,
    DataScience,
    Cloud,
    DevOps,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::WebDevelopment,
        Category::AiMl,
        Category::Design,
        Category::DataScience,
        Category::Cloud,
        Category::DevOps,
    ];

    /// Display name, also used as the search query
    pub fn name(&self) -> &'static str {
        match self {
            Category::WebDevelopment => "Web Development",
            Category::AiMl => "AI/ML",
            Category::Design => "Design",
            Category::DataScience => "Data Science",
            Category::Cloud => "Cloud",
            Category::DevOps => "DevOps",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let wanted = normalize_category(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize_category(c.name()) == wanted)
            .ok_or_else(|| DomainError::Other(format!("Unknown category: {}", s)))
    }
}

fn normalize_category(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_video_json_when_deserialize_then_tagged_variant() {
        let json = r#"{"type":"video","id":"abc","title":"Rust","link":"https://x.com/a"}"#;
        let result: SearchResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.resource_type(), ResourceType::Video);
        assert_eq!(result.link(), "https://x.com/a");
        assert_eq!(result.description(), None);
    }

    #[test]
    fn given_documentation_when_serialize_then_omits_missing_fields() {
        let result = SearchResult::Documentation(DocumentationResult {
            id: "1".to_string(),
            title: "Rust - MDN".to_string(),
            description: None,
            site: Some("MDN Web Docs".to_string()),
            icon: None,
            link: "https://developer.mozilla.org".to_string(),
        });

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains(r#""type":"documentation""#));
        assert!(json.contains(r#""site":"MDN Web Docs""#));
        assert!(!json.contains("icon"));
        assert!(!json.contains("description"));
    }

    #[test]
    fn given_resource_type_strings_when_parse_then_accepts_aliases() {
        assert_eq!("Video".parse::<ResourceType>().unwrap(), ResourceType::Video);
        assert_eq!(
            "docs".parse::<ResourceType>().unwrap(),
            ResourceType::Documentation
        );
        assert!("podcast".parse::<ResourceType>().is_err());
    }

    #[test]
    fn given_category_slug_when_parse_then_matches_display_name() {
        assert_eq!(
            "web-development".parse::<Category>().unwrap(),
            Category::WebDevelopment
        );
        assert_eq!("ai-ml".parse::<Category>().unwrap(), Category::AiMl);
        assert_eq!("DevOps".parse::<Category>().unwrap(), Category::DevOps);
        assert!("gardening".parse::<Category>().is_err());
    }
}
