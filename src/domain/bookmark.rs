// src/domain/bookmark.rs
use crate::domain::error::DomainResult;
use crate::domain::search::{ResourceType, SearchResult};
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A saved learning resource.
///
/// Bookmarks are never mutated after creation; `(link, resource_type)` is unique
/// within a store.
#[derive(Builder, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub link: String,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl Bookmark {
    /// Copy the display fields of a search result into a new bookmark.
    pub fn from_search_result(
        item: &SearchResult,
        id: impl Into<String>,
        added_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let mut builder = BookmarkBuilder::default();
        builder
            .id(id)
            .resource_type(item.resource_type())
            .link(item.link())
            .title(Some(item.title().to_string()))
            .added_at(added_at);

        match item {
            SearchResult::Video(v) => {
                builder
                    .description(v.description.clone())
                    .thumbnail(v.thumbnail.clone())
                    .channel(v.channel.clone());
            }
            SearchResult::Documentation(d) => {
                builder
                    .description(d.description.clone())
                    .site(d.site.clone())
                    .icon(d.icon.clone());
            }
        }

        Ok(builder.build()?)
    }

    /// Id format: `{type}_{millis}`
    pub fn generate_id(resource_type: ResourceType, millis: i64) -> String {
        format!("{}_{}", resource_type, millis)
    }

    /// True if this bookmark has the given natural key
    pub fn has_key(&self, link: &str, resource_type: ResourceType) -> bool {
        self.link == link && self.resource_type == resource_type
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.link)
    }
}

impl fmt::Display for Bookmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}) <{}>",
            self.id,
            self.display_title(),
            self.resource_type,
            self.link
        )
    }
}
