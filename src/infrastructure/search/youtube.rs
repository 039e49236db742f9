// src/infrastructure/search/youtube.rs
use crate::config::YoutubeOpts;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::search::{SearchResult, VideoResult};
use crate::domain::services::search_source::SearchSource;
use crate::infrastructure::error::InfrastructureError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    channel_title: Option<String>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// Video search through the YouTube Data API v3
#[derive(Debug, Clone)]
pub struct YoutubeSource {
    client: reqwest::Client,
    opts: YoutubeOpts,
}

impl YoutubeSource {
    pub fn new(opts: YoutubeOpts) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(opts.timeout_ms))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new()); // Fallback to default client in case of builder failure
        Self { client, opts }
    }

    fn request_url(&self, query: &str, api_key: &str) -> DomainResult<Url> {
        let invalid_base = |reason: String| {
            InfrastructureError::Configuration(format!(
                "Invalid YouTube base URL {}: {}",
                self.opts.base_url, reason
            ))
        };
        let mut url = Url::parse(&self.opts.base_url).map_err(|e| invalid_base(e.to_string()))?;
        // appended below any path prefix of the base, e.g. a proxy mount point
        url.path_segments_mut()
            .map_err(|_| invalid_base("cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(["youtube", "v3", "search"]);
        url.query_pairs_mut()
            .append_pair("part", "snippet")
            .append_pair("q", &format!("{} tutorial", query))
            .append_pair("type", "video")
            .append_pair("maxResults", &self.opts.max_results.to_string())
            .append_pair("key", api_key);
        Ok(url)
    }
}

fn to_result(item: SearchItem) -> Option<SearchResult> {
    let video_id = item.id.video_id?;
    Some(SearchResult::Video(VideoResult {
        link: format!("https://www.youtube.com/watch?v={}", video_id),
        id: video_id,
        title: item.snippet.title,
        description: item.snippet.description,
        thumbnail: item.snippet.thumbnails.medium.map(|t| t.url),
        channel: item.snippet.channel_title,
    }))
}

#[async_trait]
impl SearchSource for YoutubeSource {
    fn name(&self) -> &str {
        "youtube"
    }

    #[instrument(skip(self), level = "debug")]
    async fn search(&self, query: &str) -> DomainResult<Vec<SearchResult>> {
        let api_key = self.opts.api_key.as_deref().ok_or_else(|| {
            DomainError::SearchFailed("No YouTube API key configured".to_string())
        })?;
        let url = self.request_url(query, api_key)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(InfrastructureError::from)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::SearchFailed(format!(
                "YouTube API returned {}: {}",
                status, body
            )));
        }

        let data: SearchResponse = response.json().await.map_err(|e| {
            DomainError::from(InfrastructureError::from(e)).context("Decoding YouTube response")
        })?;
        debug!("YouTube returned {} items", data.items.len());

        Ok(data.items.into_iter().filter_map(to_result).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn opts(api_key: Option<&str>) -> YoutubeOpts {
        YoutubeOpts {
            api_key: api_key.map(String::from),
            ..YoutubeOpts::default()
        }
    }

    #[test]
    fn given_query_when_request_url_then_contains_api_parameters() {
        let source = YoutubeSource::new(opts(Some("secret")));

        let url = source.request_url("rust async", "secret").unwrap();

        assert_eq!(url.path(), "/youtube/v3/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("q".to_string(), "rust async tutorial".to_string())));
        assert!(pairs.contains(&("type".to_string(), "video".to_string())));
        assert!(pairs.contains(&("maxResults".to_string(), "9".to_string())));
        assert!(pairs.contains(&("key".to_string(), "secret".to_string())));
    }

    #[rstest]
    #[case("https://www.googleapis.com", "/youtube/v3/search")]
    #[case("https://www.googleapis.com/", "/youtube/v3/search")]
    #[case("http://proxy.local/api", "/api/youtube/v3/search")]
    #[case("http://proxy.local/api/", "/api/youtube/v3/search")]
    fn given_base_with_path_prefix_when_request_url_then_prefix_kept(
        #[case] base_url: &str,
        #[case] expected_path: &str,
    ) {
        let source = YoutubeSource::new(YoutubeOpts {
            base_url: base_url.to_string(),
            ..opts(Some("secret"))
        });

        let url = source.request_url("rust", "secret").unwrap();

        assert_eq!(url.path(), expected_path);
    }

    #[test]
    fn given_non_hierarchical_base_when_request_url_then_configuration_error() {
        let source = YoutubeSource::new(YoutubeOpts {
            base_url: "mailto:someone@example.com".to_string(),
            ..opts(Some("secret"))
        });

        let err = source.request_url("rust", "secret").unwrap_err();

        assert!(err.to_string().contains("Invalid YouTube base URL"));
    }

    #[test]
    fn given_api_payload_when_mapped_then_watch_links_and_medium_thumbnail() {
        let json = r#"{
            "items": [
                {"id": {"videoId": "abc123"},
                 "snippet": {"title": "Rust in 100s", "description": "fast",
                             "channelTitle": "Fireship",
                             "thumbnails": {"medium": {"url": "https://i.ytimg.com/m.jpg"}}}},
                {"id": {"channelId": "xyz"},
                 "snippet": {"title": "A channel"}}
            ]
        }"#;
        let data: SearchResponse = serde_json::from_str(json).unwrap();

        let results: Vec<_> = data.items.into_iter().filter_map(to_result).collect();

        assert_eq!(results.len(), 1);
        let SearchResult::Video(video) = &results[0] else {
            panic!("expected video");
        };
        assert_eq!(video.link, "https://www.youtube.com/watch?v=abc123");
        assert_eq!(video.thumbnail.as_deref(), Some("https://i.ytimg.com/m.jpg"));
        assert_eq!(video.channel.as_deref(), Some("Fireship"));
    }

    #[tokio::test]
    async fn given_no_api_key_when_search_then_error() {
        let source = YoutubeSource::new(opts(None));
        assert!(matches!(
            source.search("rust").await,
            Err(DomainError::SearchFailed(_))
        ));
    }
}
