// src/infrastructure/search/fallback.rs
//! Placeholder results shown when a live source is unavailable.

use crate::domain::search::{SearchResult, VideoResult};

const PLACEHOLDER_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=320&h=180&fit=crop";

/// Three canned tutorials for `query`. All share the link `#`, so only one of
/// them can be bookmarked at a time.
pub fn videos(query: &str) -> Vec<SearchResult> {
    let entries = [
        (
            format!("{} - Complete Tutorial 2024", query),
            format!(
                "Learn {} from scratch with this comprehensive tutorial. Master the fundamentals and advanced concepts.",
                query
            ),
            "Learnify Master Class",
        ),
        (
            format!("{} Crash Course - Learn in 2 Hours", query),
            format!(
                "Fast-paced tutorial covering all essential {} concepts with practical examples.",
                query
            ),
            "Code With Me",
        ),
        (
            format!("Advanced {} Techniques", query),
            format!(
                "Take your {} skills to the next level with these advanced patterns and techniques.",
                query
            ),
            "Pro Development",
        ),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (title, description, channel))| {
            SearchResult::Video(VideoResult {
                id: (i + 1).to_string(),
                title,
                description: Some(description),
                thumbnail: Some(PLACEHOLDER_THUMBNAIL.to_string()),
                channel: Some(channel.to_string()),
                link: "#".to_string(),
            })
        })
        .collect()
}
