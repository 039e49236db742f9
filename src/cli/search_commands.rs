// src/cli/search_commands.rs
use crate::application::services::search_service::SearchOutcome;
use crate::cli::bookmark_commands;
use crate::cli::display::{format_categories, show_items, DisplayItem};
use crate::cli::error::{CliError, CliResult};
use crate::domain::search::{Category, SearchResult, SearchResults};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::json::write_json;
use crate::util::helper::ensure_index_vector;
use std::str::FromStr;
use tokio::runtime::Runtime;
use tracing::{debug, instrument};

#[instrument(skip(services), level = "debug")]
pub fn search(
    services: &mut ServiceContainer,
    query: Option<String>,
    category: Option<String>,
    bookmark: Option<String>,
    is_json: bool,
    no_color: bool,
) -> CliResult<()> {
    let positions = bookmark
        .as_deref()
        .map(|s| {
            ensure_index_vector(s)
                .ok_or_else(|| CliError::InvalidInput(format!("Invalid positions: {}", s)))
        })
        .transpose()?;

    let search_service = services.search_service.clone();
    let rt = Runtime::new()
        .map_err(|e| CliError::CommandFailed(format!("Failed to create async runtime: {}", e)))?;

    let outcome = match (query, category) {
        (Some(_), Some(_)) => {
            return Err(CliError::InvalidInput(
                "Use either a query or --category, not both".to_string(),
            ))
        }
        (None, None) => {
            return Err(CliError::InvalidInput(
                "Provide a query or --category".to_string(),
            ))
        }
        (Some(query), None) => rt.block_on(search_service.search(&query))?,
        (None, Some(name)) => {
            let category = Category::from_str(&name)
                .map_err(|_| {
                    CliError::InvalidInput(format!(
                        "Unknown category '{}'. Available: {}",
                        name,
                        format_categories()
                    ))
                })?;
            rt.block_on(search_service.search_category(category))?
        }
    };

    let results = match outcome {
        SearchOutcome::Applied(results) => results,
        SearchOutcome::Superseded => {
            debug!("Search superseded, nothing to show");
            return Ok(());
        }
    };

    if is_json {
        write_json(&results)?;
    } else {
        show_results(services, &results, no_color);
    }

    if let Some(positions) = positions {
        let items: Vec<&SearchResult> = results.iter().collect();
        for position in positions {
            match items.get(position - 1) {
                Some(item) => bookmark_commands::add(services, item)?,
                None => eprintln!("No result at position {}", position),
            }
        }
    }
    Ok(())
}

fn show_results(services: &ServiceContainer, results: &SearchResults, no_color: bool) {
    if results.is_empty() {
        eprintln!("No results for '{}'", results.query);
        return;
    }
    let items: Vec<DisplayItem> = results
        .iter()
        .map(|r| {
            let bookmarked = services
                .bookmark_store
                .is_bookmarked(r.link(), r.resource_type());
            DisplayItem::from_search_result(r, bookmarked)
        })
        .collect();
    show_items(&items, no_color);
}

pub fn categories() -> CliResult<()> {
    for category in Category::ALL {
        println!("{}", category);
    }
    Ok(())
}
