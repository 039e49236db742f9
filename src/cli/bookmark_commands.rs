// src/cli/bookmark_commands.rs
use crate::application::services::bookmark_store::AddBookmarkOutcome;
use crate::cli::args::BookmarkCommands;
use crate::cli::display::{show_items, DisplayItem};
use crate::cli::error::{CliError, CliResult};
use crate::domain::search::{DocumentationResult, ResourceType, SearchResult, VideoResult};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::json::write_json;
use crate::util::helper::confirm;
use std::str::FromStr;
use tracing::{debug, instrument};

pub fn execute(
    command: BookmarkCommands,
    services: &mut ServiceContainer,
    no_color: bool,
) -> CliResult<()> {
    match command {
        BookmarkCommands::List {
            resource_type,
            is_json,
        } => list(services, resource_type.as_deref(), is_json, no_color),
        BookmarkCommands::Add {
            link,
            resource_type,
            title,
            description,
            channel,
            site,
        } => {
            let resource_type = ResourceType::from_str(&resource_type)?;
            let item = manual_result(resource_type, link, title, description, channel, site);
            add(services, &item)
        }
        BookmarkCommands::Remove { id } => remove(services, &id),
        BookmarkCommands::Open { id } => open(services, &id),
        BookmarkCommands::Clear { yes } => clear(services, yes),
        BookmarkCommands::Stats => stats(services),
    }
}

#[instrument(skip(services), level = "debug")]
fn list(
    services: &ServiceContainer,
    resource_type: Option<&str>,
    is_json: bool,
    no_color: bool,
) -> CliResult<()> {
    let wanted = resource_type.map(ResourceType::from_str).transpose()?;
    let bookmarks: Vec<_> = services
        .bookmark_store
        .bookmarks()
        .iter()
        .filter(|b| wanted.map_or(true, |t| b.resource_type == t))
        .collect();

    if is_json {
        write_json(&bookmarks)?;
        return Ok(());
    }

    let items: Vec<DisplayItem> = bookmarks
        .iter()
        .map(|b| DisplayItem::from_bookmark(b))
        .collect();
    show_items(&items, no_color);
    Ok(())
}

/// Builds a search result from command line fields so hand-entered
/// resources go through the same deduplication as search hits.
fn manual_result(
    resource_type: ResourceType,
    link: String,
    title: Option<String>,
    description: Option<String>,
    channel: Option<String>,
    site: Option<String>,
) -> SearchResult {
    let title = title.unwrap_or_else(|| link.clone());
    match resource_type {
        ResourceType::Video => SearchResult::Video(VideoResult {
            id: link.clone(),
            title,
            description,
            thumbnail: None,
            channel,
            link,
        }),
        ResourceType::Documentation => SearchResult::Documentation(DocumentationResult {
            id: link.clone(),
            title,
            description,
            site,
            icon: None,
            link,
        }),
    }
}

pub fn add(services: &mut ServiceContainer, item: &SearchResult) -> CliResult<()> {
    match services.bookmark_store.add(item)? {
        AddBookmarkOutcome::Added(bookmark) => {
            debug!("Added bookmark {}", bookmark.id);
            println!("{}", bookmark.id);
        }
        AddBookmarkOutcome::AlreadyBookmarked => {
            debug!("Skipped duplicate {}", item.link());
        }
    }
    Ok(())
}

fn remove(services: &mut ServiceContainer, id: &str) -> CliResult<()> {
    if services.bookmark_store.get(id).is_none() {
        return Err(CliError::InvalidInput(format!("Bookmark {} not found", id)));
    }
    services.bookmark_store.remove(id)?;
    Ok(())
}

fn open(services: &ServiceContainer, id: &str) -> CliResult<()> {
    let bookmark = services
        .bookmark_store
        .get(id)
        .ok_or_else(|| CliError::InvalidInput(format!("Bookmark {} not found", id)))?;

    if bookmark.link.is_empty() || bookmark.link == "#" {
        return Err(CliError::InvalidInput(format!(
            "Bookmark {} has no openable link",
            id
        )));
    }

    open::that(&bookmark.link)
        .map_err(|e| CliError::CommandFailed(format!("Error opening {}: {}", bookmark.link, e)))?;
    eprintln!("Opened: {}", bookmark.link);
    Ok(())
}

fn clear(services: &mut ServiceContainer, yes: bool) -> CliResult<()> {
    let count = services.bookmark_store.bookmarks().len();
    if count == 0 {
        eprintln!("No bookmarks to clear");
        return Ok(());
    }
    if !yes && !confirm(&format!("Remove all {} bookmarks?", count)) {
        return Err(CliError::OperationAborted);
    }
    services.bookmark_store.clear_all()?;
    Ok(())
}

fn stats(services: &ServiceContainer) -> CliResult<()> {
    let stats = services.bookmark_store.stats();
    println!(
        "total: {}, videos: {}, documentation: {}",
        stats.total, stats.videos, stats.documentation
    );
    Ok(())
}
