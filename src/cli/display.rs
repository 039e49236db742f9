// src/cli/display.rs
use crate::domain::bookmark::Bookmark;
use crate::domain::search::{Category, ResourceType, SearchResult};
use crate::domain::task::Task;
use crate::util::helper::{is_stderr_piped, truncate};
use itertools::Itertools;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const DESCRIPTION_WIDTH: usize = 100;

/// Flattened view of a search result or bookmark for terminal listing
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub id: String,
    pub resource_type: ResourceType,
    pub title: String,
    pub link: String,
    pub description: String,
    /// Channel for videos, site for documentation
    pub source: Option<String>,
    pub bookmarked: bool,
}

impl DisplayItem {
    pub fn from_search_result(item: &SearchResult, bookmarked: bool) -> Self {
        let source = match item {
            SearchResult::Video(v) => v.channel.clone(),
            SearchResult::Documentation(d) => d.site.clone(),
        };
        Self {
            id: item.id().to_string(),
            resource_type: item.resource_type(),
            title: item.title().to_string(),
            link: item.link().to_string(),
            description: item.description().unwrap_or_default().to_string(),
            source,
            bookmarked,
        }
    }

    pub fn from_bookmark(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id.clone(),
            resource_type: bookmark.resource_type,
            title: bookmark.display_title().to_string(),
            link: bookmark.link.clone(),
            description: bookmark.description.clone().unwrap_or_default(),
            source: bookmark
                .channel
                .clone()
                .or_else(|| bookmark.site.clone()),
            bookmarked: true,
        }
    }
}

fn color_choice(no_color: bool) -> ColorChoice {
    if no_color || is_stderr_piped() {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

fn set_fg(stderr: &mut StandardStream, color: Color) {
    if let Err(e) = stderr.set_color(ColorSpec::new().set_fg(Some(color))) {
        eprintln!("Error setting color: {}", e);
    }
}

/// Numbered listing on stderr; positions are what `search --bookmark` refers to
pub fn show_items(items: &[DisplayItem], no_color: bool) {
    if items.is_empty() {
        eprintln!("Nothing to display");
        return;
    }

    let mut stderr = StandardStream::stderr(color_choice(no_color));
    let first_col_width = items.len().to_string().len();

    for (i, item) in items.iter().enumerate() {
        set_fg(&mut stderr, Color::Green);
        let marker = if item.bookmarked { "★ " } else { "" };
        if let Err(e) = write!(
            &mut stderr,
            "{:first_col_width$}. {}{}",
            i + 1,
            marker,
            item.title
        ) {
            eprintln!("Error writing to stderr: {}", e);
        }

        set_fg(&mut stderr, Color::White);
        if let Err(e) = writeln!(&mut stderr, " [{}: {}]", item.resource_type, item.id) {
            eprintln!("Error writing to stderr: {}", e);
        }

        set_fg(&mut stderr, Color::Yellow);
        if let Err(e) = writeln!(&mut stderr, "{:first_col_width$}  {}", "", item.link) {
            eprintln!("Error writing to stderr: {}", e);
        }

        if !item.description.is_empty() {
            set_fg(&mut stderr, Color::White);
            if let Err(e) = writeln!(
                &mut stderr,
                "{:first_col_width$}  {}",
                "",
                truncate(&item.description, DESCRIPTION_WIDTH)
            ) {
                eprintln!("Error writing to stderr: {}", e);
            }
        }

        if let Some(source) = &item.source {
            set_fg(&mut stderr, Color::Blue);
            if let Err(e) = writeln!(&mut stderr, "{:first_col_width$}  {}", "", source) {
                eprintln!("Error writing to stderr: {}", e);
            }
        }

        if let Err(e) = stderr.reset() {
            eprintln!("Error resetting color: {}", e);
        }
        if let Err(e) = writeln!(&mut stderr) {
            eprintln!("Error writing to stderr: {}", e);
        }
    }
}

pub fn show_tasks(tasks: &[&Task], no_color: bool) {
    if tasks.is_empty() {
        eprintln!("No tasks to display");
        return;
    }

    let mut stderr = StandardStream::stderr(color_choice(no_color));
    let first_col_width = tasks.len().to_string().len();

    for (i, task) in tasks.iter().enumerate() {
        let (check, color) = if task.completed {
            ("[x]", Color::Green)
        } else {
            ("[ ]", Color::Yellow)
        };
        set_fg(&mut stderr, color);
        if let Err(e) = write!(
            &mut stderr,
            "{:first_col_width$}. {} {}",
            i + 1,
            check,
            task.text
        ) {
            eprintln!("Error writing to stderr: {}", e);
        }
        set_fg(&mut stderr, Color::White);
        if let Err(e) = writeln!(&mut stderr, " [{}]", task.id) {
            eprintln!("Error writing to stderr: {}", e);
        }
    }

    if let Err(e) = stderr.reset() {
        eprintln!("Error resetting color: {}", e);
    }
}

/// Category names, one line, comma separated
pub fn format_categories() -> String {
    Category::ALL.iter().map(|c| c.name()).join(", ")
}
