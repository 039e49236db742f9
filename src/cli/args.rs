// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Learning resources for the terminal: search, bookmark, plan
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[arg(long = "no-color", help = "disable colored output")]
    pub no_color: bool,

    #[arg(long = "ephemeral", help = "keep everything in memory, write nothing to disk")]
    pub ephemeral: bool,

    #[arg(long = "generate-config", help = "print the default configuration as TOML")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search videos and documentation
    Search {
        /// Free-text topic, e.g. "rust ownership"
        query: Option<String>,

        #[arg(
            short = 'c',
            long = "category",
            help = "search a category instead, e.g. web-development, ai-ml"
        )]
        category: Option<String>,

        #[arg(
            short = 'b',
            long = "bookmark",
            help = "bookmark results by position, comma separated, e.g. 1,4"
        )]
        bookmark: Option<String>,

        #[arg(long = "json", help = "output results as json")]
        is_json: bool,
    },
    /// List the browse categories
    Categories,
    /// Manage bookmarks
    #[command(subcommand)]
    Bookmarks(BookmarkCommands),
    /// Manage the to-do list
    #[command(subcommand)]
    Tasks(TaskCommands),
    /// Show or set the daily learning goal
    Goal {
        /// New goal; omit to show the current one
        goal: Option<String>,
    },
    /// Generate shell completion scripts (bash, zsh, fish)
    Completion {
        /// Shell to generate completions for
        shell: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum BookmarkCommands {
    /// List saved bookmarks in insertion order
    List {
        #[arg(short = 't', long = "type", help = "only video or documentation")]
        resource_type: Option<String>,
        #[arg(long = "json", help = "output as json")]
        is_json: bool,
    },
    /// Bookmark a resource by hand
    Add {
        /// Resource link
        link: String,
        #[arg(short = 't', long = "type", default_value = "video")]
        resource_type: String,
        #[arg(long = "title")]
        title: Option<String>,
        #[arg(short = 'd', long = "description")]
        description: Option<String>,
        #[arg(long = "channel", help = "video channel")]
        channel: Option<String>,
        #[arg(long = "site", help = "documentation site")]
        site: Option<String>,
    },
    /// Remove a bookmark by id
    Remove { id: String },
    /// Open a bookmark in the browser
    Open { id: String },
    /// Remove all bookmarks
    Clear {
        #[arg(short = 'y', long = "yes", help = "do not ask for confirmation")]
        yes: bool,
    },
    /// Counts by resource type
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// List tasks
    List {
        #[arg(
            short = 'f',
            long = "filter",
            default_value = "all",
            help = "all, completed or incomplete"
        )]
        filter: String,
        #[arg(long = "json", help = "output as json")]
        is_json: bool,
    },
    /// Add a task
    Add { text: String },
    /// Flip a task between done and open
    Toggle { id: String },
    /// Replace a task's text
    Edit { id: String, text: String },
    /// Delete a task
    Remove { id: String },
    /// Total, completed and remaining counts
    Stats,
}
