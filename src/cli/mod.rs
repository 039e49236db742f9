// src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::infrastructure::di::ServiceContainer;

pub mod args;
pub mod bookmark_commands;
pub mod completion;
pub mod display;
pub mod error;
pub mod search_commands;
pub mod task_commands;

pub fn execute_command(cli: Cli, services: &mut ServiceContainer) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }
    let no_color = cli.no_color;
    match cli.command {
        Some(Commands::Search {
            query,
            category,
            bookmark,
            is_json,
        }) => search_commands::search(services, query, category, bookmark, is_json, no_color),
        Some(Commands::Categories) => search_commands::categories(),
        Some(Commands::Bookmarks(command)) => {
            bookmark_commands::execute(command, services, no_color)
        }
        Some(Commands::Tasks(command)) => task_commands::execute(command, services, no_color),
        Some(Commands::Goal { goal }) => handle_goal(services, goal),
        Some(Commands::Completion { shell }) => handle_completion(shell),
        None => Ok(()),
    }
}

fn handle_goal(services: &ServiceContainer, goal: Option<String>) -> CliResult<()> {
    match goal {
        Some(text) => {
            if !services.daily_goal.set(&text)? {
                return Err(CliError::InvalidInput(
                    "Goal must not be empty".to_string(),
                ));
            }
            Ok(())
        }
        None => {
            match services.daily_goal.get() {
                Some(goal) => println!("{}", goal),
                None => eprintln!("No daily goal set"),
            }
            Ok(())
        }
    }
}

fn handle_completion(shell: String) -> CliResult<()> {
    match shell.to_lowercase().as_str() {
        "bash" => {
            eprintln!("# Outputting bash completion script for learnify");
            eprintln!("# To use, run one of:");
            eprintln!("# - eval \"$(learnify completion bash)\"        # one-time use");
            eprintln!("# - learnify completion bash >> ~/.bashrc       # add to bashrc");
            eprintln!("#");
        }
        "zsh" => {
            eprintln!("# Outputting zsh completion script for learnify");
            eprintln!("# To use, run one of:");
            eprintln!("# - eval \"$(learnify completion zsh)\"         # one-time use");
            eprintln!("# - learnify completion zsh > ~/.zfunc/_learnify # save to fpath directory");
            eprintln!("#");
        }
        "fish" => {
            eprintln!("# Outputting fish completion script for learnify");
            eprintln!("# - learnify completion fish | source           # one-time use");
            eprintln!("#");
        }
        _ => {}
    }

    match completion::generate_completion(&shell) {
        Ok(_) => Ok(()),
        Err(e) => Err(CliError::CommandFailed(format!(
            "Failed to generate completion script: {}",
            e
        ))),
    }
}
