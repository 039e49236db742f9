// src/cli/task_commands.rs
use crate::application::services::task_store::EditOutcome;
use crate::cli::args::TaskCommands;
use crate::cli::display::show_tasks;
use crate::cli::error::{CliError, CliResult};
use crate::domain::task::TaskFilter;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::json::write_json;
use std::str::FromStr;
use tracing::{debug, instrument};

pub fn execute(
    command: TaskCommands,
    services: &mut ServiceContainer,
    no_color: bool,
) -> CliResult<()> {
    match command {
        TaskCommands::List { filter, is_json } => list(services, &filter, is_json, no_color),
        TaskCommands::Add { text } => add(services, &text),
        TaskCommands::Toggle { id } => toggle(services, &id),
        TaskCommands::Edit { id, text } => edit(services, &id, &text),
        TaskCommands::Remove { id } => remove(services, &id),
        TaskCommands::Stats => stats(services),
    }
}

fn ensure_exists(services: &ServiceContainer, id: &str) -> CliResult<()> {
    match services.task_store.get(id) {
        Some(_) => Ok(()),
        None => Err(CliError::InvalidInput(format!("Task {} not found", id))),
    }
}

#[instrument(skip(services), level = "debug")]
fn list(services: &ServiceContainer, filter: &str, is_json: bool, no_color: bool) -> CliResult<()> {
    let filter = TaskFilter::from_str(filter)?;
    let tasks = services.task_store.filter(filter);

    if is_json {
        write_json(&tasks)?;
    } else {
        show_tasks(&tasks, no_color);
    }
    Ok(())
}

fn add(services: &mut ServiceContainer, text: &str) -> CliResult<()> {
    match services.task_store.add(text)? {
        Some(task) => {
            println!("{}", task.id);
            Ok(())
        }
        None => Err(CliError::InvalidInput("Task text must not be empty".to_string())),
    }
}

fn toggle(services: &mut ServiceContainer, id: &str) -> CliResult<()> {
    ensure_exists(services, id)?;
    if let Some(completed) = services.task_store.toggle(id)? {
        debug!("Task {} completed: {}", id, completed);
    }
    Ok(())
}

/// Runs a full edit session: open, replace the draft, commit
fn edit(services: &mut ServiceContainer, id: &str, text: &str) -> CliResult<()> {
    if !services.task_store.begin_edit(id) {
        return Err(CliError::InvalidInput(format!("Task {} not found", id)));
    }
    services.task_store.update_draft(text);

    match services.task_store.commit_current_edit()? {
        Some(EditOutcome::Updated(task)) => {
            debug!("Updated task {}", task.id);
            Ok(())
        }
        Some(EditOutcome::Abandoned) => {
            services.task_store.cancel_edit();
            eprintln!("Empty text, task left unchanged");
            Ok(())
        }
        Some(EditOutcome::NotFound) | None => {
            Err(CliError::InvalidInput(format!("Task {} not found", id)))
        }
    }
}

fn remove(services: &mut ServiceContainer, id: &str) -> CliResult<()> {
    ensure_exists(services, id)?;
    services.task_store.remove(id)?;
    Ok(())
}

fn stats(services: &ServiceContainer) -> CliResult<()> {
    let stats = services.task_store.stats();
    println!(
        "total: {}, completed: {}, remaining: {}",
        stats.total, stats.completed, stats.incomplete
    );
    Ok(())
}
