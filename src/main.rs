// src/main.rs
use crossterm::style::Stylize;
use learnify::cli::args::Cli;
use learnify::config::{load_settings, Settings};
use learnify::infrastructure::di::ServiceContainer;
use learnify::util::helper::is_stderr_piped;
use learnify::{cli, exitcode};
use clap::Parser;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::{filter_fn, LevelFilter},
    fmt::{self, format::FmtSpan},
    prelude::*,
};

#[instrument]
fn main() {
    // stderr carries human output so stdout stays pipeable
    let cli = Cli::parse();
    let no_color = cli.no_color;

    setup_logging(cli.debug, no_color);

    let settings = load_settings(cli.config.as_deref()).unwrap_or_else(|e| {
        debug!("Failed to load settings: {}. Using defaults.", e);
        Settings::default()
    });

    let color = !no_color && !is_stderr_piped();
    let mut services = if cli.ephemeral {
        debug!("Ephemeral mode, nothing is written to disk");
        ServiceContainer::ephemeral(&settings, color)
    } else {
        ServiceContainer::new(&settings, color)
    };
    debug!("{:?}", services);

    if let Err(e) = cli::execute_command(cli, &mut services) {
        let message = format!("Error: {}", e);
        if !color {
            eprintln!("{}", message);
        } else {
            eprintln!("{}", message.red());
        }
        std::process::exit(e.exit_code());
    }
    std::process::exit(exitcode::SUCCESS);
}

fn setup_logging(verbosity: u8, no_color: bool) {
    debug!("INIT: Attempting logger init from main.rs");

    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Create a noisy module filter
    let noisy_modules = ["reqwest", "hyper", "hyper_util", "rustls", "mio", "want", "h2"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(!no_color)
        .with_thread_names(false)
        .with_span_events(FmtSpan::ENTER)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}
