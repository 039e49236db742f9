// src/cli/completion.rs
use crate::cli::args::Cli;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;
use tracing::{debug, instrument};

const SUPPORTED: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];

fn parse_shell(name: &str) -> Option<Shell> {
    let name = name.to_lowercase();
    SUPPORTED
        .into_iter()
        .find(|shell| shell.to_string() == name)
}

/// Writes the completion script for `shell` (bash, zsh or fish) to stdout.
///
/// ```bash
/// eval "$(learnify completion bash)"
/// ```
#[instrument(level = "debug")]
pub fn generate_completion(shell: &str) -> io::Result<()> {
    let target = parse_shell(shell).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Unsupported shell: {}. Supported shells: bash, zsh, fish",
                shell
            ),
        )
    })?;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    debug!("Generating {} completion for {}", target, bin_name);
    generate(target, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_mixed_case_name_when_parse_shell_then_found() {
        assert_eq!(parse_shell("ZSH"), Some(Shell::Zsh));
        assert_eq!(parse_shell("powershell"), None);
    }

    #[test]
    fn given_unknown_shell_when_generate_then_invalid_input() {
        let err = generate_completion("tcsh").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
