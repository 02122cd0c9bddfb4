//! Completions command implementation
//!
//! Handles the `sizechart completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap_complete::{generate, Shell};

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// sizechart completions bash > /etc/bash_completion.d/sizechart
///
/// # Zsh
/// sizechart completions zsh > ~/.zfunc/_sizechart
///
/// # Fish
/// sizechart completions fish > ~/.config/fish/completions/sizechart.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    // We need to re-create the command structure here since Cli is in main.rs
    // This uses clap's derive API to generate completions
    use clap::{Arg, ArgAction, Command};

    let mut cmd = Command::new("sizechart")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Release artifact size report generator")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("report").about("Generate a size report for a release"))
        .subcommand(Command::new("completions").about("Generate shell completions"));

    let bin_name = "sizechart".to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
}
