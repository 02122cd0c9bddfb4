use clap::{Parser, Subcommand};
use clap_complete::Shell;
use sizechart::cmd;
use std::process;

/// Release artifact size report generator
///
/// sizechart turns a GitHub release's artifact list into per-platform
/// size charts and a JSON summary, showing what each optional backend
/// adds on top of the baseline build.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a size report for a release
    Report {
        /// Release tag to analyze (falls back to RELEASE_TAG)
        #[arg(short, long)]
        tag: Option<String>,

        /// Repository in owner/name form (falls back to GITHUB_REPOSITORY)
        #[arg(short, long)]
        repo: Option<String>,

        /// Chart layout: combined, split
        #[arg(short, long)]
        layout: Option<String>,

        /// Directory the report files are written to
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<String>,

        /// Read release JSON from a file instead of calling gh
        #[arg(long, value_name = "FILE")]
        from: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let result = match &cli.command {
        Some(Commands::Report {
            tag,
            repo,
            layout,
            out_dir,
            from,
        }) => cmd::cmd_report(
            tag.as_deref(),
            repo.as_deref(),
            layout.as_deref(),
            out_dir.as_deref(),
            from.as_deref(),
        ),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("sizechart v{}", env!("CARGO_PKG_VERSION"));
            println!("Release artifact size report generator\n");
            println!("Usage: sizechart <COMMAND>\n");
            println!("Commands:");
            println!("  report       Generate a size report for a release");
            println!("  completions  Generate shell completions");
            println!("\nRun 'sizechart <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use sizechart::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
