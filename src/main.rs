//! jj-bookmark-sync - mirror stacked git branches as Jujutsu bookmarks
//!
//! CLI binary that sets a jj bookmark for every git branch between the
//! current branch and a base branch.

use anyhow::Result;
use clap::Parser;
use jj_bookmark_sync::repo::ExecContext;
use jj_bookmark_sync::sync::SyncOptions;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

const EXAMPLES: &str = "\
Examples:
  jj-bookmark-sync                    Create bookmarks for the current branch
  jj-bookmark-sync --base develop     Use 'develop' as the base branch instead of 'main'
  jj-bookmark-sync --yes              Auto-confirm bookmark creation";

#[derive(Parser)]
#[command(name = "jj-bookmark-sync")]
#[command(
    about = "Create Jujutsu bookmarks for intermediate Git branches between the current branch and main."
)]
#[command(version, after_help = EXAMPLES)]
struct Cli {
    /// Base branch to compare against
    #[arg(long, default_value = "main")]
    base: String,

    /// Show which bookmarks would be created without actually creating them
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Automatically confirm bookmark creation without prompting
    #[arg(short, long)]
    yes: bool,

    /// Path to the repository (defaults to current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// git executable
    #[arg(long, env = "JJ_BOOKMARK_SYNC_GIT", default_value = "git", hide = true)]
    git: PathBuf,

    /// jj executable
    #[arg(long, env = "JJ_BOOKMARK_SYNC_JJ", default_value = "jj", hide = true)]
    jj: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let ctx = ExecContext::new(path).git_program(cli.git).jj_program(cli.jj);
    let options = SyncOptions {
        base: cli.base,
        dry_run: cli.dry_run,
    };

    Ok(cli::run_sync(&ctx, &options, cli.yes).await?)
}
