//! Sync command - create bookmarks for the branches under the current one

use crate::cli::progress::CliProgress;
use crate::cli::prompt::TerminalPrompt;
use crate::cli::style::Stylize;
use anstream::eprintln;
use jj_bookmark_sync::error::{Error, Result};
use jj_bookmark_sync::prompt::{AutoConfirm, Prompt};
use jj_bookmark_sync::repo::ExecContext;
use jj_bookmark_sync::sync::{SyncOptions, SyncOutcome, run_bookmark_sync};
use std::process::ExitCode;
use tracing::debug;

/// Run the sync against `ctx`
///
/// Precondition failures are printed here and turned into a failing exit
/// code; anything else is returned to `main`.
pub async fn run_sync(ctx: &ExecContext, options: &SyncOptions, yes: bool) -> Result<ExitCode> {
    let prompt: Box<dyn Prompt> = if yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(TerminalPrompt)
    };
    let progress = CliProgress::new();

    match run_bookmark_sync(ctx, options, prompt.as_ref(), &progress).await {
        Ok(outcome) => {
            // A failed `jj bookmark set` still counts as success, as it
            // always has; the runner already logged it.
            if let SyncOutcome::Created(result) = &outcome {
                debug!(
                    "{} bookmark(s) set, {} unchecked",
                    result.created.len(),
                    result.unchecked.len()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_precondition() => {
            report_precondition(&err);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err),
    }
}

fn report_precondition(err: &Error) {
    match err {
        // Already reads "Error running jj: ..."
        Error::Jj(_) => eprintln!("{}", err.error()),
        _ => eprintln!("{}: {err}", "error".error()),
    }
    if matches!(err, Error::NotJjRepo) {
        eprintln!();
        eprintln!("To initialize Jujutsu for this Git repository, run:");
        eprintln!("  {}", "jj git init --colocate".accent().for_stderr());
        eprintln!();
        eprintln!(
            "{}",
            "Note: Use --colocate to work alongside Git in the same directory."
                .muted()
                .for_stderr()
        );
    }
}
