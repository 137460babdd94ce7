//! Terminal progress reporter with styled output and a resolve spinner

use crate::cli::style::{Stylize, arrow, check, cross, spinner_style};
use anstream::{print, println};
use async_trait::async_trait;
use indicatif::ProgressBar;
use jj_bookmark_sync::sync::{BookmarkStatus, Phase, ProgressCallback};
use std::io::{IsTerminal, Write};
use std::sync::Mutex;
use std::time::Duration;

/// Prints every sync step to stdout
pub struct CliProgress {
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
}

impl CliProgress {
    /// Spinner only when stderr (where indicatif draws) is a terminal
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            show_spinner: std::io::stderr().is_terminal(),
        }
    }

    fn start_spinner(&self, message: String) {
        if !self.show_spinner {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(80));
        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(spinner);
        }
    }

    fn stop_spinner(&self) {
        if let Some(spinner) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            spinner.finish_and_clear();
        }
    }
}

impl Drop for CliProgress {
    // A failed resolve never reaches `on_candidates`; clear the line before
    // the error is printed.
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        if phase == Phase::Resolving {
            self.start_spinner(format!("{phase}..."));
        }
    }

    async fn on_top_branch(&self, branch: &str) {
        println!("Current branch (TOP_OF_STACK): {}", branch.accent());
    }

    async fn on_uncommitted_changes(&self) {
        println!();
        println!(
            "{}",
            "Uncommitted changes detected in working copy."
                .warn()
                .for_stdout()
        );
    }

    async fn on_new_revision(&self, dry_run: bool) {
        if dry_run {
            println!(
                "{}",
                "[Dry run] Would create new revision with uncommitted changes."
                    .warn()
                    .for_stdout()
            );
        } else {
            println!("Creating new revision with uncommitted changes...");
        }
    }

    async fn on_uncommitted_handled(&self) {
        println!();
    }

    async fn on_nothing_to_do(&self, base: &str) {
        self.stop_spinner();
        println!("No intermediate branches found between TOP_OF_STACK and '{base}'.");
    }

    async fn on_candidates(&self, names: &[String]) {
        self.stop_spinner();
        println!();
        println!(
            "{}",
            "The following bookmarks are suggested for creation:".emphasis()
        );
        for name in names {
            println!("  - {}", name.accent());
        }
        println!();
    }

    async fn on_bookmark(&self, name: &str, status: BookmarkStatus) {
        match status {
            BookmarkStatus::Started => {
                print!(
                    "{} Creating Jujutsu bookmark for branch: {}",
                    arrow(),
                    name.accent()
                );
                let _ = std::io::stdout().flush();
            }
            BookmarkStatus::Success => println!(" {}", check()),
            BookmarkStatus::Unchecked => println!(" {}", cross().for_stdout()),
        }
    }

    async fn on_batch_complete(&self, _count: usize) {
        println!("{}", "All bookmarks created.".success());
    }

    async fn on_declined(&self) {
        println!("No bookmarks were created.");
    }

    async fn on_dry_run(&self) {
        println!(
            "{}",
            "Dry run mode enabled. No bookmarks were created."
                .warn()
                .for_stdout()
        );
    }
}
