//! Scenario builders and recording fakes
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use super::mock_runner::MockRunner;
use async_trait::async_trait;
use jj_bookmark_sync::error::Result;
use jj_bookmark_sync::prompt::Prompt;
use jj_bookmark_sync::repo::{CommandOutput, ExecContext, Tool};
use jj_bookmark_sync::sync::{BookmarkStatus, Phase, ProgressCallback};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// `jj status` text for a clean working copy
pub const CLEAN_STATUS: &str = "The working copy has no changes.\nWorking copy : kxqpyvmn 1a2b3c4d (empty) (no description set)\nParent commit: zzzzzzzz 00000000 feature-c\n";

/// `jj status` text for a dirty working copy
pub const DIRTY_STATUS: &str = "Working copy changes:\nM src/lib.rs\nA notes.txt\nWorking copy : kxqpyvmn 1a2b3c4d (no description set)\nParent commit: zzzzzzzz 00000000 feature-c\n";

/// Commit id used for the tip of `name`
pub fn commit_of(name: &str) -> String {
    format!("{name}_commit")
}

/// Context over a fresh mock runner
pub fn mock_context() -> (ExecContext, Arc<MockRunner>) {
    let runner = Arc::new(MockRunner::new());
    let ctx = ExecContext::with_runner("/repo", runner.clone());
    (ctx, runner)
}

/// Script a linear stack: `base <- stack[0] <- stack[1] <- ... <- top`
///
/// Each branch has one commit at its tip. The last entry is checked out.
pub fn script_linear_stack(runner: &MockRunner, base: &str, stack: &[&str], status: &str) {
    let top = *stack.last().expect("stack must not be empty");

    runner.respond(Tool::Jj, &["status"], CommandOutput::ok(status));
    runner.respond(
        Tool::Git,
        &["rev-parse", "--abbrev-ref", "HEAD"],
        CommandOutput::ok(format!("{top}\n")),
    );

    let chain: Vec<String> = stack.iter().rev().map(|n| commit_of(n)).collect();
    runner.respond(
        Tool::Git,
        &["rev-list", top, "--not", base],
        CommandOutput::ok(format!("{}\n", chain.join("\n"))),
    );

    for (i, name) in stack.iter().enumerate() {
        let mut containing: Vec<&str> = stack[i..].to_vec();
        containing.sort_unstable();
        let listing: String = containing
            .iter()
            .map(|b| {
                if *b == top {
                    format!("* {b}\n")
                } else {
                    format!("  {b}\n")
                }
            })
            .collect();
        let commit = commit_of(name);
        runner.respond(
            Tool::Git,
            &["branch", "--contains", commit.as_str()],
            CommandOutput::ok(listing),
        );
    }
}

/// Script a checkout of `branch` with nothing ahead of `base`
pub fn script_no_commits_ahead(runner: &MockRunner, branch: &str, base: &str) {
    runner.respond(Tool::Jj, &["status"], CommandOutput::ok(CLEAN_STATUS));
    runner.respond(
        Tool::Git,
        &["rev-parse", "--abbrev-ref", "HEAD"],
        CommandOutput::ok(format!("{branch}\n")),
    );
    runner.respond(
        Tool::Git,
        &["rev-list", branch, "--not", base],
        CommandOutput::ok(""),
    );
}

/// Prompt returning canned answers in order, recording the questions
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<bool>>,
    questions: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn new(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            questions: Mutex::new(Vec::new()),
        }
    }

    /// Answer yes to every question
    pub fn always_yes() -> Self {
        Self::new(&[true; 8])
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Prompt for ScriptedPrompt {
    async fn confirm(&self, question: &str) -> Result<bool> {
        self.questions.lock().unwrap().push(question.to_string());
        Ok(self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .expect("prompt asked more questions than scripted"))
    }
}

/// Progress callback recording events as strings
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn has(&self, event: &str) -> bool {
        self.events().iter().any(|e| e == event)
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl ProgressCallback for RecordingProgress {
    async fn on_phase(&self, phase: Phase) {
        self.push(format!("phase:{phase:?}"));
    }
    async fn on_top_branch(&self, branch: &str) {
        self.push(format!("top:{branch}"));
    }
    async fn on_uncommitted_changes(&self) {
        self.push("uncommitted".to_string());
    }
    async fn on_new_revision(&self, dry_run: bool) {
        self.push(format!("new_revision:dry_run={dry_run}"));
    }
    async fn on_uncommitted_handled(&self) {
        self.push("uncommitted_handled".to_string());
    }
    async fn on_nothing_to_do(&self, base: &str) {
        self.push(format!("nothing_to_do:{base}"));
    }
    async fn on_candidates(&self, names: &[String]) {
        self.push(format!("candidates:{}", names.join(",")));
    }
    async fn on_bookmark(&self, name: &str, status: BookmarkStatus) {
        self.push(format!("bookmark:{name}:{status:?}"));
    }
    async fn on_batch_complete(&self, count: usize) {
        self.push(format!("batch_complete:{count}"));
    }
    async fn on_declined(&self) {
        self.push("declined".to_string());
    }
    async fn on_dry_run(&self) {
        self.push("dry_run".to_string());
    }
}
