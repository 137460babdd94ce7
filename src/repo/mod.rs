//! Access to the git repository and its jj overlay
//!
//! Both tools are driven as subprocesses. Every operation takes an explicit
//! [`ExecContext`] naming the working directory and the programs to run.

mod git;
mod jj;
mod runner;

pub use git::{
    branches_containing, commit_chain, current_branch, parse_branch_list, parse_commit_chain,
};
pub use jj::{
    NO_CHANGES_MARKER, NOT_A_REPO_MARKER, PENDING_CHANGES_MARKER, check_repo, create_bookmark,
    create_new_revision, has_pending_changes, has_uncommitted_changes,
};
pub use runner::{CommandOutput, CommandRunner, SystemRunner, Tool, default_program};

use crate::error::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Where and how the external tools are run
#[derive(Clone)]
pub struct ExecContext {
    /// Directory every tool is run in
    pub workdir: PathBuf,
    /// Program used for git
    pub git: PathBuf,
    /// Program used for jj
    pub jj: PathBuf,
    runner: Arc<dyn CommandRunner>,
}

impl ExecContext {
    /// Context running the real `git` and `jj` from `PATH` inside `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self::with_runner(workdir, Arc::new(SystemRunner))
    }

    /// Context using a custom runner
    pub fn with_runner(workdir: impl Into<PathBuf>, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            workdir: workdir.into(),
            git: default_program(Tool::Git),
            jj: default_program(Tool::Jj),
            runner,
        }
    }

    /// Override the git program
    #[must_use]
    pub fn git_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.git = program.into();
        self
    }

    /// Override the jj program
    #[must_use]
    pub fn jj_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.jj = program.into();
        self
    }

    /// Run a tool inside the working directory
    pub async fn run(&self, tool: Tool, args: &[&str]) -> Result<CommandOutput> {
        let program = match tool {
            Tool::Git => &self.git,
            Tool::Jj => &self.jj,
        };
        self.runner.run(tool, program, args, &self.workdir).await
    }
}

impl std::fmt::Debug for ExecContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecContext")
            .field("workdir", &self.workdir)
            .field("git", &self.git)
            .field("jj", &self.jj)
            .finish_non_exhaustive()
    }
}
