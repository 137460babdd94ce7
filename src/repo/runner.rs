//! Subprocess execution for the external VCS tools

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, warn};

/// External tool invoked by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    /// The underlying git repository
    Git,
    /// The Jujutsu overlay
    Jj,
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Git => write!(f, "git"),
            Self::Jj => write!(f, "jj"),
        }
    }
}

/// Captured result of one tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub status: Option<i32>,
    /// Captured stdout (lossy UTF-8)
    pub stdout: String,
    /// Captured stderr (lossy UTF-8)
    pub stderr: String,
}

impl CommandOutput {
    /// Successful output with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output with the given exit code and stderr
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// Whether the tool exited with status 0
    pub const fn success(&self) -> bool {
        matches!(self.status, Some(0))
    }

    /// Take stdout whatever the exit status was.
    ///
    /// Call sites use this to opt in to ignoring a failed invocation. The
    /// failure is logged but control flow is unchanged.
    pub fn into_stdout_unchecked(self, tool: Tool, args: &[&str]) -> String {
        if !self.success() {
            warn!(
                "ignoring failed `{tool} {}` (status {:?}): {}",
                args.join(" "),
                self.status,
                self.stderr.trim()
            );
        }
        self.stdout
    }
}

/// Runs an external tool and captures its output
///
/// Abstracted so the sync engine can be driven against scripted responses.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program args...` inside `cwd`, waiting for it to exit
    async fn run(
        &self,
        tool: Tool,
        program: &Path,
        args: &[&str],
        cwd: &Path,
    ) -> Result<CommandOutput>;
}

/// Runner that spawns real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(
        &self,
        tool: Tool,
        program: &Path,
        args: &[&str],
        cwd: &Path,
    ) -> Result<CommandOutput> {
        debug!("running {} {}", program.display(), args.join(" "));

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .await
            .map_err(|source| Error::Spawn { tool, source })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Default program name for a tool
pub fn default_program(tool: Tool) -> PathBuf {
    PathBuf::from(tool.to_string())
}
