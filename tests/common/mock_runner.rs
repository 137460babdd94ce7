//! Mock command runner for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use jj_bookmark_sync::error::{Error, Result};
use jj_bookmark_sync::repo::{CommandOutput, CommandRunner, Tool};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Call record for one tool invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCall {
    pub tool: Tool,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl RunCall {
    /// `jj new` or `jj bookmark ...`
    pub fn is_mutating(&self) -> bool {
        self.tool == Tool::Jj
            && matches!(self.args.first().map(String::as_str), Some("new" | "bookmark"))
    }

    pub fn command_line(&self) -> String {
        format!("{} {}", self.tool, self.args.join(" "))
    }
}

/// Scripted command runner
///
/// Features:
/// - Responses keyed by tool + exact argument list
/// - Unknown commands succeed with empty output
/// - Call tracking for verification
/// - Spawn-failure injection per tool
pub struct MockRunner {
    responses: Mutex<HashMap<(Tool, String), CommandOutput>>,
    calls: Mutex<Vec<RunCall>>,
    spawn_failures: Mutex<Vec<Tool>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            spawn_failures: Mutex::new(Vec::new()),
        }
    }

    // === Response setup ===

    /// Set the output for `tool args...`
    pub fn respond(&self, tool: Tool, args: &[&str], output: CommandOutput) {
        self.responses
            .lock()
            .unwrap()
            .insert((tool, args.join(" ")), output);
    }

    /// Make every invocation of `tool` fail to spawn
    pub fn fail_spawn(&self, tool: Tool) {
        self.spawn_failures.lock().unwrap().push(tool);
    }

    // === Call verification ===

    pub fn calls(&self) -> Vec<RunCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(RunCall::command_line).collect()
    }

    pub fn mutating_calls(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter(|c| c.is_mutating())
            .map(RunCall::command_line)
            .collect()
    }

    /// Names passed to `jj bookmark set`, in call order
    pub fn bookmark_set_names(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter(|c| {
                c.tool == Tool::Jj && c.args.len() > 2 && c.args[0] == "bookmark" && c.args[1] == "set"
            })
            .map(|c| c.args[2].clone())
            .collect()
    }

    pub fn count(&self, tool: Tool, args: &[&str]) -> usize {
        let wanted: Vec<String> = args.iter().map(ToString::to_string).collect();
        self.calls()
            .iter()
            .filter(|c| c.tool == tool && c.args == wanted)
            .count()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(
        &self,
        tool: Tool,
        _program: &Path,
        args: &[&str],
        cwd: &Path,
    ) -> Result<CommandOutput> {
        self.calls.lock().unwrap().push(RunCall {
            tool,
            args: args.iter().map(ToString::to_string).collect(),
            cwd: cwd.to_path_buf(),
        });

        if self.spawn_failures.lock().unwrap().contains(&tool) {
            return Err(Error::Spawn {
                tool,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            });
        }

        let responses = self.responses.lock().unwrap();
        Ok(responses
            .get(&(tool, args.join(" ")))
            .cloned()
            .unwrap_or_else(|| CommandOutput::ok("")))
    }
}
