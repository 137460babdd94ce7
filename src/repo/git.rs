//! Git queries: current branch, commit chain, branch containment
//!
//! None of these inspect the exit status. Whatever git prints is used as-is,
//! so a bad ref yields an empty (or odd) result rather than an error.

use crate::error::Result;
use crate::repo::{ExecContext, Tool};
use tracing::debug;

/// Name of the branch currently checked out
///
/// Output of `git rev-parse --abbrev-ref HEAD`, trimmed. Not validated: a
/// detached head comes back as `HEAD`.
pub async fn current_branch(ctx: &ExecContext) -> Result<String> {
    let args = ["rev-parse", "--abbrev-ref", "HEAD"];
    let stdout = ctx
        .run(Tool::Git, &args)
        .await?
        .into_stdout_unchecked(Tool::Git, &args);
    Ok(stdout.trim().to_string())
}

/// Commits reachable from `top` but not from `base`, newest first
pub async fn commit_chain(ctx: &ExecContext, top: &str, base: &str) -> Result<Vec<String>> {
    let args = ["rev-list", top, "--not", base];
    let stdout = ctx
        .run(Tool::Git, &args)
        .await?
        .into_stdout_unchecked(Tool::Git, &args);
    let chain = parse_commit_chain(&stdout);
    debug!("{} commit(s) between {base} and {top}", chain.len());
    Ok(chain)
}

/// Branches containing `commit`, with the checked-out marker removed
pub async fn branches_containing(ctx: &ExecContext, commit: &str) -> Result<Vec<String>> {
    let args = ["branch", "--contains", commit];
    let stdout = ctx
        .run(Tool::Git, &args)
        .await?
        .into_stdout_unchecked(Tool::Git, &args);
    Ok(parse_branch_list(&stdout))
}

/// Parse `git rev-list` output into commit ids
pub fn parse_commit_chain(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parse `git branch` output into bare branch names
///
/// Every line starts with a two-column marker: `* ` for the current branch,
/// `+ ` for one checked out in another worktree, two spaces otherwise. Only
/// that column is removed, so names like `+wip` or `(wip)` survive intact.
/// Detached-head entries such as `* (HEAD detached at 1a2b3c4)` are not
/// branches and are dropped.
pub fn parse_branch_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(strip_marker)
        .filter(|name| !name.is_empty() && !is_detached_entry(name))
        .map(ToString::to_string)
        .collect()
}

fn strip_marker(line: &str) -> &str {
    ["* ", "+ ", "  "]
        .iter()
        .find_map(|marker| line.strip_prefix(*marker))
        .unwrap_or(line)
        .trim_end()
}

fn is_detached_entry(name: &str) -> bool {
    name.starts_with("(HEAD detached ") || name.starts_with("(no branch")
}
