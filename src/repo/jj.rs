//! Jujutsu operations: repository check, status, new change, bookmark set

use crate::error::{Error, Result};
use crate::repo::{ExecContext, Tool};
use crate::types::BookmarkTarget;
use tracing::debug;

/// Substring of `jj status` output when the working copy has changes
pub const PENDING_CHANGES_MARKER: &str = "Working copy changes:";

/// Substring of `jj status` output when the working copy is clean
pub const NO_CHANGES_MARKER: &str = "No changes.";

/// Substring (lowercased) of `jj` stderr outside a repository
pub const NOT_A_REPO_MARKER: &str = "no jj repo";

/// Verify the working directory is a jj repository
///
/// Fails with [`Error::NotJjRepo`] when jj reports there is no repository,
/// and with [`Error::Jj`] carrying jj's stderr for any other failure.
pub async fn check_repo(ctx: &ExecContext) -> Result<()> {
    let output = ctx.run(Tool::Jj, &["status"]).await?;
    if output.success() {
        return Ok(());
    }

    if output.stderr.to_lowercase().contains(NOT_A_REPO_MARKER) {
        Err(Error::NotJjRepo)
    } else {
        Err(Error::Jj(output.stderr))
    }
}

/// Whether the jj working copy holds uncommitted changes
pub async fn has_uncommitted_changes(ctx: &ExecContext) -> Result<bool> {
    let args = ["status"];
    let stdout = ctx
        .run(Tool::Jj, &args)
        .await?
        .into_stdout_unchecked(Tool::Jj, &args);
    Ok(has_pending_changes(&stdout))
}

/// Decide from `jj status` text whether there are pending changes
///
/// Both markers are checked: the pending marker must be present and the
/// clean marker absent.
pub fn has_pending_changes(status: &str) -> bool {
    let status = status.trim();
    status.contains(PENDING_CHANGES_MARKER) && !status.contains(NO_CHANGES_MARKER)
}

/// Start a new change on top of the working copy (`jj new`)
pub async fn create_new_revision(ctx: &ExecContext) -> Result<()> {
    let args = ["new"];
    ctx.run(Tool::Jj, &args)
        .await?
        .into_stdout_unchecked(Tool::Jj, &args);
    Ok(())
}

/// Point a bookmark at its git ref (`jj bookmark set <name> -r refs/heads/<name>`)
///
/// Returns whether jj reported success. The result is informational only;
/// callers carry on either way.
pub async fn create_bookmark(ctx: &ExecContext, bookmark: &BookmarkTarget) -> Result<bool> {
    debug!("setting bookmark {bookmark}");
    let args = [
        "bookmark",
        "set",
        bookmark.name.as_str(),
        "-r",
        bookmark.target.as_str(),
    ];
    let output = ctx.run(Tool::Jj, &args).await?;
    let success = output.success();
    output.into_stdout_unchecked(Tool::Jj, &args);
    Ok(success)
}
