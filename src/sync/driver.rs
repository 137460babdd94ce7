//! Interactive sync driver
//!
//! Runs the whole flow: repository check, top-of-stack lookup, the
//! uncommitted-changes gate, chain resolution and the confirmation gate.

use crate::error::Result;
use crate::prompt::Prompt;
use crate::repo::{
    ExecContext, check_repo, create_new_revision, current_branch, has_uncommitted_changes,
};
use crate::stack::analyze_stack;
use crate::sync::{Phase, ProgressCallback, SyncPlan, SyncResult, create_sync_plan, execute_sync};
use tracing::debug;

/// Question asked when the working copy is dirty
pub const NEW_REVISION_QUESTION: &str = "Create a new revision for uncommitted changes?";

/// Question asked before any bookmark is created
pub const CREATE_BOOKMARKS_QUESTION: &str = "Do you want to create these bookmarks in Jujutsu?";

/// Options for a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOptions {
    /// Base branch to compare against
    pub base: String,
    /// Report what would happen without changing anything
    pub dry_run: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            base: "main".to_string(),
            dry_run: false,
        }
    }
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// No branches between top and base
    NothingToDo,
    /// Dry run stopped after listing candidates
    DryRun(SyncPlan),
    /// User said no at the confirmation prompt
    Declined(SyncPlan),
    /// Bookmarks were set
    Created(SyncResult),
}

/// Run the bookmark sync
///
/// The only errors are a failed repository check (nothing else has run at
/// that point) and failures to spawn a tool at all.
pub async fn run_bookmark_sync(
    ctx: &ExecContext,
    options: &SyncOptions,
    prompt: &dyn Prompt,
    progress: &dyn ProgressCallback,
) -> Result<SyncOutcome> {
    progress.on_phase(Phase::Checking).await;
    check_repo(ctx).await?;

    let top = current_branch(ctx).await?;
    progress.on_top_branch(&top).await;

    if has_uncommitted_changes(ctx).await? {
        progress.on_uncommitted_changes().await;
        if prompt.confirm(NEW_REVISION_QUESTION).await? {
            progress.on_new_revision(options.dry_run).await;
            if !options.dry_run {
                create_new_revision(ctx).await?;
            }
        }
        progress.on_uncommitted_handled().await;
    }

    progress.on_phase(Phase::Resolving).await;
    let analysis = analyze_stack(ctx, &top, &options.base).await?;
    let plan = create_sync_plan(&analysis);
    debug!("planned bookmarks: {:?}", plan.names());

    if plan.is_empty() {
        progress.on_nothing_to_do(&options.base).await;
        return Ok(SyncOutcome::NothingToDo);
    }

    progress.on_candidates(&plan.names()).await;

    if options.dry_run {
        progress.on_dry_run().await;
        return Ok(SyncOutcome::DryRun(plan));
    }

    if !prompt.confirm(CREATE_BOOKMARKS_QUESTION).await? {
        progress.on_declined().await;
        return Ok(SyncOutcome::Declined(plan));
    }

    progress.on_phase(Phase::Creating).await;
    let result = execute_sync(&plan, ctx, progress).await?;
    progress.on_phase(Phase::Complete).await;

    Ok(SyncOutcome::Created(result))
}
