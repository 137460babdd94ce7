//! Sync execution
//!
//! Sets every planned bookmark in order. A failed `jj bookmark set` does not
//! stop the batch; it is only recorded.

use crate::error::Result;
use crate::repo::{ExecContext, create_bookmark};
use crate::sync::{BookmarkStatus, ProgressCallback, SyncPlan};

/// Result of executing a sync plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncResult {
    /// Bookmarks jj reported as set
    pub created: Vec<String>,
    /// Bookmarks whose `jj bookmark set` exited non-zero
    pub unchecked: Vec<String>,
}

impl SyncResult {
    /// Total bookmark-set calls made
    pub fn attempted(&self) -> usize {
        self.created.len() + self.unchecked.len()
    }
}

/// Execute a sync plan
pub async fn execute_sync(
    plan: &SyncPlan,
    ctx: &ExecContext,
    progress: &dyn ProgressCallback,
) -> Result<SyncResult> {
    let mut result = SyncResult::default();

    for bookmark in &plan.bookmarks {
        progress
            .on_bookmark(&bookmark.name, BookmarkStatus::Started)
            .await;

        if create_bookmark(ctx, bookmark).await? {
            progress
                .on_bookmark(&bookmark.name, BookmarkStatus::Success)
                .await;
            result.created.push(bookmark.name.clone());
        } else {
            progress
                .on_bookmark(&bookmark.name, BookmarkStatus::Unchecked)
                .await;
            result.unchecked.push(bookmark.name.clone());
        }
    }

    progress.on_batch_complete(result.attempted()).await;
    Ok(result)
}
