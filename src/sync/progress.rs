//! Progress callback trait for interface-agnostic updates
//!
//! The sync driver reports every step through this trait; the CLI prints,
//! tests record.

use async_trait::async_trait;
use std::fmt;

/// Sync phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking the jj repository and working copy
    Checking,
    /// Resolving the branch chain
    Resolving,
    /// Setting bookmarks
    Creating,
    /// Sync complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking repository"),
            Self::Resolving => write!(f, "Resolving branch chain"),
            Self::Creating => write!(f, "Creating bookmarks"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// Bookmark creation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkStatus {
    /// `jj bookmark set` is about to run
    Started,
    /// jj exited successfully
    Success,
    /// jj exited with an error; the batch carries on regardless
    Unchecked,
}

/// Progress callback trait
///
/// Implement this trait to receive updates while bookmarks are synced.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the top-of-stack branch is known
    async fn on_top_branch(&self, branch: &str);

    /// Called when the working copy has uncommitted changes
    async fn on_uncommitted_changes(&self);

    /// Called when a new revision is (or in dry run, would be) created
    async fn on_new_revision(&self, dry_run: bool);

    /// Called after the uncommitted-changes gate finishes
    async fn on_uncommitted_handled(&self);

    /// Called when no branches sit between top and base
    async fn on_nothing_to_do(&self, base: &str);

    /// Called with the bookmarks that would be created
    async fn on_candidates(&self, names: &[String]);

    /// Called as each bookmark is set
    async fn on_bookmark(&self, name: &str, status: BookmarkStatus);

    /// Called after the last bookmark in a batch
    async fn on_batch_complete(&self, count: usize);

    /// Called when the user declines creation
    async fn on_declined(&self);

    /// Called when a dry run stops before creation
    async fn on_dry_run(&self);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_top_branch(&self, _branch: &str) {}
    async fn on_uncommitted_changes(&self) {}
    async fn on_new_revision(&self, _dry_run: bool) {}
    async fn on_uncommitted_handled(&self) {}
    async fn on_nothing_to_do(&self, _base: &str) {}
    async fn on_candidates(&self, _names: &[String]) {}
    async fn on_bookmark(&self, _name: &str, _status: BookmarkStatus) {}
    async fn on_batch_complete(&self, _count: usize) {}
    async fn on_declined(&self) {}
    async fn on_dry_run(&self) {}
}
