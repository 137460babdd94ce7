//! Sync planning
//!
//! Turns a resolved stack into the list of bookmarks to set.

use crate::types::{BookmarkTarget, StackAnalysis};

/// Bookmarks to create for one stack
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Top-of-stack branch
    pub top_branch: String,
    /// Base branch
    pub base_branch: String,
    /// Bookmarks in creation order
    pub bookmarks: Vec<BookmarkTarget>,
}

impl SyncPlan {
    /// Whether there is nothing to create
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Bookmark names in creation order
    pub fn names(&self) -> Vec<String> {
        self.bookmarks.iter().map(|b| b.name.clone()).collect()
    }
}

/// Plan one bookmark per intermediate branch, same order
pub fn create_sync_plan(analysis: &StackAnalysis) -> SyncPlan {
    SyncPlan {
        top_branch: analysis.top_branch.clone(),
        base_branch: analysis.base_branch.clone(),
        bookmarks: analysis
            .intermediate_branches
            .iter()
            .map(|name| BookmarkTarget::for_branch(name))
            .collect(),
    }
}
