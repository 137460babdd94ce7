//! Core types for jj-bookmark-sync
//!
//! Everything here lives for a single invocation; nothing is persisted.

use std::fmt;

/// A bookmark to be set in jj, pointing at a git branch ref
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkTarget {
    /// Bookmark name (same as the git branch name)
    pub name: String,
    /// Revision the bookmark points at (`refs/heads/<name>`)
    pub target: String,
}

impl BookmarkTarget {
    /// Bookmark that mirrors the git branch of the same name
    pub fn for_branch(name: &str) -> Self {
        Self {
            name: name.to_string(),
            target: format!("refs/heads/{name}"),
        }
    }
}

impl fmt::Display for BookmarkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.target)
    }
}

/// Result of resolving the branch chain between top of stack and base
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackAnalysis {
    /// Branch currently checked out (top of stack)
    pub top_branch: String,
    /// Branch the stack is compared against
    pub base_branch: String,
    /// Commits reachable from top but not from base, in `git rev-list` order
    pub commit_chain: Vec<String>,
    /// Distinct branches found on the chain, excluding top and base,
    /// in first-seen order
    pub intermediate_branches: Vec<String>,
}
