//! Bookmark synchronization engine
//!
//! Mirrors the git branches of a stack into jj:
//! 1. Analysis - resolve the branches between top of stack and base
//! 2. Planning - one bookmark per intermediate branch
//! 3. Execution - `jj bookmark set` for each
//!
//! [`run_bookmark_sync`] wraps the phases with the precondition checks and
//! confirmation prompts.

mod driver;
mod execute;
mod plan;
mod progress;

pub use driver::{
    CREATE_BOOKMARKS_QUESTION, NEW_REVISION_QUESTION, SyncOptions, SyncOutcome, run_bookmark_sync,
};
pub use execute::{SyncResult, execute_sync};
pub use plan::{SyncPlan, create_sync_plan};
pub use progress::{BookmarkStatus, NoopProgress, Phase, ProgressCallback};
