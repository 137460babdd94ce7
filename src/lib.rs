//! jj-bookmark-sync - mirror stacked git branches as Jujutsu bookmarks
//!
//! Finds the git branches stacked between the checked-out branch and a base
//! branch and sets a jj bookmark for each one.

pub mod error;
pub mod prompt;
pub mod repo;
pub mod stack;
pub mod sync;
pub mod types;
