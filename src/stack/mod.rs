//! Branch chain resolution
//!
//! Finds the git branches stacked between the top of stack and the base.

mod resolver;

pub use resolver::{
    analyze_stack, dedup_preserving_order, find_intermediate_branches, select_intermediate,
};
