//! Intermediate branch resolution
//!
//! Walks the commits between base and top of stack and collects the other
//! branches that sit on that chain.

use crate::error::Result;
use crate::repo::{ExecContext, branches_containing, commit_chain};
use crate::types::StackAnalysis;
use std::collections::HashSet;
use tracing::debug;

/// Branches on the chain from `base` to `top`, excluding both
///
/// Order is first appearance while walking the chain newest commit first,
/// so the branch nearest the top comes first.
pub async fn find_intermediate_branches(
    ctx: &ExecContext,
    top: &str,
    base: &str,
) -> Result<Vec<String>> {
    Ok(analyze_stack(ctx, top, base).await?.intermediate_branches)
}

/// Resolve the stack between `top` and `base`
pub async fn analyze_stack(ctx: &ExecContext, top: &str, base: &str) -> Result<StackAnalysis> {
    let commit_chain = commit_chain(ctx, top, base).await?;
    let intermediate_branches = collect_from_chain(ctx, &commit_chain, top, base).await?;

    Ok(StackAnalysis {
        top_branch: top.to_string(),
        base_branch: base.to_string(),
        commit_chain,
        intermediate_branches,
    })
}

async fn collect_from_chain(
    ctx: &ExecContext,
    chain: &[String],
    top: &str,
    base: &str,
) -> Result<Vec<String>> {
    let mut per_commit = Vec::with_capacity(chain.len());
    for commit in chain {
        let branches = branches_containing(ctx, commit).await?;
        debug!("commit {commit} is contained in {branches:?}");
        per_commit.push(branches);
    }
    Ok(select_intermediate(per_commit, top, base))
}

/// Drop `top` and `base` from each commit's branch list, flatten, dedup
pub fn select_intermediate<I>(per_commit: I, top: &str, base: &str) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let candidates = per_commit
        .into_iter()
        .flatten()
        .filter(|name| name != top && name != base);
    dedup_preserving_order(candidates)
}

/// Remove duplicates, keeping the first occurrence of each name
pub fn dedup_preserving_order<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
