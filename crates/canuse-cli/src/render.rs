//! Rendering blocking chains as human-readable text.

use canuse_resolver::{BlockingChain, ProjectId};
use rustc_hash::FxHashSet;

/// The key summary lines for a result set.
pub fn summary(blockers: &FxHashSet<BlockingChain>) -> Vec<String> {
    if blockers.is_empty() {
        return vec!["\u{1F389}  You have 0 projects blocking you from using Python 3!".to_string()];
    }

    let tracked: FxHashSet<&ProjectId> = blockers.iter().flat_map(BlockingChain::path).collect();
    let total = tracked.len();
    let direct = blockers.len();

    let need = format!(
        "You need {} project{} to transition to Python 3.",
        total,
        if total != 1 { "s" } else { "" }
    );
    let can_port = format!(
        "Of {} {} project{}, {} {} no direct dependencies blocking {} transition:",
        if total != 1 { "those" } else { "that" },
        total,
        if total != 1 { "s" } else { "" },
        direct,
        if direct != 1 { "have" } else { "has" },
        if direct != 1 { "their" } else { "its" },
    );
    vec![need, can_port]
}

/// One line per chain, sorted by top-level project.
///
/// Sorting is by the reversed chain, so chains group under the root that
/// pulls them in rather than under the leaf at the bottom of the graph.
pub fn chain_lines(blockers: &FxHashSet<BlockingChain>) -> Vec<String> {
    let mut chains: Vec<&BlockingChain> = blockers.iter().collect();
    chains.sort_by(|a, b| {
        let a_rev: Vec<&ProjectId> = a.path().iter().rev().collect();
        let b_rev: Vec<&ProjectId> = b.path().iter().rev().collect();
        a_rev.cmp(&b_rev)
    });

    chains
        .into_iter()
        .map(|chain| {
            let mut names = chain.path().iter().map(ProjectId::as_str);
            let leaf = names.next().expect("chain is non-empty").to_string();
            let rest: Vec<&str> = names.collect();
            if rest.is_empty() {
                leaf
            } else {
                format!(
                    "{} (which is blocking {})",
                    leaf,
                    rest.join(", which is blocking ")
                )
            }
        })
        .collect()
}
