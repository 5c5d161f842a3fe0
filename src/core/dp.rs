//! Staged shortest paths via layered dynamic programming
//!
//! Stage boundaries make the graph acyclic in stage order: every edge leaves
//! stage `i` for stage `i + 1`, so once stage `i` has been swept its costs
//! are final and stage `i + 1` depends on nothing else. One front-to-back
//! sweep is therefore exact, no frontier needed.

use log::debug;

use crate::core::stage::StagedGraph;
use crate::core::table::ShortestPathTree;

/// Propagate minimum costs stage by stage, front to back
///
/// Every first-stage node starts at cost zero (entry is one free choice).
/// Nodes in a later stage that no link reaches keep `INFINITY` and no
/// predecessor. Sweeping sources in ascending id with strict improvement
/// means cost ties keep the lowest predecessor id.
pub fn stage_costs(staged: &StagedGraph) -> ShortestPathTree {
    let mut tree = ShortestPathTree::unreached(staged.node_count());
    for node in staged.stage_nodes(0) {
        tree.dist[node] = 0.0;
    }

    for stage in 0..staged.stage_count() - 1 {
        for from in staged.stage_nodes(stage) {
            if !tree.is_reached(from) {
                continue;
            }
            for edge in staged.neighbors(from) {
                let candidate = tree.dist[from] + edge.weight;
                if candidate < tree.dist[edge.to] {
                    tree.dist[edge.to] = candidate;
                    tree.prev[edge.to] = Some(from);
                }
            }
        }
    }

    debug!(
        "stage sweep finished: {} stages, {} nodes",
        staged.stage_count(),
        staged.node_count()
    );
    tree
}
