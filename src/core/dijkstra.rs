//! General-graph shortest paths via priority-queue relaxation
//!
//! The frontier is a binary heap with no decrease-key: an improvement
//! re-inserts the node, and entries superseded by a later cheaper insertion
//! are skipped when popped. The stale-entry skip is required for correctness
//! and termination, not an optimization. Entries order by distance first and
//! node id second, so equal-cost frontiers drain in a fixed order and the
//! resulting tree is deterministic.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::core::error::{Error, Result};
use crate::core::graph::Graph;
use crate::core::table::ShortestPathTree;

/// Frontier entry keyed by the distance known when it was inserted
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    dist: f64,
    node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.node == other.node
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap; distance ties pop the lower node id
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Compute minimum costs and predecessors from `source` to every reachable
/// node
///
/// Weights are non-negative by construction, so every popped non-stale entry
/// is final for its node. Unreachable nodes keep `INFINITY` and no
/// predecessor.
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<ShortestPathTree> {
    if source >= graph.node_count() {
        return Err(Error::InvalidArgument(format!(
            "source node {source} outside graph of {} nodes",
            graph.node_count()
        )));
    }

    let mut tree = ShortestPathTree::unreached(graph.node_count());
    tree.dist[source] = 0.0;

    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        dist: 0.0,
        node: source,
    });

    let mut settled = 0usize;
    while let Some(FrontierEntry { dist, node }) = frontier.pop() {
        // Skip stale entries
        if dist > tree.dist[node] {
            continue;
        }
        settled += 1;

        for edge in graph.neighbors(node) {
            let candidate = dist + edge.weight;
            if candidate < tree.dist[edge.to] {
                tree.dist[edge.to] = candidate;
                tree.prev[edge.to] = Some(node);
                frontier.push(FrontierEntry {
                    dist: candidate,
                    node: edge.to,
                });
            }
        }
    }

    debug!(
        "relaxation from {source} settled {settled} of {} nodes",
        graph.node_count()
    );
    Ok(tree)
}
