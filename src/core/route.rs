//! Endpoint selection, path reconstruction, and the high-level queries
//!
//! Both engines produce the same table shape, so everything here is shared:
//! pick the cheapest acceptable endpoint, then walk predecessors back to the
//! source and reverse.

use serde::Serialize;

use crate::core::dijkstra::shortest_paths;
use crate::core::dp::stage_costs;
use crate::core::error::{Error, Result};
use crate::core::graph::Graph;
use crate::core::stage::StagedGraph;
use crate::core::table::ShortestPathTree;

/// A realized minimum-cost route on a general graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// The destination that won endpoint selection
    pub endpoint: usize,
    pub cost: f64,
    /// Node sequence from source to endpoint inclusive
    pub nodes: Vec<usize>,
}

/// A realized minimum-cost route through every stage of a staged graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageRoute {
    pub cost: f64,
    /// Node index within each stage, first stage to last
    pub stages: Vec<usize>,
}

/// Pick the cheapest reachable candidate; cost ties go to the lowest node id
///
/// Candidates must be a non-empty, in-range set. When every candidate is
/// unreachable this fails with [`Error::NoPath`], never a sentinel cost.
pub fn select_best(tree: &ShortestPathTree, candidates: &[usize]) -> Result<(usize, f64)> {
    if candidates.is_empty() {
        return Err(Error::InvalidArgument("candidate set is empty".to_string()));
    }

    let mut best: Option<(usize, f64)> = None;
    for &candidate in candidates {
        if candidate >= tree.node_count() {
            return Err(Error::InvalidArgument(format!(
                "candidate node {candidate} outside table of {} nodes",
                tree.node_count()
            )));
        }
        if !tree.is_reached(candidate) {
            continue;
        }
        let cost = tree.dist[candidate];
        let better = match best {
            None => true,
            Some((node, current)) => {
                cost < current || (cost == current && candidate < node)
            }
        };
        if better {
            best = Some((candidate, cost));
        }
    }

    best.ok_or(Error::NoPath)
}

/// Walk predecessors back from `endpoint` and return the source-to-endpoint
/// node sequence
///
/// The cycle guard never fires on tables produced by the engines; it protects
/// against malformed externally-built predecessor tables.
pub fn reconstruct(tree: &ShortestPathTree, endpoint: usize) -> Result<Vec<usize>> {
    if endpoint >= tree.node_count() {
        return Err(Error::InvalidArgument(format!(
            "endpoint node {endpoint} outside table of {} nodes",
            tree.node_count()
        )));
    }

    let mut nodes = vec![endpoint];
    let mut current = endpoint;
    while let Some(prev) = tree.prev[current] {
        if nodes.len() > tree.node_count() {
            return Err(Error::DisconnectedPath(current));
        }
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse();
    Ok(nodes)
}

/// Cheapest route from `source` to the nearest of `candidates`
pub fn best_route(graph: &Graph, source: usize, candidates: &[usize]) -> Result<Route> {
    let tree = shortest_paths(graph, source)?;
    let (endpoint, cost) = select_best(&tree, candidates)?;
    let nodes = reconstruct(&tree, endpoint)?;
    Ok(Route {
        endpoint,
        cost,
        nodes,
    })
}

/// Cheapest front-to-back route through every stage
///
/// All first-stage nodes are implicit sources and all last-stage nodes
/// implicit candidates.
pub fn best_stage_route(staged: &StagedGraph) -> Result<StageRoute> {
    let tree = stage_costs(staged);
    let last = staged.stage_count() - 1;
    let candidates: Vec<usize> = staged.stage_nodes(last).collect();
    let (endpoint, cost) = select_best(&tree, &candidates)?;
    let nodes = reconstruct(&tree, endpoint)?;

    // The walk crosses one node per stage, so position doubles as stage index
    let stages = nodes
        .iter()
        .enumerate()
        .map(|(stage, &node)| node - staged.stage_offset(stage))
        .collect();
    Ok(StageRoute { cost, stages })
}
