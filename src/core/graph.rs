//! Weighted adjacency storage shared by both route engines
//!
//! Edges live in a flat compressed layout: one offset per node into a single
//! edge array, so `neighbors` is a pair of slice indexes. Per-node edge order
//! follows insertion order, which keeps query output deterministic.

use crate::core::error::{Error, Result};

/// Outgoing edge: target node and non-negative traversal cost
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub to: usize,
    pub weight: f64,
}

/// Flat adjacency: `offsets[n]..offsets[n + 1]` spans node `n`'s edges
#[derive(Debug, Clone)]
pub(crate) struct Adjacency {
    offsets: Vec<usize>,
    edges: Vec<Edge>,
}

impl Adjacency {
    /// Build compressed adjacency from `(from, to, weight)` triples.
    /// Callers validate the triples first; this only lays them out.
    pub(crate) fn from_edges(node_count: usize, edges: &[(usize, usize, f64)]) -> Self {
        let mut offsets = vec![0usize; node_count + 1];
        for &(from, _, _) in edges {
            offsets[from + 1] += 1;
        }
        for node in 0..node_count {
            offsets[node + 1] += offsets[node];
        }

        // Fill slots in input order so each node's edge list stays stable
        let mut next = offsets.clone();
        let mut flat = vec![Edge { to: 0, weight: 0.0 }; edges.len()];
        for &(from, to, weight) in edges {
            flat[next[from]] = Edge { to, weight };
            next[from] += 1;
        }

        Self {
            offsets,
            edges: flat,
        }
    }

    pub(crate) fn neighbors(&self, node: usize) -> &[Edge] {
        &self.edges[self.offsets[node]..self.offsets[node + 1]]
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Immutable weighted directed graph over the dense node range `[0, N)`
///
/// Construction validates every edge; after that the graph is read-only and
/// can be shared across concurrent queries.
#[derive(Debug, Clone)]
pub struct Graph {
    node_count: usize,
    adj: Adjacency,
}

impl Graph {
    /// Build a graph from directed `(from, to, weight)` triples
    pub fn build(node_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        for &(from, to, weight) in edges {
            if from >= node_count || to >= node_count {
                return Err(Error::InvalidEdge {
                    from,
                    to,
                    reason: format!("node outside range 0..{node_count}"),
                });
            }
            check_weight(from, to, weight)?;
        }

        Ok(Self {
            node_count,
            adj: Adjacency::from_edges(node_count, edges),
        })
    }

    /// Build an undirected graph: every input edge is inserted in both
    /// directions
    pub fn from_undirected(node_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut directed = Vec::with_capacity(edges.len() * 2);
        for &(u, v, w) in edges {
            directed.push((u, v, w));
            directed.push((v, u, w));
        }
        Self::build(node_count, &directed)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.adj.edge_count()
    }

    /// Outgoing edges of `node`; empty slice for a node with no edges
    pub fn neighbors(&self, node: usize) -> &[Edge] {
        self.adj.neighbors(node)
    }
}

/// Reject negative and non-finite weights at construction time.
/// Relaxation correctness depends on weights never decreasing a path cost.
pub(crate) fn check_weight(from: usize, to: usize, weight: f64) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidEdge {
            from,
            to,
            reason: format!("weight {weight} is not a finite non-negative number"),
        })
    }
}
