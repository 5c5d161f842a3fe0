//! Parallel execution of independent route queries
//!
//! The graph is read-only after construction and each query owns its tables,
//! so batches of requests fan out across threads with no shared mutable
//! state.

use rayon::prelude::*;
use serde::Deserialize;

use crate::core::error::Result;
use crate::core::graph::Graph;
use crate::core::route::{best_route, Route};

/// One independent query: a source and its acceptable destinations
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteRequest {
    pub source: usize,
    pub candidates: Vec<usize>,
}

/// Run every request against the same graph, one result slot per request
///
/// Failures stay in their slot; one bad request does not abort the batch.
pub fn best_routes(graph: &Graph, requests: &[RouteRequest]) -> Vec<Result<Route>> {
    requests
        .par_iter()
        .map(|request| best_route(graph, request.source, &request.candidates))
        .collect()
}
