//! # Dispatch-route
//!
//! Minimum-cost route planning over weighted transport networks.
//!
//! Two engines share one contract: given a weighted graph and acceptable
//! endpoints, produce the minimum total cost and the realized path.
//!
//! - [`shortest_paths`] relaxes a general (possibly cyclic) graph with a
//!   min-priority frontier, for queries like "nearest of several depots".
//! - [`stage_costs`] sweeps a stage-partitioned graph front to back with
//!   layered dynamic programming, for networks every route must cross stage
//!   by stage.
//!
//! Both produce the same [`ShortestPathTree`] tables, so endpoint selection
//! and path reconstruction are shared. Graphs are immutable after
//! construction and can be shared read-only across concurrent queries; see
//! [`best_routes`] for parallel batches.

pub mod core;

pub use crate::core::batch::{best_routes, RouteRequest};
pub use crate::core::dijkstra::shortest_paths;
pub use crate::core::dp::stage_costs;
pub use crate::core::error::{Error, Result};
pub use crate::core::graph::{Edge, Graph};
pub use crate::core::route::{
    best_route, best_stage_route, reconstruct, select_best, Route, StageRoute,
};
pub use crate::core::stage::StagedGraph;
pub use crate::core::table::ShortestPathTree;
