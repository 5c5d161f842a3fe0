//! CLI-specific utilities for dispatch-route
//!
//! Scenario loading and JSON output live here, separate from the core
//! library: the engine never touches files. Scenario files are plain JSON
//! describing a network plus the query to run against it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use dispatch_route::{best_route, best_routes, best_stage_route, Graph, RouteRequest, StagedGraph};

/// General-graph scenario: one network, one query
#[derive(Debug, Deserialize)]
pub struct NetworkScenario {
    pub node_count: usize,
    /// `(from, to, weight)` triples
    pub edges: Vec<(usize, usize, f64)>,
    /// Insert every edge in both directions
    #[serde(default)]
    pub undirected: bool,
    pub source: usize,
    pub candidates: Vec<usize>,
}

/// Staged scenario: stage sizes plus links between consecutive stages
#[derive(Debug, Deserialize)]
pub struct StagedScenario {
    pub stage_sizes: Vec<usize>,
    /// `links[i]` holds `(from, to, weight)` triples from stage `i` into
    /// stage `i + 1`
    pub links: Vec<Vec<(usize, usize, f64)>>,
}

/// Batch scenario: one network, many independent queries
#[derive(Debug, Deserialize)]
pub struct BatchScenario {
    pub node_count: usize,
    pub edges: Vec<(usize, usize, f64)>,
    #[serde(default)]
    pub undirected: bool,
    pub requests: Vec<RouteRequest>,
}

fn load_scenario<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to decode scenario file {}", path.display()))
}

fn build_network(node_count: usize, edges: &[(usize, usize, f64)], undirected: bool) -> Result<Graph> {
    let graph = if undirected {
        Graph::from_undirected(node_count, edges)
    } else {
        Graph::build(node_count, edges)
    };
    graph.context("failed to build network")
}

/// Run a single general-graph query and print the route as JSON
pub fn run_route(path: &Path) -> Result<()> {
    let scenario: NetworkScenario = load_scenario(path)?;
    let graph = build_network(scenario.node_count, &scenario.edges, scenario.undirected)?;
    let route = best_route(&graph, scenario.source, &scenario.candidates)
        .context("route query failed")?;
    println!("{}", serde_json::to_string_pretty(&route)?);
    Ok(())
}

/// Run a staged query and print the per-stage route as JSON
pub fn run_stages(path: &Path) -> Result<()> {
    let scenario: StagedScenario = load_scenario(path)?;
    let staged = StagedGraph::build(&scenario.stage_sizes, &scenario.links)
        .context("failed to build staged network")?;
    let route = best_stage_route(&staged).context("staged route query failed")?;
    println!("{}", serde_json::to_string_pretty(&route)?);
    Ok(())
}

/// Run a batch of queries and print one outcome per request
pub fn run_batch(path: &Path) -> Result<()> {
    let scenario: BatchScenario = load_scenario(path)?;
    let graph = build_network(scenario.node_count, &scenario.edges, scenario.undirected)?;
    let outcomes: Vec<serde_json::Value> = best_routes(&graph, &scenario.requests)
        .into_iter()
        .map(|result| match result {
            Ok(route) => json!({ "status": "ok", "route": route }),
            Err(err) => json!({ "status": "error", "message": err.to_string() }),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_scenario(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn network_scenario_decodes_with_default_direction() {
        let file = write_scenario(
            r#"{
                "node_count": 3,
                "edges": [[0, 1, 2.5], [1, 2, 1.0]],
                "source": 0,
                "candidates": [2]
            }"#,
        );
        let scenario: NetworkScenario = load_scenario(file.path()).unwrap();
        assert!(!scenario.undirected);
        assert_eq!(scenario.edges.len(), 2);
        assert_eq!(scenario.candidates, vec![2]);
    }

    #[test]
    fn staged_scenario_decodes() {
        let file = write_scenario(
            r#"{
                "stage_sizes": [1, 2],
                "links": [[[0, 0, 1.0], [0, 1, 2.0]]]
            }"#,
        );
        let scenario: StagedScenario = load_scenario(file.path()).unwrap();
        assert_eq!(scenario.stage_sizes, vec![1, 2]);
        assert_eq!(scenario.links[0].len(), 2);
    }

    #[test]
    fn malformed_scenario_reports_the_file() {
        let file = write_scenario("{ not json");
        let err = load_scenario::<NetworkScenario>(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to decode"));
    }

    #[test]
    fn run_route_succeeds_on_a_valid_scenario() {
        let file = write_scenario(
            r#"{
                "node_count": 2,
                "edges": [[0, 1, 4.0]],
                "source": 0,
                "candidates": [1]
            }"#,
        );
        run_route(file.path()).unwrap();
    }
}
