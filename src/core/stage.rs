//! Stage-partitioned graphs for layered route planning
//!
//! Nodes are addressed two ways: `(stage, index)` for callers assembling
//! input, and a dense global id internally so the staged engine shares the
//! general graph's tables, endpoint selection, and path reconstruction.
//! Global ids are assigned stage by stage: `global = stage offset + index`.
//! Because stage `i` links can only name targets in stage `i + 1`, skip-stage
//! and intra-stage edges cannot be expressed at all.

use std::ops::Range;

use crate::core::error::{Error, Result};
use crate::core::graph::{check_weight, Adjacency, Edge};

/// Immutable staged graph: ordered stages, edges only between consecutive
/// stages
///
/// The first stage holds the valid entry nodes, the last stage the valid
/// exits.
#[derive(Debug, Clone)]
pub struct StagedGraph {
    /// Global-id base per stage, with one trailing entry = total node count
    offsets: Vec<usize>,
    adj: Adjacency,
}

impl StagedGraph {
    /// Build from per-stage sizes and consecutive-stage links
    ///
    /// `links[i]` holds `(from, to, weight)` triples where `from` indexes a
    /// node of stage `i` and `to` a node of stage `i + 1`, so
    /// `links.len()` must be one less than the stage count. A node no link
    /// reaches is allowed; it simply stays unreachable.
    pub fn build(stage_sizes: &[usize], links: &[Vec<(usize, usize, f64)>]) -> Result<Self> {
        if stage_sizes.is_empty() {
            return Err(Error::InvalidArgument(
                "staged graph needs at least one stage".to_string(),
            ));
        }
        if let Some(stage) = stage_sizes.iter().position(|&size| size == 0) {
            return Err(Error::InvalidArgument(format!("stage {stage} has no nodes")));
        }
        if links.len() + 1 != stage_sizes.len() {
            return Err(Error::InvalidArgument(format!(
                "{} stages need {} link sets, got {}",
                stage_sizes.len(),
                stage_sizes.len() - 1,
                links.len()
            )));
        }

        let mut offsets = Vec::with_capacity(stage_sizes.len() + 1);
        let mut total = 0usize;
        offsets.push(0);
        for &size in stage_sizes {
            total += size;
            offsets.push(total);
        }

        let mut global = Vec::new();
        for (stage, stage_links) in links.iter().enumerate() {
            for &(from, to, weight) in stage_links {
                if from >= stage_sizes[stage] {
                    return Err(Error::InvalidEdge {
                        from,
                        to,
                        reason: format!(
                            "source index outside stage {stage} of {} nodes",
                            stage_sizes[stage]
                        ),
                    });
                }
                if to >= stage_sizes[stage + 1] {
                    return Err(Error::InvalidEdge {
                        from,
                        to,
                        reason: format!(
                            "target index outside stage {} of {} nodes",
                            stage + 1,
                            stage_sizes[stage + 1]
                        ),
                    });
                }
                check_weight(from, to, weight)?;
                global.push((offsets[stage] + from, offsets[stage + 1] + to, weight));
            }
        }

        Ok(Self {
            adj: Adjacency::from_edges(total, &global),
            offsets,
        })
    }

    pub fn stage_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total nodes across all stages (the global id range)
    pub fn node_count(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    pub fn stage_size(&self, stage: usize) -> usize {
        self.offsets[stage + 1] - self.offsets[stage]
    }

    /// First global id of `stage`
    pub fn stage_offset(&self, stage: usize) -> usize {
        self.offsets[stage]
    }

    /// Global ids of every node in `stage`, in index order
    pub fn stage_nodes(&self, stage: usize) -> Range<usize> {
        self.offsets[stage]..self.offsets[stage + 1]
    }

    /// Outgoing links of a global node id, all targeting the next stage
    pub fn neighbors(&self, node: usize) -> &[Edge] {
        self.adj.neighbors(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_ids_line_up_with_stage_offsets() {
        let staged = StagedGraph::build(
            &[1, 3, 2],
            &[
                vec![(0, 0, 1.0), (0, 1, 2.0), (0, 2, 3.0)],
                vec![(0, 0, 1.0), (1, 1, 1.0), (2, 0, 1.0)],
            ],
        )
        .unwrap();
        assert_eq!(staged.stage_count(), 3);
        assert_eq!(staged.node_count(), 6);
        assert_eq!(staged.stage_size(1), 3);
        assert_eq!(staged.stage_nodes(1), 1..4);
        assert_eq!(staged.stage_offset(2), 4);
        // Links from stage 1 land in stage 2's global range
        assert_eq!(staged.neighbors(1)[0].to, 4);
        assert_eq!(staged.neighbors(2)[0].to, 5);
    }

    #[test]
    fn single_stage_graph_has_no_links() {
        let staged = StagedGraph::build(&[3], &[]).unwrap();
        assert_eq!(staged.stage_count(), 1);
        assert!(staged.neighbors(0).is_empty());
    }

    #[test]
    fn empty_stage_list_is_rejected() {
        assert!(matches!(
            StagedGraph::build(&[], &[]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_size_stage_is_rejected() {
        assert!(matches!(
            StagedGraph::build(&[1, 0, 2], &[vec![], vec![]]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn link_set_count_must_match_stages() {
        assert!(matches!(
            StagedGraph::build(&[1, 2], &[]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn link_target_outside_next_stage_is_rejected() {
        let err = StagedGraph::build(&[1, 2], &[vec![(0, 2, 1.0)]]).unwrap_err();
        assert!(matches!(err, Error::InvalidEdge { from: 0, to: 2, .. }));
    }

    #[test]
    fn negative_link_weight_is_rejected() {
        assert!(StagedGraph::build(&[1, 1], &[vec![(0, 0, -1.0)]]).is_err());
    }
}
