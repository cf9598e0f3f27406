use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::Error;
use crate::Result;
use crate::distance::Distance;
use crate::graph::Graph;
use crate::graph::NodeId;
use crate::path::PredecessorMap;
use crate::path::path_to;

/// Node -> best known distance from the run's source.
pub type DistanceMap = BTreeMap<NodeId, Distance>;

/// Priority structure used to pick the next node to settle.
///
/// Both variants extract by `(distance, node id)`, so they settle nodes in the
/// same order and produce identical distance and predecessor maps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Frontier {
    /// Every node is seeded up front; an improved node is removed and
    /// reinserted under its new key.
    #[default]
    OrderedSet,
    /// Only reached nodes are pushed; superseded entries are skipped on pop.
    BinaryHeap,
}

impl Frontier {
    pub fn label(self) -> &'static str {
        match self {
            Self::OrderedSet => "ordered_set",
            Self::BinaryHeap => "binary_heap",
        }
    }
}

/// Outcome of one single-source run.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    source: NodeId,
    distances: DistanceMap,
    predecessors: PredecessorMap,
}

impl ShortestPaths {
    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// `None` when `node` is not part of the graph.
    #[inline]
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(&node).copied()
    }

    #[inline]
    pub fn predecessor(&self, node: NodeId) -> Option<NodeId> {
        self.predecessors.get(&node).copied()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some_and(Distance::is_finite)
    }

    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        path_to(target, &self.predecessors)
    }

    #[inline]
    pub fn distances(&self) -> &DistanceMap {
        &self.distances
    }

    #[inline]
    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    pub fn into_parts(self) -> (DistanceMap, PredecessorMap) {
        (self.distances, self.predecessors)
    }
}

pub struct ShortestPathEngine<'g> {
    graph: &'g Graph,
    frontier: Frontier,
}

impl<'g> ShortestPathEngine<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            frontier: Frontier::default(),
        }
    }

    pub fn with_frontier(mut self, frontier: Frontier) -> Self {
        self.frontier = frontier;
        self
    }

    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    #[inline]
    pub fn frontier(&self) -> Frontier {
        self.frontier
    }

    /// Runs Dijkstra from `source`. Fresh maps are allocated on every call.
    pub fn run(&self, source: NodeId) -> Result<ShortestPaths> {
        if !self.graph.contains(source) {
            return Err(Error::UnknownSourceNode(source));
        }

        let mut distances: DistanceMap = self
            .graph
            .nodes()
            .map(|node| (node, Distance::INFINITY))
            .collect();
        distances.insert(source, Distance::ZERO);
        let mut predecessors = PredecessorMap::new();

        let settled = match self.frontier {
            Frontier::OrderedSet => {
                settle_ordered_set(self.graph, &mut distances, &mut predecessors)
            }
            Frontier::BinaryHeap => {
                settle_binary_heap(self.graph, source, &mut distances, &mut predecessors)
            }
        };

        debug!(
            source,
            frontier = self.frontier.label(),
            settled,
            reached = predecessors.len() + 1,
            "dijkstra run finished"
        );

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
        })
    }
}

fn settle_ordered_set(
    graph: &Graph,
    distances: &mut DistanceMap,
    predecessors: &mut PredecessorMap,
) -> usize {
    let mut frontier: BTreeSet<(Distance, NodeId)> =
        distances.iter().map(|(&node, &dist)| (dist, node)).collect();
    let mut settled = 0;

    while let Some((d, u)) = frontier.pop_first() {
        settled += 1;
        for edge in graph.edges_from(u) {
            let cand = d + edge.weight;
            let Some(current) = distances.get_mut(&edge.to) else {
                continue;
            };
            if cand < *current {
                frontier.remove(&(*current, edge.to));
                *current = cand;
                predecessors.insert(edge.to, u);
                frontier.insert((cand, edge.to));
            }
        }
    }

    settled
}

fn settle_binary_heap(
    graph: &Graph,
    source: NodeId,
    distances: &mut DistanceMap,
    predecessors: &mut PredecessorMap,
) -> usize {
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((Distance::ZERO, source)));
    let mut settled = 0;

    while let Some(Reverse((d, u))) = heap.pop() {
        if distances.get(&u) != Some(&d) {
            continue;
        }
        settled += 1;

        for edge in graph.edges_from(u) {
            let cand = d + edge.weight;
            let Some(current) = distances.get_mut(&edge.to) else {
                continue;
            };
            if cand < *current {
                *current = cand;
                predecessors.insert(edge.to, u);
                heap.push(Reverse((cand, edge.to)));
            }
        }
    }

    settled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        // 1 -> 2 -> 4 and 1 -> 3 -> 4 tie at 4; 5 is isolated from 1.
        Graph::from_edges(&[
            (1, 3, 2.0),
            (1, 2, 2.0),
            (2, 4, 3.0),
            (3, 4, 3.0),
            (5, 1, 1.0),
        ])
    }

    #[test]
    fn ties_resolve_to_smaller_predecessor_id() {
        for frontier in [Frontier::OrderedSet, Frontier::BinaryHeap] {
            let graph = diamond();
            let paths = ShortestPathEngine::new(&graph)
                .with_frontier(frontier)
                .run(1)
                .unwrap();
            assert_eq!(paths.distance(4), Some(Distance::new(5.0)));
            assert_eq!(paths.predecessor(4), Some(2), "{frontier:?}");
            assert_eq!(paths.path_to(4), vec![1, 2, 4]);
        }
    }

    #[test]
    fn unreachable_keeps_infinity() {
        let graph = diamond();
        let paths = ShortestPathEngine::new(&graph).run(1).unwrap();
        assert_eq!(paths.distance(5), Some(Distance::INFINITY));
        assert!(!paths.is_reachable(5));
        assert_eq!(paths.predecessor(5), None);
        assert_eq!(paths.path_to(5), vec![5]);
    }

    #[test]
    fn source_is_zero_without_predecessor() {
        let graph = diamond();
        let paths = ShortestPathEngine::new(&graph).run(5).unwrap();
        assert_eq!(paths.source(), 5);
        assert_eq!(paths.distance(5), Some(Distance::ZERO));
        assert_eq!(paths.predecessor(5), None);
        assert_eq!(paths.path_to(5), vec![5]);
        assert_eq!(paths.path_to(4), vec![5, 1, 2, 4]);
    }

    #[test]
    fn unknown_source_fails_fast() {
        let graph = diamond();
        let err = ShortestPathEngine::new(&graph).run(99).unwrap_err();
        assert!(matches!(err, Error::UnknownSourceNode(99)));
    }

    #[test]
    fn distance_of_foreign_node_is_none() {
        let graph = diamond();
        let paths = ShortestPathEngine::new(&graph).run(1).unwrap();
        assert_eq!(paths.distance(42), None);
        assert!(!paths.is_reachable(42));
    }

    #[test]
    fn zero_weight_edges_do_not_reassign_settled_nodes() {
        let graph = Graph::from_edges(&[(1, 2, 0.0), (2, 1, 0.0), (2, 3, 0.0), (1, 3, 0.0)]);
        let paths = ShortestPathEngine::new(&graph).run(1).unwrap();
        assert_eq!(paths.predecessor(2), Some(1));
        assert_eq!(paths.predecessor(3), Some(1));
        assert_eq!(paths.predecessor(1), None);
    }

    #[test]
    fn runs_do_not_share_state() {
        let graph = diamond();
        let engine = ShortestPathEngine::new(&graph);
        let first = engine.run(1).unwrap();
        let _ = engine.run(5).unwrap();
        assert_eq!(engine.run(1).unwrap(), first);
    }
}
