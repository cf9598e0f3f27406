//! Every-source-to-every-target tables built from repeated runs.

use rayon::prelude::*;
use serde::Serialize;

use crate::Result;
use crate::distance::Distance;
use crate::engine::Frontier;
use crate::engine::ShortestPathEngine;
use crate::engine::ShortestPaths;
use crate::graph::Graph;
use crate::graph::NodeId;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub distance: Distance,
}

impl Route {
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// `1->2->4`, or `unreachable`.
    pub fn path_label(&self) -> String {
        if !self.is_reachable() {
            return "unreachable".to_string();
        }
        self.path
            .iter()
            .map(NodeId::to_string)
            .collect::<Vec<_>>()
            .join("->")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SourceReport {
    pub source: NodeId,
    pub routes: Vec<Route>,
}

/// One route per node of the run's graph, ascending by target.
pub fn routes_from(paths: &ShortestPaths) -> SourceReport {
    let routes = paths
        .distances()
        .iter()
        .map(|(&target, &distance)| Route {
            target,
            path: paths.path_to(target),
            distance,
        })
        .collect();
    SourceReport {
        source: paths.source(),
        routes,
    }
}

pub fn all_pairs(graph: &Graph, frontier: Frontier) -> Result<Vec<SourceReport>> {
    let engine = ShortestPathEngine::new(graph).with_frontier(frontier);
    graph
        .nodes()
        .map(|source| engine.run(source).map(|paths| routes_from(&paths)))
        .collect()
}

/// Same output as [`all_pairs`], with sources spread over a rayon pool.
///
/// `threads` of `None` or `Some(0)` uses the global pool.
pub fn all_pairs_parallel(
    graph: &Graph,
    frontier: Frontier,
    threads: Option<usize>,
) -> Result<Vec<SourceReport>> {
    let pool = match threads {
        Some(n) if n > 0 => rayon::ThreadPoolBuilder::new().num_threads(n).build().ok(),
        _ => None,
    };

    let sources: Vec<NodeId> = graph.nodes().collect();
    let engine = ShortestPathEngine::new(graph).with_frontier(frontier);
    let run = |&source: &NodeId| engine.run(source).map(|paths| routes_from(&paths));

    match pool {
        Some(pool) => pool.install(|| sources.par_iter().map(run).collect()),
        None => sources.par_iter().map(run).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph::from_edges(&[(1, 2, 10.0), (1, 3, 5.0), (2, 1, 5.0), (3, 1, 1.5)])
    }

    #[test]
    fn covers_every_source_and_target() {
        let graph = Graph::from_edges(&[(1, 2, 1.0), (3, 3, 2.0)]);
        let reports = all_pairs(&graph, Frontier::OrderedSet).unwrap();
        assert_eq!(
            reports.iter().map(|r| r.source).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        for report in &reports {
            assert_eq!(
                report.routes.iter().map(|r| r.target).collect::<Vec<_>>(),
                vec![1, 2, 3]
            );
        }
    }

    #[test]
    fn labels() {
        let graph = sample();
        let reports = all_pairs(&graph, Frontier::OrderedSet).unwrap();
        let from_two = &reports[1];
        assert_eq!(from_two.source, 2);
        assert_eq!(from_two.routes[0].path_label(), "2->1");
        assert_eq!(from_two.routes[1].path_label(), "2");
        assert_eq!(from_two.routes[2].path_label(), "2->1->3");
        assert_eq!(from_two.routes[2].distance, Distance::new(10.0));

        let graph = Graph::from_edges(&[(1, 2, 1.0)]);
        let reports = all_pairs(&graph, Frontier::OrderedSet).unwrap();
        let back = &reports[1].routes[0];
        assert!(!back.is_reachable());
        assert_eq!(back.path, vec![1]);
        assert_eq!(back.path_label(), "unreachable");
    }

    #[test]
    fn parallel_matches_sequential() {
        let graph = sample();
        let expected = all_pairs(&graph, Frontier::OrderedSet).unwrap();
        for threads in [None, Some(0), Some(1), Some(3)] {
            for frontier in [Frontier::OrderedSet, Frontier::BinaryHeap] {
                let got = all_pairs_parallel(&graph, frontier, threads).unwrap();
                assert_eq!(got, expected, "threads={threads:?} frontier={frontier:?}");
            }
        }
    }

    #[test]
    fn serializes_unreachable_as_null() {
        let graph = Graph::from_edges(&[(1, 2, 1.0)]);
        let reports = all_pairs(&graph, Frontier::OrderedSet).unwrap();
        let json = serde_json::to_value(&reports[1]).unwrap();
        assert_eq!(json["source"], 2);
        assert!(json["routes"][0]["distance"].is_null());
        assert_eq!(json["routes"][1]["distance"], 0.0);
        assert_eq!(json["routes"][1]["path"], serde_json::json!([2]));
    }
}
