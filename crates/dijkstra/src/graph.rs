use std::collections::BTreeMap;
use std::fmt;

pub type NodeId = i64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: f64,
}

/// Directed weighted graph keyed by node id.
///
/// A node comes into existence the first time it is referenced, either as a
/// declared source or as an edge target, and receives a zero-weight self-loop
/// at that moment. Every node therefore owns at least one adjacency entry and
/// shows up when iterating the key set. Edges keep insertion order and
/// parallel edges are not merged.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges(edges: &[(NodeId, NodeId, f64)]) -> Self {
        let mut graph = Self::new();
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Registers `id` if unseen. Returns `true` when the node was created.
    pub fn add_node(&mut self, id: NodeId) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, vec![Edge { to: id, weight: 0.0 }]);
        self.edge_count += 1;
        true
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        assert!(
            weight.is_finite() && weight >= 0.0,
            "edge weight must be finite and non-negative"
        );
        self.add_node(from);
        self.add_node(to);
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge { to, weight });
            self.edge_count += 1;
        }
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of adjacency entries, synthesized self-loops included.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    #[inline]
    pub fn edges_from(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeId, Edge)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, edges)| edges.iter().map(move |&edge| (from, edge)))
    }

    /// Read-only view of the full adjacency map.
    #[inline]
    pub fn adjacency(&self) -> &BTreeMap<NodeId, Vec<Edge>> {
        &self.adjacency
    }

    /// Cheapest weight among the parallel edges `from -> to`.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.edges_from(from)
            .iter()
            .filter(|edge| edge.to == to)
            .map(|edge| edge.weight)
            .min_by(f64::total_cmp)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, edges) in &self.adjacency {
            for edge in edges {
                write!(f, "{} {} {} -- ", from, edge.to, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
