use std::collections::HashSet;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::graph::Graph;
use crate::graph::NodeId;

// Integral weights up to this bound keep every path sum exact in f64.
const C_MAX: u64 = 1_000_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphCase {
    SparseRandom,
    DenseRandom,
    DenseZero,
    QuarterWeights,
    AlmostLine,
    GridRandom,
    Islands,
}

impl GraphCase {
    pub const ALL: [GraphCase; 7] = [
        GraphCase::SparseRandom,
        GraphCase::DenseRandom,
        GraphCase::DenseZero,
        GraphCase::QuarterWeights,
        GraphCase::AlmostLine,
        GraphCase::GridRandom,
        GraphCase::Islands,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::SparseRandom => "sparse_random",
            Self::DenseRandom => "dense_random",
            Self::DenseZero => "dense_zero",
            Self::QuarterWeights => "quarter_weights",
            Self::AlmostLine => "almost_line",
            Self::GridRandom => "grid_random",
            Self::Islands => "islands",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeneratedGraph {
    pub graph: Graph,
    pub source: NodeId,
}

/// Builds a graph of roughly `size` nodes. Node ids are scattered (and may be
/// negative) so callers never rely on a dense `0..n` numbering.
pub fn generate_case(case: GraphCase, size: usize, seed: u64) -> GeneratedGraph {
    match case {
        GraphCase::SparseRandom => sparse_random_case(size.max(8), seed, 4, integral_weight),
        GraphCase::DenseRandom => dense_case(floor_sqrt(size).max(6), seed, integral_weight),
        GraphCase::DenseZero => dense_case(floor_sqrt(size).max(6), seed, |_| 0.0),
        GraphCase::QuarterWeights => {
            sparse_random_case(size.max(8), seed ^ 0x5A5A, 6, quarter_weight)
        }
        GraphCase::AlmostLine => almost_line_case(size.max(8), seed),
        GraphCase::GridRandom => grid_random_case(size.max(16), seed),
        GraphCase::Islands => islands_case(size.max(12), seed),
    }
}

fn integral_weight(rng: &mut StdRng) -> f64 {
    rng.random_range(0..=C_MAX) as f64
}

fn quarter_weight(rng: &mut StdRng) -> f64 {
    rng.random_range(0..=400_u32) as f64 / 4.0
}

fn sparse_random_case(
    n: usize,
    seed: u64,
    edge_factor: usize,
    weight: fn(&mut StdRng) -> f64,
) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let m_target = n.saturating_mul(edge_factor).min(complete_edges(n));
    let mut edges = Vec::with_capacity(m_target);
    let mut used = HashSet::with_capacity(m_target * 2 + 1);

    while edges.len() < m_target {
        let u = rng.random_range(0..n);
        let v = rng.random_range(0..n);
        let w = weight(&mut rng);
        push_unique_edge(&mut edges, &mut used, u, v, w);
    }

    let source = rng.random_range(0..n);
    finish(&mut rng, n, edges, source)
}

fn dense_case(n: usize, seed: u64, weight: fn(&mut StdRng) -> f64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(complete_edges(n));

    for u in 0..n {
        for v in 0..n {
            if u != v {
                let w = weight(&mut rng);
                edges.push((u, v, w));
            }
        }
    }

    let source = rng.random_range(0..n);
    finish(&mut rng, n, edges, source)
}

fn almost_line_case(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n * 2);
    let mut used = HashSet::with_capacity(n * 4);

    for i in 0..(n - 1) {
        let w = integral_weight(&mut rng);
        push_unique_edge(&mut edges, &mut used, i, i + 1, w);
    }

    let m_target = n.saturating_mul(2).min(complete_edges(n));
    while edges.len() < m_target {
        let a = rng.random_range(0..(n - 2));
        let b = (a + rng.random_range(2..=3)).min(n - 1);
        let (u, v) = if rng.random_bool(0.5) { (b, a) } else { (a, b) };
        let w = integral_weight(&mut rng);
        push_unique_edge(&mut edges, &mut used, u, v, w);
    }

    finish(&mut rng, n, edges, 0)
}

fn grid_random_case(size: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let len = floor_sqrt(size).max(4);
    let n = len * len;
    let mut edges = Vec::with_capacity(n * 4);

    let index = |i: usize, j: usize| -> usize { i * len + j };
    for i in 0..len {
        for j in 0..len {
            let here = index(i, j);
            let mut neighbours = Vec::with_capacity(4);
            if j + 1 < len {
                neighbours.push(index(i, j + 1));
            }
            if i + 1 < len {
                neighbours.push(index(i + 1, j));
            }
            if j > 0 {
                neighbours.push(index(i, j - 1));
            }
            if i > 0 {
                neighbours.push(index(i - 1, j));
            }
            for there in neighbours {
                let w = integral_weight(&mut rng);
                edges.push((here, there, w));
            }
        }
    }

    let source = rng.random_range(0..n);
    finish(&mut rng, n, edges, source)
}

/// A few strongly connected blobs with one-way bridges between some of them,
/// leaving plenty of unreachable pairs.
fn islands_case(n: usize, seed: u64) -> GeneratedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let islands = 4;
    let per = n / islands;
    let mut edges = Vec::new();
    let mut used = HashSet::new();

    for k in 0..islands {
        let base = k * per;
        for i in 0..per {
            let w = integral_weight(&mut rng);
            push_unique_edge(&mut edges, &mut used, base + i, base + (i + 1) % per, w);
            let j = rng.random_range(0..per);
            let w = integral_weight(&mut rng);
            push_unique_edge(&mut edges, &mut used, base + i, base + j, w);
        }
    }
    let w = integral_weight(&mut rng);
    push_unique_edge(&mut edges, &mut used, 0, per, w);

    finish(&mut rng, per * islands, edges, per)
}

/// Relabels `0..n` onto scattered ids, shuffles edge order and builds the graph.
fn finish(
    rng: &mut StdRng,
    n: usize,
    mut edges: Vec<(usize, usize, f64)>,
    source: usize,
) -> GeneratedGraph {
    let offset: NodeId = rng.random_range(-1_000..=1_000);
    let mut ids: Vec<NodeId> = (0..n as NodeId).map(|v| offset + v * 3).collect();
    ids.shuffle(rng);
    edges.shuffle(rng);

    let mut graph = Graph::new();
    for &id in &ids {
        graph.add_node(id);
    }
    for (u, v, w) in edges {
        graph.add_edge(ids[u], ids[v], w);
    }

    GeneratedGraph {
        graph,
        source: ids[source],
    }
}

#[inline]
fn complete_edges(n: usize) -> usize {
    n.saturating_mul(n.saturating_sub(1))
}

#[inline]
fn floor_sqrt(value: usize) -> usize {
    (value as f64).sqrt().floor() as usize
}

#[inline]
fn push_unique_edge(
    edges: &mut Vec<(usize, usize, f64)>,
    used: &mut HashSet<(usize, usize)>,
    u: usize,
    v: usize,
    weight: f64,
) -> bool {
    if u == v {
        return false;
    }
    if used.insert((u, v)) {
        edges.push((u, v, weight));
        true
    } else {
        false
    }
}
