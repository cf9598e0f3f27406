//! Edge-list reader.
//!
//! One declaration per line: `<node> (<target> <weight>)*`, whitespace
//! separated. Blank lines are skipped. A declared node exists even when it
//! has no outgoing pairs.

use std::fmt;
use std::path::Path;

use tracing::debug;
use tracing::warn;

use crate::Error;
use crate::Result;
use crate::graph::Graph;
use crate::graph::NodeId;

/// How to treat a trailing target that has no weight after it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParsePolicy {
    /// Reject the input with [`Error::MalformedLine`].
    #[default]
    Strict,
    /// Drop the dangling token, keep the rest of the line and record a warning.
    Lenient,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseWarning {
    pub line: usize,
    pub token: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: dropped target `{}` without weight",
            self.line, self.token
        )
    }
}

#[derive(Clone, Debug)]
pub struct ParsedGraph {
    pub graph: Graph,
    pub warnings: Vec<ParseWarning>,
}

pub fn load_edge_list(path: impl AsRef<Path>, policy: ParsePolicy) -> Result<ParsedGraph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read edge list");
    parse_edge_list(&text, policy)
}

pub fn parse_edge_list(text: &str, policy: ParsePolicy) -> Result<ParsedGraph> {
    let mut graph = Graph::new();
    let mut warnings = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let mut tokens = raw.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };

        let from = parse_node(first, line)?;
        graph.add_node(from);

        while let Some(target) = tokens.next() {
            let to = parse_node(target, line)?;
            let Some(weight) = tokens.next() else {
                match policy {
                    ParsePolicy::Strict => {
                        return Err(Error::MalformedLine {
                            line,
                            reason: format!("target `{target}` has no weight"),
                        });
                    }
                    ParsePolicy::Lenient => {
                        warn!(line, token = target, "dropping target without weight");
                        warnings.push(ParseWarning {
                            line,
                            token: target.to_string(),
                        });
                        break;
                    }
                }
            };
            graph.add_edge(from, to, parse_weight(weight, line)?);
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        warnings = warnings.len(),
        "parsed edge list"
    );
    Ok(ParsedGraph { graph, warnings })
}

fn parse_node(token: &str, line: usize) -> Result<NodeId> {
    token.parse().map_err(|_| Error::InvalidNumber {
        line,
        token: token.to_string(),
        expected: "node id",
    })
}

fn parse_weight(token: &str, line: usize) -> Result<f64> {
    let weight: f64 = token.parse().map_err(|_| Error::InvalidNumber {
        line,
        token: token.to_string(),
        expected: "weight",
    })?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::InvalidWeight { line, weight });
    }
    Ok(weight)
}
