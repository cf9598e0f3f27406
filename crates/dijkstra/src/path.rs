use std::collections::BTreeMap;

use crate::graph::NodeId;

/// Node -> node preceding it on the best known path from the run's source.
pub type PredecessorMap = BTreeMap<NodeId, NodeId>;

/// Walks predecessor links back from `target` and returns the path source first.
///
/// A target without a predecessor entry yields `[target]`. That covers both the
/// source itself and unreachable targets; only the paired distance tells them
/// apart.
pub fn path_to(target: NodeId, predecessors: &PredecessorMap) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    // Links form a tree, so a walk never needs more steps than there are links.
    while let Some(&prev) = predecessors.get(&current) {
        if path.len() > predecessors.len() {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_to_root() {
        let preds = PredecessorMap::from([(2, 1), (3, 1), (4, 2)]);
        assert_eq!(path_to(4, &preds), vec![1, 2, 4]);
        assert_eq!(path_to(3, &preds), vec![1, 3]);
        assert_eq!(path_to(1, &preds), vec![1]);
    }

    #[test]
    fn missing_entry_is_single_element() {
        let preds = PredecessorMap::from([(2, 1)]);
        assert_eq!(path_to(9, &preds), vec![9]);
        assert_eq!(path_to(5, &PredecessorMap::new()), vec![5]);
    }

    #[test]
    fn corrupt_cycle_terminates() {
        let preds = PredecessorMap::from([(1, 2), (2, 1)]);
        assert!(path_to(1, &preds).len() <= 3);
    }
}
