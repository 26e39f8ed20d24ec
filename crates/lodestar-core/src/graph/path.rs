//! Path reconstruction from predecessor maps

use super::model::NodeIndex;

/// Walk predecessors backward from `to` until `from`, then reverse.
///
/// Returns `None` when the chain breaks before reaching `from`. The walk is
/// bounded by the map length so a corrupted (cyclic) map cannot loop forever.
pub fn reconstruct_path(
    from: NodeIndex,
    to: NodeIndex,
    predecessors: &[Option<NodeIndex>],
) -> Option<Vec<NodeIndex>> {
    let mut path = vec![to];
    let mut current = to;

    while current != from {
        if path.len() > predecessors.len() {
            return None;
        }
        current = predecessors[current]?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

/// Follow a next-hop matrix (`next[i * n + j]`) from `from` to `to`
pub fn follow_next_hops(
    from: NodeIndex,
    to: NodeIndex,
    n: usize,
    next: &[Option<NodeIndex>],
) -> Option<Vec<NodeIndex>> {
    if from == to {
        return Some(vec![from]);
    }

    let mut path = vec![from];
    let mut current = from;
    while current != to {
        if path.len() > n {
            return None;
        }
        current = next[current * n + to]?;
        path.push(current);
    }
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_simple_chain() {
        // 0 -> 2 -> 1 -> 3
        let preds = vec![None, Some(2), Some(0), Some(1)];
        assert_eq!(reconstruct_path(0, 3, &preds), Some(vec![0, 2, 1, 3]));
        assert_eq!(reconstruct_path(0, 0, &preds), Some(vec![0]));
    }

    #[test]
    fn test_reconstruct_unreachable() {
        let preds = vec![None, None, Some(0)];
        assert_eq!(reconstruct_path(0, 1, &preds), None);
    }

    #[test]
    fn test_reconstruct_cyclic_map_terminates() {
        let preds = vec![None, Some(2), Some(1)];
        assert_eq!(reconstruct_path(0, 1, &preds), None);
    }

    #[test]
    fn test_follow_next_hops() {
        // 3 nodes, 0 -> 1 -> 2
        let n = 3;
        let mut next = vec![None; n * n];
        next[1] = Some(1); // 0 -> 1
        next[2] = Some(1); // 0 -> 2 via 1
        next[n + 2] = Some(2); // 1 -> 2
        assert_eq!(follow_next_hops(0, 2, n, &next), Some(vec![0, 1, 2]));
        assert_eq!(follow_next_hops(2, 0, n, &next), None);
        assert_eq!(follow_next_hops(1, 1, n, &next), Some(vec![1]));
    }
}
