//! Greedy best-first search over an implicit graph.
//!
//! Nodes are ranked by their heuristic value alone; the cost spent to reach a node is never
//! considered and the predecessor recorded when a node is first discovered is never replaced.
use crate::frontier::Frontier;
use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::{debug, info, trace};

use std::hash::Hash;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Walks the predecessor links back from `end` and returns the nodes in start-to-end order.
pub(crate) fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, end: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> Option<usize>,
{
    let mut cursor = Some(end);
    let mut path: Vec<N> = std::iter::from_fn(|| {
        let (node, value) = parents.get_index(cursor?)?;
        cursor = parent(value);
        Some(node.clone())
    })
    .collect();
    path.reverse();
    path
}

/// Runs the search from `start` until `success` accepts an expanded node or the frontier runs
/// dry. `successors` must only yield nodes that may be entered.
///
/// Every discovered node is a key of the predecessor map, whether it still waits in the
/// frontier or has already been expanded, so a successor is only admitted if it has no entry.
pub(crate) fn best_first<N, H, Q, FN, IN, FH, FS>(
    start: &N,
    mut frontier: Q,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    H: PartialOrd,
    Q: Frontier<H>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FH: FnMut(&N) -> H,
    FS: FnMut(&N) -> bool,
{
    let mut parents: FxIndexMap<N, Option<usize>> = FxIndexMap::default();
    parents.insert(start.clone(), None);
    frontier.push(0, heuristic(start));
    let mut expanded = 0;
    while let Some(index) = frontier.pop_min() {
        let successors = {
            let (node, _) = parents.get_index(index)?;
            if success(node) {
                let path = reverse_path(&parents, |&p| p, index);
                debug!(
                    "Goal reached after {} expansions, {} nodes discovered, path of {} nodes",
                    expanded,
                    parents.len(),
                    path.len()
                );
                return Some(path);
            }
            expanded += 1;
            trace!("Expanding node {} ({} left in frontier)", index, frontier.len());
            successors(node)
        };
        for successor in successors {
            if let Vacant(e) = parents.entry(successor) {
                let h = heuristic(e.key());
                let n = e.index();
                e.insert(Some(index));
                frontier.push(n, h);
            }
        }
    }
    info!(
        "Frontier exhausted after {} expansions without reaching the goal",
        expanded
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontier::{HeapFrontier, LinearFrontier};

    // A small directed graph over chars, successors listed in a fixed order.
    fn edges(node: &char) -> Vec<char> {
        match node {
            'S' => vec!['A', 'B'],
            'A' => vec!['C'],
            'B' => vec!['G'],
            'C' => vec!['B', 'G'],
            _ => vec![],
        }
    }

    fn estimate(node: &char) -> u32 {
        match node {
            'S' => 3,
            'A' => 1,
            'B' => 2,
            'C' => 1,
            _ => 0,
        }
    }

    #[test]
    fn start_is_goal() {
        let path = best_first(
            &'S',
            LinearFrontier::default(),
            edges,
            estimate,
            |n| *n == 'S',
        );
        assert_eq!(path, Some(vec!['S']));
    }

    /// B is discovered from S before C reaches it, so its predecessor stays S.
    #[test]
    fn first_discovery_wins() {
        for path in [
            best_first(&'S', LinearFrontier::default(), edges, estimate, |n| *n == 'B'),
            best_first(&'S', HeapFrontier::default(), edges, estimate, |n| *n == 'B'),
        ] {
            assert_eq!(path, Some(vec!['S', 'B']));
        }
    }

    /// The goal is reached through the node with the better estimate, not the shorter route.
    #[test]
    fn greedy_prefers_estimate_over_length() {
        let path = best_first(
            &'S',
            LinearFrontier::default(),
            edges,
            estimate,
            |n| *n == 'G',
        );
        assert_eq!(path, Some(vec!['S', 'A', 'C', 'G']));
    }

    #[test]
    fn unreachable_goal() {
        let path = best_first(
            &'S',
            HeapFrontier::default(),
            edges,
            estimate,
            |n| *n == 'Z',
        );
        assert!(path.is_none());
    }

    #[test]
    fn reverse_path_follows_links() {
        let mut parents: FxIndexMap<char, Option<usize>> = FxIndexMap::default();
        parents.insert('a', None);
        parents.insert('b', Some(0));
        parents.insert('c', Some(0));
        parents.insert('d', Some(2));
        assert_eq!(reverse_path(&parents, |&p| p, 3), vec!['a', 'c', 'd']);
        assert_eq!(reverse_path(&parents, |&p| p, 0), vec!['a']);
    }
}
