//! Cost-aware A* search, the shortest-route counterpart of [best_first](crate::best_first).
//! Unlike the greedy search it orders the open set by accumulated cost plus estimate and
//! re-parents a node whenever a cheaper route to it turns up.
use crate::best_first::{reverse_path, FxIndexMap};
use crate::frontier::{Frontier, HeapFrontier};
use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, info, trace};
use num_traits::Zero;
use std::hash::Hash;

/// What is known about a discovered node: the predecessor on its cheapest route so far, the
/// cost of that route, and whether the node has been expanded.
struct Discovered<C> {
    parent: Option<usize>,
    cost: C,
    expanded: bool,
}

/// Runs A* from `start`, returning the cheapest path to a node accepted by `success` along with
/// its cost. `successors` yields each enterable neighbour with the cost of the step to it.
///
/// A node whose cost drops after it was pushed is pushed again under the same discovery index.
/// The entry with the smaller estimate pops first, and any later pop of an expanded node is
/// skipped.
pub(crate) fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + PartialOrd + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut open = HeapFrontier::default();
    let mut parents: FxIndexMap<N, Discovered<C>> = FxIndexMap::default();
    parents.insert(
        start.clone(),
        Discovered {
            parent: None,
            cost: Zero::zero(),
            expanded: false,
        },
    );
    open.push(0, heuristic(start));
    while let Some(index) = open.pop_min() {
        let (node, discovered) = parents.get_index_mut(index)?;
        if discovered.expanded {
            continue;
        }
        let cost = discovered.cost;
        if success(node) {
            let path = reverse_path(&parents, |d| d.parent, index);
            debug!(
                "Goal reached with {} nodes discovered, path of {} nodes",
                parents.len(),
                path.len()
            );
            return Some((path, cost));
        }
        discovered.expanded = true;
        trace!("Expanding node {} ({} entries open)", index, open.len());
        for (successor, move_cost) in successors(node) {
            let new_cost = cost + move_cost;
            let n = match parents.entry(successor) {
                Vacant(e) => {
                    let n = e.index();
                    e.insert(Discovered {
                        parent: Some(index),
                        cost: new_cost,
                        expanded: false,
                    });
                    n
                }
                Occupied(mut e) => {
                    let known = e.get_mut();
                    if known.expanded || new_cost >= known.cost {
                        continue;
                    }
                    known.parent = Some(index);
                    known.cost = new_cost;
                    e.index()
                }
            };
            let (successor, _) = parents.get_index(n)?;
            open.push(n, new_cost + heuristic(successor));
        }
    }
    info!("Open set exhausted without reaching the goal");
    None
}
