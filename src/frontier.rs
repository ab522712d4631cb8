//! Frontier policies for the best-first search.
//!
//! The frontier holds discovered but unexpanded nodes, identified by their discovery index in
//! the predecessor map, together with their estimated distance to the goal. Every node is pushed
//! at most once and discovery indices increase with every push, so both policies pop the same
//! sequence: the smallest estimate first, the earliest discovered node among equal estimates.
//! The A* search also orders its open set with [HeapFrontier], pushing a node again under the
//! same index when its cost drops.
use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Selects the data structure used to pick the next node to expand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrontierKind {
    /// An insertion-ordered list scanned in full on every pop, O(n) per selection.
    #[default]
    LinearScan,
    /// A binary heap keyed by estimate and discovery index, O(log n) per selection.
    BinaryHeap,
}

pub(crate) trait Frontier<H> {
    fn push(&mut self, index: usize, estimate: H);
    fn pop_min(&mut self) -> Option<usize>;
    fn len(&self) -> usize;
}

// Estimates that cannot be ordered (NaN) are treated as equal.
fn compare<H: PartialOrd>(a: &H, b: &H) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub(crate) struct LinearFrontier<H> {
    entries: Vec<(usize, H)>,
}

impl<H> Default for LinearFrontier<H> {
    fn default() -> Self {
        LinearFrontier {
            entries: Vec::new(),
        }
    }
}

impl<H: PartialOrd> Frontier<H> for LinearFrontier<H> {
    fn push(&mut self, index: usize, estimate: H) {
        self.entries.push((index, estimate));
    }

    fn pop_min(&mut self) -> Option<usize> {
        // position_min_by reports the first of several equal minima
        let position = self
            .entries
            .iter()
            .position_min_by(|a, b| compare(&a.1, &b.1))?;
        Some(self.entries.remove(position).0)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

struct SmallestEstimateHolder<H> {
    estimate: H,
    index: usize,
}

impl<H: PartialOrd> Eq for SmallestEstimateHolder<H> {}

impl<H: PartialOrd> PartialEq for SmallestEstimateHolder<H> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<H: PartialOrd> PartialOrd for SmallestEstimateHolder<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H: PartialOrd> Ord for SmallestEstimateHolder<H> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys since BinaryHeap is a max-heap
        compare(&other.estimate, &self.estimate).then_with(|| other.index.cmp(&self.index))
    }
}

pub(crate) struct HeapFrontier<H> {
    heap: BinaryHeap<SmallestEstimateHolder<H>>,
}

impl<H: PartialOrd> Default for HeapFrontier<H> {
    fn default() -> Self {
        HeapFrontier {
            heap: BinaryHeap::new(),
        }
    }
}

impl<H: PartialOrd> Frontier<H> for HeapFrontier<H> {
    fn push(&mut self, index: usize, estimate: H) {
        self.heap.push(SmallestEstimateHolder { estimate, index });
    }

    fn pop_min(&mut self) -> Option<usize> {
        self.heap.pop().map(|holder| holder.index)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
