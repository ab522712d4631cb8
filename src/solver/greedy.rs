use grid_util::point::Point;
use log::debug;

use crate::best_first::best_first;
use crate::frontier::{FrontierKind, HeapFrontier, LinearFrontier};
use crate::{pathing_grid::PathingGrid, solver::GridSolver};

/// Greedy best-first search: expands the discovered cell closest to the goal by straight-line
/// distance and keeps the first predecessor found for every cell. Its routes avoid obstacles but
/// can be longer than necessary around them.
#[derive(Clone, Debug, Default)]
pub struct BestFirstSolver {
    pub frontier: FrontierKind,
}

impl BestFirstSolver {
    pub fn new() -> BestFirstSolver {
        BestFirstSolver {
            frontier: FrontierKind::LinearScan,
        }
    }

    pub fn with_frontier(frontier: FrontierKind) -> BestFirstSolver {
        BestFirstSolver { frontier }
    }
}

impl GridSolver for BestFirstSolver {
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        debug_assert!(grid.in_bounds(start.x, start.y) && grid.in_bounds(goal.x, goal.y));
        debug!(
            "Best-first search from {} to {} ({:?} frontier)",
            start, goal, self.frontier
        );
        let successors = |node: &Point| self.successors(grid, node);
        let heuristic = |node: &Point| self.heuristic(node, &goal);
        let success = |node: &Point| *node == goal;
        match self.frontier {
            FrontierKind::LinearScan => best_first(
                &start,
                LinearFrontier::default(),
                successors,
                heuristic,
                success,
            ),
            FrontierKind::BinaryHeap => best_first(
                &start,
                HeapFrontier::default(),
                successors,
                heuristic,
                success,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    /// Asserts that the case in which start and goal are equal is handled correctly.
    #[test]
    fn equal_start_goal() {
        let pathing_grid = PathingGrid::from_obstacles(1, 1, Vec::new());
        let start = Point::new(0, 0);
        for kind in [FrontierKind::LinearScan, FrontierKind::BinaryHeap] {
            let path = BestFirstSolver::with_frontier(kind)
                .get_path_single_goal(&pathing_grid, start, start)
                .unwrap();
            assert_eq!(path, vec![start]);
        }
    }

    // |S  |
    // | # |
    // |  E|
    #[test]
    fn solve_simple_problem() {
        let pathing_grid = PathingGrid::from_obstacles(3, 3, points(&[(1, 1)]));
        let path = BestFirstSolver::new()
            .get_path_single_goal(&pathing_grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        // Both orthogonal neighbours of the start are equally close, the left-right one is
        // discovered first
        assert_eq!(path, points(&[(0, 0), (1, 0), (2, 1), (2, 2)]));
    }

    #[test]
    fn open_grid_takes_diagonals_first() {
        let pathing_grid = PathingGrid::from_obstacles(5, 5, Vec::new());
        let path = BestFirstSolver::new()
            .get_path_single_goal(&pathing_grid, Point::new(0, 0), Point::new(4, 2))
            .unwrap();
        assert_eq!(path, points(&[(0, 0), (1, 1), (2, 2), (3, 2), (4, 2)]));
    }

    /// The goal is walled in on all eight sides.
    #[test]
    fn enclosed_goal_has_no_path() {
        let walls = points(&[
            (1, 1),
            (2, 1),
            (3, 1),
            (1, 2),
            (3, 2),
            (1, 3),
            (2, 3),
            (3, 3),
        ]);
        let pathing_grid = PathingGrid::from_obstacles(5, 5, walls);
        for kind in [FrontierKind::LinearScan, FrontierKind::BinaryHeap] {
            let path = BestFirstSolver::with_frontier(kind).get_path_single_goal(
                &pathing_grid,
                Point::new(0, 0),
                Point::new(2, 2),
            );
            assert!(path.is_none());
        }
    }

    #[test]
    fn diagonal_squeeze_between_obstacles() {
        let pathing_grid = PathingGrid::from_obstacles(2, 2, points(&[(1, 0), (0, 1)]));
        let path = BestFirstSolver::new()
            .get_path_single_goal(&pathing_grid, Point::new(0, 0), Point::new(1, 1))
            .unwrap();
        assert_eq!(path, points(&[(0, 0), (1, 1)]));
    }
}
