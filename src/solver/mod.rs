use crate::{pathing_grid::PathingGrid, CARDINAL_COST, DIAGONAL_COST, N_SMALLVEC_SIZE};
use grid_util::point::Point;
use itertools::Itertools;
use smallvec::SmallVec;

pub mod astar;
pub mod greedy;

/// A search strategy over a [PathingGrid].
pub trait GridSolver {
    /// Estimated distance between two cells, the straight-line distance by default.
    fn heuristic(&self, p1: &Point, p2: &Point) -> f64 {
        crate::heuristic(p1, p2)
    }

    /// Cost of moving between two cells along the cheapest unobstructed route, taking as many
    /// diagonal steps as possible before going straight.
    fn cost(&self, p1: &Point, p2: &Point) -> f64 {
        let delta_x = (p1.x - p2.x).abs();
        let delta_y = (p1.y - p2.y).abs();
        let straight = (delta_x - delta_y).abs() as f64;
        let diagonal = delta_x.min(delta_y) as f64;
        CARDINAL_COST * straight + DIAGONAL_COST * diagonal
    }

    /// The cells that can be entered from `node`.
    fn successors(&self, grid: &PathingGrid, node: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        grid.walkable_neighbours(node)
    }

    /// Sums the step costs along `path`.
    fn path_cost(&self, path: &[Point]) -> f64 {
        path.iter()
            .tuple_windows()
            .map(|(p1, p2)| self.cost(p1, p2))
            .sum()
    }

    /// Computes a path from `start` to `goal`, both ends included, or [None] if the search
    /// cannot reach `goal`. Both cells must lie on the grid and be free.
    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>>;
}
