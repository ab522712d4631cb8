//! # grid_best_first
//!
//! Route search on a bounded grid containing blocked cells. Cells are 8-connected: a route may
//! step to any of the four orthogonal and four diagonal neighbours of a cell, diagonal steps
//! between two blocked cells included.
//!
//! The default search is a greedy
//! [best-first search](https://en.wikipedia.org/wiki/Best-first_search): it always expands the
//! discovered cell with the smallest
//! [Euclidean distance](https://en.wikipedia.org/wiki/Euclidean_distance) to the goal, ignores
//! the cost already spent, and never reassigns the predecessor of a cell once it has been
//! discovered. Routes found this way are valid but not necessarily shortest. [AstarSolver]
//! is available for callers that need shortest routes.
//!
//! ```
//! use grid_best_first::find_path;
//! use grid_util::point::Point;
//!
//! let obstacles = vec![Point::new(1, 0)];
//! let path = find_path(3, 2, obstacles, Point::new(0, 0), Point::new(2, 0)).unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(2, 0)));
//! ```
mod astar;
mod best_first;
pub mod frontier;
pub mod pathing_grid;
pub mod solver;

pub use frontier::FrontierKind;
pub use pathing_grid::{neighbors_of, PathingGrid};
pub use solver::{astar::AstarSolver, greedy::BestFirstSolver, GridSolver};

use grid_util::point::Point;

/// Inline capacity of neighbour lists, the size of the full 8-neighbourhood.
pub const N_SMALLVEC_SIZE: usize = 8;
/// Cost of an orthogonal step.
pub const CARDINAL_COST: f64 = 1.0;
/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Straight-line distance between two cells.
pub fn heuristic(a: &Point, b: &Point) -> f64 {
    let dx = (b.x - a.x) as f64;
    let dy = (b.y - a.y) as f64;
    dx.hypot(dy)
}

/// Finds a route from `start` to `end` on a `width` x `height` grid, stepping around `obstacles`,
/// using the greedy best-first search of [BestFirstSolver].
///
/// Returns the cells from `start` to `end` inclusive, or [None] if `end` cannot be reached.
/// Both endpoints must lie within the grid and must not be obstacles; this is not checked.
pub fn find_path<I>(
    width: usize,
    height: usize,
    obstacles: I,
    start: Point,
    end: Point,
) -> Option<Vec<Point>>
where
    I: IntoIterator<Item = Point>,
{
    let grid = PathingGrid::from_obstacles(width, height, obstacles);
    BestFirstSolver::new().get_path_single_goal(&grid, start, end)
}
