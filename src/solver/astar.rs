use grid_util::point::Point;
use log::debug;

use crate::astar::astar;
use crate::{pathing_grid::PathingGrid, solver::GridSolver};

/// Shortest-route search with [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Orthogonal
/// steps cost [CARDINAL_COST](crate::CARDINAL_COST) and diagonal steps
/// [DIAGONAL_COST](crate::DIAGONAL_COST); the straight-line estimate never overestimates this,
/// so routes are shortest as long as `heuristic_factor` does not exceed 1.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f64,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl GridSolver for AstarSolver {
    /// The straight-line distance times the heuristic factor.
    fn heuristic(&self, p1: &Point, p2: &Point) -> f64 {
        crate::heuristic(p1, p2) * self.heuristic_factor
    }

    fn get_path_single_goal(
        &self,
        grid: &PathingGrid,
        start: Point,
        goal: Point,
    ) -> Option<Vec<Point>> {
        debug_assert!(grid.in_bounds(start.x, start.y) && grid.in_bounds(goal.x, goal.y));
        debug!("A* search from {} to {}", start, goal);
        astar(
            &start,
            |node| {
                self.successors(grid, node)
                    .into_iter()
                    .map(|p| (p, self.cost(node, &p)))
                    .collect::<Vec<_>>()
            },
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        )
        .map(|(path, _cost)| path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BestFirstSolver, DIAGONAL_COST};

    fn points(coords: &[(i32, i32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn equal_start_goal() {
        let pathing_grid = PathingGrid::from_obstacles(1, 1, Vec::new());
        let start = Point::new(0, 0);
        let path = AstarSolver::new()
            .get_path_single_goal(&pathing_grid, start, start)
            .unwrap();
        assert_eq!(path, vec![start]);
    }

    #[test]
    fn solve_simple_problem() {
        let pathing_grid = PathingGrid::from_obstacles(3, 3, points(&[(1, 1)]));
        let solver = AstarSolver::new();
        let path = solver
            .get_path_single_goal(&pathing_grid, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(path.len(), 4);
        assert!((solver.path_cost(&path) - (2.0 + DIAGONAL_COST)).abs() < 1e-9);
    }

    /// A layout where the greedy search wanders into a pocket before finding its way around.
    #[test]
    fn shorter_than_greedy_route() {
        let obstacles = points(&[(1, 1), (1, 2), (2, 1), (3, 4), (4, 4), (5, 1), (5, 4)]);
        let pathing_grid = PathingGrid::from_obstacles(6, 6, obstacles);
        let start = Point::new(0, 0);
        let goal = Point::new(5, 5);

        let greedy = BestFirstSolver::new();
        let greedy_path = greedy
            .get_path_single_goal(&pathing_grid, start, goal)
            .unwrap();
        assert_eq!(
            greedy_path,
            points(&[
                (0, 0),
                (1, 0),
                (2, 0),
                (3, 1),
                (4, 2),
                (3, 3),
                (2, 4),
                (3, 5),
                (4, 5),
                (5, 5)
            ])
        );

        let astar_solver = AstarSolver::new();
        let astar_path = astar_solver
            .get_path_single_goal(&pathing_grid, start, goal)
            .unwrap();
        let astar_cost = astar_solver.path_cost(&astar_path);
        assert!((astar_cost - (4.0 + 3.0 * DIAGONAL_COST)).abs() < 1e-9);
        assert!(astar_cost < greedy.path_cost(&greedy_path));
    }

    #[test]
    fn no_path_when_enclosed() {
        let pathing_grid = PathingGrid::from_obstacles(3, 1, points(&[(1, 0)]));
        let path =
            AstarSolver::new().get_path_single_goal(&pathing_grid, Point::new(0, 0), Point::new(2, 0));
        assert!(path.is_none());
    }
}
