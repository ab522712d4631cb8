use grid_best_first::{solver::GridSolver, AstarSolver, BestFirstSolver, FrontierKind, PathingGrid};
use grid_util::point::Point;

// Both frontier policies of the best-first search pop cells in the same order and so return the
// same route. A* is shown for comparison: in this layout the greedy search heads for the goal
// until the wall stops it and has to double back around it.
fn main() {
    let obstacles = [(1, 1), (1, 2), (2, 1), (3, 4), (4, 4), (5, 1), (5, 4)]
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect::<Vec<_>>();
    let grid = PathingGrid::from_obstacles(6, 6, obstacles);
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(5, 5);

    for kind in [FrontierKind::LinearScan, FrontierKind::BinaryHeap] {
        let solver = BestFirstSolver::with_frontier(kind);
        if let Some(path) = solver.get_path_single_goal(&grid, start, end) {
            println!("{:?}: cost {:.3}, {:?}", kind, solver.path_cost(&path), path);
        }
    }
    let astar = AstarSolver::new();
    if let Some(path) = astar.get_path_single_goal(&grid, start, end) {
        println!("A*: cost {:.3}, {:?}", astar.path_cost(&path), path);
    }
}
