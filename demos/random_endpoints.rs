use grid_best_first::{solver::GridSolver, BestFirstSolver, PathingGrid};
use grid_util::grid::Grid;
use grid_util::point::Point;
use rand::prelude::*;

// Picks a random free start and a different random free end on the grid and searches between
// them. The random source is seeded explicitly, pass a seed as the first argument to vary it.
fn random_free_point<R: Rng>(grid: &PathingGrid, rng: &mut R, exclude: Option<Point>) -> Point {
    loop {
        let p = Point::new(
            rng.gen_range(0..grid.width()) as i32,
            rng.gen_range(0..grid.height()) as i32,
        );
        if !grid.is_blocked(&p) && Some(p) != exclude {
            return p;
        }
    }
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);
    let obstacles = vec![
        Point::new(2, 2),
        Point::new(3, 4),
        Point::new(3, 3),
        Point::new(7, 7),
    ];
    let grid = PathingGrid::from_obstacles(10, 10, obstacles);
    let start = random_free_point(&grid, &mut rng, None);
    let end = random_free_point(&grid, &mut rng, Some(start));
    println!("Start: {start}; End: {end}");
    match BestFirstSolver::new().get_path_single_goal(&grid, start, end) {
        Some(path) => println!("Path found: {:?}", path),
        None => println!("No path found"),
    }
}
