use grid_best_first::{find_path, PathingGrid};
use grid_util::point::Point;

// In this example a path is found on a 10x10 grid with four obstacles
// from S = (1, 1) to E = (5, 4).
fn main() {
    let obstacles = vec![
        Point::new(2, 2),
        Point::new(3, 4),
        Point::new(3, 3),
        Point::new(7, 7),
    ];
    let start = Point::new(1, 1);
    let end = Point::new(5, 4);
    println!("{}", PathingGrid::from_obstacles(10, 10, obstacles.clone()));
    match find_path(10, 10, obstacles, start, end) {
        Some(path) => {
            println!("A path has been found:");
            for p in path {
                println!("{:?}", p);
            }
        }
        None => println!("No path found"),
    }
}
