use crate::N_SMALLVEC_SIZE;
use core::fmt;
use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Lists the neighbours of `point` that lie within a `width` x `height` grid. The four
/// orthogonal neighbours come first (left, right, up, down), followed by the diagonal ones
/// (up-left, down-left, up-right, down-right). Here "up" is the smaller y coordinate.
pub fn neighbors_of(
    point: &Point,
    width: usize,
    height: usize,
) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
    let (x, y) = (point.x, point.y);
    let left = x > 0;
    let right = x < width as i32 - 1;
    let up = y > 0;
    let down = y < height as i32 - 1;
    [
        (left, -1, 0),
        (right, 1, 0),
        (up, 0, -1),
        (down, 0, 1),
        (left && up, -1, -1),
        (left && down, -1, 1),
        (right && up, 1, -1),
        (right && down, 1, 1),
    ]
    .into_iter()
    .filter(|&(inside, _, _)| inside)
    .map(|(_, dx, dy)| Point::new(x + dx, y + dy))
    .collect()
}

/// [PathingGrid] stores which cells are blocked ([true]) or free ([false]) in a [BoolGrid].
/// The 8-connected components of the free cells, kept in a [UnionFind] structure, answer
/// reachability queries without searching; they are only built on request.
/// Implements [Grid] by building on [BoolGrid].
#[derive(Clone, Debug, Default)]
pub struct PathingGrid {
    pub grid: BoolGrid,
    pub components: Option<UnionFind<usize>>,
}

impl PathingGrid {
    /// Builds a free `width` x `height` grid with the given cells blocked. Obstacles outside the
    /// grid are skipped.
    pub fn from_obstacles<I>(width: usize, height: usize, obstacles: I) -> PathingGrid
    where
        I: IntoIterator<Item = Point>,
    {
        let mut pathing_grid = PathingGrid::new(width, height, false);
        for obstacle in obstacles {
            if pathing_grid.in_bounds(obstacle.x, obstacle.y) {
                pathing_grid
                    .grid
                    .set(obstacle.x as usize, obstacle.y as usize, true);
            } else {
                warn!(
                    "Ignoring obstacle {} outside of the {}x{} grid",
                    obstacle, width, height
                );
            }
        }
        pathing_grid
    }

    /// Builds the connected components up front, for callers issuing many reachability queries.
    pub fn with_components(mut self) -> PathingGrid {
        self.generate_components();
        self
    }

    /// All in-bounds neighbours of `point`, blocked or not, in the order of [neighbors_of].
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        neighbors_of(point, self.width(), self.height())
    }

    /// The neighbours of `point` that can be moved to.
    pub fn walkable_neighbours(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        self.neighborhood_points(point)
            .into_iter()
            .filter(|p| !self.grid.get(p.x as usize, p.y as usize))
            .collect()
    }

    pub fn can_move_to(&self, pos: Point) -> bool {
        self.in_bounds(pos.x, pos.y) && !self.grid.get(pos.x as usize, pos.y as usize)
    }

    /// Cells outside the grid count as blocked.
    pub fn is_blocked(&self, pos: &Point) -> bool {
        !self.can_move_to(*pos)
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    fn ix(&self, point: &Point) -> usize {
        self.grid.get_ix(point.x as usize, point.y as usize)
    }

    /// Retrieves the component id a given [Point] belongs to. Builds the components on the fly
    /// if they have not been generated.
    pub fn get_component(&self, point: &Point) -> usize {
        match &self.components {
            Some(components) => components.find(self.ix(point)),
            None => self.build_components().find(self.ix(point)),
        }
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            let (start_ix, goal_ix) = (self.ix(start), self.ix(goal));
            match &self.components {
                Some(components) => !components.equiv(start_ix, goal_ix),
                None => !self.build_components().equiv(start_ix, goal_ix),
            }
        } else {
            true
        }
    }

    /// Stores a freshly built [UnionFind] structure for later reachability queries.
    pub fn generate_components(&mut self) {
        self.components = Some(self.build_components());
    }

    /// Links up free grid neighbours to the same components.
    fn build_components(&self) -> UnionFind<usize> {
        let w = self.width();
        let h = self.height();
        debug!("Generating connected components of a {}x{} grid", w, h);
        let mut components = UnionFind::new(w * h);
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if self.is_blocked(&point) {
                    continue;
                }
                let parent_ix = self.ix(&point);
                // Only forward neighbours, the backward ones link up from the other side
                [
                    Point::new(x, y + 1),
                    Point::new(x + 1, y - 1),
                    Point::new(x + 1, y),
                    Point::new(x + 1, y + 1),
                ]
                .into_iter()
                .filter(|p| self.can_move_to(*p))
                .for_each(|p| {
                    components.union(parent_ix, self.ix(&p));
                });
            }
        }
        components
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            let row = (0..self.width())
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl Grid<bool> for PathingGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        PathingGrid {
            grid: BoolGrid::new(width, height, default_value),
            components: None,
        }
    }
    fn get(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y)
    }
    /// Sets whether a cell is blocked. Generated components no longer describe the grid
    /// afterwards and are dropped.
    fn set(&mut self, x: usize, y: usize, blocked: bool) {
        self.grid.set(x, y, blocked);
        self.components = None;
    }
    fn width(&self) -> usize {
        self.grid.width
    }
    fn height(&self) -> usize {
        self.grid.height
    }
}
