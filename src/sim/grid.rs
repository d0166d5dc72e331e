//! Grid geometry: cells, directions and the square lattice

use serde::{Deserialize, Serialize};

use crate::consts::MAX_COLUMN_COUNT;

/// A grid cell (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell one step away in `direction` (unclamped)
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// True for cells that carry a collectible at session start
    pub fn is_odd_odd(self) -> bool {
        self.x % 2 == 1 && self.y % 2 == 1
    }
}

/// Player heading, in key-mapping order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Right,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Cell delta applied by one step
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }

    /// Quarter turns clockwise from Right (screen y grows downward)
    pub const fn index(self) -> u8 {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }

    /// Heading angle in radians
    pub fn angle(self) -> f32 {
        self.index() as f32 * std::f32::consts::FRAC_PI_2
    }

    /// DOM `KeyboardEvent.key` value for this direction
    pub const fn key(self) -> &'static str {
        match self {
            Direction::Right => "ArrowRight",
            Direction::Down => "ArrowDown",
            Direction::Left => "ArrowLeft",
            Direction::Up => "ArrowUp",
        }
    }

    /// Map a DOM `KeyboardEvent.key` value to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(Direction::Right),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowUp" => Some(Direction::Up),
            _ => None,
        }
    }
}

/// Square lattice of `column_count × column_count` cells, at most
/// `MAX_COLUMN_COUNT` wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub column_count: u32,
}

impl Grid {
    pub fn new(column_count: u32) -> Self {
        Self {
            column_count: column_count.clamp(1, MAX_COLUMN_COUNT),
        }
    }

    /// Highest valid coordinate on either axis
    pub fn max_index(&self) -> i32 {
        self.column_count as i32 - 1
    }

    /// Clamp both coordinates into the grid
    pub fn clamp(&self, cell: Cell) -> Cell {
        let max = self.max_index();
        Cell::new(cell.x.clamp(0, max), cell.y.clamp(0, max))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        let max = self.max_index();
        (0..=max).contains(&cell.x) && (0..=max).contains(&cell.y)
    }

    /// Every cell, row-major
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let n = self.column_count as usize;
        (0..n * n).map(move |i| Cell::new((i % n) as i32, (i / n) as i32))
    }

    /// Initial collectible set: cells with both coordinates odd, in grid order
    pub fn collectibles(&self) -> Vec<Cell> {
        self.cells().filter(|c| c.is_odd_odd()).collect()
    }

    /// Boustrophedon walk from the origin that visits every cell: right along
    /// row 0, down, left along row 1, down, and so on.
    pub fn sweep_route(&self) -> Vec<Direction> {
        let n = self.column_count as usize;
        let mut route = Vec::with_capacity(n * n);
        for row in 0..n {
            let across = if row % 2 == 0 {
                Direction::Right
            } else {
                Direction::Left
            };
            route.extend(std::iter::repeat_n(across, n - 1));
            if row + 1 < n {
                route.push(Direction::Down);
            }
        }
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_direction_from_key() {
        assert_eq!(Direction::from_key("ArrowRight"), Some(Direction::Right));
        assert_eq!(Direction::from_key("ArrowDown"), Some(Direction::Down));
        assert_eq!(Direction::from_key("ArrowLeft"), Some(Direction::Left));
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("a"), None);
        assert_eq!(Direction::from_key("Enter"), None);
    }

    #[test]
    fn test_key_names_roundtrip() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_key(d.key()), Some(d));
        }
    }

    #[test]
    fn test_sweep_route_visits_every_cell() {
        let grid = Grid::new(5);
        let route = grid.sweep_route();
        assert_eq!(route.len(), 24);

        let mut at = Cell::ORIGIN;
        let mut seen = vec![at];
        for d in route {
            at = grid.clamp(at.step(d));
            seen.push(at);
        }
        assert_eq!(at, Cell::new(4, 4));
        assert!(grid.cells().all(|c| seen.contains(&c)));
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(3);
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[3], Cell::new(0, 1));
        assert_eq!(cells[8], Cell::new(2, 2));
    }

    #[test]
    fn test_collectibles_are_odd_odd() {
        let grid = Grid::new(17);
        let points = grid.collectibles();
        // 8 odd values in 0..17 on each axis
        assert_eq!(points.len(), 64);
        assert!(points.iter().all(|c| c.x % 2 == 1 && c.y % 2 == 1));
        assert_eq!(points.first(), Some(&Cell::new(1, 1)));
        assert_eq!(points.last(), Some(&Cell::new(15, 15)));
        assert_eq!(points, grid.collectibles());
    }

    #[test]
    fn test_clamp_corners() {
        let grid = Grid::new(17);
        assert_eq!(grid.clamp(Cell::new(-1, 0)), Cell::new(0, 0));
        assert_eq!(grid.clamp(Cell::new(17, 16)), Cell::new(16, 16));
        assert_eq!(grid.clamp(Cell::new(5, -3)), Cell::new(5, 0));
    }

    #[test]
    fn test_zero_columns_becomes_one() {
        let grid = Grid::new(0);
        assert_eq!(grid.column_count, 1);
        assert!(grid.collectibles().is_empty());
    }

    #[test]
    fn test_huge_column_count_is_capped() {
        let grid = Grid::new(50_000);
        assert_eq!(grid.column_count, MAX_COLUMN_COUNT);
        assert_eq!(grid.max_index(), MAX_COLUMN_COUNT as i32 - 1);
        assert_eq!(grid.cells().count(), (MAX_COLUMN_COUNT * MAX_COLUMN_COUNT) as usize);
        assert_eq!(
            grid.cells().last(),
            Some(Cell::new(grid.max_index(), grid.max_index()))
        );
    }

    proptest! {
        #[test]
        fn step_then_clamp_stays_in_bounds(
            n in 1u32..40,
            x in -5i32..45,
            y in -5i32..45,
            d in 0usize..4,
        ) {
            let grid = Grid::new(n);
            let start = grid.clamp(Cell::new(x, y));
            let next = grid.clamp(start.step(Direction::ALL[d]));
            prop_assert!(grid.contains(next));
            prop_assert!(next.x >= 0 && next.x <= n as i32 - 1);
            prop_assert!(next.y >= 0 && next.y <= n as i32 - 1);
        }
    }
}
