//! Maze layout
//!
//! Occupancy is a pure function of the cell coordinate; there is no grid
//! storage. A wall stands on every cell whose x or z is even, which leaves
//! odd/odd cells as open rooms joined only through the outer ring.

use glam::Vec3;

use crate::consts::{CELL_SIZE, MAZE_HALF_EXTENT};

/// Integer cell coordinate on the maze floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// World-space centre of the cube occupying this cell
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.x as f32 * CELL_SIZE, 0.0, self.z as f32 * CELL_SIZE)
    }

    /// True if the cell lies inside the enumerated maze domain
    pub fn in_domain(&self) -> bool {
        (-MAZE_HALF_EXTENT..=MAZE_HALF_EXTENT).contains(&self.x)
            && (-MAZE_HALF_EXTENT..=MAZE_HALF_EXTENT).contains(&self.z)
    }
}

/// Does a wall cube occupy cell (x, z)?
#[inline]
pub fn is_wall(cell_x: i32, cell_z: i32) -> bool {
    cell_x % 2 == 0 || cell_z % 2 == 0
}

/// Every cell of the maze domain, row by row
pub fn cells() -> impl Iterator<Item = Cell> {
    (-MAZE_HALF_EXTENT..=MAZE_HALF_EXTENT)
        .flat_map(|x| (-MAZE_HALF_EXTENT..=MAZE_HALF_EXTENT).map(move |z| Cell::new(x, z)))
}

/// Cells holding a wall cube
pub fn wall_cells() -> impl Iterator<Item = Cell> {
    cells().filter(|c| is_wall(c.x, c.z))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wall_pattern() {
        assert!(is_wall(0, 0));
        assert!(is_wall(0, 3));
        assert!(is_wall(-3, -4));
        assert!(!is_wall(1, 1));
        assert!(!is_wall(-5, 3));
        assert!(!is_wall(-1, -1));
    }

    #[test]
    fn test_wall_count() {
        // 11x11 domain, odd coordinates -5,-3,-1,1,3,5 leave 6x6 open cells
        assert_eq!(cells().count(), 121);
        assert_eq!(wall_cells().count(), 121 - 36);
    }

    #[test]
    fn test_cell_center() {
        assert_eq!(Cell::new(-5, 2).center(), Vec3::new(-10.0, 0.0, 4.0));
        assert_eq!(Cell::new(0, 0).center(), Vec3::ZERO);
    }

    #[test]
    fn test_domain() {
        assert!(Cell::new(5, -5).in_domain());
        assert!(!Cell::new(6, 0).in_domain());
        assert!(cells().all(|c| c.in_domain()));
    }

    proptest! {
        #[test]
        fn prop_wall_iff_any_even(x in -5i32..=5, z in -5i32..=5) {
            prop_assert_eq!(is_wall(x, z), x.rem_euclid(2) == 0 || z.rem_euclid(2) == 0);
        }
    }
}
