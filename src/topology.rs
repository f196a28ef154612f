// topology.rs - Toroidal neighborhood and live-neighbor counts

use crate::cell::{Cell, Plane, PlaneSet};
use crate::error::Result;
use crate::grid::Grid;

/// `(x, y)` cell coordinate.
pub type Coord = (usize, usize);

/// The eight wrapped neighbors of `(x, y)` on a `width x height` torus.
///
/// `(x, y)` must already be in range.
pub fn wrapped_neighbors(width: usize, height: usize, x: usize, y: usize) -> [Coord; 8] {
    let top = if y == 0 { height - 1 } else { y - 1 };
    let bottom = if y + 1 < height { y + 1 } else { 0 };
    let left = if x == 0 { width - 1 } else { x - 1 };
    let right = if x + 1 < width { x + 1 } else { 0 };

    [
        (left, top),
        (left, y),
        (left, bottom),
        (right, top),
        (right, y),
        (right, bottom),
        (x, top),
        (x, bottom),
    ]
}

/// Live cells among `cells`.
pub fn count_alive<C: Cell>(cells: &[C]) -> u8 {
    cells.iter().filter(|cell| cell.is_alive()).count() as u8
}

/// Live cells among `cells`, counted separately for planes A, B and C.
pub fn count_planes(cells: &[PlaneSet]) -> [u8; 3] {
    let mut counts = [0u8; 3];
    for cell in cells {
        for plane in Plane::ALL {
            if cell.plane(plane) {
                counts[plane.index()] += 1;
            }
        }
    }
    counts
}

impl<C: Cell> Grid<C> {
    /// Wrapped neighbor coordinates of an in-range cell.
    pub fn neighbor_coords(&self, x: usize, y: usize) -> Result<[Coord; 8]> {
        self.get(x, y)?;
        Ok(wrapped_neighbors(self.width(), self.height(), x, y))
    }

    /// States of the eight neighbors, in [`wrapped_neighbors`] order.
    pub(crate) fn neighbors(&self, x: usize, y: usize) -> [C; 8] {
        wrapped_neighbors(self.width(), self.height(), x, y).map(|(nx, ny)| self.at(nx, ny))
    }

    /// Number of live neighbors, in `0..=8`.
    pub fn alive_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        self.get(x, y)?;
        Ok(count_alive(&self.neighbors(x, y)))
    }
}

impl Grid<PlaneSet> {
    /// Live neighbors per plane, each in `0..=8`.
    pub fn plane_neighbors(&self, x: usize, y: usize) -> Result<[u8; 3]> {
        self.get(x, y)?;
        Ok(count_planes(&self.neighbors(x, y)))
    }
}
