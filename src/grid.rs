// grid.rs - Grid store for the toroidal automaton

use crate::cell::Cell;
use crate::error::{LifeError, Result};

// Startup grid size
pub const DEFAULT_WIDTH: usize = 40; // Number of rows
pub const DEFAULT_HEIGHT: usize = 40; // Cells per row

pub type Row<C> = Vec<C>;

// Largest cell count whose row headers and cells stay addressable
const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<Row<u8>>();

/// One generation of cells, addressed `cells[x][y]`.
///
/// There are always `width` rows of exactly `height` cells, and both are at
/// least one.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<C> {
    rows: Vec<Row<C>>,
    width: usize,
    height: usize,
}

impl<C: Cell> Grid<C> {
    /// All-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self::blank(width, height))
    }

    /// Builds a grid from literal rows. Rows must be non-empty and equally long.
    pub fn from_rows(rows: Vec<Row<C>>) -> Result<Self> {
        let width = rows.len();
        let height = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;
        if rows.iter().any(|row| row.len() != height) {
            return Err(LifeError::RaggedRows);
        }
        Ok(Self { rows, width, height })
    }

    /// Builds a grid from numeric states, e.g. `[[0, 1, 0], [1, 1, 1]]`.
    pub fn from_codes<R: AsRef<[u8]>>(codes: &[R]) -> Result<Self> {
        let rows = codes
            .iter()
            .map(|row| row.as_ref().iter().map(|&code| C::from_code(code)).collect())
            .collect::<Result<Vec<Row<C>>>>()?;
        Self::from_rows(rows)
    }

    pub(crate) fn blank(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![C::default(); height]; width],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Row<C>] {
        &self.rows
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<C> {
        self.check(x, y)?;
        Ok(self.rows[x][y])
    }

    pub fn set(&mut self, x: usize, y: usize, state: C) -> Result<()> {
        self.check(x, y)?;
        self.rows[x][y] = state;
        Ok(())
    }

    // Unchecked access for coordinates produced by the topology
    pub(crate) fn at(&self, x: usize, y: usize) -> C {
        self.rows[x][y]
    }

    pub(crate) fn put(&mut self, x: usize, y: usize, state: C) {
        self.rows[x][y] = state;
    }

    pub(crate) fn put_row(&mut self, x: usize, row: Row<C>) {
        debug_assert_eq!(row.len(), self.height);
        self.rows[x] = row;
    }

    /// Every cell with its coordinate, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, C)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(x, row)| row.iter().enumerate().map(move |(y, &state)| (x, y, state)))
    }

    /// Number of live (nonzero) cells.
    pub fn population(&self) -> usize {
        self.cells().filter(|&(_, _, state)| state.is_alive()).count()
    }

    /// Numeric view of the grid.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|state| state.code()).collect())
            .collect()
    }

    /// Copy of this grid at a new size. Overlapping cells keep their state,
    /// new cells are dead, cells past the new extents are dropped.
    pub fn resized(&self, width: usize, height: usize) -> Result<Self> {
        check_dimensions(width, height)?;
        let mut next = Self::blank(width, height);
        for (old, new) in self.rows.iter().zip(next.rows.iter_mut()) {
            let keep = old.len().min(height);
            new[..keep].copy_from_slice(&old[..keep]);
        }
        Ok(next)
    }

    /// True when the row count is `width` and every row holds `height` cells.
    pub fn dimensions_hold(&self) -> bool {
        self.rows.len() == self.width && self.rows.iter().all(|row| row.len() == self.height)
    }

    fn check(&self, x: usize, y: usize) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<()> {
    let cells = width.checked_mul(height);
    if width == 0 || height == 0 || cells.is_none_or(|cells| cells > MAX_CELLS) {
        return Err(LifeError::InvalidDimensions { width, height });
    }
    Ok(())
}
