// engine.rs - Generation stepping, sequential and with row coroutines

use std::sync::Arc;

use tokio::runtime::Runtime;

use crate::cell::Cell;
use crate::error::Result;
use crate::grid::{Grid, Row};

/// A cell whose state differs between two generations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellChange<C> {
    pub x: usize,
    pub y: usize,
    pub state: C,
}

/// The next generation together with the cells that changed.
#[derive(Debug, Clone)]
pub struct Generation<C> {
    pub grid: Grid<C>,
    pub changes: Vec<CellChange<C>>,
}

/// Next state of cell `(x, y)`, read from `current` only.
pub fn next_cell<C: Cell>(current: &Grid<C>, x: usize, y: usize) -> C {
    let counts = C::tally(&current.neighbors(x, y));
    current.at(x, y).evolve(counts)
}

/// Next states of row `x`.
pub fn next_row<C: Cell>(current: &Grid<C>, x: usize) -> Row<C> {
    (0..current.height()).map(|y| next_cell(current, x, y)).collect()
}

/// Computes the following generation into fresh storage.
///
/// `current` is never written, so every cell sees the same pre-step state.
pub fn next_generation<C: Cell>(current: &Grid<C>) -> Generation<C> {
    let mut next = Grid::blank(current.width(), current.height());
    for x in 0..current.width() {
        next.put_row(x, next_row(current, x));
    }
    finish(current, next)
}

fn finish<C: Cell>(current: &Grid<C>, next: Grid<C>) -> Generation<C> {
    let changes = diff(current, &next);
    Generation { grid: next, changes }
}

/// Cells of `next` that differ from `current`. Both grids share dimensions.
pub fn diff<C: Cell>(current: &Grid<C>, next: &Grid<C>) -> Vec<CellChange<C>> {
    next.cells()
        .filter(|&(x, y, state)| current.at(x, y) != state)
        .map(|(x, y, state)| CellChange { x, y, state })
        .collect()
}

/// Row coroutine computing one row against the shared snapshot
async fn process_row<C: Cell>(x: usize, current: Arc<Grid<C>>) -> (usize, Row<C>) {
    let row = next_row(&current, x);
    tokio::task::yield_now().await; // Cooperative yielding
    (x, row) // Return (row_id, completed_row)
}

/// Steps grids by running one tokio task per row.
///
/// Tasks only read an immutable snapshot of the current generation and hand
/// back owned rows, so the result is identical to [`next_generation`].
pub struct RowScheduler {
    runtime: Runtime,
}

impl RowScheduler {
    pub fn new() -> Result<Self> {
        Ok(Self {
            runtime: Runtime::new()?,
        })
    }

    pub fn next_generation<C: Cell>(&self, current: &Grid<C>) -> Result<Generation<C>> {
        // Copy the current grid so the tasks can own it
        let snapshot = Arc::new(current.clone());

        let rows = self.runtime.block_on(async {
            // Spawn every row coroutine at once for time-slicing
            let handles: Vec<_> = (0..snapshot.width())
                .map(|x| tokio::spawn(process_row(x, Arc::clone(&snapshot))))
                .collect();

            // Handles are awaited in spawn order, so rows come back in order
            let mut rows = vec![Row::new(); snapshot.width()];
            for handle in handles {
                let (x, row) = handle.await?;
                rows[x] = row;
            }
            Ok::<_, crate::error::LifeError>(rows)
        })?;

        let next = Grid::from_rows(rows)?;
        Ok(finish(current, next))
    }
}
