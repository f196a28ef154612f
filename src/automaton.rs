// automaton.rs - Caller-owned automaton and its lifecycle operations
//
// Every mutating operation first updates the grid and then notifies the
// surface for each written cell. Operations that can fail validate their
// input before touching anything.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::cell::{Cell, PlaneSet};
use crate::config::LifeConfig;
use crate::engine::{self, Generation, RowScheduler};
use crate::error::{LifeError, Result};
use crate::grid::{Grid, check_dimensions};
use crate::patterns::Pattern;
use crate::surface::Surface;

/// Binary Game of Life.
pub type Life<S> = Automaton<bool, S>;

/// Three overlaid Game of Life planes packed into 8 states.
pub type LayeredLife<S> = Automaton<PlaneSet, S>;

/// A grid plus the surface kept in sync with it.
///
/// ```
/// use torus_life::{Life, LayeredLife, NullSurface, Recorder, patterns::BLINKER};
///
/// let mut life = Life::with_seed(5, 5, Recorder::new(), 7).unwrap();
/// life.stamp(&BLINKER, 2, 1, true).unwrap();
/// life.step();
/// assert_eq!(life.population(), 3);
///
/// let mut layered = LayeredLife::with_seed(10, 10, NullSurface, 7).unwrap();
/// layered.randomize(50.0);
/// layered.step();
/// ```
pub struct Automaton<C: Cell, S: Surface> {
    grid: Grid<C>,
    surface: S,
    rng: StdRng,
    generation: u64,
}

impl<C: Cell, S: Surface> Automaton<C, S> {
    /// All-dead automaton seeded from the OS.
    pub fn new(width: usize, height: usize, surface: S) -> Result<Self> {
        Ok(Self::with_rng(Grid::new(width, height)?, surface, StdRng::from_os_rng()))
    }

    /// All-dead automaton with a reproducible RNG.
    pub fn with_seed(width: usize, height: usize, surface: S, seed: u64) -> Result<Self> {
        Ok(Self::with_rng(
            Grid::new(width, height)?,
            surface,
            StdRng::seed_from_u64(seed),
        ))
    }

    pub fn from_config(config: &LifeConfig, surface: S) -> Result<Self> {
        config.validate()?;
        match config.seed {
            Some(seed) => Self::with_seed(config.width, config.height, surface, seed),
            None => Self::new(config.width, config.height, surface),
        }
    }

    /// Automaton starting from an existing grid.
    pub fn from_grid(grid: Grid<C>, surface: S) -> Self {
        Self::with_rng(grid, surface, StdRng::from_os_rng())
    }

    fn with_rng(grid: Grid<C>, surface: S, rng: StdRng) -> Self {
        let mut automaton = Self {
            grid,
            surface,
            rng,
            generation: 0,
        };
        automaton.surface.create(automaton.height(), automaton.width());
        automaton.repaint();
        automaton
    }

    pub fn grid(&self) -> &Grid<C> {
        &self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Steps taken since creation or the last reset/randomize.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn get(&self, x: usize, y: usize) -> Result<C> {
        self.grid.get(x, y)
    }

    pub fn set(&mut self, x: usize, y: usize, state: C) -> Result<()> {
        self.grid.set(x, y, state)?;
        self.paint(x, y);
        Ok(())
    }

    /// Advances one cell to its next toggle state and returns it.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<C> {
        let next = self.grid.get(x, y)?.toggled();
        self.set(x, y, next)?;
        Ok(next)
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        let next = engine::next_generation(&self.grid);
        self.advance(next);
    }

    /// Advances one generation, computing rows on the scheduler's workers.
    pub fn step_with(&mut self, scheduler: &RowScheduler) -> Result<()> {
        let next = scheduler.next_generation(&self.grid)?;
        self.advance(next);
        Ok(())
    }

    /// Advances `n` generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    fn advance(&mut self, next: Generation<C>) {
        self.grid = next.grid;
        self.generation += 1;
        trace!(
            generation = self.generation,
            changed = next.changes.len(),
            "stepped"
        );
        for change in &next.changes {
            self.surface.color_cell(change.x, change.y, change.state.color());
        }
    }

    /// Seeds roughly `percent` of the cells alive.
    ///
    /// Percentages are clamped to `[0, 100]`; NaN counts as 0.
    pub fn randomize(&mut self, percent: f64) {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };

        for x in 0..self.width() {
            for y in 0..self.height() {
                let roll: f64 = self.rng.random_range(0.0..100.0);
                if roll < percent {
                    let state = C::spawn(&mut self.rng);
                    self.write(x, y, state);
                } else if self.grid.at(x, y).is_alive() {
                    self.write(x, y, C::default());
                }
            }
        }
        self.generation = 0;
        debug!(percent, population = self.population(), "randomized grid");
    }

    /// Kills every cell.
    pub fn reset(&mut self) {
        for x in 0..self.width() {
            for y in 0..self.height() {
                if self.grid.at(x, y).is_alive() {
                    self.write(x, y, C::default());
                }
            }
        }
        self.generation = 0;
        debug!("reset grid");
    }

    /// Changes the grid size, keeping the cells both sizes share.
    ///
    /// Zero dimensions are rejected and leave the automaton untouched. On
    /// success the surface is recreated and fully repainted.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        check_dimensions(width, height)?;
        let (old_width, old_height) = (self.width(), self.height());
        self.grid = self.grid.resized(width, height)?;
        self.surface.create(height, width);
        self.repaint();
        debug!(old_width, old_height, width, height, "resized grid");
        Ok(())
    }

    /// Sends every cell's color to the surface.
    pub fn repaint(&mut self) {
        for (x, y, state) in self.grid.cells() {
            self.surface.color_cell(x, y, state.color());
        }
    }

    /// Writes `state` into every cell of `pattern` placed at `(x, y)`,
    /// wrapping around the edges.
    pub fn stamp(&mut self, pattern: &Pattern, x: usize, y: usize, state: C) -> Result<()> {
        if !self.grid.contains(x, y) {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        let (width, height) = (self.width(), self.height());
        for (cx, cy) in pattern.placed((x, y), width, height) {
            self.write(cx, cy, state);
        }
        debug!(pattern = pattern.name, x, y, "stamped pattern");
        Ok(())
    }

    fn write(&mut self, x: usize, y: usize, state: C) {
        self.grid.put(x, y, state);
        self.paint(x, y);
    }

    fn paint(&mut self, x: usize, y: usize) {
        let color = self.grid.at(x, y).color();
        self.surface.color_cell(x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{BLINKER, GLIDER};
    use crate::surface::{DEAD_COLOR, LIVE_COLOR, NullSurface, PLANE_PALETTE, Recorder};

    fn life(codes: &[&[u8]]) -> Life<Recorder> {
        Automaton::from_grid(Grid::from_codes(codes).unwrap(), Recorder::new())
    }

    #[test]
    fn creation_creates_and_paints_surface() {
        let life = Life::with_seed(3, 2, Recorder::new(), 1).unwrap();
        let surface = life.surface();
        assert_eq!(surface.creates, vec![(2, 3)]);
        assert_eq!(surface.painted.len(), 6);
        assert!(surface.painted.iter().all(|&(_, _, color)| color == DEAD_COLOR));
    }

    #[test]
    fn set_paints_the_cell() {
        let mut life = Life::with_seed(2, 2, Recorder::new(), 1).unwrap();
        life.surface_mut().clear();
        life.set(1, 0, true).unwrap();
        assert_eq!(life.surface().painted, vec![(1, 0, LIVE_COLOR)]);
        assert!(life.get(1, 0).unwrap());
    }

    #[test]
    fn out_of_range_set_changes_nothing() {
        let mut life = Life::with_seed(2, 2, Recorder::new(), 1).unwrap();
        life.surface_mut().clear();
        assert!(matches!(life.set(2, 0, true), Err(LifeError::OutOfBounds { .. })));
        assert!(life.toggle(0, 5).is_err());
        assert!(life.surface().painted.is_empty());
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn binary_toggle_flips() {
        let mut life = life(&[&[0]]);
        assert!(life.toggle(0, 0).unwrap());
        assert!(!life.toggle(0, 0).unwrap());
    }

    #[test]
    fn layered_toggle_wraps_after_seven() {
        let grid = Grid::from_codes(&[[7u8]]).unwrap();
        let mut life = LayeredLife::from_grid(grid, Recorder::new());
        assert_eq!(life.toggle(0, 0).unwrap(), PlaneSet::EMPTY);
        assert_eq!(life.toggle(0, 0).unwrap().bits(), 1);
        assert_eq!(life.surface().last_color(0, 0), Some(PLANE_PALETTE[1]));
    }

    #[test]
    fn step_paints_only_changed_cells() {
        let mut life = life(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 1, 0, 0],
            &[0, 0, 0, 0, 0],
        ]);
        life.surface_mut().clear();
        life.step();
        assert_eq!(life.generation(), 1);
        assert_eq!(life.surface().painted.len(), 4);
        assert_eq!(life.surface().last_color(2, 1), Some(LIVE_COLOR));
        assert_eq!(life.surface().last_color(1, 2), Some(DEAD_COLOR));
    }

    #[test]
    fn reset_paints_only_live_cells() {
        let mut life = life(&[&[1, 0], &[1, 1]]);
        life.surface_mut().clear();
        life.reset();
        assert_eq!(life.population(), 0);
        assert_eq!(life.surface().painted.len(), 3);
    }

    #[test]
    fn randomize_clamps_percent() {
        let mut life = Life::with_seed(6, 6, NullSurface, 3).unwrap();
        life.randomize(250.0);
        assert_eq!(life.population(), 36);
        life.randomize(-5.0);
        assert_eq!(life.population(), 0);
        life.randomize(100.0);
        life.randomize(f64::NAN);
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn randomize_layered_uses_nonzero_states() {
        let mut life = LayeredLife::with_seed(5, 5, NullSurface, 11).unwrap();
        life.randomize(100.0);
        assert!(life.grid().cells().all(|(_, _, state)| (1..=7).contains(&state.bits())));
    }

    #[test]
    fn randomize_resets_generation() {
        let mut life = Life::with_seed(4, 4, NullSurface, 5).unwrap();
        life.steps(3);
        assert_eq!(life.generation(), 3);
        life.randomize(30.0);
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn invalid_resize_leaves_everything_intact() {
        let mut life = life(&[&[1, 0], &[0, 1]]);
        life.surface_mut().clear();
        assert!(matches!(
            life.resize(0, 4),
            Err(LifeError::InvalidDimensions { width: 0, height: 4 })
        ));
        assert_eq!(life.grid().codes(), vec![vec![1, 0], vec![0, 1]]);
        assert!(life.surface().creates.is_empty());
        assert!(life.surface().painted.is_empty());
    }

    #[test]
    fn oversized_resize_is_rejected_without_panicking() {
        let mut life = life(&[&[1, 0], &[0, 1]]);
        life.surface_mut().clear();
        assert!(matches!(
            life.resize(usize::MAX, 1),
            Err(LifeError::InvalidDimensions { .. })
        ));
        assert_eq!(life.grid().codes(), vec![vec![1, 0], vec![0, 1]]);
        assert!(life.surface().creates.is_empty());
    }

    #[test]
    fn resize_recreates_and_repaints_surface() {
        let mut life = life(&[&[1]]);
        life.surface_mut().clear();
        life.resize(3, 2).unwrap();
        assert_eq!(life.surface().creates, vec![(2, 3)]);
        assert_eq!(life.surface().painted.len(), 6);
        assert_eq!(life.grid().codes(), vec![vec![1, 0], vec![0, 0], vec![0, 0]]);
    }

    #[test]
    fn blinker_oscillates() {
        let mut life = Life::with_seed(5, 5, NullSurface, 0).unwrap();
        life.stamp(&BLINKER, 2, 1, true).unwrap();
        let start = life.grid().clone();
        life.step();
        assert_ne!(life.grid(), &start);
        life.step();
        assert_eq!(life.grid(), &start);
    }

    #[test]
    fn glider_travels_around_the_torus() {
        let mut life = Life::with_seed(8, 8, NullSurface, 0).unwrap();
        life.stamp(&GLIDER, 0, 0, true).unwrap();
        let start = life.grid().clone();

        life.steps(4);
        let mut shifted = Life::with_seed(8, 8, NullSurface, 0).unwrap();
        shifted.stamp(&GLIDER, 1, 1, true).unwrap();
        assert_eq!(life.grid(), shifted.grid());

        life.steps(28);
        assert_eq!(life.grid(), &start);
    }

    #[test]
    fn stamp_rejects_origin_outside_grid() {
        let mut life = Life::with_seed(3, 3, NullSurface, 0).unwrap();
        assert!(life.stamp(&GLIDER, 3, 0, true).is_err());
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn step_with_scheduler_matches_step() {
        let scheduler = RowScheduler::new().unwrap();
        let mut sequential = Life::with_seed(12, 9, NullSurface, 42).unwrap();
        sequential.randomize(40.0);
        let mut concurrent = Life::from_grid(sequential.grid().clone(), NullSurface);
        for _ in 0..10 {
            sequential.step();
            concurrent.step_with(&scheduler).unwrap();
            assert_eq!(sequential.grid(), concurrent.grid());
        }
        assert_eq!(concurrent.generation(), 10);
    }
}
