// config.rs - Run configuration for the driver and for building automata

use crate::error::Result;
use crate::grid::{DEFAULT_HEIGHT, DEFAULT_WIDTH, check_dimensions};

/// Grid size and seeding parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    /// Share of cells seeded alive by `randomize`, in percent.
    pub fill_percent: f64,
    /// Generations the driver runs per variant.
    pub generations: u32,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fill_percent: 50.0,
            generations: 100,
            seed: None,
        }
    }
}

impl LifeConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.width, self.height)
    }
}
