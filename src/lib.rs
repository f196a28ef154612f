// lib.rs - Conway's Game of Life on a torus, binary and multi-plane

pub mod automaton;
pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;
pub mod surface;
pub mod topology;

pub use automaton::{Automaton, LayeredLife, Life};
pub use cell::{Cell, Plane, PlaneSet};
pub use config::LifeConfig;
pub use engine::{CellChange, Generation, RowScheduler, next_generation};
pub use error::{LifeError, Result};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use surface::{NullSurface, Recorder, Surface, TracingSurface};
pub use topology::Coord;
