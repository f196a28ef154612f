// cell.rs - Cell states for the binary and multi-plane variants
//
// The binary variant stores a plain `bool`. The multi-plane variant stores a
// `PlaneSet`: three independent binary automata packed into the low three
// bits of a `u8`, bit 0 for plane A, bit 1 for plane B and bit 2 for plane C.
// Each plane evolves with the same rule and never looks at the other two.

use std::fmt;

use egui::Color32;
use rand::Rng;

use crate::error::{LifeError, Result};
use crate::rules::next_state;
use crate::surface::{BINARY_PALETTE, PLANE_PALETTE};
use crate::topology::{count_alive, count_planes};

/// Behavior shared by every cell state the engine can evolve.
pub trait Cell: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Live-neighbor tally the rule consumes: one count, or one per plane.
    type Counts: Copy + fmt::Debug;

    /// Nonzero cells are alive.
    fn is_alive(self) -> bool;

    /// Numeric form of the state.
    fn code(self) -> u8;

    /// Parses a numeric state, rejecting codes the variant cannot hold.
    fn from_code(code: u8) -> Result<Self>;

    /// Aggregates the eight neighbors of a cell.
    fn tally(neighbors: &[Self; 8]) -> Self::Counts;

    /// Applies the transition rule.
    fn evolve(self, counts: Self::Counts) -> Self;

    /// State after a single user toggle.
    fn toggled(self) -> Self;

    /// Random live state used when seeding a grid.
    fn spawn<R: Rng>(rng: &mut R) -> Self;

    /// Color handed to the rendering surface.
    fn color(self) -> Color32;
}

impl Cell for bool {
    type Counts = u8;

    fn is_alive(self) -> bool {
        self
    }

    fn code(self) -> u8 {
        self as u8
    }

    fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(LifeError::InvalidState(other)),
        }
    }

    fn tally(neighbors: &[Self; 8]) -> u8 {
        count_alive(neighbors)
    }

    fn evolve(self, count: u8) -> Self {
        next_state(self, count)
    }

    fn toggled(self) -> Self {
        !self
    }

    fn spawn<R: Rng>(_rng: &mut R) -> Self {
        true
    }

    fn color(self) -> Color32 {
        BINARY_PALETTE[self as usize]
    }
}

/// One of the three overlaid automata of the multi-plane variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    A,
    B,
    C,
}

impl Plane {
    /// All planes, in bit order.
    pub const ALL: [Plane; 3] = [Plane::A, Plane::B, Plane::C];

    /// Bit position of the plane inside a [`PlaneSet`].
    pub fn bit(self) -> u8 {
        match self {
            Plane::A => 0,
            Plane::B => 1,
            Plane::C => 2,
        }
    }

    pub fn mask(self) -> u8 {
        1 << self.bit()
    }

    /// Position of this plane's count in a `[u8; 3]` tally.
    pub fn index(self) -> usize {
        self.bit() as usize
    }
}

/// Packed state of the multi-plane variant, always in `0..=7`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlaneSet(u8);

impl PlaneSet {
    pub const EMPTY: PlaneSet = PlaneSet(0);
    pub const FULL: PlaneSet = PlaneSet(0b111);

    /// Wraps raw bits, rejecting anything above 7.
    pub fn new(bits: u8) -> Result<Self> {
        if bits > Self::FULL.0 {
            return Err(LifeError::InvalidState(bits));
        }
        Ok(PlaneSet(bits))
    }

    /// Packs three plane states, `a + 2b + 4c`.
    pub fn from_planes(a: bool, b: bool, c: bool) -> Self {
        PlaneSet((a as u8) | (b as u8) << 1 | (c as u8) << 2)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether the given plane is alive in this cell.
    pub fn plane(self, plane: Plane) -> bool {
        self.0 & plane.mask() != 0
    }

    /// Copy of this state with one plane set or cleared.
    pub fn with_plane(self, plane: Plane, alive: bool) -> Self {
        if alive {
            PlaneSet(self.0 | plane.mask())
        } else {
            PlaneSet(self.0 & !plane.mask())
        }
    }
}

impl fmt::Debug for PlaneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlaneSet({:03b})", self.0)
    }
}

impl Cell for PlaneSet {
    type Counts = [u8; 3];

    fn is_alive(self) -> bool {
        self.0 != 0
    }

    fn code(self) -> u8 {
        self.0
    }

    fn from_code(code: u8) -> Result<Self> {
        PlaneSet::new(code)
    }

    fn tally(neighbors: &[Self; 8]) -> [u8; 3] {
        count_planes(neighbors)
    }

    fn evolve(self, counts: [u8; 3]) -> Self {
        Plane::ALL.iter().fold(PlaneSet::EMPTY, |next, &plane| {
            next.with_plane(plane, next_state(self.plane(plane), counts[plane.index()]))
        })
    }

    /// Steps through the eight states, wrapping 7 back to 0.
    fn toggled(self) -> Self {
        PlaneSet((self.0 + 1) & Self::FULL.0)
    }

    fn spawn<R: Rng>(rng: &mut R) -> Self {
        PlaneSet(rng.random_range(1..=Self::FULL.0))
    }

    fn color(self) -> Color32 {
        PLANE_PALETTE[self.0 as usize]
    }
}
