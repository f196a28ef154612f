// surface.rs - Rendering collaborator interface
//
// The automaton never draws anything itself. It tells a `Surface` when the
// grid shape changes and which color each written cell now has.

use egui::Color32;
use tracing::{debug, trace};

pub const DEAD_COLOR: Color32 = Color32::from_rgb(0, 0, 0);
pub const LIVE_COLOR: Color32 = Color32::from_rgb(0, 0, 139); // darkblue

/// Binary palette indexed by state.
pub const BINARY_PALETTE: [Color32; 2] = [DEAD_COLOR, LIVE_COLOR];

/// Multi-plane palette indexed by the packed 3-bit state.
pub const PLANE_PALETTE: [Color32; 8] = [
    Color32::from_rgb(0, 0, 0),       // black
    Color32::from_rgb(255, 0, 0),     // red
    Color32::from_rgb(0, 128, 0),     // green
    Color32::from_rgb(255, 255, 0),   // yellow
    Color32::from_rgb(0, 0, 255),     // blue
    Color32::from_rgb(255, 0, 255),   // fuchsia
    Color32::from_rgb(64, 224, 208),  // turquoise
    Color32::from_rgb(255, 255, 255), // white
];

/// Something that displays a grid of colored cells.
pub trait Surface {
    /// (Re)initializes the surface to `rows x cols` cells.
    fn create(&mut self, rows: usize, cols: usize);

    /// Cell `(x, y)` now shows `color`.
    fn color_cell(&mut self, x: usize, y: usize, color: Color32);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn create(&mut self, rows: usize, cols: usize) {
        (**self).create(rows, cols);
    }

    fn color_cell(&mut self, x: usize, y: usize, color: Color32) {
        (**self).color_cell(x, y, color);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn create(&mut self, rows: usize, cols: usize) {
        (**self).create(rows, cols);
    }

    fn color_cell(&mut self, x: usize, y: usize, color: Color32) {
        (**self).color_cell(x, y, color);
    }
}

/// Surface that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn create(&mut self, _rows: usize, _cols: usize) {}

    fn color_cell(&mut self, _x: usize, _y: usize, _color: Color32) {}
}

/// Surface that keeps every call it receives.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub creates: Vec<(usize, usize)>,
    pub painted: Vec<(usize, usize, Color32)>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent color sent for `(x, y)`.
    pub fn last_color(&self, x: usize, y: usize) -> Option<Color32> {
        self.painted
            .iter()
            .rev()
            .find(|&&(px, py, _)| px == x && py == y)
            .map(|&(_, _, color)| color)
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.creates.clear();
        self.painted.clear();
    }
}

impl Surface for Recorder {
    fn create(&mut self, rows: usize, cols: usize) {
        self.creates.push((rows, cols));
    }

    fn color_cell(&mut self, x: usize, y: usize, color: Color32) {
        self.painted.push((x, y, color));
    }
}

/// Surface that reports notifications as `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSurface {
    painted: u64,
}

impl TracingSurface {
    /// Cells colored since creation.
    pub fn painted(&self) -> u64 {
        self.painted
    }
}

impl Surface for TracingSurface {
    fn create(&mut self, rows: usize, cols: usize) {
        debug!(rows, cols, "surface created");
    }

    fn color_cell(&mut self, x: usize, y: usize, color: Color32) {
        self.painted += 1;
        trace!(x, y, ?color, "cell colored");
    }
}
