// patterns.rs - Named seed patterns placed on the torus

use crate::topology::Coord;

/// Named seed shape, as cell offsets from its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [Coord],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const PATTERNS: &[Pattern] = &[GLIDER, BLINKER, TOAD, BEACON, R_PENTOMINO];

impl Pattern {
    /// Looks a pattern up by name, ignoring case.
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(x, y)| {
            (rows.max(x + 1), cols.max(y + 1))
        })
    }

    /// Cells of the pattern placed at `origin`, wrapped onto a
    /// `width x height` torus.
    pub fn placed(
        &self,
        origin: Coord,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = Coord> + '_ {
        let (ox, oy) = origin;
        self.cells
            .iter()
            .map(move |&(x, y)| ((ox + x) % width, (oy + y) % height))
    }
}
