use std::collections::HashSet;

use torus_life::{Coord, Grid, LayeredLife, Life, PlaneSet, Recorder, surface::LIVE_COLOR};

const FIXTURES: [([[u8; 3]; 3], u8); 6] = [
    ([[0, 0, 0], [0, 1, 0], [0, 0, 0]], 0), // under-population
    ([[1, 1, 1], [1, 1, 1], [1, 1, 1]], 0), // over-population
    ([[0, 0, 0], [1, 1, 1], [0, 0, 0]], 1), // survives with 2
    ([[0, 1, 0], [1, 1, 1], [0, 0, 0]], 1), // survives with 3
    ([[0, 1, 0], [1, 0, 1], [0, 0, 0]], 1), // birth
    ([[0, 0, 0], [1, 0, 1], [0, 0, 0]], 0), // no birth with 2
];

#[test]
fn binary_fixtures() {
    for (codes, center) in FIXTURES {
        let mut life = Life::from_grid(Grid::from_codes(&codes).unwrap(), Recorder::new());
        life.step();
        assert_eq!(life.get(1, 1).unwrap() as u8, center, "fixture {codes:?}");
    }
}

#[test]
fn multi_plane_fixtures_with_all_planes_set() {
    for (codes, center) in FIXTURES {
        let full = codes.map(|row| row.map(|code| code * 7));
        let mut layered = LayeredLife::from_grid(Grid::from_codes(&full).unwrap(), Recorder::new());
        layered.step();
        assert_eq!(layered.get(1, 1).unwrap().bits(), center * 7, "fixture {codes:?}");
    }
}

#[test]
fn born_center_is_painted_live() {
    let codes = [[0u8, 1, 0], [1, 0, 1], [0, 0, 0]];
    let mut life = Life::from_grid(Grid::from_codes(&codes).unwrap(), Recorder::new());
    life.surface_mut().clear();
    life.step();
    assert_eq!(life.surface().last_color(1, 1), Some(LIVE_COLOR));
}

#[test]
fn corner_of_five_by_five_wraps() {
    let grid = Grid::<PlaneSet>::new(5, 5).unwrap();
    let coords: HashSet<Coord> = grid.neighbor_coords(0, 0).unwrap().into_iter().collect();
    let expected: HashSet<Coord> = HashSet::from([
        (4, 4),
        (4, 0),
        (4, 1),
        (0, 4),
        (0, 1),
        (1, 4),
        (1, 0),
        (1, 1),
    ]);
    assert_eq!(coords, expected);
}
