// rules.rs - Birth and survival rule shared by every automaton plane

/// Neighbor count at which a dead cell is born.
pub const BIRTH: u8 = 3;

/// Neighbor counts at which a live cell survives.
pub const SURVIVAL: [u8; 2] = [2, 3];

/// Next state of one cell given its live neighbor count (B3/S23).
pub fn next_state(alive: bool, count: u8) -> bool {
    match (alive, count) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Under/over-population, or stays dead
    }
}
