//! Configuration constants and the resolved arena configuration.

// Arena defaults
pub const ARENA_ROWS: usize = 10;
pub const ARENA_COLS: usize = 10;
pub const NUM_MOUNDS: usize = 5;
pub const NUM_PITS: usize = 3;
pub const NUM_FLAMETHROWERS: usize = 2;
pub const MAX_ROBOTS: usize = 4;
pub const MAX_ARENA_CELLS: usize = 1 << 24; // Larger grids collapse to 0x0

// Game rules
pub const MAX_ROUNDS: u32 = 100; // Maximum rounds before the survivors are judged on health
pub const INITIAL_HEALTH: i32 = 100;
pub const GRENADE_CHARGES: u32 = 10; // Charges carried by grenade-armed robots
pub const ARMOR_STEP_PERCENT: i32 = 10; // Each armor level blocks 10% of incoming damage

// Weapon configuration (inclusive damage ranges)
pub const FLAMETHROWER_DAMAGE: (i32, i32) = (30, 50);
pub const RAILGUN_DAMAGE: (i32, i32) = (10, 20);
pub const GRENADE_DAMAGE: (i32, i32) = (10, 40);
pub const HAMMER_DAMAGE: (i32, i32) = (50, 60);
pub const FLAME_CONE_LENGTH: i32 = 4; // Cells ahead of the shooter covered by the flame cone

// Round pacing when watching live
pub const ROUND_PAUSE_MS: u64 = 1000;

/// Resolved arena configuration. Every value may be zero; the engine copes with
/// degenerate grids and empty rosters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArenaConfig {
    pub arena_rows: usize,
    pub arena_cols: usize,
    pub num_mounds: usize,
    pub num_pits: usize,
    pub num_flamethrowers: usize,
    pub max_rounds: u32,
    pub watch_live: bool,
    pub max_robots: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            arena_rows: ARENA_ROWS,
            arena_cols: ARENA_COLS,
            num_mounds: NUM_MOUNDS,
            num_pits: NUM_PITS,
            num_flamethrowers: NUM_FLAMETHROWERS,
            max_rounds: MAX_ROUNDS,
            watch_live: false,
            max_robots: MAX_ROBOTS,
        }
    }
}
