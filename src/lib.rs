pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod movement;
pub mod radar;
pub mod render;
pub mod robot;
pub mod strategies;
pub mod types;
pub mod utils;
pub mod weapon;

pub use arena::Arena;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use game::{Game, GameOutcome, GamePhase};
pub use robot::{Loadout, Robot, RobotView, Strategy};
pub use types::{Cell, Direction, Position, RadarHit, RadarKind, WeaponKind};
