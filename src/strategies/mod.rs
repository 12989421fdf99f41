//! Reference tactics. Each one is just a [`Strategy`] implementation; the engine
//! treats them exactly like any other strategy.

pub mod bomber;
pub mod pyro;
pub mod sniper;
pub mod tank;

use crate::error::ArenaError;
use crate::robot::Strategy;
use crate::types::{Position, RadarHit, RadarKind};

pub use bomber::Bomber;
pub use pyro::Pyro;
pub use sniper::Sniper;
pub use tank::Tank;

/// Names accepted by [`by_name`].
pub const NAMES: [&str; 4] = ["tank", "sniper", "bomber", "pyro"];

/// Builds a reference tactic from its (case-insensitive) name.
pub fn by_name(name: &str) -> Result<Box<dyn Strategy>, ArenaError> {
    match name.to_ascii_lowercase().as_str() {
        "tank" => Ok(Box::new(Tank::new())),
        "sniper" => Ok(Box::new(Sniper::new())),
        "bomber" => Ok(Box::new(Bomber::new())),
        "pyro" => Ok(Box::new(Pyro::new())),
        _ => Err(ArenaError::UnknownStrategy(name.to_string())),
    }
}

// Live enemy robots in a radar result
fn enemies(hits: &[RadarHit]) -> impl Iterator<Item = Position> + '_ {
    hits.iter()
        .filter(|h| h.kind == RadarKind::Robot)
        .map(|h| h.position())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::robot::RobotView;
    use crate::types::WeaponKind;

    pub(crate) fn view_at(row: i32, col: i32, grenades: u32) -> RobotView {
        RobotView {
            position: Position::new(row, col),
            health: 100,
            armor: 2,
            move_speed: 3,
            grenades,
            weapon: WeaponKind::Hammer,
            board_rows: 10,
            board_cols: 10,
        }
    }

    pub(crate) fn enemy_at(row: i32, col: i32) -> RadarHit {
        RadarHit {
            kind: RadarKind::Robot,
            row,
            col,
        }
    }

    #[test]
    fn test_by_name() {
        for name in NAMES {
            let strategy = by_name(name).unwrap();
            assert_eq!(strategy.loadout().name.to_ascii_lowercase(), name);
        }
        assert!(by_name("SNIPER").is_ok());
        assert_eq!(
            by_name("wizard").err(),
            Some(ArenaError::UnknownStrategy("wizard".to_string()))
        );
    }

    #[test]
    fn test_enemies_skip_wrecks_and_terrain() {
        let hits = [
            enemy_at(1, 1),
            RadarHit {
                kind: RadarKind::Wreck,
                row: 2,
                col: 2,
            },
            RadarHit {
                kind: RadarKind::Terrain(crate::types::Cell::Pit),
                row: 3,
                col: 3,
            },
        ];
        let found: Vec<Position> = enemies(&hits).collect();
        assert_eq!(found, vec![Position::new(1, 1)]);
    }
}
