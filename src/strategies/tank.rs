//! Melee bruiser: sweeps the radar, closes on the nearest enemy and hammers it
//! once adjacent.

use super::enemies;
use crate::robot::{Loadout, RobotView, Strategy};
use crate::types::*;
use crate::utils::{is_adjacent, manhattan};

#[derive(Debug, Clone)]
pub struct Tank {
    target: Option<Position>,
    radar: Direction,
}

impl Tank {
    pub fn new() -> Self {
        Tank {
            target: None,
            radar: Direction::North,
        }
    }
}

impl Default for Tank {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Tank {
    fn loadout(&self) -> Loadout {
        Loadout {
            name: "Tank".to_string(),
            glyph: 'T',
            move_speed: 2,
            armor: 5,
            weapon: WeaponKind::Hammer,
        }
    }

    fn choose_radar_direction(&mut self, _me: &RobotView) -> Direction {
        let direction = self.radar;
        self.radar = self.radar.clockwise();
        direction
    }

    fn observe(&mut self, me: &RobotView, hits: &[RadarHit]) {
        self.target = enemies(hits).min_by_key(|&p| manhattan(me.position, p));
    }

    fn decide_shot(&mut self, me: &RobotView) -> Option<Position> {
        self.target.filter(|&t| is_adjacent(me.position, t))
    }

    fn decide_move(&mut self, me: &RobotView) -> (Direction, i32) {
        let here = me.position;
        match self.target {
            Some(target) => {
                let direction = Direction::from_delta((target.row - here.row, target.col - here.col));
                if direction == Direction::None {
                    return (Direction::None, 0);
                }
                (direction, me.move_speed.min(manhattan(here, target)))
            }
            // Patrol: along the row, then down the last column, then back west
            None if here.col < me.board_cols - 1 => (Direction::East, 1),
            None if here.row < me.board_rows - 1 => (Direction::South, 1),
            None => (Direction::West, 1),
        }
    }
}
