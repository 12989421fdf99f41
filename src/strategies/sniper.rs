//! Long-range railgunner. Prefers the farthest enemy it can see, fires only along
//! a shared row or column, and backs off when anything gets close.

use super::enemies;
use crate::robot::{Loadout, RobotView, Strategy};
use crate::types::*;
use crate::utils::{away_on_major_axis, manhattan};

const TOO_CLOSE: i32 = 4; // Manhattan distance under which the sniper retreats

#[derive(Debug, Clone)]
pub struct Sniper {
    target: Option<Position>,
    radar: Direction,
    last_scan: Direction,
}

impl Sniper {
    pub fn new() -> Self {
        Sniper {
            target: None,
            radar: Direction::North,
            last_scan: Direction::North,
        }
    }

    fn aligned(here: Position, target: Position) -> bool {
        here.row == target.row || here.col == target.col
    }
}

impl Default for Sniper {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Sniper {
    fn loadout(&self) -> Loadout {
        Loadout {
            name: "Sniper".to_string(),
            glyph: 'S',
            move_speed: 5,
            armor: 2,
            weapon: WeaponKind::Railgun,
        }
    }

    // Keeps looking where the last target was seen, otherwise sweeps clockwise
    fn choose_radar_direction(&mut self, _me: &RobotView) -> Direction {
        if self.target.is_none() {
            self.last_scan = self.radar;
            self.radar = self.radar.clockwise();
        }
        self.last_scan
    }

    fn observe(&mut self, me: &RobotView, hits: &[RadarHit]) {
        self.target = None;
        let mut farthest = -1;
        for enemy in enemies(hits) {
            let dist = manhattan(me.position, enemy);
            if dist > farthest {
                farthest = dist;
                self.target = Some(enemy);
            }
        }
    }

    fn decide_shot(&mut self, me: &RobotView) -> Option<Position> {
        self.target.filter(|&t| Self::aligned(me.position, t))
    }

    fn decide_move(&mut self, me: &RobotView) -> (Direction, i32) {
        let here = me.position;
        let Some(target) = self.target else {
            // Drift toward the nearer horizontal edge
            return if here.row > me.board_rows / 2 {
                (Direction::South, 2)
            } else {
                (Direction::North, 2)
            };
        };

        let too_close = manhattan(here, target) < TOO_CLOSE;
        if too_close {
            return (away_on_major_axis(here, target), me.move_speed);
        }
        if Self::aligned(here, target) {
            return (Direction::None, 0);
        }

        // Line up on the target's column first
        let col_diff = target.col - here.col;
        let direction = if col_diff > 0 { Direction::East } else { Direction::West };
        (direction, me.move_speed.min(col_diff.abs()))
    }
}
