//! Flame specialist. Tracks every enemy it sees, locks onto the closest one, rushes
//! in diagonally and then circles at two to three cells while burning it.

use super::enemies;
use crate::robot::{Loadout, RobotView, Strategy};
use crate::types::*;
use crate::utils::{away_on_major_axis, manhattan};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FLAME_RANGE: i32 = 4;

#[derive(Debug, Clone)]
pub struct Pyro {
    target: Option<Position>,
    radar: Direction,
    aggression: i32, // Grows with the number of nearby enemies
    rng: StdRng,
}

impl Pyro {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Pyro {
            target: None,
            radar: Direction::North,
            aggression: 0,
            rng,
        }
    }
}

impl Default for Pyro {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Pyro {
    fn loadout(&self) -> Loadout {
        Loadout {
            name: "Pyro".to_string(),
            glyph: 'P',
            move_speed: 3,
            armor: 4,
            weapon: WeaponKind::Flamethrower,
        }
    }

    // Holds the radar still only when locked on and crowded
    fn choose_radar_direction(&mut self, _me: &RobotView) -> Direction {
        let direction = self.radar;
        if self.target.is_none() || self.aggression <= 2 {
            self.radar = self.radar.clockwise();
        }
        direction
    }

    fn observe(&mut self, me: &RobotView, hits: &[RadarHit]) {
        let here = me.position;
        let seen: Vec<Position> = enemies(hits).collect();

        self.aggression = seen
            .iter()
            .map(|&p| match manhattan(here, p) {
                0..=3 => 2,
                4..=6 => 1,
                _ => 0,
            })
            .sum();

        // Closest enemy; anything inside flame range comes first
        let closest = |in_range: bool| {
            seen.iter()
                .copied()
                .filter(|&p| !in_range || manhattan(here, p) <= FLAME_RANGE)
                .min_by_key(|&p| manhattan(here, p))
        };
        self.target = closest(true).or_else(|| closest(false));
    }

    fn decide_shot(&mut self, me: &RobotView) -> Option<Position> {
        self.target
            .filter(|&t| manhattan(me.position, t) <= FLAME_RANGE)
    }

    fn decide_move(&mut self, me: &RobotView) -> (Direction, i32) {
        let here = me.position;
        let Some(target) = self.target else {
            // Hunt along the diagonal toward the other half of the board
            let direction = if here.row < me.board_rows / 2 {
                Direction::SouthEast
            } else {
                Direction::NorthWest
            };
            return (direction, 2);
        };

        let row_diff = target.row - here.row;
        let col_diff = target.col - here.col;
        let dist = manhattan(here, target);
        if dist > 3 {
            (Direction::from_delta((row_diff, col_diff)), me.move_speed)
        } else if dist < 2 {
            (away_on_major_axis(here, target), 1)
        } else if row_diff.abs() > col_diff.abs() {
            // Strafe across the line to the target
            let direction = if self.rng.gen_bool(0.5) { Direction::East } else { Direction::West };
            (direction, 1)
        } else {
            let direction = if self.rng.gen_bool(0.5) { Direction::North } else { Direction::South };
            (direction, 1)
        }
    }
}
