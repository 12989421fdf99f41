//! Grenadier. Lobs grenades at the nearest enemy inside throwing range, keeps its
//! distance when low on charges, and wanders at random when nothing is in sight.

use super::enemies;
use crate::robot::{Loadout, RobotView, Strategy};
use crate::types::*;
use crate::utils::{away_on_major_axis, manhattan, toward_on_major_axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const THROW_RANGE: i32 = 3;
const LOW_ON_GRENADES: u32 = 5;

#[derive(Debug, Clone)]
pub struct Bomber {
    target: Option<Position>,
    radar: Direction,
    rng: StdRng,
}

impl Bomber {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Bomber {
            target: None,
            radar: Direction::North,
            rng,
        }
    }
}

impl Default for Bomber {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for Bomber {
    fn loadout(&self) -> Loadout {
        Loadout {
            name: "Bomber".to_string(),
            glyph: 'B',
            move_speed: 4,
            armor: 3,
            weapon: WeaponKind::Grenade,
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
        if me.grenades == 0 {
            return None;
        }
        self.target
            .filter(|&t| manhattan(me.position, t) <= THROW_RANGE)
    }

    fn decide_move(&mut self, me: &RobotView) -> (Direction, i32) {
        let here = me.position;
        let Some(target) = self.target else {
            let direction = Direction::from_index(self.rng.gen_range(1..=8));
            let distance = self.rng.gen_range(1..=me.move_speed.max(1));
            return (direction, distance);
        };

        let dist = manhattan(here, target);
        if dist <= 2 && me.grenades < LOW_ON_GRENADES {
            (away_on_major_axis(here, target), 2)
        } else if dist > THROW_RANGE {
            (toward_on_major_axis(here, target), me.move_speed.min(2))
        } else {
            (Direction::None, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::tests::{enemy_at, view_at};

    #[test]
    fn test_throws_within_range() {
        let mut bomber = Bomber::with_seed(1);
        let me = view_at(5, 5, 10);
        bomber.observe(&me, &[enemy_at(7, 6), enemy_at(0, 0)]);
        assert_eq!(bomber.decide_shot(&me), Some(Position::new(7, 6)));

        bomber.observe(&me, &[enemy_at(9, 9)]);
        assert_eq!(bomber.decide_shot(&me), None);
        assert_eq!(bomber.decide_move(&me), (Direction::East, 2));
    }

    #[test]
    fn test_holds_fire_without_grenades() {
        let mut bomber = Bomber::with_seed(1);
        let me = view_at(5, 5, 0);
        bomber.observe(&me, &[enemy_at(5, 6)]);
        assert_eq!(bomber.decide_shot(&me), None);
        assert_eq!(bomber.decide_move(&me), (Direction::West, 2));
    }

    #[test]
    fn test_stays_in_sweet_spot() {
        let mut bomber = Bomber::with_seed(1);
        let me = view_at(5, 5, 8);
        bomber.observe(&me, &[enemy_at(5, 7)]);
        assert_eq!(bomber.decide_move(&me), (Direction::None, 0));
    }

    #[test]
    fn test_random_patrol_is_valid() {
        let mut bomber = Bomber::with_seed(99);
        let me = view_at(5, 5, 10);
        bomber.observe(&me, &[]);
        for _ in 0..50 {
            let (direction, distance) = bomber.decide_move(&me);
            assert_ne!(direction, Direction::None);
            assert!((1..=me.move_speed).contains(&distance));
        }
    }
}
