//! Weapon resolution: area patterns, damage rolls and armor mitigation.

use crate::arena::Arena;
use crate::config;
use crate::error::ArenaError;
use crate::robot::Robot;
use crate::types::*;
use crate::utils::chebyshev;
use rand::Rng;

/// One robot struck by an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub target: usize,
    pub damage: i32, // After armor mitigation
}

/// Result of resolving a single attack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttackOutcome {
    pub affected: Vec<Position>,
    pub hits: Vec<Hit>,
    pub note: Option<&'static str>,
}

impl AttackOutcome {
    pub fn is_miss(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Inclusive damage range rolled by each weapon.
pub fn damage_range(weapon: WeaponKind) -> (i32, i32) {
    match weapon {
        WeaponKind::Flamethrower => config::FLAMETHROWER_DAMAGE,
        WeaponKind::Railgun => config::RAILGUN_DAMAGE,
        WeaponKind::Grenade => config::GRENADE_DAMAGE,
        WeaponKind::Hammer => config::HAMMER_DAMAGE,
    }
}

pub fn roll_damage<R: Rng>(weapon: WeaponKind, rng: &mut R) -> i32 {
    let (low, high) = damage_range(weapon);
    rng.gen_range(low..=high)
}

/// Armor blocks 10% per level, rounded down: `damage * (100 - armor*10) / 100`.
pub fn mitigate(damage: i32, armor: i32) -> i32 {
    let factor = (100 - armor.max(0) * config::ARMOR_STEP_PERCENT).max(0);
    damage.max(0) * factor / 100
}

/// Applies one weapon (or trap) strike to a robot: mitigated damage, then one level of armor lost.
/// Returns the damage actually dealt.
pub fn strike<R: Rng>(robot: &mut Robot, weapon: WeaponKind, rng: &mut R) -> i32 {
    let damage = mitigate(roll_damage(weapon, rng), robot.armor);
    robot.take_damage(damage);
    robot.reduce_armor(1);
    damage
}

/// Cells covered by `weapon` fired from `shooter` at `target`, already bounds-filtered.
/// Grenade ammunition is not checked here.
pub fn affected_cells(
    arena: &Arena,
    shooter: Position,
    weapon: WeaponKind,
    target: Position,
) -> Vec<Position> {
    let delta = Direction::from_delta((target.row - shooter.row, target.col - shooter.col)).delta();
    let mut cells = Vec::new();
    match weapon {
        WeaponKind::Railgun => {
            if delta != (0, 0) {
                let mut cell = shooter.offset(delta, 1);
                while arena.in_bounds(cell) {
                    cells.push(cell);
                    cell = cell.offset(delta, 1);
                }
            }
        }
        WeaponKind::Flamethrower => {
            if delta != (0, 0) {
                let side = perpendicular(delta);
                for step in 1..=config::FLAME_CONE_LENGTH {
                    let centre = shooter.offset(delta, step);
                    for cell in [centre.offset(side, -1), centre, centre.offset(side, 1)] {
                        if arena.in_bounds(cell) && !cells.contains(&cell) {
                            cells.push(cell);
                        }
                    }
                }
            }
        }
        WeaponKind::Hammer => {
            if arena.in_bounds(target) && chebyshev(shooter, target) <= 1 {
                cells.push(target);
            }
        }
        WeaponKind::Grenade => {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    let cell = Position::new(target.row + dr, target.col + dc);
                    if arena.in_bounds(cell) {
                        cells.push(cell);
                    }
                }
            }
        }
    }
    cells
}

/// Resolves an attack by robot `shooter` aimed at `target`.
///
/// Out-of-grid targets, and line weapons aimed at the shooter's own cell, are
/// rejected as malformed. A grenade thrower with no charges left makes a harmless
/// attack with a note attached; otherwise one charge is spent per throw.
pub fn resolve_attack<R: Rng>(
    arena: &Arena,
    robots: &mut [Robot],
    shooter: usize,
    target: Position,
    rng: &mut R,
) -> Result<AttackOutcome, ArenaError> {
    let origin = robots[shooter].position;
    let weapon = robots[shooter].weapon;

    if !arena.in_bounds(target) {
        return Err(ArenaError::MalformedDecision {
            robot: shooter,
            reason: format!("shot target {} is off the grid", target),
        });
    }
    if target == origin && matches!(weapon, WeaponKind::Railgun | WeaponKind::Flamethrower) {
        return Err(ArenaError::MalformedDecision {
            robot: shooter,
            reason: format!("{} aimed at its own cell", weapon),
        });
    }

    let mut outcome = AttackOutcome::default();
    if weapon == WeaponKind::Grenade && !robots[shooter].use_grenade() {
        outcome.note = Some("out of grenades");
        return Ok(outcome);
    }

    outcome.affected = affected_cells(arena, origin, weapon, target);
    for &cell in &outcome.affected {
        let Some(victim) = Arena::robot_at(robots, cell) else {
            continue;
        };
        if victim == shooter {
            continue;
        }
        let damage = strike(&mut robots[victim], weapon, rng);
        outcome.hits.push(Hit {
            target: victim,
            damage,
        });
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::tests::dummy_robot;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_mitigation_formula() {
        assert_eq!(mitigate(50, 0), 50);
        assert_eq!(mitigate(50, 2), 40);
        assert_eq!(mitigate(37, 3), 25); // 37 * 70 / 100 = 25.9
        assert_eq!(mitigate(60, 10), 0);
        for damage in [0, 1, 13, 49, 60] {
            let mut previous = i32::MAX;
            for armor in 0..=10 {
                let reduced = mitigate(damage, armor);
                assert_eq!(reduced, damage * (100 - 10 * armor) / 100);
                assert!(reduced <= previous);
                previous = reduced;
            }
        }
    }

    #[test]
    fn test_damage_rolls_within_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for weapon in [
            WeaponKind::Flamethrower,
            WeaponKind::Railgun,
            WeaponKind::Grenade,
            WeaponKind::Hammer,
        ] {
            let (low, high) = damage_range(weapon);
            for _ in 0..200 {
                let damage = roll_damage(weapon, &mut rng);
                assert!((low..=high).contains(&damage));
            }
        }
    }

    #[test]
    fn test_railgun_runs_to_edge() {
        let arena = Arena::new(5, 8);
        let shooter = Position::new(2, 0);
        let cells = affected_cells(&arena, shooter, WeaponKind::Railgun, Position::new(2, 3));
        assert_eq!(cells.len(), 7);
        assert_eq!(cells.last(), Some(&Position::new(2, 7)));

        let up = affected_cells(&arena, Position::new(4, 4), WeaponKind::Railgun, Position::new(0, 4));
        assert_eq!(up.len(), 4);

        let diagonal = affected_cells(&arena, Position::new(0, 0), WeaponKind::Railgun, Position::new(3, 1));
        assert_eq!(
            diagonal,
            vec![
                Position::new(1, 1),
                Position::new(2, 2),
                Position::new(3, 3),
                Position::new(4, 4)
            ]
        );
    }

    #[test]
    fn test_flamethrower_cone() {
        let arena = Arena::new(10, 10);
        let cells = affected_cells(&arena, Position::new(5, 0), WeaponKind::Flamethrower, Position::new(5, 9));
        assert_eq!(cells.len(), 12);
        for col in 1..=4 {
            for row in 4..=6 {
                assert!(cells.contains(&Position::new(row, col)));
            }
        }
        assert!(!cells.contains(&Position::new(5, 5)));

        // Against the top edge the upper side of the cone is clipped
        let clipped = affected_cells(&arena, Position::new(0, 0), WeaponKind::Flamethrower, Position::new(0, 5));
        assert_eq!(clipped.len(), 8);
        assert!(clipped.iter().all(|p| arena.in_bounds(*p)));
    }

    #[test]
    fn test_hammer_reach() {
        let arena = Arena::new(5, 5);
        let me = Position::new(2, 2);
        assert_eq!(
            affected_cells(&arena, me, WeaponKind::Hammer, Position::new(3, 3)),
            vec![Position::new(3, 3)]
        );
        assert!(affected_cells(&arena, me, WeaponKind::Hammer, Position::new(4, 2)).is_empty());
    }

    #[test]
    fn test_grenade_blast_clipped() {
        let arena = Arena::new(5, 5);
        let full = affected_cells(&arena, Position::new(4, 4), WeaponKind::Grenade, Position::new(2, 2));
        assert_eq!(full.len(), 9);
        let corner = affected_cells(&arena, Position::new(4, 4), WeaponKind::Grenade, Position::new(0, 0));
        assert_eq!(corner.len(), 4);
    }

    #[test]
    fn test_attack_damages_and_decays_armor() {
        let arena = Arena::new(5, 5);
        let mut robots = vec![
            dummy_robot(0, WeaponKind::Hammer, 2, 2),
            dummy_robot(1, WeaponKind::Hammer, 2, 3),
        ];
        let armor_before = robots[1].armor;
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = resolve_attack(&arena, &mut robots, 0, Position::new(2, 3), &mut rng).unwrap();

        assert_eq!(outcome.hits.len(), 1);
        let hit = outcome.hits[0];
        assert_eq!(hit.target, 1);
        assert!((mitigate(50, armor_before)..=mitigate(60, armor_before)).contains(&hit.damage));
        assert_eq!(robots[1].health, 100 - hit.damage);
        assert_eq!(robots[1].armor, armor_before - 1);
        assert_eq!(robots[0].health, 100);
    }

    #[test]
    fn test_grenade_hits_everyone_in_blast_but_thrower() {
        let arena = Arena::new(5, 5);
        let mut robots = vec![
            dummy_robot(0, WeaponKind::Grenade, 1, 1),
            dummy_robot(1, WeaponKind::Hammer, 2, 2),
            dummy_robot(2, WeaponKind::Hammer, 3, 3),
            dummy_robot(3, WeaponKind::Hammer, 4, 4),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        let outcome = resolve_attack(&arena, &mut robots, 0, Position::new(2, 2), &mut rng).unwrap();
        let struck: Vec<usize> = outcome.hits.iter().map(|h| h.target).collect();
        assert_eq!(struck, vec![1, 2]);
        assert_eq!(robots[0].health, 100);
        assert_eq!(robots[3].health, 100);
        assert_eq!(robots[0].grenades, config::GRENADE_CHARGES - 1);
    }

    #[test]
    fn test_grenade_without_ammo() {
        let arena = Arena::new(5, 5);
        let mut robots = vec![
            dummy_robot(0, WeaponKind::Grenade, 1, 1),
            dummy_robot(1, WeaponKind::Hammer, 2, 2),
        ];
        robots[0].grenades = 0;
        let mut rng = StdRng::seed_from_u64(2);
        let outcome = resolve_attack(&arena, &mut robots, 0, Position::new(2, 2), &mut rng).unwrap();
        assert!(outcome.affected.is_empty());
        assert!(outcome.is_miss());
        assert_eq!(outcome.note, Some("out of grenades"));
        assert_eq!(robots[0].grenades, 0);
        assert_eq!(robots[1].health, 100);
    }

    #[test]
    fn test_miss_reported() {
        let arena = Arena::new(5, 5);
        let mut robots = vec![
            dummy_robot(0, WeaponKind::Railgun, 0, 0),
            dummy_robot(1, WeaponKind::Hammer, 3, 4),
        ];
        let mut rng = StdRng::seed_from_u64(4);
        let outcome = resolve_attack(&arena, &mut robots, 0, Position::new(0, 4), &mut rng).unwrap();
        assert!(outcome.is_miss());
        assert_eq!(outcome.affected.len(), 4);
    }

    #[test]
    fn test_malformed_targets_rejected() {
        let arena = Arena::new(5, 5);
        let mut robots = vec![
            dummy_robot(0, WeaponKind::Railgun, 0, 0),
            dummy_robot(1, WeaponKind::Grenade, 4, 4),
        ];
        let mut rng = StdRng::seed_from_u64(4);
        assert!(matches!(
            resolve_attack(&arena, &mut robots, 0, Position::new(0, 9), &mut rng),
            Err(ArenaError::MalformedDecision { robot: 0, .. })
        ));
        assert!(matches!(
            resolve_attack(&arena, &mut robots, 0, Position::new(0, 0), &mut rng),
            Err(ArenaError::MalformedDecision { .. })
        ));
        assert!(resolve_attack(&arena, &mut robots, 1, Position::new(-1, 4), &mut rng).is_err());
        assert_eq!(robots[1].grenades, config::GRENADE_CHARGES, "Rejected throws cost nothing");
    }

    #[test]
    fn test_wrecks_are_still_struck() {
        let arena = Arena::new(1, 5);
        let mut robots = vec![
            dummy_robot(0, WeaponKind::Railgun, 0, 0),
            dummy_robot(1, WeaponKind::Hammer, 0, 2),
        ];
        robots[1].take_damage(1000);
        let armor_before = robots[1].armor;
        let mut rng = StdRng::seed_from_u64(8);
        let outcome = resolve_attack(&arena, &mut robots, 0, Position::new(0, 4), &mut rng).unwrap();
        assert!(!outcome.is_miss());
        assert_eq!(outcome.hits.len(), 1);
        assert_eq!(outcome.hits[0].target, 1);
        assert_eq!(robots[1].armor, armor_before - 1);
        assert_eq!(robots[1].health, 0);
    }
}
