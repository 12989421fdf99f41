use crate::arena::Arena;
use crate::robot::Robot;
use crate::types::*;
use crate::weapon;
use rand::Rng;

/// How a move request played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Position,
    pub to: Position,
    pub steps: i32,
    pub stopped_by: Option<Blocker>,
    pub burned: i32, // Damage taken from flamethrower traps along the way
}

/// Why a move ended early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocker {
    Edge,
    Mound,
    Robot(usize),
    Pit,
    Immobilized,
    Destroyed,
}

/// Steps robot `mover` up to `distance` cells along `direction`, one cell at a time.
///
/// The distance is clamped to the robot's move speed. Edges, mounds and other robots
/// stop the robot in front of them. A pit is entered and then disables movement for
/// good. Flamethrower traps burn the robot on entry without stopping it. The final
/// cell is committed once the step loop is done.
pub fn resolve_move<R: Rng>(
    arena: &Arena,
    robots: &mut [Robot],
    mover: usize,
    direction: Direction,
    distance: i32,
    rng: &mut R,
) -> MoveOutcome {
    let from = robots[mover].position;
    let mut outcome = MoveOutcome {
        from,
        to: from,
        steps: 0,
        stopped_by: None,
        burned: 0,
    };
    if !robots[mover].can_move() {
        outcome.stopped_by = Some(Blocker::Immobilized);
        return outcome;
    }

    let budget = distance.clamp(0, robots[mover].move_speed);
    let delta = direction.delta();
    if delta == (0, 0) {
        return outcome;
    }

    let mut current = from;
    while outcome.steps < budget {
        let next = current.offset(delta, 1);
        let Some(terrain) = arena.cell(next) else {
            outcome.stopped_by = Some(Blocker::Edge);
            break;
        };
        if terrain == Cell::Mound {
            outcome.stopped_by = Some(Blocker::Mound);
            break;
        }
        if let Some(other) = Arena::robot_at(robots, next) {
            if other != mover {
                outcome.stopped_by = Some(Blocker::Robot(other));
                break;
            }
        }

        current = next;
        outcome.steps += 1;

        match terrain {
            Cell::Pit => {
                robots[mover].disable_movement();
                outcome.stopped_by = Some(Blocker::Pit);
                break;
            }
            Cell::Flamethrower => {
                outcome.burned += weapon::strike(&mut robots[mover], WeaponKind::Flamethrower, rng);
                if !robots[mover].is_alive() {
                    outcome.stopped_by = Some(Blocker::Destroyed);
                    break;
                }
            }
            Cell::Empty | Cell::Mound => {}
        }
    }

    robots[mover].move_to(current);
    outcome.to = current;
    outcome
}
