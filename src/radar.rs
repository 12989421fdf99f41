//! Radar sweeps.
//!
//! An omni sweep (`Direction::None`) looks at the eight neighbouring cells. A
//! directional sweep casts a ray from the scanner to the grid edge and samples the
//! cell on the ray plus one cell to either side of it at every step.

use crate::arena::Arena;
use crate::robot::Robot;
use crate::types::*;

/// Scans from robot `scanner` in `direction`. Results are rebuilt on every call.
pub fn scan(arena: &Arena, robots: &[Robot], scanner: usize, direction: Direction) -> Vec<RadarHit> {
    let origin = robots[scanner].position;
    let cells = match direction {
        Direction::None => neighbourhood(arena, origin),
        _ => sweep(arena, origin, direction.delta()),
    };

    let mut hits = Vec::new();
    for cell in cells {
        if let Some(terrain) = arena.cell(cell) {
            if terrain != Cell::Empty {
                hits.push(RadarHit {
                    kind: RadarKind::Terrain(terrain),
                    row: cell.row,
                    col: cell.col,
                });
            }
        }
        if let Some(other) = Arena::robot_at(robots, cell) {
            if other != scanner {
                let kind = if robots[other].is_alive() {
                    RadarKind::Robot
                } else {
                    RadarKind::Wreck
                };
                hits.push(RadarHit {
                    kind,
                    row: cell.row,
                    col: cell.col,
                });
            }
        }
    }
    hits
}

// The eight in-bounds cells around `origin`
fn neighbourhood(arena: &Arena, origin: Position) -> Vec<Position> {
    Direction::COMPASS
        .iter()
        .map(|d| origin.offset(d.delta(), 1))
        .filter(|&p| arena.in_bounds(p))
        .collect()
}

// Three-wide ray from `origin` to the grid edge, each in-bounds cell listed once
fn sweep(arena: &Arena, origin: Position, delta: (i32, i32)) -> Vec<Position> {
    let side = perpendicular(delta);
    let mut cells = Vec::new();
    let mut centre = origin.offset(delta, 1);
    while arena.in_bounds(centre) {
        for cell in [centre.offset(side, -1), centre, centre.offset(side, 1)] {
            if cell != origin && arena.in_bounds(cell) && !cells.contains(&cell) {
                cells.push(cell);
            }
        }
        centre = centre.offset(delta, 1);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::tests::dummy_robot;

    fn kinds_at(hits: &[RadarHit], row: i32, col: i32) -> Vec<char> {
        hits.iter()
            .filter(|h| h.row == row && h.col == col)
            .map(|h| h.kind.tag())
            .collect()
    }

    #[test]
    fn test_omni_on_empty_grid() {
        let arena = Arena::new(5, 5);
        let robots = vec![dummy_robot(0, WeaponKind::Hammer, 2, 2)];
        assert!(scan(&arena, &robots, 0, Direction::None).is_empty());
    }

    #[test]
    fn test_omni_reports_neighbours_only() {
        let mut arena = Arena::new(5, 5);
        arena.set_cell(Position::new(1, 1), Cell::Mound);
        arena.set_cell(Position::new(0, 0), Cell::Pit); // two cells away
        let mut wreck = dummy_robot(2, WeaponKind::Hammer, 3, 2);
        wreck.take_damage(500);
        let robots = vec![
            dummy_robot(0, WeaponKind::Hammer, 2, 2),
            dummy_robot(1, WeaponKind::Railgun, 2, 3),
            wreck,
        ];

        let hits = scan(&arena, &robots, 0, Direction::None);
        assert_eq!(hits.len(), 3);
        assert_eq!(kinds_at(&hits, 1, 1), vec!['M']);
        assert_eq!(kinds_at(&hits, 2, 3), vec!['R']);
        assert_eq!(kinds_at(&hits, 3, 2), vec!['X']);
        assert!(kinds_at(&hits, 0, 0).is_empty());
    }

    #[test]
    fn test_omni_at_corner_stays_in_bounds() {
        let arena = Arena::new(2, 2);
        let robots = vec![
            dummy_robot(0, WeaponKind::Hammer, 0, 0),
            dummy_robot(1, WeaponKind::Hammer, 1, 1),
        ];
        let hits = scan(&arena, &robots, 0, Direction::None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].position(), Position::new(1, 1));
    }

    #[test]
    fn test_directional_sweep_is_three_wide() {
        let mut arena = Arena::new(7, 7);
        // Looking East from (3, 0): rows 2..=4 are covered, rows 1 and 5 are not
        arena.set_cell(Position::new(2, 4), Cell::Flamethrower);
        arena.set_cell(Position::new(4, 6), Cell::Pit);
        arena.set_cell(Position::new(1, 3), Cell::Mound);
        let robots = vec![
            dummy_robot(0, WeaponKind::Railgun, 3, 0),
            dummy_robot(1, WeaponKind::Hammer, 3, 5),
            dummy_robot(2, WeaponKind::Hammer, 5, 5),
        ];

        let hits = scan(&arena, &robots, 0, Direction::East);
        assert_eq!(kinds_at(&hits, 2, 4), vec!['F']);
        assert_eq!(kinds_at(&hits, 4, 6), vec!['P']);
        assert_eq!(kinds_at(&hits, 3, 5), vec!['R']);
        assert!(kinds_at(&hits, 1, 3).is_empty());
        assert!(kinds_at(&hits, 5, 5).is_empty());
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_directional_sweep_looks_forward_only() {
        let arena = Arena::new(5, 5);
        let robots = vec![
            dummy_robot(0, WeaponKind::Railgun, 2, 2),
            dummy_robot(1, WeaponKind::Hammer, 4, 2),
            dummy_robot(2, WeaponKind::Hammer, 0, 2),
        ];
        let hits = scan(&arena, &robots, 0, Direction::South);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].position(), Position::new(4, 2));
    }

    #[test]
    fn test_diagonal_sweep() {
        let arena = Arena::new(6, 6);
        // Ray SouthEast from (0,0): centres (1,1),(2,2)...; sides offset by (-1,1) and (1,-1)
        let robots = vec![
            dummy_robot(0, WeaponKind::Railgun, 0, 0),
            dummy_robot(1, WeaponKind::Hammer, 3, 3),
            dummy_robot(2, WeaponKind::Hammer, 1, 3),
            dummy_robot(3, WeaponKind::Hammer, 0, 3),
        ];
        let hits = scan(&arena, &robots, 0, Direction::SouthEast);
        assert_eq!(kinds_at(&hits, 3, 3), vec!['R']);
        assert_eq!(kinds_at(&hits, 1, 3), vec!['R']);
        assert!(kinds_at(&hits, 0, 3).is_empty());
    }

    #[test]
    fn test_scan_is_repeatable() {
        let mut arena = Arena::new(6, 6);
        arena.set_cell(Position::new(1, 4), Cell::Mound);
        let robots = vec![
            dummy_robot(0, WeaponKind::Railgun, 5, 0),
            dummy_robot(1, WeaponKind::Hammer, 2, 3),
        ];
        for direction in Direction::COMPASS.iter().copied().chain([Direction::None]) {
            let first = scan(&arena, &robots, 0, direction);
            let second = scan(&arena, &robots, 0, direction);
            assert_eq!(first, second);
        }
    }
}
