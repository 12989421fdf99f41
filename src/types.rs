// Shared value types: grid positions, compass directions, terrain and radar results

use std::fmt;

/// A (row, column) cell address. Signed so that direction deltas can walk off the grid
/// before bounds checks reject the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Position { row, col }
    }

    /// Moves `steps` cells along a (row, col) delta.
    pub fn offset(self, delta: (i32, i32), steps: i32) -> Self {
        Position {
            row: self.row + delta.0 * steps,
            col: self.col + delta.1 * steps,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Compass directions, numbered clockwise from North as 1..=8, with `None` as 0.
/// Row 0 is the top of the grid, so North decreases the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    None,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// The eight real directions in clockwise order.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Row/column delta of one step in this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Direction from its 0..=8 index; anything out of range maps to `None`.
    pub fn from_index(index: u8) -> Self {
        match index {
            1..=8 => Direction::COMPASS[(index - 1) as usize],
            _ => Direction::None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Direction::None => 0,
            d => Direction::COMPASS.iter().position(|&c| c == d).map_or(0, |i| i as u8 + 1),
        }
    }

    /// Next direction clockwise (North after NorthWest). `None` starts the sweep at North.
    pub fn clockwise(self) -> Self {
        Direction::from_index(self.index() % 8 + 1)
    }

    /// Direction whose delta is the per-axis sign of `delta`.
    pub fn from_delta(delta: (i32, i32)) -> Self {
        let signs = (delta.0.signum(), delta.1.signum());
        Direction::COMPASS
            .iter()
            .copied()
            .find(|d| d.delta() == signs)
            .unwrap_or(Direction::None)
    }
}

/// Offset used to widen a ray into a three-cell sweep (left, centre, right).
pub fn perpendicular(delta: (i32, i32)) -> (i32, i32) {
    match delta {
        (0, _) => (1, 0),
        (_, 0) => (0, 1),
        (dr, dc) => (-dc, dr),
    }
}

/// Static terrain tag of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Mound,
    Pit,
    Flamethrower,
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Mound => 'M',
            Cell::Pit => 'P',
            Cell::Flamethrower => 'F',
        }
    }
}

/// Weapon a robot is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponKind {
    Flamethrower,
    Railgun,
    Grenade,
    Hammer,
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeaponKind::Flamethrower => "flamethrower",
            WeaponKind::Railgun => "railgun",
            WeaponKind::Grenade => "grenade",
            WeaponKind::Hammer => "hammer",
        };
        f.write_str(name)
    }
}

/// What a radar sweep saw in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadarKind {
    Terrain(Cell),
    Robot,
    Wreck,
}

impl RadarKind {
    /// Single-character tag: terrain glyph, `R` for a live robot, `X` for a wreck.
    pub fn tag(self) -> char {
        match self {
            RadarKind::Terrain(cell) => cell.glyph(),
            RadarKind::Robot => 'R',
            RadarKind::Wreck => 'X',
        }
    }
}

/// One observation produced by a radar sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RadarHit {
    pub kind: RadarKind,
    pub row: i32,
    pub col: i32,
}

impl RadarHit {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}
