use crate::config;
use crate::types::*;
use std::fmt;

// Represents the possible states of a robot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RobotStatus {
    Active,
    Immobilized, // Fell into a pit; can still scan and shoot
    Destroyed,
}

/// Fixed build of a robot, read once when it joins the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loadout {
    pub name: String,
    pub glyph: char,
    pub move_speed: i32,
    pub armor: i32,
    pub weapon: WeaponKind,
}

/// Read-only snapshot of a robot handed to its strategy on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotView {
    pub position: Position,
    pub health: i32,
    pub armor: i32,
    pub move_speed: i32,
    pub grenades: u32,
    pub weapon: WeaponKind,
    pub board_rows: i32,
    pub board_cols: i32,
}

/// Behaviour every combatant implements. The engine only ever talks to robots
/// through this trait and never inspects which tactic is behind it.
pub trait Strategy {
    fn loadout(&self) -> Loadout;

    /// Direction to sweep the radar this turn; `Direction::None` scans the eight neighbours.
    fn choose_radar_direction(&mut self, me: &RobotView) -> Direction;

    /// Receives this turn's radar results.
    fn observe(&mut self, me: &RobotView, hits: &[RadarHit]);

    /// Cell to attack this turn, if any.
    fn decide_shot(&mut self, me: &RobotView) -> Option<Position>;

    /// Only asked when no shot was taken. `(Direction::None, 0)` stays put.
    fn decide_move(&mut self, me: &RobotView) -> (Direction, i32);
}

// Represents a robot in the arena
pub struct Robot {
    pub id: usize, // Roster index
    pub name: String,
    pub glyph: char,
    pub position: Position,
    pub health: i32,
    pub armor: i32,
    pub move_speed: i32,
    pub weapon: WeaponKind,
    pub grenades: u32,
    pub status: RobotStatus,
    strategy: Box<dyn Strategy>,
}

impl fmt::Debug for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Robot")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("glyph", &self.glyph)
            .field("position", &self.position)
            .field("health", &self.health)
            .field("armor", &self.armor)
            .field("move_speed", &self.move_speed)
            .field("weapon", &self.weapon)
            .field("grenades", &self.grenades)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl Robot {
    // Creates a robot at the given cell from its strategy's loadout
    pub fn new(id: usize, strategy: Box<dyn Strategy>, position: Position) -> Self {
        let loadout = strategy.loadout();
        let grenades = if loadout.weapon == WeaponKind::Grenade {
            config::GRENADE_CHARGES
        } else {
            0
        };

        Robot {
            id,
            name: loadout.name,
            glyph: loadout.glyph,
            position,
            health: config::INITIAL_HEALTH,
            armor: loadout.armor.max(0),
            move_speed: loadout.move_speed.max(0),
            weapon: loadout.weapon,
            grenades,
            status: RobotStatus::Active,
            strategy,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn can_move(&self) -> bool {
        self.status == RobotStatus::Active
    }

    /// Snapshot handed to the strategy.
    pub fn view(&self, (board_rows, board_cols): (i32, i32)) -> RobotView {
        RobotView {
            position: self.position,
            health: self.health,
            armor: self.armor,
            move_speed: self.move_speed,
            grenades: self.grenades,
            weapon: self.weapon,
            board_rows,
            board_cols,
        }
    }

    pub fn strategy_mut(&mut self) -> &mut dyn Strategy {
        self.strategy.as_mut()
    }

    /// Subtracts already-mitigated damage; health never drops below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
        if self.health == 0 && self.status != RobotStatus::Destroyed {
            self.status = RobotStatus::Destroyed;
            log::info!("Robot {} ({}) destroyed!", self.id, self.name);
        }
    }

    /// Lowers armor by `amount`; a request that would take armor below zero is ignored.
    pub fn reduce_armor(&mut self, amount: i32) {
        if amount >= 0 && self.armor - amount >= 0 {
            self.armor -= amount;
        }
    }

    /// Spends one grenade charge. Returns false when none are left.
    pub fn use_grenade(&mut self) -> bool {
        if self.grenades == 0 {
            return false;
        }
        self.grenades -= 1;
        true
    }

    pub fn disable_movement(&mut self) {
        if self.status == RobotStatus::Active {
            self.status = RobotStatus::Immobilized;
        }
    }

    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }
}
