use crate::arena::Arena;
use crate::config;
use crate::game::GameOutcome;
use crate::robot::{Robot, RobotStatus};
use crate::types::*;
use std::fmt::Write as _;
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Receives what the round loop wants shown. The engine never prints on its own.
pub trait DisplaySink {
    fn show_round(&mut self, round: u32, snapshot: &str);

    /// Called between rounds when the game is being watched live.
    fn pause(&mut self);

    fn game_over(&mut self, outcome: &GameOutcome, robots: &[Robot]);
}

/// Text snapshot of the grid followed by one status line per robot.
///
/// Each cell is three characters wide: terrain glyphs for empty ground and hazards,
/// `R` plus the robot glyph for a live robot, `X` plus the glyph for a wreck.
pub fn render_grid(arena: &Arena, robots: &[Robot]) -> String {
    let mut out = String::new();
    let (rows, cols) = arena.extent();
    for row in 0..rows {
        for col in 0..cols {
            let position = Position::new(row, col);
            match Arena::robot_at(robots, position) {
                Some(i) => {
                    let marker = if robots[i].is_alive() { 'R' } else { 'X' };
                    let _ = write!(out, "{}{} ", marker, robots[i].glyph);
                }
                None => {
                    let glyph = arena.cell(position).unwrap_or_default().glyph();
                    let _ = write!(out, " {} ", glyph);
                }
            }
        }
        out.push('\n');
    }

    for robot in robots {
        let state = match robot.status {
            RobotStatus::Active => "",
            RobotStatus::Immobilized => " [stuck]",
            RobotStatus::Destroyed => " [destroyed]",
        };
        let _ = write!(
            out,
            "{} ({}) {} at {} health {} armor {}",
            robot.name, robot.glyph, robot.weapon, robot.position, robot.health, robot.armor
        );
        if robot.weapon == WeaponKind::Grenade {
            let _ = write!(out, " grenades {}", robot.grenades);
        }
        out.push_str(state);
        out.push('\n');
    }
    out
}

/// Writes snapshots to any writer (stdout in the binary).
pub struct TextRenderer<W: Write> {
    out: W,
    pause: Duration,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer {
            out,
            pause: Duration::from_millis(config::ROUND_PAUSE_MS),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySink for TextRenderer<W> {
    fn show_round(&mut self, round: u32, snapshot: &str) {
        let written = writeln!(self.out, "=========== starting round {} ===========", round)
            .and_then(|()| write!(self.out, "{}", snapshot))
            .and_then(|()| self.out.flush());
        if let Err(e) = written {
            log::warn!("Failed to draw round {}: {}", round, e);
        }
    }

    fn pause(&mut self) {
        thread::sleep(self.pause);
    }

    fn game_over(&mut self, outcome: &GameOutcome, robots: &[Robot]) {
        let line = match outcome {
            GameOutcome::Winner { index, .. } => {
                let robot = &robots[*index];
                format!("{} ({}) wins with {} health!", robot.name, robot.glyph, robot.health)
            }
            GameOutcome::Draw => "Draw! No robots survived.".to_string(),
        };
        if let Err(e) = writeln!(self.out, "{}", line) {
            log::warn!("Failed to announce result: {}", e);
        }
    }
}

/// Discards everything; used for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn show_round(&mut self, _round: u32, _snapshot: &str) {}
    fn pause(&mut self) {}
    fn game_over(&mut self, _outcome: &GameOutcome, _robots: &[Robot]) {}
}
