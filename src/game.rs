use crate::arena::Arena;
use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::movement::{self, MoveOutcome};
use crate::radar;
use crate::render::{self, DisplaySink};
use crate::robot::{Robot, Strategy};
use crate::types::*;
use crate::weapon::{self, AttackOutcome};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::panic::{self, AssertUnwindSafe};

/// Phases of the round loop. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    RoundStart,
    DisplayState,
    CheckTermination,
    Turns,
    EndOfRoundDelay,
    GameOver,
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Winner { index: usize, name: String },
    Draw,
}

/// What a robot did with its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAction {
    Attacked(AttackOutcome),
    Moved(MoveOutcome),
}

/// The Game struct owns the arena, the roster and the round counter
pub struct Game {
    pub arena: Arena,
    pub robots: Vec<Robot>,
    pub current_round: u32,
    pub max_rounds: u32,
    pub max_robots: usize,
    watch_live: bool,
    phase: GamePhase,
    rng: StdRng,
}

impl Game {
    /// Builds the arena from `config` and places its hazards. Hazard counts that do
    /// not fit are trimmed with a warning rather than failing the game.
    pub fn new(config: &ArenaConfig, mut rng: StdRng) -> Self {
        let mut arena = Arena::new(config.arena_rows, config.arena_cols);
        info!("Arena created with {}x{} grid.", arena.rows, arena.cols);

        if let Err(e) = arena.place_hazards(
            &[],
            config.num_mounds,
            config.num_pits,
            config.num_flamethrowers,
            &mut rng,
        ) {
            warn!("{}", e);
        }
        info!("Simulating for a maximum of {} rounds.", config.max_rounds);

        Game {
            arena,
            robots: Vec::new(),
            current_round: 0,
            max_rounds: config.max_rounds,
            max_robots: config.max_robots,
            watch_live: config.watch_live,
            phase: GamePhase::RoundStart,
            rng,
        }
    }

    /// Same as [`Game::new`] with a reproducible random source.
    pub fn with_seed(config: &ArenaConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Adds a robot on a random empty cell. Returns its roster index.
    pub fn add_robot(&mut self, strategy: Box<dyn Strategy>) -> Result<usize, ArenaError> {
        self.check_roster_space()?;
        let position = self.arena.spawn_position(&self.robots, &mut self.rng)?;
        Ok(self.push_robot(strategy, position))
    }

    /// Adds a robot on a chosen cell, which must be empty.
    pub fn add_robot_at(
        &mut self,
        strategy: Box<dyn Strategy>,
        position: Position,
    ) -> Result<usize, ArenaError> {
        self.check_roster_space()?;
        if !self.arena.is_empty(&self.robots, position) {
            return Err(ArenaError::PlacementExhausted {
                what: "robots",
                requested: 1,
                available: 0,
            });
        }
        Ok(self.push_robot(strategy, position))
    }

    fn check_roster_space(&self) -> Result<(), ArenaError> {
        if self.robots.len() >= self.max_robots {
            return Err(ArenaError::RosterFull {
                max: self.max_robots,
            });
        }
        Ok(())
    }

    fn push_robot(&mut self, strategy: Box<dyn Strategy>, position: Position) -> usize {
        let id = self.robots.len();
        let robot = Robot::new(id, strategy, position);
        info!(
            "Robot {} ({} '{}', {}) joins at {}",
            id, robot.name, robot.glyph, robot.weapon, position
        );
        self.robots.push(robot);
        id
    }

    pub fn living_count(&self) -> usize {
        self.robots.iter().filter(|r| r.is_alive()).count()
    }

    /// Runs rounds until the game is over and returns the result.
    pub fn run(&mut self, sink: &mut dyn DisplaySink) -> GameOutcome {
        info!("Starting main loop...");
        while self.step(sink) != GamePhase::GameOver {}

        let outcome = self.outcome();
        match &outcome {
            GameOutcome::Winner { index, name } => {
                info!("Robot {} ({}) wins after {} rounds", index, name, self.current_round)
            }
            GameOutcome::Draw => info!("Draw after {} rounds", self.current_round),
        }
        sink.game_over(&outcome, &self.robots);
        outcome
    }

    /// Advances the round loop by one phase and returns the phase it moved to.
    ///
    /// The round counter is bumped before a round is played, and rounds are played
    /// while it stays within `max_rounds`.
    pub fn step(&mut self, sink: &mut dyn DisplaySink) -> GamePhase {
        self.phase = match self.phase {
            GamePhase::RoundStart => {
                if self.current_round >= self.max_rounds {
                    GamePhase::GameOver
                } else {
                    self.current_round += 1;
                    crate::debug_round!(self.current_round, "Round {} begins", self.current_round);
                    GamePhase::DisplayState
                }
            }
            GamePhase::DisplayState => {
                sink.show_round(self.current_round, &render::render_grid(&self.arena, &self.robots));
                GamePhase::CheckTermination
            }
            GamePhase::CheckTermination => {
                if self.living_count() <= 1 {
                    GamePhase::GameOver
                } else {
                    GamePhase::Turns
                }
            }
            GamePhase::Turns => {
                self.play_turns();
                GamePhase::EndOfRoundDelay
            }
            GamePhase::EndOfRoundDelay => {
                if self.watch_live {
                    sink.pause();
                }
                GamePhase::RoundStart
            }
            GamePhase::GameOver => GamePhase::GameOver,
        };
        self.phase
    }

    // Every living robot gets one turn, in roster order
    fn play_turns(&mut self) {
        for index in 0..self.robots.len() {
            if !self.robots[index].is_alive() {
                continue;
            }
            if let Err(e) = self.take_turn(index) {
                warn!("Round {}: {}; turn skipped", self.current_round, e);
            }
        }
    }

    /// One robot's turn: radar sweep, observation, then either a shot or a move.
    pub fn take_turn(&mut self, index: usize) -> Result<TurnAction, ArenaError> {
        let round = self.current_round;
        let view = self.robots[index].view(self.arena.extent());

        let direction = self.consult(index, |s| s.choose_radar_direction(&view))?;
        let hits = radar::scan(&self.arena, &self.robots, index, direction);
        crate::debug_radar!(index, round, "Scanned {:?}: {} hits", direction, hits.len());
        self.consult(index, |s| s.observe(&view, &hits))?;

        if let Some(target) = self.consult(index, |s| s.decide_shot(&view))? {
            let outcome =
                weapon::resolve_attack(&self.arena, &mut self.robots, index, target, &mut self.rng)?;
            self.report_attack(index, target, &outcome);
            return Ok(TurnAction::Attacked(outcome));
        }

        let (direction, distance) = self.consult(index, |s| s.decide_move(&view))?;
        if distance < 0 {
            return Err(ArenaError::MalformedDecision {
                robot: index,
                reason: format!("negative move distance {}", distance),
            });
        }
        let outcome = movement::resolve_move(
            &self.arena,
            &mut self.robots,
            index,
            direction,
            distance,
            &mut self.rng,
        );
        crate::debug_move!(
            index,
            round,
            "Moved {:?} {} of {} requested: {} -> {} ({:?})",
            direction,
            outcome.steps,
            distance,
            outcome.from,
            outcome.to,
            outcome.stopped_by
        );
        if outcome.burned > 0 {
            info!(
                "Robot {} burned by a flamethrower trap for {} damage",
                index, outcome.burned
            );
        }
        Ok(TurnAction::Moved(outcome))
    }

    // Runs one strategy hook. A panic inside the strategy forfeits the turn.
    fn consult<T>(
        &mut self,
        index: usize,
        ask: impl FnOnce(&mut dyn Strategy) -> T,
    ) -> Result<T, ArenaError> {
        let strategy = self.robots[index].strategy_mut();
        panic::catch_unwind(AssertUnwindSafe(|| ask(strategy))).map_err(|_| {
            ArenaError::MalformedDecision {
                robot: index,
                reason: "strategy panicked".to_string(),
            }
        })
    }

    fn report_attack(&self, shooter: usize, target: Position, outcome: &AttackOutcome) {
        let weapon = self.robots[shooter].weapon;
        if let Some(note) = outcome.note {
            info!("Robot {} fires {} at {}: {}", shooter, weapon, target, note);
            return;
        }
        if outcome.is_miss() {
            info!("Robot {} fires {} at {}: miss", shooter, weapon, target);
            return;
        }
        for hit in &outcome.hits {
            info!(
                "Robot {} fires {} at {}: hits Robot {} for {} damage",
                shooter, weapon, target, hit.target, hit.damage
            );
        }
        crate::debug_weapon!(
            shooter,
            self.current_round,
            "{} cells affected",
            outcome.affected.len()
        );
    }

    /// Winner among the survivors: strictly highest health wins, earlier roster
    /// entries win ties. No survivors is a draw.
    pub fn outcome(&self) -> GameOutcome {
        let mut best: Option<&Robot> = None;
        for robot in self.robots.iter().filter(|r| r.is_alive()) {
            if best.is_none_or(|b| robot.health > b.health) {
                best = Some(robot);
            }
        }
        match best {
            Some(robot) => GameOutcome::Winner {
                index: robot.id,
                name: robot.name.clone(),
            },
            None => GameOutcome::Draw,
        }
    }
}
