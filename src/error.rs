// Arena error types: placement capacity, roster limits, bad strategy decisions

use thiserror::Error;

/// Errors raised while setting up or running an arena.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    #[error("Cannot place {requested} {what}: only {available} empty cells left")]
    PlacementExhausted {
        what: &'static str,
        requested: usize,
        available: usize,
    },
    #[error("Roster is full ({max} robots)")]
    RosterFull { max: usize },
    #[error("Robot {robot} made a malformed decision: {reason}")]
    MalformedDecision { robot: usize, reason: String },
    #[error("Unknown strategy '{0}'")]
    UnknownStrategy(String),
}
