//! Team assignment error types.

use thiserror::Error;

/// Errors that can occur while building teams.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error("no running dinner possible: team size {team_size} needs more than {participants} participants")]
    InfeasibleConfiguration { team_size: u32, participants: usize },

    #[error("both queues exhausted while filling slot {slot} of team {team}")]
    TeamAssemblyExhausted { team: u32, slot: usize },

    #[error("invalid assignment config: {0}")]
    InvalidConfig(String),

    #[error("participant listed more than once: {0}")]
    DuplicateParticipant(String),
}

pub type AssignResult<T> = Result<T, AssignError>;
