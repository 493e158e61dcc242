//! Session state management
//!
//! Pure state for one race session that can be tested independently of
//! the async orchestration. All mutation flows through [`SessionCommand`]
//! so every state change has a single, auditable entry point; readers go
//! through the accessor methods.

use serde::{Deserialize, Serialize};

use crate::types::{Horse, Round, RoundResult};

/// A state mutation request. The orchestrator and the public entry
/// points never touch the fields directly.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    SetHorses(Vec<Horse>),
    SetSchedule(Vec<Round>),
    SetCurrentRound(Option<Round>),
    AddResult(RoundResult),
    ClearResults,
    SetRacing(bool),
    SetRoundInProgress(bool),
}

/// Observable state of one race session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    horses: Vec<Horse>,
    schedule: Vec<Round>,
    results: Vec<RoundResult>,
    current_round: Option<Round>,
    is_racing: bool,
    round_in_progress: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single mutation command.
    pub fn apply(&mut self, command: SessionCommand) {
        match command {
            SessionCommand::SetHorses(horses) => self.horses = horses,
            SessionCommand::SetSchedule(schedule) => self.schedule = schedule,
            SessionCommand::SetCurrentRound(round) => self.current_round = round,
            SessionCommand::AddResult(result) => self.results.push(result),
            SessionCommand::ClearResults => self.results.clear(),
            SessionCommand::SetRacing(value) => self.is_racing = value,
            SessionCommand::SetRoundInProgress(value) => self.round_in_progress = value,
        }
    }

    pub fn horses(&self) -> &[Horse] {
        &self.horses
    }

    pub fn schedule(&self) -> &[Round] {
        &self.schedule
    }

    pub fn results(&self) -> &[RoundResult] {
        &self.results
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// True while the whole round sequence is active.
    pub fn is_racing(&self) -> bool {
        self.is_racing
    }

    /// True while a single round's observation window is open.
    pub fn round_in_progress(&self) -> bool {
        self.round_in_progress
    }

    pub fn has_schedule(&self) -> bool {
        !self.schedule.is_empty()
    }
}
