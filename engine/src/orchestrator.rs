//! Race orchestration
//!
//! [`RaceEngine`] is the engine's public facade. It owns the session
//! state behind an `Arc<Mutex<..>>` so a presentation layer can observe
//! progress mid-flight, and drives the per-round state machine as a
//! single logical task with timed suspension points between phases.
//! Exactly one round is ever in flight, so results append strictly in
//! ordinal order.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::config::{RaceConfig, RaceTiming};
use crate::error::{EngineError, EngineResult};
use crate::outcome::simulate_round;
use crate::roster::generate_horses;
use crate::schedule::build_schedule;
use crate::session::{SessionCommand, SessionState};
use crate::traits::{Clock, TokioClock};
use crate::types::{Horse, Round};

/// Phase of the round sequencing state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacePhase {
    Idle,
    /// Pre-round pause: the round is current but not yet running.
    RoundPending,
    /// Result computed, observation window open.
    RoundRunning,
    /// Post-round pause before the next round starts.
    RoundSettling,
    Complete,
}

impl RacePhase {
    /// Legal successors in the round sequencing machine: rounds cycle
    /// pending → running → settling, and settling either starts the
    /// next round or completes the race.
    fn can_advance_to(self, next: RacePhase) -> bool {
        matches!(
            (self, next),
            (RacePhase::Idle, RacePhase::RoundPending)
                | (RacePhase::RoundPending, RacePhase::RoundRunning)
                | (RacePhase::RoundRunning, RacePhase::RoundSettling)
                | (RacePhase::RoundSettling, RacePhase::RoundPending)
                | (RacePhase::RoundSettling, RacePhase::Complete)
        )
    }
}

/// Race engine facade with injected clock and seedable randomness.
pub struct RaceEngine<C: Clock> {
    state: Arc<Mutex<SessionState>>,
    rng: Mutex<StdRng>,
    config: RaceConfig,
    timing: RaceTiming,
    clock: C,
}

impl RaceEngine<TokioClock> {
    /// Engine with the production clock. `seed` fixes all random draws;
    /// `None` seeds from the OS.
    pub fn from_seed(config: RaceConfig, timing: RaceTiming, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(config, timing, TokioClock, rng)
    }
}

impl<C: Clock> RaceEngine<C> {
    /// Create a new engine with injected dependencies.
    pub fn new(config: RaceConfig, timing: RaceTiming, clock: C, rng: StdRng) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::new())),
            rng: Mutex::new(rng),
            config,
            timing,
            clock,
        }
    }

    /// Shared handle to the session state for mid-flight observation.
    pub fn state_handle(&self) -> Arc<Mutex<SessionState>> {
        Arc::clone(&self.state)
    }

    /// Cloned view of the current session state.
    pub async fn snapshot(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    /// Generate a fresh roster, replacing any previous one.
    pub async fn generate_roster(&self) -> EngineResult<Vec<Horse>> {
        let horses = {
            let mut rng = self.rng.lock().await;
            generate_horses(&self.config, &mut *rng)?
        };

        let mut state = self.state.lock().await;
        state.apply(SessionCommand::SetHorses(horses.clone()));
        info!(count = horses.len(), "roster generated");
        Ok(horses)
    }

    /// Build the round schedule from the current roster. Clears any
    /// prior results; fails without mutating if the roster is missing.
    pub async fn build_schedule(&self) -> EngineResult<Vec<Round>> {
        let mut state = self.state.lock().await;
        let schedule = {
            let mut rng = self.rng.lock().await;
            build_schedule(&self.config, state.horses(), &mut *rng)?
        };

        state.apply(SessionCommand::SetSchedule(schedule.clone()));
        state.apply(SessionCommand::ClearResults);
        info!(rounds = schedule.len(), "schedule built");
        Ok(schedule)
    }

    /// Run every scheduled round to completion, pacing each phase with
    /// the configured delays. Rejected while a run is already active.
    pub async fn run_race(&self) -> EngineResult<()> {
        let schedule = {
            let mut state = self.state.lock().await;
            if !state.has_schedule() {
                return Err(EngineError::ScheduleNotGenerated);
            }
            if state.is_racing() {
                return Err(EngineError::RaceAlreadyRunning);
            }
            state.apply(SessionCommand::SetRacing(true));
            state.apply(SessionCommand::ClearResults);
            state.schedule().to_vec()
        };

        info!(rounds = schedule.len(), "race started");
        let mut phase = RacePhase::Idle;
        let total_rounds = schedule.len();

        for (index, round) in schedule.into_iter().enumerate() {
            let round_number = round.number;
            {
                let mut state = self.state.lock().await;
                state.apply(SessionCommand::SetCurrentRound(Some(round.clone())));
            }
            phase = self.enter_phase(phase, RacePhase::RoundPending, round_number);
            self.clock.sleep(self.timing.pre_round_delay).await;

            phase = self.enter_phase(phase, RacePhase::RoundRunning, round_number);
            let result = {
                let mut rng = self.rng.lock().await;
                simulate_round(&round, self.config.speed_factor, &mut *rng)
            };
            {
                let mut state = self.state.lock().await;
                state.apply(SessionCommand::SetRoundInProgress(true));
                state.apply(SessionCommand::AddResult(result.clone()));
            }
            info!(
                round = round_number,
                distance = round.distance,
                winner = %result.winner.name,
                "round finished"
            );
            self.clock.sleep(self.timing.round_duration).await;

            {
                let mut state = self.state.lock().await;
                state.apply(SessionCommand::SetRoundInProgress(false));
            }
            phase = self.enter_phase(phase, RacePhase::RoundSettling, round_number);
            self.clock.sleep(self.timing.between_rounds_delay).await;

            if index + 1 == total_rounds {
                self.enter_phase(phase, RacePhase::Complete, round_number);
            }
        }

        let mut state = self.state.lock().await;
        state.apply(SessionCommand::SetCurrentRound(None));
        state.apply(SessionCommand::SetRacing(false));
        info!("race complete");
        Ok(())
    }

    fn enter_phase(&self, from: RacePhase, to: RacePhase, round: u32) -> RacePhase {
        debug_assert!(
            from.can_advance_to(to),
            "illegal race phase transition {from:?} -> {to:?}"
        );
        debug!(?from, ?to, round, "race phase transition");
        to
    }
}
