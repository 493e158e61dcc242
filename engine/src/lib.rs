//! Race simulation & orchestration engine
//!
//! Generates a horse roster, builds a multi-round schedule, simulates
//! each round, and sequences asynchronous playback of the rounds with
//! timed pacing. Rendering and navigation are external collaborators
//! that consume the observable session state; nothing here persists or
//! leaves the process.

pub mod config;
pub mod error;
pub mod orchestrator;
pub mod outcome;
pub mod roster;
pub mod schedule;
pub mod session;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{PaletteColor, RaceConfig, RaceTiming, DEFAULT_COLOR_POOL, DEFAULT_NAME_POOL};
pub use error::{EngineError, EngineResult};
pub use orchestrator::{RaceEngine, RacePhase};
pub use session::{SessionCommand, SessionState};
pub use traits::{Clock, TokioClock};
pub use types::{Horse, Round, RoundEntry, RoundResult};
