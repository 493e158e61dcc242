//! Core data model for the race engine
//!
//! These types are the engine's public surface: a presentation layer
//! consumes them read-only, so everything here is cheaply cloneable and
//! serializable.

use serde::{Deserialize, Serialize};

/// A generated competitor. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Horse {
    /// 1-based, assigned in generation order.
    pub id: u32,
    pub name: String,
    /// Hex display color.
    pub color: String,
    pub color_name: String,
    /// Fitness score in [1, 100].
    pub condition: u8,
}

/// One scheduled race: a fixed distance plus the horses drawn for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based ordinal within the schedule.
    pub number: u32,
    /// Distance in meters.
    pub distance: u32,
    /// Exactly `horses_per_round` distinct horses, in draw order.
    pub horses: Vec<Horse>,
}

/// A single horse's simulated performance within a round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEntry {
    pub horse: Horse,
    /// Finish time rounded to two decimals.
    pub time: f64,
    /// Finishing position, 1-based.
    pub position: u32,
}

/// The ranked outcome of simulating one round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Ordinal of the simulated round, echoed unchanged.
    pub round: u32,
    /// Distance of the simulated round, echoed unchanged.
    pub distance: u32,
    /// Entries sorted ascending by time; positions form 1..=K.
    pub entries: Vec<RoundEntry>,
    /// The position-1 horse.
    pub winner: Horse,
}
