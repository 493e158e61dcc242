//! Round outcome simulation
//!
//! Pure given the round and the random draws: no hidden state, so a
//! seeded RNG reproduces a result exactly. Condition is first widened
//! into [30.7, 100] so the gap between the slowest and fastest horse is
//! visible through the jitter.

use rand::Rng;
use tracing::debug;

use crate::types::{Round, RoundEntry, RoundResult};

/// Lower bound added to the weighted condition.
const CONDITION_FLOOR: f64 = 30.0;
/// Weight applied to the raw condition score.
const CONDITION_WEIGHT: f64 = 0.7;
/// Multiplicative jitter bounds applied independently per horse.
const JITTER_MIN: f64 = 0.9;
const JITTER_MAX: f64 = 1.1;

/// Simulate one round, producing its ranked result.
///
/// # Panics
///
/// Panics if the round has no horses. Rounds built by the schedule
/// builder always carry a full selection.
pub fn simulate_round<R: Rng>(round: &Round, speed_factor: f64, rng: &mut R) -> RoundResult {
    let mut entries: Vec<RoundEntry> = round
        .horses
        .iter()
        .map(|horse| {
            let effective_condition = CONDITION_FLOOR + CONDITION_WEIGHT * horse.condition as f64;
            let base_time = round.distance as f64 / (effective_condition * speed_factor);
            let jitter = rng.gen_range(JITTER_MIN..=JITTER_MAX);
            let time = (base_time * jitter * 100.0).round() / 100.0;

            RoundEntry {
                horse: horse.clone(),
                time,
                position: 0,
            }
        })
        .collect();

    // stable sort: ties keep draw order
    entries.sort_by(|a, b| a.time.total_cmp(&b.time));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.position = index as u32 + 1;
    }

    let winner = entries[0].horse.clone();
    debug!(
        round = round.number,
        distance = round.distance,
        winner = %winner.name,
        "simulated round"
    );

    RoundResult {
        round: round.number,
        distance: round.distance,
        entries,
        winner,
    }
}
