//! Schedule building
//!
//! Binds one round per configured distance, each with a fresh random
//! selection of distinct horses from the roster. Selection uses
//! `rand::seq::index::sample` (a bounded partial shuffle) so building
//! always terminates in O(K) draws.

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::config::RaceConfig;
use crate::error::{EngineError, EngineResult};
use crate::types::{Horse, Round};

/// Build the full round schedule from a generated roster.
pub fn build_schedule<R: Rng>(
    config: &RaceConfig,
    horses: &[Horse],
    rng: &mut R,
) -> EngineResult<Vec<Round>> {
    if horses.len() < config.horses_per_round {
        return Err(EngineError::HorsesNotGenerated);
    }

    let mut schedule = Vec::with_capacity(config.round_distances.len());
    for (position, &distance) in config.round_distances.iter().enumerate() {
        let selected = index::sample(rng, horses.len(), config.horses_per_round)
            .into_iter()
            .map(|idx| horses[idx].clone())
            .collect();

        schedule.push(Round {
            number: position as u32 + 1,
            distance,
            horses: selected,
        });
    }

    debug!(rounds = schedule.len(), "built race schedule");
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::generate_horses;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn roster(seed: u64) -> Vec<Horse> {
        let config = RaceConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        generate_horses(&config, &mut rng).unwrap()
    }

    #[test]
    fn test_schedule_has_fixed_rounds_and_distances() {
        let config = RaceConfig::default();
        let horses = roster(1);
        let mut rng = StdRng::seed_from_u64(10);
        let schedule = build_schedule(&config, &horses, &mut rng).unwrap();

        assert_eq!(schedule.len(), 6);
        let expected = [1200, 1400, 1600, 1800, 2000, 2200];
        for (i, round) in schedule.iter().enumerate() {
            assert_eq!(round.number, i as u32 + 1);
            assert_eq!(round.distance, expected[i]);
        }
    }

    #[test]
    fn test_each_round_selects_distinct_roster_horses() {
        let config = RaceConfig::default();
        let horses = roster(2);
        let roster_ids: HashSet<u32> = horses.iter().map(|h| h.id).collect();
        let mut rng = StdRng::seed_from_u64(11);
        let schedule = build_schedule(&config, &horses, &mut rng).unwrap();

        for round in &schedule {
            assert_eq!(round.horses.len(), 10);
            let ids: HashSet<u32> = round.horses.iter().map(|h| h.id).collect();
            assert_eq!(ids.len(), 10, "round {} repeats a horse", round.number);
            assert!(ids.is_subset(&roster_ids));
        }
    }

    #[test]
    fn test_same_seed_yields_identical_schedule() {
        let config = RaceConfig::default();
        let horses = roster(3);
        let mut rng_a = StdRng::seed_from_u64(12);
        let mut rng_b = StdRng::seed_from_u64(12);
        assert_eq!(
            build_schedule(&config, &horses, &mut rng_a).unwrap(),
            build_schedule(&config, &horses, &mut rng_b).unwrap()
        );
    }

    #[test]
    fn test_empty_roster_fails_with_precondition() {
        let config = RaceConfig::default();
        let mut rng = StdRng::seed_from_u64(13);
        let err = build_schedule(&config, &[], &mut rng).unwrap_err();
        assert_eq!(err, EngineError::HorsesNotGenerated);
        assert_eq!(err.to_string(), "Horses must be generated first");
    }

    #[test]
    fn test_undersized_roster_fails_with_precondition() {
        let config = RaceConfig::default();
        let horses = roster(4);
        let mut rng = StdRng::seed_from_u64(14);
        let err = build_schedule(&config, &horses[..5], &mut rng).unwrap_err();
        assert_eq!(err, EngineError::HorsesNotGenerated);
    }
}
