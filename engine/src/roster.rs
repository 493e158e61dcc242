//! Roster generation
//!
//! Draws a fresh set of horses from the configured name pool. Names come
//! from a shuffled permutation of the pool, so the name-to-color pairing
//! varies run to run while the color at each generation index stays
//! fixed.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::config::RaceConfig;
use crate::error::{EngineError, EngineResult};
use crate::types::Horse;

/// Generate `roster_size` horses with ids 1..=N in generation order.
pub fn generate_horses<R: Rng>(config: &RaceConfig, rng: &mut R) -> EngineResult<Vec<Horse>> {
    if config.name_pool.len() < config.roster_size {
        return Err(EngineError::NamePoolTooSmall {
            needed: config.roster_size,
            available: config.name_pool.len(),
        });
    }
    if config.color_pool.is_empty() {
        return Err(EngineError::EmptyColorPool);
    }

    let mut names = config.name_pool.clone();
    names.shuffle(rng);
    names.truncate(config.roster_size);

    let mut horses = Vec::with_capacity(config.roster_size);
    for (index, name) in names.into_iter().enumerate() {
        let palette = config.color_pool[index % config.color_pool.len()];
        let base_condition = rng.gen_range(1..=100i32);
        let variance = rng.gen_range(-config.condition_variance..=config.condition_variance);
        let condition = (base_condition + variance).clamp(1, 100) as u8;

        horses.push(Horse {
            id: index as u32 + 1,
            name,
            color: palette.hex.to_string(),
            color_name: palette.name.to_string(),
            condition,
        });
    }

    debug!(count = horses.len(), "generated roster");
    Ok(horses)
}
