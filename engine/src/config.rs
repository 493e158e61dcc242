//! Engine configuration
//!
//! Plain configuration values with defaults matching the classic session
//! shape: a 20-horse roster, 6 rounds of 10 horses each, and the fixed
//! ascending distance ladder.

use std::time::Duration;

/// A named display color from the fixed palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Default name pool for roster generation.
pub const DEFAULT_NAME_POOL: [&str; 20] = [
    "Thunder", "Lightning", "Storm", "Blaze", "Shadow", "Phoenix", "Ace", "Duke", "King",
    "Prince", "Warrior", "Champion", "Victory", "Legend", "Hero", "Star", "Flash", "Rocket",
    "Comet", "Arrow",
];

/// Default color palette, assigned cyclically by generation index.
pub const DEFAULT_COLOR_POOL: [PaletteColor; 20] = [
    PaletteColor { name: "Crimson", hex: "#FF6B6B" },
    PaletteColor { name: "Turquoise", hex: "#4ECDC4" },
    PaletteColor { name: "Sky Blue", hex: "#45B7D1" },
    PaletteColor { name: "Light Salmon", hex: "#FFA07A" },
    PaletteColor { name: "Mint Green", hex: "#98D8C8" },
    PaletteColor { name: "Golden Yellow", hex: "#F7DC6F" },
    PaletteColor { name: "Medium Purple", hex: "#BB8FCE" },
    PaletteColor { name: "Light Blue", hex: "#85C1E2" },
    PaletteColor { name: "Orange", hex: "#F8B739" },
    PaletteColor { name: "Emerald", hex: "#52BE80" },
    PaletteColor { name: "Red", hex: "#EC7063" },
    PaletteColor { name: "Cyan", hex: "#5DADE2" },
    PaletteColor { name: "Gold", hex: "#F4D03F" },
    PaletteColor { name: "Spring Green", hex: "#58D68D" },
    PaletteColor { name: "Burnt Orange", hex: "#EB984E" },
    PaletteColor { name: "Cornflower Blue", hex: "#AED6F1" },
    PaletteColor { name: "Light Coral", hex: "#F1948A" },
    PaletteColor { name: "Steel Blue", hex: "#85C1E9" },
    PaletteColor { name: "Pale Goldenrod", hex: "#F9E79F" },
    PaletteColor { name: "Light Green", hex: "#82E0AA" },
];

/// Static simulation parameters.
#[derive(Debug, Clone)]
pub struct RaceConfig {
    /// Number of horses generated into the roster.
    pub roster_size: usize,
    /// Number of distinct horses selected into each round.
    pub horses_per_round: usize,
    /// One round is scheduled per distance, in order.
    pub round_distances: Vec<u32>,
    /// Symmetric bound on the condition perturbation applied after the
    /// base draw.
    pub condition_variance: i32,
    /// Converts effective condition into meters per time unit.
    pub speed_factor: f64,
    /// Candidate names; must hold at least `roster_size` entries.
    pub name_pool: Vec<String>,
    /// Display colors, cycled by generation index.
    pub color_pool: Vec<PaletteColor>,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            roster_size: 20,
            horses_per_round: 10,
            round_distances: vec![1200, 1400, 1600, 1800, 2000, 2200],
            condition_variance: 15,
            speed_factor: 0.1,
            name_pool: DEFAULT_NAME_POOL.iter().map(|s| s.to_string()).collect(),
            color_pool: DEFAULT_COLOR_POOL.to_vec(),
        }
    }
}

/// Pacing of the asynchronous round sequence. The delays exist purely so
/// an observer can follow the run; none of them await real computation.
#[derive(Debug, Clone, Copy)]
pub struct RaceTiming {
    /// Pause after a round becomes current, before it runs.
    pub pre_round_delay: Duration,
    /// Window during which the round counts as in progress.
    pub round_duration: Duration,
    /// Pause after a round settles, before the next one starts.
    pub between_rounds_delay: Duration,
}

impl Default for RaceTiming {
    fn default() -> Self {
        Self {
            pre_round_delay: Duration::from_millis(1000),
            round_duration: Duration::from_millis(2000),
            between_rounds_delay: Duration::from_millis(1500),
        }
    }
}

impl RaceTiming {
    /// All-zero pacing for fast deterministic runs.
    pub fn zero() -> Self {
        Self {
            pre_round_delay: Duration::ZERO,
            round_duration: Duration::ZERO,
            between_rounds_delay: Duration::ZERO,
        }
    }
}
