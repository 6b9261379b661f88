//! Simulation configuration.

use crate::dungeon::types::{Biome, DungeonSize};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent heroes to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Biome every attempt enters
    pub biome: Biome,

    /// Dungeon size every attempt enters
    pub size: DungeonSize,

    /// Dungeon attempts per hero
    pub attempts_per_run: u32,

    /// Attacks allowed in one attempt before the hero flees
    pub max_attacks_per_attempt: u64,

    /// Spend gold on the cheapest affordable upgrade between attempts
    pub buy_upgrades: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            biome: Biome::Forest,
            size: DungeonSize::Small,
            attempts_per_run: 20,
            max_attacks_per_attempt: 10_000,
            buy_upgrades: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking one dungeon tier's difficulty
    pub fn tier_balance_test(size: DungeonSize) -> Self {
        Self {
            num_runs: 100,
            size,
            attempts_per_run: 50,
            ..Default::default()
        }
    }

    /// Heroes that never visit the shop, to isolate leveling alone
    pub fn no_shop(num_runs: u32) -> Self {
        Self {
            num_runs,
            buy_upgrades: false,
            ..Default::default()
        }
    }
}
