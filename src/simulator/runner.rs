//! Main simulation runner. Drives the real `GameState` the same way the
//! frontend's auto-battle does, and buys upgrades between attempts.

use super::config::SimConfig;
use super::report::SimReport;
use crate::character::upgrades::cheapest_affordable;
use crate::combat::types::CombatOutcome;
use crate::core::game_state::GameState;
use crate::dungeon::types::{Biome, DungeonSize};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// How one dungeon attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttemptOutcome {
    Completed,
    Died,
    /// Hit the attack cap and fled
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptStats {
    pub outcome: AttemptOutcome,
    pub attacks: u64,
    /// Highest floor reached during the attempt
    pub deepest_floor: u32,
}

/// Per-hero totals across all attempts.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub dungeons_completed: u32,
    pub deaths: u32,
    pub timeouts: u32,
    pub total_attacks: u64,
    pub final_level: u32,
    pub final_gold: u64,
    pub upgrades_bought: u32,
    /// 1-based attempt of the first clear
    pub first_clear_attempt: Option<u32>,
    pub deepest_floor: u32,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Clears {}, Deaths {}, Upgrades {}, Deepest floor {}",
                run_idx + 1,
                config.num_runs,
                run_stats.final_level,
                run_stats.dungeons_completed,
                run_stats.deaths,
                run_stats.upgrades_bought,
                run_stats.deepest_floor
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(config, all_runs)
}

/// Plays one hero from a fresh game through every configured attempt.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut game = GameState::new();
    let mut stats = RunStats::default();

    for attempt in 1..=config.attempts_per_run {
        let result = play_dungeon(
            &mut game,
            config.biome,
            config.size,
            config.max_attacks_per_attempt,
            rng,
        );

        stats.total_attacks += result.attacks;
        stats.deepest_floor = stats.deepest_floor.max(result.deepest_floor);
        match result.outcome {
            AttemptOutcome::Completed => {
                stats.dungeons_completed += 1;
                stats.first_clear_attempt.get_or_insert(attempt);
            }
            AttemptOutcome::Died => stats.deaths += 1,
            AttemptOutcome::TimedOut => stats.timeouts += 1,
        }

        if config.buy_upgrades {
            stats.upgrades_bought += spend_all_gold(&mut game);
        }
    }

    stats.final_level = game.player().level;
    stats.final_gold = game.player().gold;
    stats
}

/// Auto-battles one dungeon attempt to completion, death, or the attack cap.
pub fn play_dungeon<R: Rng>(
    game: &mut GameState,
    biome: Biome,
    size: DungeonSize,
    max_attacks: u64,
    rng: &mut R,
) -> AttemptStats {
    if game.is_in_dungeon() {
        game.flee_dungeon();
    }
    game.start_dungeon(biome, size, rng);

    let mut attacks = 0;
    let mut deepest_floor = game.current_floor();

    while attacks < max_attacks {
        let result = game.attack_enemy(rng);
        attacks += 1;
        deepest_floor = deepest_floor.max(game.current_floor());

        let outcome = match result.outcome() {
            CombatOutcome::DungeonCompleted => {
                deepest_floor = size.floors();
                AttemptOutcome::Completed
            }
            CombatOutcome::PlayerDied => AttemptOutcome::Died,
            CombatOutcome::NoTarget => break,
            CombatOutcome::Exchange | CombatOutcome::FloorCleared => continue,
        };
        return AttemptStats {
            outcome,
            attacks,
            deepest_floor,
        };
    }

    game.flee_dungeon();
    AttemptStats {
        outcome: AttemptOutcome::TimedOut,
        attacks,
        deepest_floor,
    }
}

/// Greedy shop policy: keep buying the cheapest affordable upgrade.
/// Returns how many upgrades were bought.
pub fn spend_all_gold(game: &mut GameState) -> u32 {
    let mut bought = 0;
    while let Some(stat) = cheapest_affordable(game.player()) {
        if !game.upgrade_stat(stat) {
            break;
        }
        bought += 1;
    }
    bought
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_base_hero_dies_on_small_floor_four() {
        let mut rng = test_rng();
        let mut game = GameState::new();
        let result = play_dungeon(&mut game, Biome::Forest, DungeonSize::Small, 10_000, &mut rng);
        assert_eq!(result.outcome, AttemptOutcome::Died);
        assert_eq!(result.deepest_floor, 4);
        assert!(!game.is_in_dungeon());
        assert_eq!(game.player().floors_cleared, 3);
    }

    #[test]
    fn test_strong_hero_completes() {
        let mut rng = test_rng();
        let mut game = GameState::new();
        game.player_mut().attack = 1000;
        let result = play_dungeon(&mut game, Biome::Cave, DungeonSize::Small, 10_000, &mut rng);
        assert_eq!(result.outcome, AttemptOutcome::Completed);
        assert_eq!(result.attacks, 5);
        assert_eq!(result.deepest_floor, 5);
    }

    #[test]
    fn test_attack_cap_flees() {
        let mut rng = test_rng();
        let mut game = GameState::new();
        let result = play_dungeon(&mut game, Biome::Forest, DungeonSize::Epic, 3, &mut rng);
        assert_eq!(result.outcome, AttemptOutcome::TimedOut);
        assert_eq!(result.attacks, 3);
        assert!(!game.is_in_dungeon());
    }

    #[test]
    fn test_spend_all_gold_never_negative() {
        let mut game = GameState::new();
        game.player_mut().gold = 1_000;
        let bought = spend_all_gold(&mut game);
        assert!(bought > 0);
        assert!(cheapest_affordable(game.player()).is_none());
    }

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig {
            num_runs: 3,
            seed: Some(7),
            attempts_per_run: 5,
            verbosity: 0,
            ..Default::default()
        };
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.to_json(), b.to_json());
        assert_eq!(a.num_runs, 3);
    }

    #[test]
    fn test_upgrades_help_progression() {
        let with_shop = SimConfig {
            num_runs: 1,
            seed: Some(1),
            attempts_per_run: 30,
            verbosity: 0,
            ..Default::default()
        };
        let without_shop = SimConfig {
            buy_upgrades: false,
            ..with_shop.clone()
        };
        let mut rng = test_rng();
        let shop_stats = simulate_single_run(&with_shop, &mut rng);
        let mut rng = test_rng();
        let no_shop_stats = simulate_single_run(&without_shop, &mut rng);

        assert!(shop_stats.upgrades_bought > 0);
        assert_eq!(no_shop_stats.upgrades_bought, 0);
        assert!(shop_stats.deepest_floor >= no_shop_stats.deepest_floor);
    }
}
