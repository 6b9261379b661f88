//! Enemy scaling and spawning for dungeon floors.

use super::types::{Biome, DungeonSize};
use crate::combat::types::Enemy;
use crate::core::combat_math::{floor_multiplier, scale_base_stat, scale_by};
use crate::core::constants::*;
use rand::Rng;

/// Enemy stats derived from floor and dungeon size, before a name is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStats {
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold: u32,
    pub exp: u32,
    pub is_boss: bool,
}

/// True when `floor` is the last floor of a dungeon of `size`.
pub fn is_boss_floor(floor: u32, size: DungeonSize) -> bool {
    floor == size.floors()
}

/// Computes the exact stats of the enemy guarding `floor`.
///
/// Each stat is truncated after floor/difficulty scaling and again after the
/// boss multiplier, in that order.
pub fn enemy_stats_for_floor(floor: u32, size: DungeonSize) -> EnemyStats {
    let floor_mult = floor_multiplier(floor);
    let difficulty = size.difficulty_multiplier();

    let mut stats = EnemyStats {
        health: scale_base_stat(ENEMY_BASE_HEALTH, floor_mult, difficulty),
        attack: scale_base_stat(ENEMY_BASE_ATTACK, floor_mult, difficulty),
        defense: scale_base_stat(ENEMY_BASE_DEFENSE, floor_mult, difficulty),
        gold: scale_base_stat(ENEMY_BASE_GOLD, floor_mult, difficulty),
        exp: scale_base_stat(ENEMY_BASE_EXP, floor_mult, difficulty),
        is_boss: false,
    };

    if is_boss_floor(floor, size) {
        stats.health = scale_by(stats.health, BOSS_HEALTH_MULTIPLIER);
        stats.attack = scale_by(stats.attack, BOSS_ATTACK_MULTIPLIER);
        stats.defense = scale_by(stats.defense, BOSS_DEFENSE_MULTIPLIER);
        stats.gold = stats.gold.saturating_mul(BOSS_GOLD_MULTIPLIER);
        stats.exp = stats.exp.saturating_mul(BOSS_EXP_MULTIPLIER);
        stats.is_boss = true;
    }

    stats
}

/// Draws a regular enemy name uniformly from the biome's pool.
pub fn roll_enemy_name<R: Rng>(biome: Biome, rng: &mut R) -> &'static str {
    let pool = biome.enemy_pool();
    pool[rng.gen_range(0..pool.len())]
}

/// Spawns the enemy for `floor` of a `biome`/`size` dungeon.
pub fn spawn_enemy<R: Rng>(biome: Biome, size: DungeonSize, floor: u32, rng: &mut R) -> Enemy {
    let stats = enemy_stats_for_floor(floor, size);
    // Draw even on the boss floor so the rng stream doesn't depend on size
    let rolled = roll_enemy_name(biome, rng);
    let name = if stats.is_boss {
        biome.boss_name()
    } else {
        rolled.to_string()
    };

    let mut enemy = Enemy::new(
        name,
        stats.health,
        stats.attack,
        stats.defense,
        stats.gold as u64,
        stats.exp as u64,
    );
    enemy.is_boss = stats.is_boss;
    enemy
}
