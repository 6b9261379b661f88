//! The player character: stats plus the damage, healing and leveling
//! primitives that operate on it in isolation.

use crate::core::combat_math::{apply_damage, mitigated_damage};
use crate::core::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub level: u32,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold: u64,
    pub experience: u64,
    pub exp_to_next_level: u64,
    /// Lifetime floors cleared across all runs
    pub floors_cleared: u64,
    /// Lifetime dungeons completed
    pub dungeons_completed: u64,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Creates a fresh level-1 hero with base stats.
    pub fn new() -> Self {
        Self {
            name: BASE_PLAYER_NAME.to_string(),
            level: BASE_PLAYER_LEVEL,
            health: BASE_PLAYER_HEALTH,
            max_health: BASE_PLAYER_HEALTH,
            attack: BASE_PLAYER_ATTACK,
            defense: BASE_PLAYER_DEFENSE,
            gold: 0,
            experience: 0,
            exp_to_next_level: BASE_EXP_TO_NEXT_LEVEL,
            floors_cleared: 0,
            dungeons_completed: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies defense mitigation and returns the damage actually taken.
    pub fn take_damage(&mut self, raw_damage: u32) -> u32 {
        let actual = mitigated_damage(raw_damage, self.defense);
        self.health = apply_damage(self.health, actual);
        actual
    }

    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    pub fn full_heal(&mut self) {
        self.health = self.max_health;
    }

    /// Adds experience and applies every level-up it pays for.
    ///
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, exp: u64) -> u32 {
        self.experience = self.experience.saturating_add(exp);
        let mut levels = 0;
        while self.experience >= self.exp_to_next_level {
            self.level_up();
            levels += 1;
        }
        levels
    }

    pub fn level_up(&mut self) {
        self.experience = self.experience.saturating_sub(self.exp_to_next_level);
        self.level = self.level.saturating_add(1);
        self.max_health = self.max_health.saturating_add(LEVEL_UP_HEALTH_GAIN);
        self.health = self.max_health;
        self.attack = self.attack.saturating_add(LEVEL_UP_ATTACK_GAIN);
        self.defense = self.defense.saturating_add(LEVEL_UP_DEFENSE_GAIN);
        // Truncating geometric curve; never 0 or gain_experience would spin
        self.exp_to_next_level =
            ((self.exp_to_next_level as f64 * EXP_CURVE_MULTIPLIER) as u64).max(1);
    }

    pub fn can_afford(&self, cost: u64) -> bool {
        self.gold >= cost
    }

    /// Spends gold if the player can afford it. No mutation on failure.
    pub fn spend_gold(&mut self, amount: u64) -> bool {
        if !self.can_afford(amount) {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn earn_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Health as a 0.0..=1.0 ratio, for gauges.
    pub fn health_ratio(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f64 / self.max_health as f64
    }
}
