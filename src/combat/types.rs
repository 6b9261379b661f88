use crate::core::combat_math::{apply_damage, mitigated_damage};
use serde::{Deserialize, Serialize};

/// A dungeon enemy. Stats are fixed at spawn; only `health` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub gold_reward: u64,
    pub exp_reward: u64,
    pub is_boss: bool,
}

impl Enemy {
    pub fn new(
        name: String,
        health: u32,
        attack: u32,
        defense: u32,
        gold_reward: u64,
        exp_reward: u64,
    ) -> Self {
        Self {
            name,
            health,
            max_health: health,
            attack,
            defense,
            gold_reward,
            exp_reward,
            is_boss: false,
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

    pub fn health_ratio(&self) -> f64 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f64 / self.max_health as f64
    }
}

/// What happened during one `attack_enemy` step.
///
/// `player_damage`/`enemy_damage` always reflect this step. A cleared floor or
/// completed dungeon returns before the enemy can strike back, so neither can
/// coexist with `player_died`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombatResult {
    pub player_damage: u32,
    pub enemy_defeated: bool,
    pub enemy_damage: u32,
    pub player_died: bool,
    pub floor_cleared: bool,
    pub dungeon_completed: bool,
    /// Gold awarded for the kill (0 if nothing died)
    pub gold_reward: u64,
    /// Experience awarded for the kill
    pub exp_reward: u64,
    pub levels_gained: u32,
}

/// The dominant outcome of a combat step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// No live enemy to attack; nothing happened
    NoTarget,
    /// Blows were traded and both sides are still standing
    Exchange,
    FloorCleared,
    DungeonCompleted,
    PlayerDied,
}

impl CombatResult {
    pub fn outcome(&self) -> CombatOutcome {
        if self.dungeon_completed {
            CombatOutcome::DungeonCompleted
        } else if self.floor_cleared {
            CombatOutcome::FloorCleared
        } else if self.player_died {
            CombatOutcome::PlayerDied
        } else if self.player_damage > 0 {
            CombatOutcome::Exchange
        } else {
            CombatOutcome::NoTarget
        }
    }
}
