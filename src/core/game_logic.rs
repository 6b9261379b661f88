//! Dungeon state machine and shop actions on [`GameState`].
//!
//! Town -> InCombat via `start_dungeon`; every `attack_enemy` call resolves one
//! full exchange and may advance a floor, complete the dungeon or kill the
//! player. `flee_dungeon` always returns to town.

use crate::character::upgrades::{purchase_upgrade, UpgradeStat};
use crate::combat::types::CombatResult;
use crate::core::combat_math::scale_by;
use crate::core::constants::FLOOR_CLEAR_HEAL_FRACTION;
use crate::core::game_state::GameState;
use crate::dungeon::logic::spawn_enemy;
use crate::dungeon::types::{Biome, DungeonSize};
use rand::Rng;

impl GameState {
    /// Enters a dungeon on floor 1 with full health and a fresh enemy.
    ///
    /// Returns false without touching the active run if already inside one.
    pub fn start_dungeon<R: Rng>(&mut self, biome: Biome, size: DungeonSize, rng: &mut R) -> bool {
        if self.in_dungeon {
            tracing::warn!(
                floor = self.current_floor,
                "start_dungeon ignored: already in a dungeon"
            );
            return false;
        }

        self.current_biome = biome;
        self.current_size = size;
        self.current_floor = 1;
        self.in_dungeon = true;
        self.player.full_heal();
        self.spawn_enemy(rng);

        tracing::info!(
            biome = biome.display_name(),
            size = size.display_name(),
            floors = size.floors(),
            "entered dungeon"
        );
        true
    }

    /// Replaces the current enemy with one scaled for the current floor.
    /// No-op outside a dungeon.
    pub fn spawn_enemy<R: Rng>(&mut self, rng: &mut R) {
        if !self.in_dungeon {
            return;
        }
        let enemy = spawn_enemy(self.current_biome, self.current_size, self.current_floor, rng);
        tracing::debug!(
            floor = self.current_floor,
            name = %enemy.name,
            health = enemy.health,
            attack = enemy.attack,
            defense = enemy.defense,
            boss = enemy.is_boss,
            "enemy spawned"
        );
        self.current_enemy = Some(enemy);
    }

    /// Resolves one combat step: the player strikes, then the enemy strikes
    /// back if it survived.
    pub fn attack_enemy<R: Rng>(&mut self, rng: &mut R) -> CombatResult {
        let mut result = CombatResult::default();

        let Some(enemy) = self.current_enemy.as_mut() else {
            return result;
        };
        if !enemy.is_alive() {
            return result;
        }

        result.player_damage = enemy.take_damage(self.player.attack);

        if !enemy.is_alive() {
            result.enemy_defeated = true;
            result.gold_reward = enemy.gold_reward;
            result.exp_reward = enemy.exp_reward;
            let defeated = enemy.name.clone();

            self.player.earn_gold(result.gold_reward);
            result.levels_gained = self.player.gain_experience(result.exp_reward);
            self.player.floors_cleared = self.player.floors_cleared.saturating_add(1);

            if result.levels_gained > 0 {
                tracing::debug!(level = self.player.level, "player leveled up");
            }

            if self.current_floor >= self.current_size.floors() {
                result.dungeon_completed = true;
                self.player.dungeons_completed = self.player.dungeons_completed.saturating_add(1);
                self.return_to_town();
                tracing::info!(
                    boss = %defeated,
                    dungeons_completed = self.player.dungeons_completed,
                    "dungeon completed"
                );
                return result;
            }

            self.current_floor += 1;
            result.floor_cleared = true;
            self.player
                .heal(scale_by(self.player.max_health, FLOOR_CLEAR_HEAL_FRACTION));
            self.spawn_enemy(rng);
            tracing::debug!(
                defeated = %defeated,
                floor = self.current_floor,
                "floor cleared"
            );
            return result;
        }

        result.enemy_damage = self.player.take_damage(enemy.attack);

        if !self.player.is_alive() {
            result.player_died = true;
            tracing::info!(
                killer = %enemy.name,
                floor = self.current_floor,
                "player died, returning to town"
            );
            self.return_to_town();
            self.player.full_heal();
        }

        result
    }

    pub fn toggle_auto_battle(&mut self) {
        self.auto_battle = !self.auto_battle;
        tracing::debug!(auto_battle = self.auto_battle, "auto battle toggled");
    }

    /// Abandons the current run and returns to town at full health.
    pub fn flee_dungeon(&mut self) {
        if self.in_dungeon {
            tracing::info!(floor = self.current_floor, "fled dungeon");
        }
        self.return_to_town();
        self.player.full_heal();
    }

    /// Gold cost of the next upgrade of `stat`.
    pub fn upgrade_cost(&self, stat: UpgradeStat) -> u64 {
        stat.cost(&self.player)
    }

    /// Buys one upgrade of `stat`. False (and no change) if gold is short.
    pub fn upgrade_stat(&mut self, stat: UpgradeStat) -> bool {
        let cost = self.upgrade_cost(stat);
        if !purchase_upgrade(&mut self.player, stat) {
            tracing::debug!(stat = stat.key(), cost, gold = self.player.gold, "upgrade unaffordable");
            return false;
        }
        tracing::debug!(stat = stat.key(), cost, "upgrade purchased");
        true
    }

    /// String-keyed cost lookup. Unknown stat names cost 0.
    pub fn upgrade_cost_named(&self, stat: &str) -> u64 {
        UpgradeStat::from_key(stat).map_or(0, |stat| self.upgrade_cost(stat))
    }

    /// String-keyed upgrade. Unknown stat names always fail.
    pub fn upgrade_stat_named(&mut self, stat: &str) -> bool {
        match UpgradeStat::from_key(stat) {
            Some(stat) => self.upgrade_stat(stat),
            None => {
                tracing::warn!(stat, "unknown upgrade stat");
                false
            }
        }
    }
}
