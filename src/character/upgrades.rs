//! Gold-for-stats upgrade shop.
//!
//! Costs grow geometrically with the current stat tier, where a tier is one
//! upgrade's worth of the stat above its base value.

use crate::character::player::Player;
use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// The three stats the shop sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeStat {
    Health,
    Attack,
    Defense,
}

impl UpgradeStat {
    pub fn all() -> [UpgradeStat; 3] {
        [UpgradeStat::Health, UpgradeStat::Attack, UpgradeStat::Defense]
    }

    /// Lowercase key used by the string-keyed shop API.
    pub fn key(&self) -> &'static str {
        match self {
            UpgradeStat::Health => "health",
            UpgradeStat::Attack => "attack",
            UpgradeStat::Defense => "defense",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        UpgradeStat::all().into_iter().find(|stat| stat.key() == key)
    }

    /// Shop label, e.g. "Max Health +20".
    pub fn label(&self) -> String {
        match self {
            UpgradeStat::Health => format!("Max Health +{}", HEALTH_UPGRADE_AMOUNT),
            UpgradeStat::Attack => format!("Attack +{}", ATTACK_UPGRADE_AMOUNT),
            UpgradeStat::Defense => format!("Defense +{}", DEFENSE_UPGRADE_AMOUNT),
        }
    }

    fn base_cost(&self) -> f64 {
        match self {
            UpgradeStat::Health => HEALTH_UPGRADE_BASE_COST,
            UpgradeStat::Attack => ATTACK_UPGRADE_BASE_COST,
            UpgradeStat::Defense => DEFENSE_UPGRADE_BASE_COST,
        }
    }

    /// Current tier of this stat for `player`, never below 0.
    pub fn tier(&self, player: &Player) -> u32 {
        let (value, step, offset) = match self {
            UpgradeStat::Health => (
                player.max_health,
                HEALTH_UPGRADE_AMOUNT,
                HEALTH_UPGRADE_TIER_OFFSET,
            ),
            UpgradeStat::Attack => (
                player.attack,
                ATTACK_UPGRADE_AMOUNT,
                ATTACK_UPGRADE_TIER_OFFSET,
            ),
            UpgradeStat::Defense => (
                player.defense,
                DEFENSE_UPGRADE_AMOUNT,
                DEFENSE_UPGRADE_TIER_OFFSET,
            ),
        };
        (value / step).saturating_sub(offset)
    }

    /// Gold cost of the next upgrade of this stat.
    pub fn cost(&self, player: &Player) -> u64 {
        let tier = self.tier(player).min(i32::MAX as u32) as i32;
        (self.base_cost() * UPGRADE_COST_GROWTH.powi(tier)) as u64
    }

    /// Applies the stat gain. Does not touch gold.
    pub fn apply(&self, player: &mut Player) {
        match self {
            UpgradeStat::Health => {
                player.max_health = player.max_health.saturating_add(HEALTH_UPGRADE_AMOUNT);
                player.full_heal();
            }
            UpgradeStat::Attack => {
                player.attack = player.attack.saturating_add(ATTACK_UPGRADE_AMOUNT)
            }
            UpgradeStat::Defense => {
                player.defense = player.defense.saturating_add(DEFENSE_UPGRADE_AMOUNT)
            }
        }
    }
}

/// Buys one upgrade of `stat` if the player can pay for it.
///
/// Returns false with no mutation when gold is short.
pub fn purchase_upgrade(player: &mut Player, stat: UpgradeStat) -> bool {
    let cost = stat.cost(player);
    if !player.spend_gold(cost) {
        return false;
    }
    stat.apply(player);
    true
}

/// Cheapest upgrade the player can afford right now, if any.
pub fn cheapest_affordable(player: &Player) -> Option<UpgradeStat> {
    UpgradeStat::all()
        .into_iter()
        .filter(|stat| player.can_afford(stat.cost(player)))
        .min_by_key(|stat| stat.cost(player))
}
