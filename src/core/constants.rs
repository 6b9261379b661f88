// Player base stats
pub const BASE_PLAYER_NAME: &str = "Hero";
pub const BASE_PLAYER_LEVEL: u32 = 1;
pub const BASE_PLAYER_HEALTH: u32 = 100;
pub const BASE_PLAYER_ATTACK: u32 = 10;
pub const BASE_PLAYER_DEFENSE: u32 = 5;
pub const BASE_EXP_TO_NEXT_LEVEL: u64 = 100;

// Level-up gains
pub const LEVEL_UP_HEALTH_GAIN: u32 = 20;
pub const LEVEL_UP_ATTACK_GAIN: u32 = 5;
pub const LEVEL_UP_DEFENSE_GAIN: u32 = 2;
pub const EXP_CURVE_MULTIPLIER: f64 = 1.5;

// Combat
pub const MIN_DAMAGE: u32 = 1;
/// Fraction of max health restored when a floor is cleared.
pub const FLOOR_CLEAR_HEAL_FRACTION: f64 = 0.3;

// Enemy base stats before floor/difficulty scaling
pub const ENEMY_BASE_HEALTH: f64 = 50.0;
pub const ENEMY_BASE_ATTACK: f64 = 8.0;
pub const ENEMY_BASE_DEFENSE: f64 = 3.0;
pub const ENEMY_BASE_GOLD: f64 = 10.0;
pub const ENEMY_BASE_EXP: f64 = 20.0;
/// Stat growth per floor above the first (floor 1 = 1.0x, floor 2 = 1.2x, ...)
pub const FLOOR_SCALING_STEP: f64 = 0.2;

// Final-floor boss multipliers, applied after floor/difficulty scaling
pub const BOSS_HEALTH_MULTIPLIER: f64 = 2.5;
pub const BOSS_ATTACK_MULTIPLIER: f64 = 1.5;
pub const BOSS_DEFENSE_MULTIPLIER: f64 = 1.5;
pub const BOSS_GOLD_MULTIPLIER: u32 = 3;
pub const BOSS_EXP_MULTIPLIER: u32 = 3;

// Upgrade shop: cost = base * UPGRADE_COST_GROWTH ^ tier
pub const UPGRADE_COST_GROWTH: f64 = 1.5;
pub const HEALTH_UPGRADE_BASE_COST: f64 = 50.0;
pub const ATTACK_UPGRADE_BASE_COST: f64 = 100.0;
pub const DEFENSE_UPGRADE_BASE_COST: f64 = 80.0;
pub const HEALTH_UPGRADE_AMOUNT: u32 = 20;
pub const ATTACK_UPGRADE_AMOUNT: u32 = 5;
pub const DEFENSE_UPGRADE_AMOUNT: u32 = 2;
// Tier offsets: the base stat of each line sits at tier 0
pub const HEALTH_UPGRADE_TIER_OFFSET: u32 = 5;
pub const ATTACK_UPGRADE_TIER_OFFSET: u32 = 2;
pub const DEFENSE_UPGRADE_TIER_OFFSET: u32 = 2;

// Frontend pacing
pub const TICK_INTERVAL_MS: u64 = 50;
pub const AUTO_BATTLE_INTERVAL_MS: u64 = 500;
pub const MAX_LOG_LINES: usize = 8;

// Persistence
pub const SAVE_FILENAME: &str = "save_game.json";
pub const LOG_FILENAME: &str = "crawler.log";
pub const DATA_DIR_NAME: &str = ".crawler";
