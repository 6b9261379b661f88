//! Pure combat and scaling math shared by the engine and the simulator.
//!
//! Every helper truncates toward zero at the point it converts back to an
//! integer, so chained scaling reproduces exact stat values.

use crate::core::constants::{FLOOR_SCALING_STEP, MIN_DAMAGE};

/// Damage that actually lands after defense.
///
/// Never less than [`MIN_DAMAGE`], so a fight always makes progress no matter
/// how lopsided defense is.
pub fn mitigated_damage(raw_damage: u32, defense: u32) -> u32 {
    raw_damage.saturating_sub(defense).max(MIN_DAMAGE)
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Stat multiplier for a dungeon floor: 1.0 on floor 1, +0.2 per floor after.
pub fn floor_multiplier(floor: u32) -> f64 {
    1.0 + floor.saturating_sub(1) as f64 * FLOOR_SCALING_STEP
}

/// `floor(base * floor_mult * difficulty)`, evaluated left to right.
pub fn scale_base_stat(base: f64, floor_mult: f64, difficulty: f64) -> u32 {
    (base * floor_mult * difficulty) as u32
}

/// `floor(value * multiplier)`.
pub fn scale_by(value: u32, multiplier: f64) -> u32 {
    (value as f64 * multiplier) as u32
}
