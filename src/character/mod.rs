//! The player character, the upgrade shop, and save files.

#![allow(unused_imports)]

pub mod player;
pub mod save;
pub mod upgrades;

pub use player::*;
pub use save::*;
pub use upgrades::*;
