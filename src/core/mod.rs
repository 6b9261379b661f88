//! Core game state, balance constants and the dungeon state machine.

#![allow(unused_imports)]

pub mod combat_math;
pub mod constants;
pub mod game_logic;
pub mod game_state;

pub use constants::*;
pub use game_state::*;
