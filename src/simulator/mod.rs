//! Dungeon balance simulator for Monte Carlo analysis.
//!
//! Plays many heroes through repeated dungeon attempts to see how
//! quickly each dungeon tier gets cleared and how often heroes die.
//! Every attempt drives `GameState` directly, so results match what
//! auto-battle does in the terminal game.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{
    play_dungeon, run_simulation, simulate_single_run, spend_all_gold, AttemptOutcome,
    AttemptStats, RunStats,
};
