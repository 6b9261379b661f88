//! Crawler - Incremental Dungeon Crawler Library
//!
//! The progression engine (`core`, `character`, `combat`, `dungeon`) is
//! UI-free and driven through `GameState`. The terminal frontend lives in
//! `app` and `ui`; the balance simulator in `simulator`.

pub mod app;
pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod simulator;
pub mod ui;
pub mod utils;
