//! Combat entities and per-step results.

#![allow(unused_imports)]

pub mod types;

pub use types::*;
