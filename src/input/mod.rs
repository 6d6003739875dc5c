//! Key bindings and scripted input.
//!
//! This module provides:
//! - [`KeyBindings`]: configurable lane keys with the reference d/f/j/k default
//! - [`ScriptedKeys`]: pre-computed press script for simulation
//! - [`presses_for_beatmap`]: autoplay-style script generation

mod bindings;
mod script;

pub use bindings::KeyBindings;
pub use script::{KeyPress, ScriptedKeys, presses_for_beatmap};
