//! Data models
//!
//! Immutable hunt content shared by the flow controller and the screens.

pub mod clue;

pub use clue::{clue, Clue, CLUES, CLUE_COUNT};
