//! TUI module for the interactive terminal game.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: App, Action, Transition
//! - `update`: action dispatch onto the game
//! - `view`: pure rendering
//! - `theme`: styles
//! - `run`: terminal effects and the event loop

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
