//! shotput: a shot put dice game for the terminal.

pub mod die;
pub mod error;
pub mod game;
pub mod pips;
pub mod report;
pub mod tui;
pub mod types;

pub use error::Error;
