//! TUI state algebra: session data, user actions, transitions.
//!
//! The game itself lives in [`crate::game::Game`]; this module only adds
//! what the interface needs around it: the player name, the outcome of
//! the last action (for the status line) and the quit flag.

use crate::die::RngFaces;
use crate::game::{Game, RollOutcome, StopOutcome};
use crate::types::{SessionConfig, SessionSummary};

use rand::rngs::StdRng;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model for one play session.
#[derive(Debug)]
pub struct App<S = RngFaces<StdRng>> {
    /// Player name shown in the title bar.
    pub player: String,

    /// The session being played.
    pub game: Game<S>,

    /// Outcome of the most recent accepted action, if any.
    pub last: Option<Transition>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Roll the die in the active slot.
    Roll,
    /// End the current attempt (acknowledges a foul).
    Stop,
    /// Leave the game.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of applying an action to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Rolled(RollOutcome),
    Stopped(StopOutcome),
    /// The action is not available in the current phase.
    Ignored,
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App for a fresh session.
    pub fn new(config: &SessionConfig) -> Self {
        App::with_game(config.player.clone(), Game::from_seed(config.seed))
    }
}

impl<S> App<S> {
    /// Create an App around an existing game.
    pub fn with_game(player: String, game: Game<S>) -> Self {
        App {
            player,
            game,
            last: None,
            should_quit: false,
        }
    }

    /// Snapshot of the session for the end-of-run report.
    pub fn summary(&self) -> SessionSummary {
        self.game.summary(&self.player)
    }

    /// Actions the player can take right now, for the controls row.
    pub fn available_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.game.can_roll() {
            actions.push(Action::Roll);
        }
        if self.game.can_stop() {
            actions.push(Action::Stop);
        }
        actions.push(Action::Quit);
        actions
    }
}

// ============================================================================
// TESTS
// ============================================================================
