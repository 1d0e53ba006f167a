//! Domain types for shotput.
//!
//! Plain data shared by the game core, the TUI and the summary report.

use serde::{Deserialize, Serialize};

// ============================================================================
// PRESENTATION
// ============================================================================

/// Pip color for a single die face.
///
/// Purely cosmetic: the game never branches on it. The TUI theme maps
/// each variant to a terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceColor {
    #[default]
    Black,
    Red,
}

// ============================================================================
// RESULTS
// ============================================================================

/// How a single attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Attempt number, 1-based.
    pub attempt: u8,
    /// Points thrown before the attempt ended.
    /// Does not count towards the high score when `fouled` is set.
    pub score: u32,
    /// The attempt ended on a zero face.
    pub fouled: bool,
    /// Number of dice rolled during the attempt (including a fouling roll).
    pub rounds: usize,
}

impl AttemptRecord {
    /// Score that counts towards the high score: zero for a foul.
    pub fn counted_score(&self) -> u32 {
        if self.fouled { 0 } else { self.score }
    }
}

/// Everything worth reporting once a session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Player name as entered at startup.
    pub player: String,
    /// Best non-fouled attempt score.
    pub high_score: u32,
    /// Finished attempts in play order.
    pub attempts: Vec<AttemptRecord>,
    /// True when all attempts were played (the game reached Game Over).
    pub completed: bool,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the end-of-session summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Configuration for a single play session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Player name shown in the title bar.
    pub player: String,
    /// Fixed RNG seed. None = seed from the OS.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            player: "Player".to_string(),
            seed: None,
        }
    }
}
