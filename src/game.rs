//! Shot put game state machine.
//!
//! One session is up to three attempts. Each attempt rolls up to eight
//! dice, one per round, summing their values. A zero is a foul: the
//! attempt stops accumulating and its score is discarded. The player may
//! stop after any roll to bank the score; the eighth roll banks it
//! automatically. The best banked score is the high score.
//!
//! Invalid actions (rolling after a foul, anything after Game Over) are
//! no-ops that return `None`, never errors.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::die::{Die, FaceSource, RngFaces};
use crate::types::{AttemptRecord, SessionSummary};

/// Dice (rounds) per attempt.
pub const ROUNDS: usize = 8;

/// Attempts per session.
pub const MAX_ATTEMPTS: u8 = 3;

/// Rolled value that fouls the attempt.
pub const FOUL_VALUE: u32 = 0;

// ============================================================================
// STATES AND OUTCOMES
// ============================================================================

/// Where the current attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the die in slot `round` to be rolled.
    Rolling { round: usize },
    /// The die in slot `round` came up zero. Only stop is accepted.
    Fouled { round: usize },
    /// All eight dice rolled. Stop is applied in the same step.
    AttemptComplete,
    /// Final attempt finished. Nothing is accepted.
    GameOver,
}

/// What a successful roll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollOutcome {
    /// The die scored and the next slot is up.
    Scored { round: usize, value: u32, score: u32 },
    /// The die came up zero.
    Foul { round: usize },
    /// The last slot scored and the attempt was stopped automatically.
    Completed { value: u32, stop: StopOutcome },
}

/// What stopping an attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// The attempt was recorded and a fresh one started.
    NextAttempt { finished: AttemptRecord, new_high: bool },
    /// The final attempt was recorded. The session is over.
    GameOver { finished: AttemptRecord, high_score: u32 },
}

impl StopOutcome {
    /// The attempt that just ended.
    pub fn finished(&self) -> &AttemptRecord {
        match self {
            StopOutcome::NextAttempt { finished, .. } | StopOutcome::GameOver { finished, .. } => {
                finished
            }
        }
    }
}

// ============================================================================
// GAME
// ============================================================================

/// A single player's session.
#[derive(Debug)]
pub struct Game<S = RngFaces<StdRng>> {
    dice: [Die; ROUNDS],
    phase: Phase,
    score: u32,
    high_score: u32,
    attempt: u8,
    fouled: bool,
    history: Vec<AttemptRecord>,
    faces: S,
}

impl Game {
    /// Start a session with an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_source(RngFaces(StdRng::from_os_rng()))
    }

    /// Start a session whose rolls are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngFaces(StdRng::seed_from_u64(seed)))
    }

    /// Seeded when `seed` is given, OS-seeded otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Game<S> {
    /// Start a session drawing faces from `faces`.
    pub fn with_source(faces: S) -> Self {
        Self {
            dice: fresh_dice(),
            phase: Phase::Rolling { round: 0 },
            score: 0,
            high_score: 0,
            attempt: 1,
            fouled: false,
            history: Vec::new(),
            faces,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Points accumulated in the current attempt.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Current attempt number, 1-based.
    pub fn attempt(&self) -> u8 {
        self.attempt
    }

    pub fn is_fouled(&self) -> bool {
        self.fouled
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The eight dice of the current attempt, in slot order.
    pub fn dice(&self) -> &[Die; ROUNDS] {
        &self.dice
    }

    /// Finished attempts in play order.
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    /// Slot awaiting a roll, if any.
    pub fn current_round(&self) -> Option<usize> {
        match self.phase {
            Phase::Rolling { round } => Some(round),
            _ => None,
        }
    }

    /// Number of dice rolled so far in the current attempt.
    pub fn rolled(&self) -> usize {
        match self.phase {
            Phase::Rolling { round } => round,
            Phase::Fouled { round } => round + 1,
            Phase::AttemptComplete => ROUNDS,
            Phase::GameOver => self.history.last().map_or(0, |r| r.rounds),
        }
    }

    pub fn can_roll(&self) -> bool {
        matches!(self.phase, Phase::Rolling { .. })
    }

    pub fn can_stop(&self) -> bool {
        !self.is_over()
    }

    /// Snapshot of the session for reporting.
    pub fn summary(&self, player: &str) -> SessionSummary {
        SessionSummary {
            player: player.to_string(),
            high_score: self.high_score,
            attempts: self.history.clone(),
            completed: self.is_over(),
        }
    }

    /// Close out the current attempt. Caller has checked the game is not over.
    fn finish_attempt(&mut self) -> StopOutcome {
        let finished = AttemptRecord {
            attempt: self.attempt,
            score: self.score,
            fouled: self.fouled,
            rounds: self.rolled(),
        };
        self.history.push(finished);

        let new_high = !self.fouled && self.score > self.high_score;
        if new_high {
            self.high_score = self.score;
        }

        if self.fouled {
            info!("attempt {} fouled after {} rounds", self.attempt, finished.rounds);
        } else {
            info!(
                "attempt {} banked {} (high score {})",
                self.attempt, self.score, self.high_score
            );
        }

        if self.attempt >= MAX_ATTEMPTS {
            self.phase = Phase::GameOver;
            info!("game over, high score {}", self.high_score);
            return StopOutcome::GameOver {
                finished,
                high_score: self.high_score,
            };
        }

        self.reset();
        StopOutcome::NextAttempt { finished, new_high }
    }

    /// Begin the next attempt with fresh dice.
    fn reset(&mut self) {
        self.attempt += 1;
        self.score = 0;
        self.fouled = false;
        self.dice = fresh_dice();
        self.phase = Phase::Rolling { round: 0 };
        debug!("attempt {} started", self.attempt);
    }
}

impl<S: FaceSource> Game<S> {
    /// Roll the die in the current slot.
    ///
    /// Returns None unless the game is waiting for a roll.
    pub fn roll(&mut self) -> Option<RollOutcome> {
        let Phase::Rolling { round } = self.phase else {
            return None;
        };

        let value = self.dice[round].roll(&mut self.faces);
        debug!("attempt {} round {} rolled {}", self.attempt, round, value);

        if value == FOUL_VALUE {
            self.fouled = true;
            self.phase = Phase::Fouled { round };
            return Some(RollOutcome::Foul { round });
        }

        self.score += value;

        if round + 1 < ROUNDS {
            self.phase = Phase::Rolling { round: round + 1 };
            Some(RollOutcome::Scored {
                round,
                value,
                score: self.score,
            })
        } else {
            self.phase = Phase::AttemptComplete;
            let stop = self.finish_attempt();
            Some(RollOutcome::Completed { value, stop })
        }
    }

    /// End the current attempt.
    ///
    /// Banks the score unless fouled, then starts the next attempt or ends
    /// the game after the last one. Returns None once the game is over.
    pub fn stop(&mut self) -> Option<StopOutcome> {
        if self.is_over() {
            return None;
        }
        Some(self.finish_attempt())
    }
}

fn fresh_dice() -> [Die; ROUNDS] {
    [Die::shotput(); ROUNDS]
}

// ============================================================================
// TESTS
// ============================================================================
