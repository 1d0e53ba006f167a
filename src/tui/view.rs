//! Pure rendering: map App state to ratatui widget trees.
//!
//! Layout, top to bottom: title bar (player, score, high score), the row
//! of eight dice, the Roll and Stop buttons under the active die, a
//! status line describing the last action, and the help line.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::die::Die;
use crate::game::{Game, Phase, ROUNDS, RollOutcome, StopOutcome};
use crate::pips;

use super::state::{Action, App, Transition};
use super::theme;

/// Die box width: 3 pips, 2 gaps, 2 padding, 2 border.
const DIE_WIDTH: u16 = 9;

/// Die box height: 3 pip rows, 2 border.
const DIE_HEIGHT: u16 = 5;

const PIP: char = '●';

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole session to the terminal frame.
pub fn render<S>(app: &App<S>, frame: &mut Frame) {
    let chunks = Layout::vertical([
        Constraint::Length(1),          // title
        Constraint::Length(1),          // spacer
        Constraint::Length(DIE_HEIGHT), // dice
        Constraint::Length(1),          // roll button
        Constraint::Length(1),          // stop button
        Constraint::Length(1),          // spacer
        Constraint::Length(1),          // status
        Constraint::Min(0),             // filler
        Constraint::Length(1),          // help
    ])
    .split(frame.area());

    frame.render_widget(render_title(&app.player, &app.game), chunks[0]);
    render_dice(&app.game, frame, chunks[2]);
    render_buttons(&app.game, frame, chunks[3], chunks[4]);

    if let Some(status) = app.last.as_ref().and_then(render_status) {
        frame.render_widget(status, chunks[6]);
    }

    frame.render_widget(render_help(app), chunks[8]);
}

// ============================================================================
// TITLE
// ============================================================================

/// Player name, score text and high score text on one line.
fn render_title<S>(player: &str, game: &Game<S>) -> Paragraph<'static> {
    let score = Span::styled(score_text(game), score_style(game.phase()));
    let high = Span::styled(high_score_text(game), theme::STYLE_SAFE);

    Paragraph::new(Line::from(vec![
        Span::styled(player.to_string(), theme::STYLE_TITLE),
        Span::raw("   "),
        score,
        Span::raw("   "),
        high,
    ]))
}

/// Score label: attempt and running score, or the foul / game over notice.
pub fn score_text<S>(game: &Game<S>) -> String {
    match game.phase() {
        Phase::GameOver => "Game Over".to_string(),
        Phase::Fouled { .. } => "FOULED OUT".to_string(),
        Phase::Rolling { .. } | Phase::AttemptComplete => {
            format!("Attempt #{} Score: {}", game.attempt(), game.score())
        }
    }
}

pub fn high_score_text<S>(game: &Game<S>) -> String {
    if game.is_over() {
        format!("Highscore: {}", game.high_score())
    } else {
        format!("High Score: {}", game.high_score())
    }
}

fn score_style(phase: Phase) -> ratatui::style::Style {
    match phase {
        Phase::Fouled { .. } => theme::STYLE_FOUL,
        _ => theme::STYLE_IMPORTANT,
    }
}

// ============================================================================
// DICE
// ============================================================================

/// Split `area` into one column per die slot.
fn slot_columns(area: Rect) -> Vec<Rect> {
    let constraints = std::iter::repeat_n(Constraint::Length(DIE_WIDTH), ROUNDS)
        .chain(std::iter::once(Constraint::Min(0)));
    Layout::horizontal(constraints).split(area).to_vec()
}

fn render_dice<S>(game: &Game<S>, frame: &mut Frame, area: Rect) {
    let columns = slot_columns(area);
    let rolled = game.rolled();
    let active = game.current_round();

    for (slot, die) in game.dice().iter().enumerate() {
        let border = if Some(slot) == active {
            theme::STYLE_DIE_ACTIVE
        } else if slot < rolled {
            theme::STYLE_DIE_ROLLED
        } else {
            theme::STYLE_DIE_IDLE
        };

        let lines = if slot < rolled { die_lines(die) } else { Vec::new() };

        let widget = Paragraph::new(lines).block(Block::bordered().border_style(border));
        frame.render_widget(widget, columns[slot]);
    }
}

/// Pip rows for a rolled die, in the color of its face.
fn die_lines(die: &Die) -> Vec<Line<'static>> {
    let style = theme::pip_style(die.color());
    pips::rows(die.face(), PIP, ' ')
        .into_iter()
        .map(|row| Line::from(Span::styled(format!(" {} ", row), style)))
        .collect()
}

// ============================================================================
// BUTTONS
// ============================================================================

/// Roll above Stop, both under the active slot. A foul leaves only FOUL.
fn render_buttons<S>(game: &Game<S>, frame: &mut Frame, roll_row: Rect, stop_row: Rect) {
    let slot = match game.phase() {
        Phase::Rolling { round } | Phase::Fouled { round } => round,
        Phase::AttemptComplete | Phase::GameOver => return,
    };

    if game.can_roll() {
        let roll = Paragraph::new(Span::styled("[r]Roll", theme::STYLE_BUTTON));
        frame.render_widget(roll, slot_columns(roll_row)[slot]);
    }

    let stop = if game.is_fouled() {
        Span::styled("[s]FOUL", theme::STYLE_FOUL)
    } else {
        Span::styled("[s]Stop", theme::STYLE_BUTTON)
    };
    frame.render_widget(Paragraph::new(stop), slot_columns(stop_row)[slot]);
}

// ============================================================================
// STATUS AND HELP
// ============================================================================

/// One line describing the last accepted action.
fn render_status(transition: &Transition) -> Option<Paragraph<'static>> {
    let (text, style) = match transition {
        Transition::Rolled(RollOutcome::Scored { round, value, .. }) => (
            format!("Round {}: rolled {}", round + 1, value),
            theme::STYLE_IMPORTANT,
        ),
        Transition::Rolled(RollOutcome::Foul { round }) => (
            format!("Round {}: rolled 0. FOUL, press [s] to continue", round + 1),
            theme::STYLE_FOUL,
        ),
        Transition::Rolled(RollOutcome::Completed { value, stop }) => (
            format!("Round {}: rolled {}. {}", ROUNDS, value, stop_text(stop)),
            theme::STYLE_SAFE,
        ),
        Transition::Stopped(stop) => (stop_text(stop), stop_style(stop)),
        Transition::Ignored | Transition::Quit => return None,
    };

    Some(Paragraph::new(Span::styled(text, style)))
}

fn stop_text(stop: &StopOutcome) -> String {
    match stop {
        StopOutcome::GameOver { high_score, .. } => {
            format!("Final attempt over. High score: {}", high_score)
        }
        StopOutcome::NextAttempt { finished, .. } if finished.fouled => {
            format!("Attempt #{} fouled, score discarded", finished.attempt)
        }
        StopOutcome::NextAttempt { finished, new_high: true } => format!(
            "Attempt #{} banked {}. New high score!",
            finished.attempt, finished.score
        ),
        StopOutcome::NextAttempt { finished, new_high: false } => {
            format!("Attempt #{} banked {}", finished.attempt, finished.score)
        }
    }
}

fn stop_style(stop: &StopOutcome) -> ratatui::style::Style {
    if stop.finished().fouled {
        theme::STYLE_FOUL
    } else {
        theme::STYLE_SAFE
    }
}

/// Help line built from the actions available right now.
fn render_help<S>(app: &App<S>) -> Paragraph<'static> {
    let fouled = app.game.is_fouled();
    let mut spans = Vec::new();

    for action in app.available_actions() {
        let (key, label) = match action {
            Action::Roll => ("[r/Space]", " roll  "),
            Action::Stop if fouled => ("[s]", " acknowledge foul  "),
            Action::Stop => ("[s]", " stop  "),
            Action::Quit => ("[q]", " quit"),
        };
        spans.push(Span::styled(key, theme::STYLE_INTERACTIVE));
        spans.push(Span::styled(label, theme::STYLE_HELP));
    }

    Paragraph::new(Line::from(spans))
}

// ============================================================================
// TESTS
// ============================================================================
