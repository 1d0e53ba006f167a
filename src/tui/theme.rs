//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Green: banked points, high score
//! - Red: foul (the zero face, FOUL labels)
//! - Cyan: interactive elements (active die, keybinding hints)
//! - Dark gray: de-emphasized (unrolled dice, help text)

use ratatui::style::{Color, Modifier, Style};

use crate::types::FaceColor;

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Banked points / high score: green.
pub const STYLE_SAFE: Style = Style::new().fg(Color::Green);

/// Foul: bold red.
pub const STYLE_FOUL: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// Important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / player name.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Border of the die waiting to be rolled.
pub const STYLE_DIE_ACTIVE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Border of a die that has been rolled.
pub const STYLE_DIE_ROLLED: Style = Style::new().fg(Color::White);

/// Border of a die not yet reached.
pub const STYLE_DIE_IDLE: Style = Style::new().fg(Color::DarkGray);

/// Button label.
pub const STYLE_BUTTON: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Pip style for a face color.
///
/// Black pips are drawn in white so they show on dark terminals.
pub fn pip_style(color: FaceColor) -> Style {
    match color {
        FaceColor::Black => Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
        FaceColor::Red => Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

// ============================================================================
// TESTS
// ============================================================================
