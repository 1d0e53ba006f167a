//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the game and the
//! pure layers (state, update, view) to the real terminal via crossterm
//! and ratatui. The loop is single-threaded: block on the next terminal
//! event, apply it, redraw.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::types::{SessionConfig, SessionSummary};

use super::state::{Action, App};
use super::update::apply;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Char(' ') | KeyCode::Enter => {
            Some(Action::Roll)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::Stop),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Play one session in the terminal and return its summary.
///
/// Returns when the player quits. The terminal is restored even when the
/// loop fails.
pub fn run(config: &SessionConfig) -> io::Result<SessionSummary> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);
    info!("session started for {}", app.player);

    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;
    result?;

    info!("session ended, high score {}", app.game.high_score());
    Ok(app.summary())
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(&*app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        match event::read()? {
            // Windows reports releases too; act on presses only.
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(action) = map_key(key) {
                    apply(app, action);
                }
            }
            _ => {} // mouse, resize (redrawn next pass), etc.
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
