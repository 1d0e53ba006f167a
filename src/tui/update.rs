//! Action dispatch: (Game, Action) -> Transition.
//!
//! Fully testable without a terminal. Each game phase accepts only some
//! actions; the rest come back as `Transition::Ignored` and leave the game
//! untouched.

use crate::die::FaceSource;
use crate::game::Game;

use super::state::{Action, App, Transition};

/// Apply one action to the game.
pub fn update<S: FaceSource>(game: &mut Game<S>, action: Action) -> Transition {
    match action {
        Action::Roll => game.roll().map_or(Transition::Ignored, Transition::Rolled),
        Action::Stop => game.stop().map_or(Transition::Ignored, Transition::Stopped),
        Action::Quit => Transition::Quit,
    }
}

/// Apply one action to the app, recording the outcome for the status line.
///
/// Ignored actions keep the previous outcome on screen.
pub fn apply<S: FaceSource>(app: &mut App<S>, action: Action) {
    match update(&mut app.game, action) {
        Transition::Quit => app.should_quit = true,
        Transition::Ignored => {}
        transition => app.last = Some(transition),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::die::ScriptedFaces;
    use crate::game::{Phase, RollOutcome, StopOutcome};

    fn game_with(faces: &[u8]) -> Game<ScriptedFaces> {
        Game::with_source(ScriptedFaces::new(faces.to_vec()))
    }

    fn app_with(faces: &[u8]) -> App<ScriptedFaces> {
        App::with_game("Ada".to_string(), game_with(faces))
    }

    // -- update --

    #[test]
    fn roll_reports_score() {
        let mut game = game_with(&[5]);
        assert_eq!(
            update(&mut game, Action::Roll),
            Transition::Rolled(RollOutcome::Scored { round: 0, value: 5, score: 5 })
        );
    }

    #[test]
    fn roll_after_foul_is_ignored() {
        let mut game = game_with(&[1]);
        update(&mut game, Action::Roll);
        assert_eq!(update(&mut game, Action::Roll), Transition::Ignored);
        assert_eq!(game.phase(), Phase::Fouled { round: 0 });
    }

    #[test]
    fn stop_reports_attempt() {
        let mut game = game_with(&[4]);
        update(&mut game, Action::Roll);
        match update(&mut game, Action::Stop) {
            Transition::Stopped(StopOutcome::NextAttempt { finished, new_high }) => {
                assert_eq!(finished.score, 4);
                assert!(new_high);
            }
            other => panic!("Expected Stopped, got {:?}", other),
        }
    }

    #[test]
    fn everything_but_quit_ignored_after_game_over() {
        let mut game = game_with(&[]);
        for _ in 0..3 {
            update(&mut game, Action::Stop);
        }
        assert_eq!(update(&mut game, Action::Roll), Transition::Ignored);
        assert_eq!(update(&mut game, Action::Stop), Transition::Ignored);
        assert_eq!(update(&mut game, Action::Quit), Transition::Quit);
    }

    #[test]
    fn quit_leaves_game_untouched() {
        let mut game = game_with(&[3]);
        update(&mut game, Action::Roll);
        update(&mut game, Action::Quit);
        assert_eq!(game.score(), 3);
        assert_eq!(game.phase(), Phase::Rolling { round: 1 });
    }

    // -- apply --

    #[test]
    fn apply_records_last_outcome() {
        let mut app = app_with(&[6]);
        apply(&mut app, Action::Roll);
        assert!(matches!(app.last, Some(Transition::Rolled(_))));
    }

    #[test]
    fn apply_keeps_outcome_when_ignored() {
        let mut app = app_with(&[1]);
        apply(&mut app, Action::Roll);
        let before = app.last;
        apply(&mut app, Action::Roll);
        assert_eq!(app.last, before);
        assert!(matches!(
            app.last,
            Some(Transition::Rolled(RollOutcome::Foul { round: 0 }))
        ));
    }

    #[test]
    fn apply_quit_sets_flag() {
        let mut app = app_with(&[]);
        apply(&mut app, Action::Quit);
        assert!(app.should_quit);
        assert!(app.last.is_none());
    }
}
