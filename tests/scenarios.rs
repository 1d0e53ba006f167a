//! Full-session walkthroughs with scripted dice.
//!
//! On the shot put die face 1 is the zero (foul) and faces 2..=6 score
//! their own number, so the scripts below read as the values thrown.

use shotput::die::ScriptedFaces;
use shotput::game::{Game, Phase, RollOutcome, StopOutcome};
use shotput::report::format_summary;
use shotput::types::OutputFormat;

fn play(game: &mut Game<ScriptedFaces>, rolls: usize) {
    for _ in 0..rolls {
        game.roll().expect("roll should be accepted");
    }
}

#[test]
fn foul_in_first_attempt_is_discarded() {
    // 3, 4, then the zero face
    let mut game = Game::with_source(ScriptedFaces::new([3, 4, 1]));
    play(&mut game, 3);

    assert_eq!(game.phase(), Phase::Fouled { round: 2 });
    assert!(game.is_fouled());

    game.stop().expect("stop acknowledges the foul");
    assert_eq!(game.high_score(), 0);
    assert_eq!(game.attempt(), 2);
    assert_eq!(game.score(), 0);
}

#[test]
fn three_attempt_session() {
    let script = [
        2, 3, 4, 5, 6, 2, 3, 4, // attempt 1: 29, auto-stop
        5, 5, 5, // attempt 2: 15, then stop
        6, 6, 1, // attempt 3: foul
    ];
    let mut game = Game::with_source(ScriptedFaces::new(script));

    // Attempt 1: eighth roll stops automatically
    play(&mut game, 7);
    assert_eq!(game.score(), 25);
    match game.roll() {
        Some(RollOutcome::Completed { value: 4, stop }) => {
            assert_eq!(stop.finished().score, 29);
            assert!(matches!(stop, StopOutcome::NextAttempt { new_high: true, .. }));
        }
        other => panic!("Expected Completed, got {:?}", other),
    }
    assert_eq!(game.high_score(), 29);
    assert_eq!(game.attempt(), 2);

    // Attempt 2: lower score leaves the high score alone
    play(&mut game, 3);
    assert_eq!(game.score(), 15);
    assert!(matches!(
        game.stop(),
        Some(StopOutcome::NextAttempt { new_high: false, .. })
    ));
    assert_eq!(game.high_score(), 29);
    assert_eq!(game.attempt(), 3);

    // Attempt 3: foul, then stop ends the game
    play(&mut game, 3);
    assert!(game.is_fouled());
    assert!(matches!(
        game.stop(),
        Some(StopOutcome::GameOver { high_score: 29, .. })
    ));
    assert!(game.is_over());
    assert_eq!(game.roll(), None);
    assert_eq!(game.stop(), None);

    let summary = game.summary("Ada");
    assert!(summary.completed);
    assert_eq!(summary.attempts.len(), 3);
    assert_eq!(summary.high_score, 29);

    let text = format_summary(&summary, OutputFormat::Human).unwrap();
    assert!(text.contains("Attempt #1: 29 (8 rounds)"));
    assert!(text.contains("Attempt #2: 15 (3 rounds)"));
    assert!(text.contains("Attempt #3: FOUL (round 3)"));
}

#[test]
fn final_attempt_can_set_the_high_score() {
    let mut game = Game::with_source(ScriptedFaces::new([2, 6, 6, 6]));
    play(&mut game, 1);
    game.stop();
    game.stop();
    play(&mut game, 3);
    assert!(matches!(
        game.stop(),
        Some(StopOutcome::GameOver { high_score: 18, .. })
    ));
    assert_eq!(game.high_score(), 18);
}
