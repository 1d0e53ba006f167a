//! Session summary formatting.
//!
//! Pure functions: (SessionSummary, OutputFormat) -> String.
//! No I/O, no side effects.

use crate::error::Result;
use crate::types::{OutputFormat, SessionSummary};

/// Format a session summary for output.
pub fn format_summary(summary: &SessionSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format_human(summary)),
        OutputFormat::Json => format_json(summary),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(summary: &SessionSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Shot Put: {} ===\n", summary.player));

    if summary.attempts.is_empty() {
        out.push_str("No attempts played.\n");
    }

    for record in &summary.attempts {
        if record.fouled {
            out.push_str(&format!(
                "Attempt #{}: FOUL (round {})\n",
                record.attempt, record.rounds
            ));
        } else {
            out.push_str(&format!(
                "Attempt #{}: {} ({} round{})\n",
                record.attempt,
                record.score,
                record.rounds,
                if record.rounds == 1 { "" } else { "s" }
            ));
        }
    }

    out.push_str(&format!("High score: {}\n", summary.high_score));

    if !summary.completed {
        out.push_str("Session ended before the final attempt.\n");
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(summary: &SessionSummary) -> Result<String> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AttemptRecord;

    fn finished_session() -> SessionSummary {
        SessionSummary {
            player: "Ada".to_string(),
            high_score: 29,
            attempts: vec![
                AttemptRecord { attempt: 1, score: 29, fouled: false, rounds: 8 },
                AttemptRecord { attempt: 2, score: 7, fouled: true, rounds: 3 },
                AttemptRecord { attempt: 3, score: 6, fouled: false, rounds: 1 },
            ],
            completed: true,
        }
    }

    #[test]
    fn human_lists_every_attempt() {
        let out = format_summary(&finished_session(), OutputFormat::Human).unwrap();
        assert!(out.contains("=== Shot Put: Ada ==="));
        assert!(out.contains("Attempt #1: 29 (8 rounds)"));
        assert!(out.contains("Attempt #2: FOUL (round 3)"));
        assert!(out.contains("Attempt #3: 6 (1 round)"));
        assert!(out.contains("High score: 29"));
        assert!(!out.contains("ended before"));
    }

    #[test]
    fn human_flags_unfinished_session() {
        let summary = SessionSummary {
            player: "Bo".to_string(),
            high_score: 0,
            attempts: Vec::new(),
            completed: false,
        };
        let out = format_summary(&summary, OutputFormat::Human).unwrap();
        assert!(out.contains("No attempts played."));
        assert!(out.contains("Session ended before the final attempt."));
    }

    #[test]
    fn json_round_trips() {
        let summary = finished_session();
        let out = format_summary(&summary, OutputFormat::Json).unwrap();
        let parsed: SessionSummary = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, summary);
    }

    #[test]
    fn json_uses_field_names() {
        let out = format_summary(&finished_session(), OutputFormat::Json).unwrap();
        assert!(out.contains("\"high_score\": 29"));
        assert!(out.contains("\"fouled\": true"));
    }
}
