//! Live play mode
//!
//! The solver suggests each guess; the user plays it in the real puzzle and
//! types back the feedback.

use crate::solver::{Aborted, PromptJudge, SessionReport, Solver, Strategy};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Run one live session, reading feedback from `reader`
///
/// Returns `Ok(None)` if the user quits before the session ends.
///
/// # Errors
///
/// Returns an error if reading input or writing prompts fails.
pub fn run_play<S: Strategy, R: BufRead, W: Write>(
    solver: &Solver<S>,
    reader: R,
    mut writer: W,
) -> Result<Option<SessionReport>> {
    writeln!(
        writer,
        "Playing with {} words and {} attempts.",
        solver.dictionary().len(),
        solver.config().max_attempts
    )?;
    writeln!(writer, "Enter feedback as G (green), Y (yellow), B (gray), e.g. GYBBG.")?;
    writeln!(writer, "Type 'win' if the guess was right, 'quit' to stop.\n")?;

    let mut judge = PromptJudge::new(reader, &mut writer);
    let result = solver.play(&mut judge);
    drop(judge);

    match result {
        Ok(report) => Ok(Some(report)),
        Err(e) if e.downcast_ref::<Aborted>().is_some() => {
            writeln!(writer, "\nStopped.")?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, Word};
    use crate::solver::{DistinctLettersStrategy, SessionConfig, Status};
    use std::io::Cursor;

    fn setup_dictionary() -> Dictionary {
        let words = ["crane", "slate", "trace"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        Dictionary::new(words).unwrap()
    }

    #[test]
    fn play_until_solved() {
        let dictionary = setup_dictionary();
        let solver =
            Solver::new(DistinctLettersStrategy, &dictionary, SessionConfig::default()).unwrap();
        let mut output = Vec::new();

        // Secret is TRACE: CRANE gets YGGBG, then TRACE wins
        let report = run_play(&solver, Cursor::new("YGGBG\nwin\n"), &mut output)
            .unwrap()
            .unwrap();

        assert_eq!(report.status(), Status::Solved);
        assert_eq!(report.attempts(), 2);
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Playing with 3 words"));
        assert!(printed.contains("Guess TRACE"));
    }

    #[test]
    fn quit_returns_none() {
        let dictionary = setup_dictionary();
        let solver =
            Solver::new(DistinctLettersStrategy, &dictionary, SessionConfig::default()).unwrap();
        let mut output = Vec::new();

        let result = run_play(&solver, Cursor::new("quit\n"), &mut output).unwrap();

        assert!(result.is_none());
        assert!(String::from_utf8(output).unwrap().contains("Stopped."));
    }

    #[test]
    fn closed_input_is_an_error() {
        let dictionary = setup_dictionary();
        let solver =
            Solver::new(DistinctLettersStrategy, &dictionary, SessionConfig::default()).unwrap();

        assert!(run_play(&solver, Cursor::new(""), Vec::new()).is_err());
    }
}
