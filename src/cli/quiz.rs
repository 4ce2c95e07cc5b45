//! Interactive terminal quiz

use anyhow::Result;
use std::io::{self, BufRead, Write};

use drstone::app::{AppState, FinishedQuiz};
use drstone::progression::LevelUpOutcome;

use super::dashboard::print_stats;

/// What the player typed at an answer prompt
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Answer(usize),
    Quit,
    Invalid,
}

fn parse_answer(line: &str, options: usize) -> Input {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Input::Quit;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=options).contains(&n) => Input::Answer(n - 1),
        _ => Input::Invalid,
    }
}

/// Read one line; `None` on end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Play the quiz `id` on `input`/`output`.
///
/// Returns the finished quiz, or `None` if the player quit (`q` or end of
/// input) before the end.
pub fn play_quiz(
    state: &mut AppState,
    id: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<FinishedQuiz>> {
    let session = state.launch_quiz(id)?;
    writeln!(output, "{}", session.quiz().title)?;
    if !session.quiz().description.is_empty() {
        writeln!(output, "{}", session.quiz().description)?;
    }
    writeln!(output, "Answer with the option number, or 'q' to leave.\n")?;

    loop {
        let Some(session) = state.active_quiz_mut() else {
            return Ok(None);
        };
        if session.is_complete() {
            break;
        }

        let question = session.current_question().clone();
        writeln!(
            output,
            "Question {} of {}: {}",
            session.current_index() + 1,
            session.total_questions(),
            question.text
        )?;
        for (i, option) in question.options.iter().enumerate() {
            writeln!(output, "  {}) {}", i + 1, option)?;
        }

        let choice = loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                break Input::Quit;
            };
            match parse_answer(&line, question.options.len()) {
                Input::Invalid => writeln!(
                    output,
                    "Please enter a number from 1 to {}, or 'q'.",
                    question.options.len()
                )?,
                other => break other,
            }
        };

        let Input::Answer(option) = choice else {
            state.cancel_quiz();
            writeln!(output, "\nChallenge abandoned. No rewards this time.")?;
            return Ok(None);
        };

        session.select_option(option);
        if session.confirm() == Some(true) {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(
                output,
                "Not quite. The answer is: {}",
                question.correct_option().unwrap_or_default()
            )?;
        }
        writeln!(output, "{}\n", question.explanation)?;
        session.advance();
    }

    let Some(finished) = state.finish_quiz() else {
        return Ok(None);
    };
    let outcome = &finished.outcome;
    writeln!(
        output,
        "Challenge complete: {} of {} correct ({:.0}%)",
        outcome.score,
        outcome.total,
        outcome.fraction() * 100.0
    )?;
    writeln!(
        output,
        "+{} XP  +{} stones",
        outcome.reward.experience, outcome.reward.currency
    )?;
    if let LevelUpOutcome::LeveledUp { new_level } = finished.level {
        writeln!(output, "\n*** LEVEL UP! You reached level {} ***", new_level)?;
        state.dismiss_level_up();
    }

    Ok(Some(finished))
}

pub fn quiz_command(state: &mut AppState, id: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if play_quiz(state, id, &mut stdin.lock(), &mut stdout)?.is_some() {
        println!();
        print_stats(state.stats());
    }
    Ok(())
}
