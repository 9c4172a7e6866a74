//! Line-oriented game mode
//!
//! Prompts for a difficulty, then for guesses until the secret is found.
//! Input and output are injected so the loop can run against any reader and
//! writer.

use crate::core::{Difficulty, SEPARATOR};
use crate::game::{GameError, GuessingGame};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Play one game to completion
///
/// If `difficulty` is `None` the player picks one from a menu first. Returns
/// the finished game so callers can inspect its history.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, including when
/// input ends before the secret is found.
pub fn run_play<R, W, G>(
    input: &mut R,
    output: &mut W,
    difficulty: Option<Difficulty>,
    rng: &mut G,
) -> Result<GuessingGame>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let difficulty = match difficulty {
        Some(d) => d,
        None => select_difficulty(input, output)?,
    };

    let mut game = GuessingGame::new();
    game.configure(difficulty, rng)?;

    let prompt = format!(
        "Enter {} digits separated by '{SEPARATOR}'",
        difficulty.code_length()
    );

    loop {
        let raw = prompt_input(input, output, &prompt)?;

        match game.submit_guess(&raw) {
            Ok(_) if game.is_solved() => break,
            Ok(score) => writeln!(output, "---\n{score}\n---")?,
            Err(GameError::InvalidGuessFormat(err)) => {
                debug!(%err, "reprompting after invalid guess");
                writeln!(output, "{}", "Invalid input".red())?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(output, "{}", game.report().green().bold())?;
    output.flush()?;

    Ok(game)
}

/// Show the difficulty menu until the player types one of the options exactly
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn select_difficulty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Difficulty> {
    loop {
        writeln!(output, "\nSelect a mode:")?;
        for name in Difficulty::NAMES {
            writeln!(output, "- {name}")?;
        }

        let line = prompt(input, output)?;
        match line.parse::<Difficulty>() {
            Ok(difficulty) => return Ok(difficulty),
            Err(err) => debug!(%err, "reprompting after invalid difficulty"),
        }
    }
}

fn prompt_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<String> {
    writeln!(output, "\n{text}")?;
    prompt(input, output)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "> ")?;
    output.flush()?;
    read_line(input)
}

/// Read one line with surrounding whitespace removed
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so they
/// fail validation and the player is asked again.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("Failed to read from input")?;

    if read == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof))
            .context("Input ended before the game finished");
    }

    Ok(String::from_utf8_lossy(&buf).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(script: &str, difficulty: Option<Difficulty>) -> (Result<GuessingGame>, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        let result = run_play(&mut input, &mut output, difficulty, &mut rng);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn select_difficulty_reprompts_until_valid() {
        let mut input = Cursor::new(b"easy\nNormal\n\nhard\n".to_vec());
        let mut output = Vec::new();

        let difficulty = select_difficulty(&mut input, &mut output).unwrap();
        assert_eq!(difficulty, Difficulty::Hard);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Select a mode:").count(), 4);
        assert!(text.contains("- normal\n- hard\n> "));
    }

    #[test]
    fn select_difficulty_trims_line() {
        let mut input = Cursor::new(b"  normal \r\n".to_vec());
        let mut output = Vec::new();
        assert_eq!(
            select_difficulty(&mut input, &mut output).unwrap(),
            Difficulty::Normal
        );
    }

    #[test]
    fn select_difficulty_fails_on_eof() {
        let mut input = Cursor::new(b"easy\n".to_vec());
        let mut output = Vec::new();
        assert!(select_difficulty(&mut input, &mut output).is_err());
    }

    #[test]
    fn play_until_solved() {
        // Walk every normal code in order; one of them is the secret
        let script: String = crate::core::Code::enumerate(3)
            .iter()
            .map(|code| format!("{code}\n"))
            .collect();

        let (result, text) = play(&format!("normal\n{script}"), None);
        let game = result.unwrap();

        assert!(game.is_solved());
        assert_eq!(game.difficulty(), Some(Difficulty::Normal));
        assert!(text.contains("Enter 3 digits separated by ','"));
        assert!(text.ends_with(&format!("Correct!\nTries: {}\n", game.try_count())));
        // Every non-winning guess got feedback
        assert_eq!(text.matches("Hit: ").count(), game.try_count() - 1);
    }

    #[test]
    fn invalid_guesses_are_reported_and_not_counted() {
        let codes: String = crate::core::Code::enumerate(3)
            .iter()
            .map(|code| format!("{code}\n"))
            .collect();
        let script = format!("0,0,1\n0,1\nx,y,z\n{codes}");

        let (result, text) = play(&script, Some(Difficulty::Normal));
        let game = result.unwrap();

        assert_eq!(text.matches("Invalid input").count(), 3);
        assert!(!text.contains("Select a mode:"));
        let first = game.history().first().unwrap();
        assert_eq!(first.guess.to_string(), "0,1,2");
    }

    #[test]
    fn feedback_format() {
        // Same seed as `play`, so this is the secret the game will draw
        let secret =
            crate::core::Code::random(Difficulty::Hard, &mut StdRng::seed_from_u64(3));
        let mut reversed = secret.digits().to_vec();
        reversed.reverse();
        let reversed = crate::core::Code::from_digits(&reversed).unwrap();

        let script = format!("{reversed}\n{secret}\n");
        let (result, text) = play(&script, Some(Difficulty::Hard));
        let game = result.unwrap();

        // Reversing four distinct digits moves every one of them
        assert!(text.contains("---\nHit: 0\nBlow: 4\n---\n"));
        assert!(text.contains("Enter 4 digits separated by ','\n> "));
        assert_eq!(game.try_count(), 2);
        assert!(text.ends_with("Correct!\nTries: 2\n"));
    }

    #[test]
    fn eof_is_an_error() {
        let (result, _) = play("", Some(Difficulty::Normal));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Input ended"));
    }

    #[test]
    fn non_utf8_guess_is_rejected_and_reprompted() {
        colored::control::set_override(false);
        let secret =
            crate::core::Code::random(Difficulty::Normal, &mut StdRng::seed_from_u64(3));

        let mut script = b"0,\xff,2\n".to_vec();
        script.extend_from_slice(format!("{secret}\n").as_bytes());

        let mut input = Cursor::new(script);
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        let game = run_play(&mut input, &mut output, Some(Difficulty::Normal), &mut rng).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Invalid input").count(), 1);
        assert_eq!(game.try_count(), 1);
        assert!(text.ends_with("Correct!\nTries: 1\n"));
    }

    #[test]
    fn non_utf8_difficulty_is_reprompted() {
        let mut input = Cursor::new(b"\xfe\n\xc3\nnormal\n".to_vec());
        let mut output = Vec::new();

        let difficulty = select_difficulty(&mut input, &mut output).unwrap();
        assert_eq!(difficulty, Difficulty::Normal);

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Select a mode:").count(), 3);
    }
}
