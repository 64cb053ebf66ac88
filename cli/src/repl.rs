//! The interactive console loop.
//!
//! Generic over reader and writer so the loop can be driven from a byte
//! buffer in tests exactly as it is from stdin/stdout.

use std::io::{self, BufRead, Write};

use tracing::warn;

use medbot_contracts::error::MedbotResult;
use medbot_core::ChatSession;

/// Printed when the user leaves the chat.
pub const FAREWELL: &str = "Take care and feel better soon! \
                            Remember to consult healthcare professionals for serious concerns.";

const EXIT_WORDS: [&str; 3] = ["quit", "exit", "bye"];

/// True for `quit`, `exit` or `bye`, in any case, ignoring surrounding whitespace.
pub fn is_exit_command(line: &str) -> bool {
    let word = line.trim().to_lowercase();
    EXIT_WORDS.contains(&word.as_str())
}

/// Run the chat until an exit word or end of input.
///
/// Blank lines are skipped and re-prompted.  A failed turn, or a line that
/// is not valid UTF-8, is reported inline and the conversation continues.
/// Returns the number of answered turns.
pub fn run_chat<R: BufRead, W: Write>(
    session: &ChatSession,
    input: R,
    out: &mut W,
) -> MedbotResult<usize> {
    let mut lines = input.lines();
    let mut turns = 0;

    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = match line {
            Ok(line) => line,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!(session_id = %session.session_id(), error = %e, "unreadable input line");
                writeln!(out, "Sorry, I encountered an error: {e}")?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        let text = line.trim();

        if is_exit_command(text) {
            writeln!(out, "MedBot: {FAREWELL}")?;
            break;
        }
        if text.is_empty() {
            continue;
        }

        match session.turn(text) {
            Ok(reply) => {
                writeln!(out)?;
                writeln!(out, "MedBot: {reply}")?;
                writeln!(out)?;
                writeln!(out, "{}", "-".repeat(50))?;
                turns += 1;
            }
            Err(e) => {
                warn!(session_id = %session.session_id(), error = %e, "turn failed");
                writeln!(out, "Sorry, I encountered an error: {e}")?;
            }
        }
    }

    Ok(turns)
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::Arc};

    use medbot_catalog::KeywordRouter;
    use medbot_core::traits::TranscriptStore;
    use medbot_service::open_session;

    use super::*;

    /// Feed `script` to a fresh session; return (output, turns, transcript length).
    fn drive(script: &str) -> (String, usize, usize) {
        drive_bytes(script.as_bytes())
    }

    fn drive_bytes(script: &[u8]) -> (String, usize, usize) {
        let router = Arc::new(KeywordRouter::builtin().unwrap());
        let (session, transcript) = open_session(router);

        let mut out = Vec::new();
        let turns = run_chat(&session, Cursor::new(script), &mut out).unwrap();

        let recorded = transcript.all().unwrap().len();
        (String::from_utf8(out).unwrap(), turns, recorded)
    }

    #[test]
    fn test_exit_words_any_case() {
        for word in ["quit", "EXIT", " Bye ", "Quit"] {
            assert!(is_exit_command(word), "{word:?}");
        }
        for word in ["quitting", "goodbye", "", "exit now"] {
            assert!(!is_exit_command(word), "{word:?}");
        }
    }

    #[test]
    fn test_chat_answers_then_says_farewell() {
        let (output, turns, recorded) = drive("hello\nI have a fever\nbye\nnever read\n");

        assert_eq!(turns, 2);
        assert_eq!(recorded, 4);
        assert!(output.contains("MedBot: Hello! I'm MedBot"));
        assert!(output.contains("MedBot: Based on your mention of fever"));
        assert!(output.contains(FAREWELL));
        assert!(!output.contains("never read"));
    }

    /// Blank lines are ignored and the user is prompted again.
    #[test]
    fn test_blank_lines_are_reprompted() {
        let (output, turns, recorded) = drive("\n   \nheadache\nexit\n");

        assert_eq!(turns, 1);
        assert_eq!(recorded, 2);
        // Four prompts: two blanks, one question, one exit.
        assert_eq!(output.matches("You: ").count(), 4);
    }

    #[test]
    fn test_end_of_input_stops_without_farewell() {
        let (output, turns, _) = drive("stomach ache");

        assert_eq!(turns, 1);
        assert!(output.contains("For digestive symptoms"));
        assert!(!output.contains(FAREWELL));
    }

    /// A line that is not UTF-8 gets an apology; later lines are still answered.
    #[test]
    fn test_invalid_utf8_line_does_not_end_chat() {
        let mut script = b"hello\n".to_vec();
        script.extend_from_slice(&[0xff, 0xfe, b'\n']);
        script.extend_from_slice(b"fever\nquit\n");

        let (output, turns, recorded) = drive_bytes(&script);

        assert_eq!(turns, 2);
        assert_eq!(recorded, 4);
        assert!(output.contains("Sorry, I encountered an error: "));
        assert!(output.contains("MedBot: Based on your mention of fever"));
        assert!(output.contains(FAREWELL));
    }

    #[test]
    fn test_input_is_trimmed_before_recording() {
        let router = Arc::new(KeywordRouter::builtin().unwrap());
        let (session, transcript) = open_session(router);

        let mut out = Vec::new();
        run_chat(&session, Cursor::new("  sore throat  \nquit\n".as_bytes()), &mut out).unwrap();

        let messages = transcript.all().unwrap();
        assert_eq!(messages[0].content(), "sore throat");
    }
}
