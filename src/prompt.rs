use crate::logger::log_warning;
use inquire::{Confirm, InquireError};
use regex::Regex;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::OnceLock;

pub const CONFIRM_MESSAGE: &str = "Would you like to continue?";
pub const INVALID_ANSWER_MESSAGE: &str = "Must respond yes or no";

static ANSWER_PATTERN: OnceLock<Regex> = OnceLock::new();

fn answer_pattern() -> &'static Regex {
    ANSWER_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(?:(?P<yes>y(?:es?)?)|(?P<no>no?))$").expect("valid answer pattern")
    })
}

/// Interprets a yes/no answer.
///
/// `y`, `ye` and `yes` mean yes; `n` and `no` mean no, ignoring case and
/// surrounding whitespace. Anything else is `None`.
pub fn parse_answer(input: &str) -> Option<bool> {
    let captures = answer_pattern().captures(input.trim())?;
    Some(captures.name("yes").is_some())
}

/// Source of the single yes/no answer that gates mutation.
pub trait Confirmer {
    /// Returns `true` only for an explicit affirmative answer.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Reads answers line by line from `reader`, re-asking on invalid input.
///
/// An empty line or end of input is "no".
pub fn confirm_from_lines<R: BufRead>(mut reader: R, message: &str) -> bool {
    loop {
        print!("{} (y/N) ", message);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => return false,
            Ok(_) => {}
            Err(e) => {
                log_warning(&format!("Could not read an answer ({}), treating it as no", e));
                return false;
            }
        }

        if line.trim().is_empty() {
            return false;
        }
        match parse_answer(&line) {
            Some(answer) => return answer,
            None => println!("{}", INVALID_ANSWER_MESSAGE),
        }
    }
}

/// Asks on the terminal, defaulting to "no". Piped stdin is read line by line.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return confirm_from_lines(stdin.lock(), message);
        }

        let parser = |answer: &str| parse_answer(answer).ok_or(());

        match Confirm::new(message)
            .with_default(false)
            .with_parser(&parser)
            .with_error_message(INVALID_ANSWER_MESSAGE)
            .prompt()
        {
            Ok(answer) => answer,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => false,
            Err(e) => {
                log_warning(&format!("Could not read an answer ({}), treating it as no", e));
                false
            }
        }
    }
}
