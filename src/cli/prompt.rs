//! Terminal overwrite confirmation.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm as ConfirmPrompt;

use crate::core::writer::Confirm;
use crate::error::{Error, Result};

/// Asks the operator on the terminal, defaulting to "no".
///
/// With piped stdin a single line is read instead; only `y` or `yes`
/// (any case) confirms, and end of input counts as a refusal.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        if io::stdin().is_terminal() {
            return Ok(ConfirmPrompt::new()
                .with_prompt(prompt)
                .default(false)
                .interact()?);
        }

        print!("{} (y/N): ", prompt);
        io::stdout()
            .flush()
            .map_err(|e| Error::Prompt(e.to_string()))?;

        read_answer(io::stdin().lock())
    }
}

fn read_answer(mut input: impl BufRead) -> Result<bool> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| Error::Prompt(e.to_string()))?;
    Ok(is_yes(&line))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
