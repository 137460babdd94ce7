//! Terminal prompt

use async_trait::async_trait;
use dialoguer::Confirm;
use jj_bookmark_sync::error::{Error, Result};
use jj_bookmark_sync::prompt::{Prompt, is_affirmative};
use std::io::{BufRead, IsTerminal, Write};

/// Asks on the terminal
///
/// Uses a `dialoguer` confirm when stdin is a tty. Piped stdin gets a plain
/// `(y/n)` question and one line is read; only `y` counts as yes.
pub struct TerminalPrompt;

#[async_trait]
impl Prompt for TerminalPrompt {
    async fn confirm(&self, question: &str) -> Result<bool> {
        let question = question.to_string();
        tokio::task::spawn_blocking(move || ask(&question))
            .await
            .map_err(|e| Error::Prompt(e.to_string()))?
    }
}

fn ask(question: &str) -> Result<bool> {
    if std::io::stdin().is_terminal() {
        return Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(|e| Error::Prompt(e.to_string()));
    }

    print!("{question} (y/n): ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}
