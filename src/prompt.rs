//! Yes/no confirmation
//!
//! The driver asks every question through [`Prompt`], so the `--yes` flag is
//! just [`AutoConfirm`] standing in for the terminal.

use crate::error::Result;
use async_trait::async_trait;

/// Source of answers to yes/no questions
#[async_trait]
pub trait Prompt: Send + Sync {
    /// Ask `question`; `true` means the user agreed
    async fn confirm(&self, question: &str) -> Result<bool>;
}

/// Answers yes to everything without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl Prompt for AutoConfirm {
    async fn confirm(&self, _question: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Interpret a typed answer: only `y` (any case, surrounding space ignored) is yes
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
