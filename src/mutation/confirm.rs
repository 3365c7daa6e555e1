//! Yes/no decision gate for destructive operations.

use std::future::Future;

use crate::utils::{is_affirmative, prompt_line_async};

/// Asks the user to approve an action before it is dispatched.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send;
}

/// Approves everything (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Declines everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}

/// Asks on the terminal. End of input or a read error counts as no.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        match prompt_line_async(format!("{prompt} [y/N] ")).await {
            Ok(Some(answer)) => is_affirmative(&answer),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!("Failed to read confirmation: {e}");
                false
            }
        }
    }
}
