//! Blocking user prompts and a scripted implementation for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Modal interaction with the user.
///
/// Both calls block until the user has answered or dismissed the dialog.
pub trait Prompt: Send + Sync {
    /// Asks a yes/no question; `true` means the user confirmed.
    fn confirm(&self, message: &str) -> bool;

    /// Shows a message the user has to acknowledge.
    fn alert(&self, message: &str);
}

#[derive(Debug, Default)]
struct ScriptedPromptState {
    answers: VecDeque<bool>,
    default_answer: bool,
    confirmations: Vec<String>,
    alerts: Vec<String>,
}

/// Prompt that answers from a queue and records everything it was shown.
///
/// Once the queue is empty every confirmation gets the default answer.
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    state: Arc<Mutex<ScriptedPromptState>>,
}

impl ScriptedPrompt {
    /// A prompt that confirms everything.
    pub fn accepting() -> Self {
        let prompt = Self::default();
        prompt.lock().default_answer = true;
        prompt
    }

    /// A prompt that declines everything.
    pub fn declining() -> Self {
        Self::default()
    }

    /// Queues one answer ahead of the default.
    pub fn push_answer(&self, answer: bool) {
        self.lock().answers.push_back(answer);
    }

    /// Questions asked so far.
    pub fn confirmations(&self) -> Vec<String> {
        self.lock().confirmations.clone()
    }

    /// Alerts shown so far.
    pub fn alerts(&self) -> Vec<String> {
        self.lock().alerts.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ScriptedPromptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        let mut state = self.lock();
        state.confirmations.push(message.to_string());
        let default_answer = state.default_answer;
        state.answers.pop_front().unwrap_or(default_answer)
    }

    fn alert(&self, message: &str) {
        self.lock().alerts.push(message.to_string());
    }
}
