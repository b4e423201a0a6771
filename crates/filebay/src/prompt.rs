//! Confirmation and acknowledgement port
//!
//! Deletions must be confirmed before any state changes, and download
//! requests surface a simulated acknowledgement. Both are synchronous
//! prompts supplied by the host: a terminal, a dialog, or a script in tests.

use std::collections::VecDeque;

use filebay_core::FileId;

/// What kind of deletion is being confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    /// One record, from its card or table row
    Single { id: FileId, name: String },
    /// Every selected record
    Selected { ids: Vec<FileId>, names: Vec<String> },
}

impl DeleteTarget {
    /// Get the IDs to delete
    pub fn ids(&self) -> Vec<FileId> {
        match self {
            DeleteTarget::Single { id, .. } => vec![*id],
            DeleteTarget::Selected { ids, .. } => ids.clone(),
        }
    }

    /// Question shown to the user
    pub fn prompt(&self) -> String {
        match self {
            DeleteTarget::Single { name, .. } => format!("Delete \"{}\"?", name),
            DeleteTarget::Selected { ids, .. } => format!(
                "Delete {} selected file{}?",
                ids.len(),
                if ids.len() == 1 { "" } else { "s" }
            ),
        }
    }

    /// Prompt followed by the affected names, one per line
    pub fn listing(&self) -> String {
        let mut text = self.prompt();
        if let DeleteTarget::Selected { names, .. } = self {
            for name in names {
                text.push_str("\n  - ");
                text.push_str(name);
            }
        }
        text
    }
}

/// Host-provided blocking prompts
pub trait Prompter {
    /// Ask whether to go ahead with a deletion; `false` aborts it
    fn confirm(&mut self, target: &DeleteTarget) -> bool;

    /// Show a message the user only has to acknowledge
    fn acknowledge(&mut self, message: &str);
}

/// Says yes to everything; acknowledgements go to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Prompter for AutoConfirm {
    fn confirm(&mut self, target: &DeleteTarget) -> bool {
        log::info!("AutoConfirm: {}", target.listing());
        true
    }

    fn acknowledge(&mut self, message: &str) {
        log::info!("AutoConfirm: {}", message);
    }
}

/// Replays scripted answers and records everything it was asked.
///
/// Declines once the script runs out.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<bool>,
    /// Every confirmation request, in order
    pub asked: Vec<DeleteTarget>,
    /// Every acknowledgement message, in order
    pub acknowledged: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Queue another answer
    pub fn push_answer(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, target: &DeleteTarget) -> bool {
        self.asked.push(target.clone());
        self.answers.pop_front().unwrap_or(false)
    }

    fn acknowledge(&mut self, message: &str) {
        self.acknowledged.push(message.to_string());
    }
}
