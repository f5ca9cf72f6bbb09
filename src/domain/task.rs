use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// The serialized field names (`id`, `text`, `completed`) are the on-disk
/// format shared with previously stored data and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique ID, assigned once at creation
    pub id: String,
    /// Task content as typed (never blank)
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new, incomplete task
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Flip the completed flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Text is acceptable for a task if anything is left after trimming
pub fn is_valid_text(text: &str) -> bool {
    !text.trim().is_empty()
}
