//! Rolling conversation history for collaborator context.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// Lines of history included in a collaborator prompt.
const CONTEXT_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => f.write_str("User"),
            Role::Assistant => f.write_str("Assistant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl Turn {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            at: Utc::now(),
        }
    }

    /// `User: ...` / `Assistant: ...`
    pub fn line(&self) -> String {
        format!("{}: {}", self.role, self.content)
    }
}

/// Bounded history; the oldest entries are dropped first.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    turns: VecDeque<Turn>,
    capacity: usize,
}

impl ConversationHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        if self.turns.len() == self.capacity {
            self.turns.pop_front();
        }
        self.turns.push_back(Turn::new(role, content));
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn turns(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Prompt for `message` prefixed with the most recent history lines.
    pub fn context_for(&self, message: &str) -> String {
        if self.turns.is_empty() {
            return message.to_string();
        }
        let skip = self.turns.len().saturating_sub(CONTEXT_LINES);
        let recent: Vec<String> = self.turns.iter().skip(skip).map(Turn::line).collect();
        format!(
            "Previous conversation:\n{}\n\nCurrent question: {}",
            recent.join("\n"),
            message
        )
    }
}
