use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::oneshot;
use uuid::Uuid;

use crate::brain::{ChatResponse, Stage};
use crate::session::Turn;

/// Defines errors that can occur within the actor system.
#[derive(Debug, thiserror::Error, Serialize, Clone)]
pub enum ActorError {
    /// The actor's mailbox or reply channel is gone.
    #[error("Actor channel closed: {0}")]
    ChannelClosed(String),
    /// A generic internal error within an actor.
    #[error("Internal system error: {0}")]
    Internal(String),
    /// An error indicating that an actor operation timed out.
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl From<tokio::time::error::Elapsed> for ActorError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        ActorError::Timeout(format!("Actor operation timed out: {}", err))
    }
}

// Re-export AppError for convenience
pub use crate::error::AppError;

/// Shown when the conversation boundary itself fails.
pub const APOLOGY_MESSAGE: &str = "I apologize, but I encountered an error while processing your question. \
This might be due to high demand on our AI systems. Please try again in a moment, or rephrase your question. \
If the problem persists, please contact support.";

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplySource {
    /// The rule router.
    Rules,
    /// The external text-generation collaborator.
    Generative,
    /// The fixed apology after a boundary failure.
    Fallback,
}

/// One assistant turn as handed to a shell.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub source: ReplySource,
    /// Router stage that answered; `None` for generated and fallback replies.
    pub stage: Option<Stage>,
    pub response: ChatResponse,
}

impl AssistantReply {
    pub fn new(source: ReplySource, stage: Option<Stage>, response: ChatResponse) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            source,
            stage,
            response,
        }
    }

    pub fn from_rules(stage: Stage, response: ChatResponse) -> Self {
        Self::new(ReplySource::Rules, Some(stage), response)
    }

    pub fn apology() -> Self {
        Self::new(
            ReplySource::Fallback,
            None,
            ChatResponse::Analysis {
                text: APOLOGY_MESSAGE.to_string(),
            },
        )
    }

    pub fn text(&self) -> &str {
        self.response.text()
    }
}

/// Messages that can be sent to the `SupervisorActor`.
#[derive(Debug)]
pub enum SupervisorMessage {
    /// A user message to answer.
    ProcessUserMessage {
        content: String,
        /// A channel to send the assistant reply back.
        responder: oneshot::Sender<AssistantReply>,
    },
    /// A request for a daily health tip.
    DailyTip { responder: oneshot::Sender<String> },
    /// A snapshot of the rolling history.
    History { responder: oneshot::Sender<Vec<Turn>> },
    /// Forget the rolling history.
    ClearHistory { responder: oneshot::Sender<()> },
    /// A command to stop the supervisor loop.
    Shutdown,
}
