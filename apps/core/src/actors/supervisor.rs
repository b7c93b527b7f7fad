use crate::actors::generative::{generated_response, HttpGenerativeClient, HEALTH_SYSTEM_PROMPT};
use crate::actors::messages::{ActorError, AppError, AssistantReply, ReplySource, SupervisorMessage};
use crate::actors::traits::GenerativeClient;
use crate::brain::{ChatResponse, ResponseComposer};
use crate::config::AssistantConfig;
use crate::session::{ConversationHistory, Role, Turn};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{timeout, Duration};
use tracing::{error, info, instrument, warn};

/// Used when the supervisor cannot produce a tip.
pub const FALLBACK_TIP: &str =
    "Stay hydrated! Aim for 8 glasses of water daily to support your body's vital functions and maintain energy levels.";

/// Reply deadline when no collaborator is configured.
const RULES_REPLY_TIMEOUT: Duration = Duration::from_secs(10);
/// Slack on top of the collaborator's own worst case.
const REPLY_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);
const QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// A handle to the `SupervisorActor`.
///
/// This is the entry point for a shell: it owns the rolling history, runs the
/// rule router and, when the router has nothing specific to say, asks the
/// optional generative collaborator.
#[derive(Clone)]
pub struct SupervisorHandle {
    sender: mpsc::Sender<SupervisorMessage>,
    reply_timeout: Duration,
}

impl SupervisorHandle {
    /// Builds the collaborator from `config` (if any) and spawns the actor.
    pub fn new(config: &AssistantConfig, composer: ResponseComposer) -> Result<Self, AppError> {
        config.check()?;
        let (collaborator, reply_timeout) = match &config.generative {
            Some(generative) => {
                let client: Arc<dyn GenerativeClient> = Arc::new(HttpGenerativeClient::new(generative.clone())?);
                let attempts = generative.max_retries + 1;
                (Some(client), generative.timeout() * attempts + REPLY_TIMEOUT_MARGIN)
            }
            None => (None, RULES_REPLY_TIMEOUT),
        };
        Ok(Self::spawn(composer, collaborator, config.history_capacity(), reply_timeout))
    }

    /// Spawns the actor with an explicit collaborator.
    pub fn spawn(
        composer: ResponseComposer,
        collaborator: Option<Arc<dyn GenerativeClient>>,
        history_capacity: usize,
        reply_timeout: Duration,
    ) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        let actor = SupervisorRunner::new(receiver, composer, collaborator, history_capacity);
        tokio::spawn(async move { actor.run().await });
        Self { sender, reply_timeout }
    }

    /// Answers a user message. Never fails: a broken or slow actor yields the
    /// fixed apology.
    #[instrument(skip(self, content))]
    pub async fn process_message(&self, content: impl Into<String>) -> AssistantReply {
        match self.request_reply(content.into()).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Supervisor failed to answer: {}", e);
                AssistantReply::apology()
            }
        }
    }

    async fn request_reply(&self, content: String) -> Result<AssistantReply, AppError> {
        let (send, recv) = oneshot::channel();
        let msg = SupervisorMessage::ProcessUserMessage {
            content,
            responder: send,
        };
        self.sender
            .send(msg)
            .await
            .map_err(|e| ActorError::ChannelClosed(e.to_string()))?;
        Ok(timeout(self.reply_timeout, recv)
            .await?
            .map_err(|e| ActorError::ChannelClosed(e.to_string()))?)
    }

    /// Daily health tip from the rule tables.
    pub async fn daily_tip(&self) -> String {
        let (send, recv) = oneshot::channel();
        if self.sender.send(SupervisorMessage::DailyTip { responder: send }).await.is_err() {
            return FALLBACK_TIP.to_string();
        }
        match timeout(QUERY_TIMEOUT, recv).await {
            Ok(Ok(tip)) => tip,
            _ => FALLBACK_TIP.to_string(),
        }
    }

    /// Snapshot of the rolling history, oldest first.
    pub async fn history(&self) -> Result<Vec<Turn>, AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SupervisorMessage::History { responder: send })
            .await
            .map_err(|e| ActorError::ChannelClosed(e.to_string()))?;
        Ok(timeout(QUERY_TIMEOUT, recv)
            .await?
            .map_err(|e| ActorError::ChannelClosed(e.to_string()))?)
    }

    pub async fn clear_history(&self) -> Result<(), AppError> {
        let (send, recv) = oneshot::channel();
        self.sender
            .send(SupervisorMessage::ClearHistory { responder: send })
            .await
            .map_err(|e| ActorError::ChannelClosed(e.to_string()))?;
        Ok(timeout(QUERY_TIMEOUT, recv)
            .await?
            .map_err(|e| ActorError::ChannelClosed(e.to_string()))?)
    }

    /// Stops the actor loop. Later requests get the apology.
    pub async fn shutdown(&self) {
        let _ = self.sender.send(SupervisorMessage::Shutdown).await;
    }
}

// --- Actor Runner ---
struct SupervisorRunner {
    receiver: mpsc::Receiver<SupervisorMessage>,
    composer: ResponseComposer,
    collaborator: Option<Arc<dyn GenerativeClient>>,
    history: ConversationHistory,
}

impl SupervisorRunner {
    fn new(
        receiver: mpsc::Receiver<SupervisorMessage>,
        composer: ResponseComposer,
        collaborator: Option<Arc<dyn GenerativeClient>>,
        history_capacity: usize,
    ) -> Self {
        Self {
            receiver,
            composer,
            collaborator,
            history: ConversationHistory::new(history_capacity),
        }
    }

    async fn run(mut self) {
        info!(collaborator = self.collaborator.is_some(), "Supervisor started");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SupervisorMessage::ProcessUserMessage { content, responder } => {
                    let reply = self.handle_user_message(content).await;
                    let _ = responder.send(reply);
                }
                SupervisorMessage::DailyTip { responder } => {
                    let _ = responder.send(self.composer.daily_health_tip());
                }
                SupervisorMessage::History { responder } => {
                    let _ = responder.send(self.history.turns());
                }
                SupervisorMessage::ClearHistory { responder } => {
                    self.history.clear();
                    let _ = responder.send(());
                }
                SupervisorMessage::Shutdown => {
                    info!("Supervisor shutting down...");
                    break;
                }
            }
        }
        info!("Supervisor stopped");
    }

    #[instrument(skip(self, content))]
    async fn handle_user_message(&mut self, content: String) -> AssistantReply {
        // Context is built from the turns before this one.
        let context = self.history.context_for(&content);
        self.history.push(Role::User, content.as_str());

        let (stage, rules) = self.composer.route(&content);
        // Only the default menu is worth replacing.
        let collaborator = match rules {
            ChatResponse::General { .. } => self.collaborator.clone(),
            _ => None,
        };

        let reply = match collaborator {
            Some(collaborator) => match collaborator
                .generate(context, Some(HEALTH_SYSTEM_PROMPT.to_string()))
                .await
            {
                Ok(text) => AssistantReply::new(ReplySource::Generative, None, generated_response(&content, text)),
                Err(e) => {
                    warn!("Collaborator failed, using rule answer: {}", e);
                    AssistantReply::from_rules(stage, rules)
                }
            },
            None => AssistantReply::from_rules(stage, rules),
        };

        info!(source = ?reply.source, summary = %reply.response.summary(), "Reply composed");
        self.history.push(Role::Assistant, reply.text());
        reply
    }
}
