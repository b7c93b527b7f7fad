use crate::actors::messages::AppError;
use async_trait::async_trait;

/// Defines the public interface for an external text-generation collaborator.
///
/// The supervisor only consults it when the rule router falls back to its
/// default menu. Any error is logged and the rule answer is used instead.
#[async_trait]
pub trait GenerativeClient: Send + Sync + 'static {
    /// Generates a complete text response for a prompt.
    async fn generate(&self, prompt: String, system_prompt: Option<String>) -> Result<String, AppError>;
}
