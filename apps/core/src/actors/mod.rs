//! Asynchronous conversation boundary around the rule core.
//!
//! - `supervisor`: actor owning history and routing each message
//! - `generative`: optional HTTP text-generation collaborator
//! - `traits`: collaborator interface
//! - `messages`: actor messages, replies and errors

pub mod generative;
pub mod messages;
pub mod supervisor;
pub mod traits;

pub use generative::HttpGenerativeClient;
pub use messages::{ActorError, AssistantReply, ReplySource};
pub use supervisor::SupervisorHandle;
pub use traits::GenerativeClient;
