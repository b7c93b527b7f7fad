//! HealthChat core.
//!
//! A deterministic, rule-based health assistant: an ordered router over
//! static medical, food and remedy tables, plus an optional asynchronous
//! boundary that keeps conversation history and can defer to an external
//! text-generation service.

pub mod actors;
pub mod brain;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod nutrition;
pub mod random;
pub mod session;
pub mod telemetry;

pub use brain::{Category, ChatResponse, ResponseComposer};
pub use error::AppError;
pub use knowledge::KnowledgeBase;

#[cfg(test)]
mod tests;
