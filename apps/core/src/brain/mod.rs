//! # Brain Module
//!
//! Deterministic, rule-based answering for the health assistant.
//! No model inference: every answer comes from regex templates, keyword
//! checks and the static tables.
//!
//! ## Components
//! - `intent`: Router stages and the greeting/calorie/wellness templates
//! - `symptoms`: Symptom, medication, first-aid and tip analysis
//! - `composer`: Ordered stage router and response formatting
//! - `response`: Output data structures
//! - `markup`: Line conventions the rendering layer relies on

pub mod composer;
pub mod intent;
pub mod markup;
pub mod response;
pub mod symptoms;

pub use composer::ResponseComposer;
pub use intent::{IntentMatcher, Stage, WellnessTopic};
pub use response::{AnalysisKind, AnalysisResult, Category, ChatResponse};
pub use symptoms::SymptomAnalyzer;
