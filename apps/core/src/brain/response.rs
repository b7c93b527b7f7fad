//! Response types produced by the brain.
//!
//! `AnalysisResult` is the symptom analyzer's output; `ChatResponse` is what the
//! router hands to the presentation layer.

use serde::Serialize;
use std::fmt;

use crate::models::Severity;

/// Response category as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greeting,
    Health,
    Calorie,
    Symptom,
    Emergency,
    General,
    /// Only produced at the conversation boundary, never by the router.
    Analysis,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Health => "health",
            Category::Calorie => "calorie",
            Category::Symptom => "symptom",
            Category::Emergency => "emergency",
            Category::General => "general",
            Category::Analysis => "analysis",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which analyzer branch produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    MedicationInfo,
    FirstAid,
    HealthTip,
    PatternMatch,
    GeneralInformation,
    /// Nothing recognised; the generic acknowledgement.
    Unmatched,
}

/// Output of the symptom analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub kind: AnalysisKind,
    pub severity: Severity,
    pub possible_conditions: Vec<String>,
    pub recommendations: Vec<String>,
    pub urgency_level: String,
    pub follow_up_questions: Vec<String>,
}

impl AnalysisResult {
    /// Whether the router should present this result instead of moving on.
    pub fn is_meaningful(&self) -> bool {
        self.kind != AnalysisKind::Unmatched
    }
}

/// Final response of the rule pipeline, one variant per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ChatResponse {
    Greeting {
        text: String,
        confidence: f32,
    },
    Health {
        text: String,
        confidence: f32,
    },
    Calorie {
        text: String,
        confidence: f32,
    },
    Symptom {
        text: String,
        severity: Severity,
        confidence: f32,
        urgency_level: String,
        follow_up_questions: Vec<String>,
    },
    Emergency {
        text: String,
        confidence: f32,
        urgency_level: String,
        follow_up_questions: Vec<String>,
    },
    General {
        text: String,
        confidence: f32,
    },
    Analysis {
        text: String,
    },
}

impl ChatResponse {
    pub fn category(&self) -> Category {
        match self {
            ChatResponse::Greeting { .. } => Category::Greeting,
            ChatResponse::Health { .. } => Category::Health,
            ChatResponse::Calorie { .. } => Category::Calorie,
            ChatResponse::Symptom { .. } => Category::Symptom,
            ChatResponse::Emergency { .. } => Category::Emergency,
            ChatResponse::General { .. } => Category::General,
            ChatResponse::Analysis { .. } => Category::Analysis,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            ChatResponse::Greeting { text, .. }
            | ChatResponse::Health { text, .. }
            | ChatResponse::Calorie { text, .. }
            | ChatResponse::Symptom { text, .. }
            | ChatResponse::Emergency { text, .. }
            | ChatResponse::General { text, .. }
            | ChatResponse::Analysis { text } => text,
        }
    }

    pub fn confidence(&self) -> Option<f32> {
        match self {
            ChatResponse::Greeting { confidence, .. }
            | ChatResponse::Health { confidence, .. }
            | ChatResponse::Calorie { confidence, .. }
            | ChatResponse::Symptom { confidence, .. }
            | ChatResponse::Emergency { confidence, .. }
            | ChatResponse::General { confidence, .. } => Some(*confidence),
            ChatResponse::Analysis { .. } => None,
        }
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            ChatResponse::Symptom { severity, .. } => Some(*severity),
            ChatResponse::Emergency { .. } => Some(Severity::Emergency),
            _ => None,
        }
    }

    pub fn follow_up_questions(&self) -> &[String] {
        match self {
            ChatResponse::Symptom { follow_up_questions, .. }
            | ChatResponse::Emergency { follow_up_questions, .. } => follow_up_questions,
            _ => &[],
        }
    }

    /// Short description for logging.
    pub fn summary(&self) -> String {
        match (self.confidence(), self.severity()) {
            (_, Some(severity)) => format!("{} (severity {})", self.category(), severity),
            (Some(confidence), None) => format!("{} ({:.0}%)", self.category(), confidence * 100.0),
            (None, None) => self.category().to_string(),
        }
    }
}
