//! Symptom Analyzer.
//!
//! Checks, in order: medication questions, first-aid situations, tip requests,
//! then symptom patterns cross-referenced against the knowledge base, then a
//! free-text knowledge search, then a generic acknowledgement. The first three
//! and the last two short-circuit; pattern matching collects every pattern.

use tracing::debug;

use super::response::{AnalysisKind, AnalysisResult};
use crate::knowledge::KnowledgeBase;
use crate::models::{Severity, SymptomPattern};
use crate::random::RandomSource;

/// Patterns in table order. Order decides which urgency wins on equal severity.
pub static SYMPTOM_PATTERNS: &[SymptomPattern] = &[
    // Emergency
    SymptomPattern {
        keywords: &["chest pain", "heart attack", "crushing pain", "radiating pain", "left arm pain"],
        severity: Severity::Emergency,
        conditions: &["Possible cardiac event", "Angina", "Heart attack"],
        recommendations: &["Seek immediate emergency medical attention", "Call emergency services", "Do not drive yourself"],
        urgency_level: "IMMEDIATE MEDICAL ATTENTION REQUIRED",
        follow_up_questions: &["Are you experiencing shortness of breath?", "Is the pain radiating to your jaw or arm?"],
    },
    SymptomPattern {
        keywords: &["difficulty breathing", "shortness of breath", "can't breathe", "gasping"],
        severity: Severity::Emergency,
        conditions: &["Respiratory distress", "Asthma attack", "Pneumonia"],
        recommendations: &["Seek immediate medical attention", "Call emergency services if severe"],
        urgency_level: "URGENT - Seek immediate care",
        follow_up_questions: &["Do you have a history of asthma?", "Are your lips or fingernails blue?"],
    },
    SymptomPattern {
        keywords: &["severe headache", "worst headache", "sudden headache", "thunderclap headache"],
        severity: Severity::Emergency,
        conditions: &["Possible stroke", "Brain hemorrhage", "Meningitis"],
        recommendations: &["Seek immediate emergency care", "Call emergency services"],
        urgency_level: "EMERGENCY - Call 911",
        follow_up_questions: &["Do you have neck stiffness?", "Are you experiencing vision changes?"],
    },
    // High
    SymptomPattern {
        keywords: &["high fever", "fever over 103", "fever over 101", "burning up"],
        severity: Severity::High,
        conditions: &["Severe infection", "Flu", "COVID-19", "Bacterial infection"],
        recommendations: &["Contact healthcare provider within 24 hours", "Monitor temperature regularly", "Stay hydrated"],
        urgency_level: "High priority - Contact doctor today",
        follow_up_questions: &["How long have you had the fever?", "Do you have any other symptoms?"],
    },
    SymptomPattern {
        keywords: &["severe abdominal pain", "stomach pain", "sharp abdominal pain"],
        severity: Severity::High,
        conditions: &["Appendicitis", "Gallbladder issues", "Kidney stones", "Gastroenteritis"],
        recommendations: &["Contact healthcare provider promptly", "Avoid eating until evaluated", "Monitor pain level"],
        urgency_level: "High priority - Seek medical evaluation",
        follow_up_questions: &["Where exactly is the pain located?", "Does the pain worsen with movement?"],
    },
    // Medium
    SymptomPattern {
        keywords: &["persistent cough", "cough", "dry cough", "productive cough"],
        severity: Severity::Medium,
        conditions: &["Upper respiratory infection", "Bronchitis", "Allergies", "Common cold"],
        recommendations: &[
            "Rest and stay hydrated",
            "Consider over-the-counter cough medicine",
            "See doctor if persists over 2 weeks",
        ],
        urgency_level: "Moderate - Monitor and seek care if worsens",
        follow_up_questions: &["Are you coughing up blood or colored mucus?", "How long have you had the cough?"],
    },
    SymptomPattern {
        keywords: &["headache", "head pain", "migraine", "tension headache"],
        severity: Severity::Medium,
        conditions: &["Tension headache", "Migraine", "Sinus headache", "Dehydration"],
        recommendations: &["Rest in a quiet, dark room", "Stay hydrated", "Consider over-the-counter pain relief"],
        urgency_level: "Moderate - Self-care with monitoring",
        follow_up_questions: &["Is this a new type of headache for you?", "Do you have sensitivity to light?"],
    },
    SymptomPattern {
        keywords: &["nausea", "vomiting", "throwing up", "sick to stomach"],
        severity: Severity::Medium,
        conditions: &["Gastroenteritis", "Food poisoning", "Viral infection", "Motion sickness"],
        recommendations: &["Stay hydrated with small sips", "Rest", "Avoid solid foods temporarily"],
        urgency_level: "Moderate - Monitor hydration",
        follow_up_questions: &["Are you able to keep fluids down?", "Do you have diarrhea as well?"],
    },
    // Low
    SymptomPattern {
        keywords: &["runny nose", "stuffy nose", "congestion", "sneezing"],
        severity: Severity::Low,
        conditions: &["Common cold", "Allergies", "Sinusitis"],
        recommendations: &["Rest and fluids", "Saline nasal rinse", "Over-the-counter decongestants if needed"],
        urgency_level: "Low priority - Self-care appropriate",
        follow_up_questions: &["Do you have seasonal allergies?", "Is this accompanied by fever?"],
    },
    SymptomPattern {
        keywords: &["sore throat", "throat pain", "scratchy throat"],
        severity: Severity::Low,
        conditions: &["Viral pharyngitis", "Strep throat", "Common cold", "Allergies"],
        recommendations: &["Warm salt water gargles", "Stay hydrated", "Throat lozenges"],
        urgency_level: "Low priority - Self-care with monitoring",
        follow_up_questions: &["Do you have white patches on your throat?", "Do you have swollen lymph nodes?"],
    },
    SymptomPattern {
        keywords: &["fatigue", "tired", "exhausted", "low energy"],
        severity: Severity::Low,
        conditions: &["Viral infection", "Stress", "Poor sleep", "Dehydration"],
        recommendations: &["Ensure adequate rest", "Stay hydrated", "Maintain regular sleep schedule"],
        urgency_level: "Low priority - Lifestyle modifications",
        follow_up_questions: &["How long have you been feeling tired?", "Are you getting enough sleep?"],
    },
];

const MEDICATION_KEYWORDS: &[&str] = &["medication", "drug", "medicine"];
const FIRST_AID_KEYWORDS: &[&str] = &["first aid", "emergency", "choking", "burn"];
const TIP_KEYWORDS: &[&str] = &["health tip", "prevention", "healthy"];

/// Tokens shorter than this are not looked up as medication names.
const MIN_MEDICATION_TOKEN: usize = 3;
const MAX_CONDITIONS: usize = 3;
const MAX_TREATMENTS: usize = 3;
const MAX_PREVENTION: usize = 2;
const MAX_FOLLOW_UPS: usize = 2;
const MAX_SEARCH_HITS: usize = 2;

const CONSULT_PROVIDER: &str = "Consider consulting with a healthcare provider for proper evaluation";

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

pub struct SymptomAnalyzer<'a> {
    knowledge: &'a KnowledgeBase,
    patterns: &'static [SymptomPattern],
}

impl<'a> SymptomAnalyzer<'a> {
    pub fn new(knowledge: &'a KnowledgeBase) -> Self {
        Self::with_patterns(knowledge, SYMPTOM_PATTERNS)
    }

    pub fn with_patterns(knowledge: &'a KnowledgeBase, patterns: &'static [SymptomPattern]) -> Self {
        Self { knowledge, patterns }
    }

    pub fn analyze(&self, input: &str, rng: &dyn RandomSource) -> AnalysisResult {
        let lower = input.trim().to_lowercase();
        if lower.is_empty() {
            return Self::unmatched();
        }

        if contains_any(&lower, MEDICATION_KEYWORDS) {
            if let Some(result) = self.medication_result(&lower) {
                return result;
            }
        }

        if contains_any(&lower, FIRST_AID_KEYWORDS) {
            if let Some(result) = self.first_aid_result(&lower) {
                return result;
            }
        }

        if contains_any(&lower, TIP_KEYWORDS) {
            return self.tip_result(rng);
        }

        let matched = self.matching_patterns(&lower);
        debug!(matched = matched.len(), "Symptom patterns evaluated");

        if !matched.is_empty() {
            if let Some(result) = self.pattern_result(&lower, &matched) {
                return result;
            }
        }

        // Zero patterns, or patterns without a knowledge-base cross-reference.
        self.search_result(input).unwrap_or_else(Self::unmatched)
    }

    /// Every pattern with at least one keyword inside the lowercased input, in table order.
    pub fn matching_patterns(&self, lower: &str) -> Vec<&'static SymptomPattern> {
        self.patterns
            .iter()
            .filter(|p| p.keywords.iter().any(|k| lower.contains(&k.to_lowercase())))
            .collect()
    }

    /// Highest-severity pattern; the first one wins among equals.
    pub fn most_urgent<'p>(patterns: &[&'p SymptomPattern]) -> Option<&'p SymptomPattern> {
        patterns.iter().copied().fold(None, |best, p| match best {
            Some(b) if p.severity.rank() <= b.severity.rank() => Some(b),
            _ => Some(p),
        })
    }

    fn medication_result(&self, lower: &str) -> Option<AnalysisResult> {
        let medication = lower
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|token| token.len() >= MIN_MEDICATION_TOKEN)
            .find_map(|token| self.knowledge.medication_info(token))?;

        let mut recommendations = vec![
            format!(
                "{} ({}) is used for: {}",
                medication.name,
                medication.generic_name,
                medication.uses.join(", ")
            ),
            format!("Common side effects: {}", medication.side_effects.join(", ")),
            format!("Dosage: {}", medication.dosage_info),
        ];
        recommendations.extend(medication.warnings.iter().map(|w| format!("⚠️ {}", w)));

        Some(AnalysisResult {
            kind: AnalysisKind::MedicationInfo,
            severity: Severity::Low,
            possible_conditions: vec![format!("Information about {}", medication.name)],
            recommendations,
            urgency_level: "Medication Information".to_string(),
            follow_up_questions: vec![],
        })
    }

    fn first_aid_result(&self, lower: &str) -> Option<AnalysisResult> {
        let guide = self.knowledge.first_aid_guide(lower)?;

        let mut recommendations = vec!["**Steps to follow:**".to_string()];
        recommendations.extend(KnowledgeBase::numbered_steps(guide));
        recommendations.push("**Important warnings:**".to_string());
        recommendations.extend(guide.warnings.iter().map(|w| format!("⚠️ {}", w)));
        recommendations.push(format!("**When to seek help:** {}", guide.when_to_seek_help));

        Some(AnalysisResult {
            kind: AnalysisKind::FirstAid,
            severity: Severity::High,
            possible_conditions: vec![format!("First Aid: {}", guide.situation)],
            recommendations,
            urgency_level: "FIRST AID GUIDANCE".to_string(),
            follow_up_questions: vec![],
        })
    }

    fn tip_result(&self, rng: &dyn RandomSource) -> AnalysisResult {
        let tip = self.knowledge.random_health_tip(rng);

        let mut recommendations = vec![tip.description.to_string(), "**Benefits:**".to_string()];
        recommendations.extend(tip.benefits.iter().map(|b| format!("• {}", b)));
        recommendations.push("**How to implement:**".to_string());
        recommendations.extend(tip.how_to.iter().map(|h| format!("• {}", h)));

        AnalysisResult {
            kind: AnalysisKind::HealthTip,
            severity: Severity::Low,
            possible_conditions: vec![format!("Health Tip: {}", tip.title)],
            recommendations,
            urgency_level: "Health & Wellness Tip".to_string(),
            follow_up_questions: vec![],
        }
    }

    fn pattern_result(&self, lower: &str, matched: &[&'static SymptomPattern]) -> Option<AnalysisResult> {
        let detected: Vec<&str> = matched
            .iter()
            .flat_map(|p| p.keywords.iter().copied())
            .filter(|k| lower.contains(&k.to_lowercase()))
            .collect();

        let conditions = self.knowledge.conditions_by_symptoms(&detected);
        let primary = *conditions.first()?;
        let urgent = Self::most_urgent(matched)?;

        let mut recommendations: Vec<String> = primary
            .treatments
            .iter()
            .take(MAX_TREATMENTS)
            .map(|t| format!("• {}", t))
            .collect();
        recommendations.push("**Prevention tips:**".to_string());
        recommendations.extend(primary.prevention.iter().take(MAX_PREVENTION).map(|p| format!("• {}", p)));
        if let Some(specialty) = primary.specialty_required {
            recommendations.push(format!("Consider consulting: {}", specialty));
        }

        Some(AnalysisResult {
            kind: AnalysisKind::PatternMatch,
            severity: primary.severity,
            possible_conditions: conditions.iter().take(MAX_CONDITIONS).map(|c| c.name.to_string()).collect(),
            recommendations,
            urgency_level: urgent.urgency_level.to_string(),
            follow_up_questions: matched
                .iter()
                .flat_map(|p| p.follow_up_questions.iter())
                .take(MAX_FOLLOW_UPS)
                .map(|q| q.to_string())
                .collect(),
        })
    }

    fn search_result(&self, input: &str) -> Option<AnalysisResult> {
        let found = self.knowledge.search_knowledge(input);
        if found.conditions.is_empty() && found.medications.is_empty() {
            return None;
        }

        let mut recommendations = Vec::new();
        if !found.conditions.is_empty() {
            recommendations.push("**Possible related conditions:**".to_string());
            recommendations.extend(
                found
                    .conditions
                    .iter()
                    .take(MAX_SEARCH_HITS)
                    .map(|c| format!("• {}: {}", c.name, c.description)),
            );
        }
        if !found.medications.is_empty() {
            recommendations.push("**Related medications:**".to_string());
            recommendations.extend(
                found
                    .medications
                    .iter()
                    .take(MAX_SEARCH_HITS)
                    .map(|m| format!("• {}: {}", m.name, m.description)),
            );
        }
        recommendations.push(CONSULT_PROVIDER.to_string());

        Some(AnalysisResult {
            kind: AnalysisKind::GeneralInformation,
            severity: Severity::Low,
            possible_conditions: found
                .conditions
                .iter()
                .take(MAX_SEARCH_HITS)
                .map(|c| c.name.to_string())
                .collect(),
            recommendations,
            urgency_level: "General health information provided".to_string(),
            follow_up_questions: vec![],
        })
    }

    fn unmatched() -> AnalysisResult {
        AnalysisResult {
            kind: AnalysisKind::Unmatched,
            severity: Severity::Low,
            possible_conditions: vec!["General health concern".to_string()],
            recommendations: vec![
                "Thank you for sharing your symptoms".to_string(),
                CONSULT_PROVIDER.to_string(),
                "Monitor your symptoms and seek care if they worsen".to_string(),
                "You can also ask me about specific medications, first aid, or health tips".to_string(),
            ],
            urgency_level: "General consultation recommended".to_string(),
            follow_up_questions: vec![],
        }
    }
}
