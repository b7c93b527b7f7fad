//! Symptom Analyzer Tests
//!
//! Branch precedence, urgency selection and knowledge-base cross-referencing.

use crate::brain::symptoms::SYMPTOM_PATTERNS;
use crate::brain::{AnalysisKind, SymptomAnalyzer};
use crate::knowledge::KnowledgeBase;
use crate::models::{Severity, SymptomPattern};
use crate::random::FixedRandom;

fn kb() -> KnowledgeBase {
    KnowledgeBase::new().expect("builtin tables are valid")
}

// Lower severity listed first so table order and severity disagree.
static MIXED_SEVERITY: &[SymptomPattern] = &[
    SymptomPattern {
        keywords: &["sneezing"],
        severity: Severity::Low,
        conditions: &["Cold"],
        recommendations: &["Rest"],
        urgency_level: "low urgency",
        follow_up_questions: &["Any sneezing fits?"],
    },
    SymptomPattern {
        keywords: &["high fever"],
        severity: Severity::High,
        conditions: &["Flu"],
        recommendations: &["Call a doctor"],
        urgency_level: "high urgency",
        follow_up_questions: &["How high is the fever?"],
    },
];

static SAME_SEVERITY: &[SymptomPattern] = &[
    SymptomPattern {
        keywords: &["sore throat"],
        severity: Severity::Medium,
        conditions: &["Pharyngitis"],
        recommendations: &["Gargle"],
        urgency_level: "first listed",
        follow_up_questions: &[],
    },
    SymptomPattern {
        keywords: &["sneezing"],
        severity: Severity::Medium,
        conditions: &["Allergy"],
        recommendations: &["Antihistamine"],
        urgency_level: "second listed",
        follow_up_questions: &[],
    },
];

#[cfg(test)]
mod urgency_tests {
    use super::*;

    #[test]
    fn test_highest_severity_pattern_sets_urgency() {
        let kb = kb();
        let analyzer = SymptomAnalyzer::with_patterns(&kb, MIXED_SEVERITY);
        let result = analyzer.analyze("sneezing with a high fever", &FixedRandom::first());

        assert_eq!(result.kind, AnalysisKind::PatternMatch);
        assert_eq!(result.urgency_level, "high urgency");
        // Follow-ups come from every matched pattern in table order.
        assert_eq!(
            result.follow_up_questions,
            vec!["Any sneezing fits?".to_string(), "How high is the fever?".to_string()]
        );
    }

    #[test]
    fn test_equal_severity_keeps_table_order() {
        let kb = kb();
        let analyzer = SymptomAnalyzer::with_patterns(&kb, SAME_SEVERITY);
        let result = analyzer.analyze("sneezing and a sore throat", &FixedRandom::first());
        assert_eq!(result.urgency_level, "first listed");
    }

    #[test]
    fn test_urgency_and_severity_come_from_different_sources() {
        // Urgency follows the worst pattern; severity follows the worst condition.
        let kb = kb();
        let result = SymptomAnalyzer::new(&kb).analyze("I have a severe headache", &FixedRandom::first());
        assert_eq!(result.kind, AnalysisKind::PatternMatch);
        assert_eq!(result.urgency_level, "EMERGENCY - Call 911");
        assert!(result.possible_conditions.iter().any(|c| c == "Migraine Headache"));
    }

    #[test]
    fn test_builtin_table_ordered_by_severity() {
        let ranks: Vec<u8> = SYMPTOM_PATTERNS.iter().map(|p| p.severity.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted);
    }
}

#[cfg(test)]
mod branch_tests {
    use super::*;

    #[test]
    fn test_medication_branch_first() {
        // "burn" would trigger first aid; the medication branch runs earlier.
        let kb = kb();
        let result = SymptomAnalyzer::new(&kb).analyze("can the medicine ibuprofen help a burn", &FixedRandom::first());
        assert_eq!(result.kind, AnalysisKind::MedicationInfo);
        assert_eq!(result.possible_conditions, vec!["Information about Advil/Motrin".to_string()]);
    }

    #[test]
    fn test_unknown_medication_falls_through_to_first_aid() {
        let kb = kb();
        let result = SymptomAnalyzer::new(&kb).analyze("what medicine for a burn", &FixedRandom::first());
        assert_eq!(result.kind, AnalysisKind::FirstAid);
        assert_eq!(result.possible_conditions, vec!["First Aid: Burns".to_string()]);
    }

    #[test]
    fn test_first_aid_steps_in_procedure_order() {
        let kb = kb();
        let result = SymptomAnalyzer::new(&kb).analyze("my friend is choking", &FixedRandom::first());
        let steps: Vec<&String> = result
            .recommendations
            .iter()
            .filter(|r| r.chars().next().is_some_and(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(steps.len(), 5);
        for (i, step) in steps.iter().enumerate() {
            assert!(step.starts_with(&format!("{}. ", i + 1)), "Step out of order: {}", step);
        }
        assert_eq!(result.recommendations[0], "**Steps to follow:**");
    }

    #[test]
    fn test_search_is_idempotent() {
        let kb = kb();
        let analyzer = SymptomAnalyzer::new(&kb);
        let first = analyzer.analyze("pneumonia", &FixedRandom::first());
        let second = analyzer.analyze("pneumonia", &FixedRandom::first());
        assert_eq!(first, second);
        assert_eq!(first.kind, AnalysisKind::GeneralInformation);
        let names = |q: &str| -> Vec<&'static str> { kb.search_knowledge(q).conditions.iter().map(|c| c.name).collect() };
        assert_eq!(names("pneumonia"), names("pneumonia"));
        assert_eq!(names("pneumonia"), vec!["Pneumonia"]);
    }

    #[test]
    fn test_whitespace_only_is_unmatched() {
        let kb = kb();
        let result = SymptomAnalyzer::new(&kb).analyze(" \t ", &FixedRandom::first());
        assert_eq!(result.kind, AnalysisKind::Unmatched);
        assert!(!result.is_meaningful());
    }
}
