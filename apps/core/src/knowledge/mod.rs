//! # Knowledge Base
//!
//! Pure lookups over the static medical tables in [`catalog`].
//! Nothing here mutates; a `KnowledgeBase` is a bundle of `'static` slices
//! validated once at startup and then shared by reference.

pub mod catalog;

use serde::Serialize;
use std::collections::HashSet;
use tracing::info;

use crate::error::AppError;
use crate::models::{FirstAidGuide, HealthTip, Medication, MedicalCondition, Severity, WellnessGuide};
use crate::random::{self, RandomSource};

/// The raw tables a knowledge base is built from.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeTables {
    pub conditions: &'static [MedicalCondition],
    pub medications: &'static [Medication],
    pub first_aid: &'static [FirstAidGuide],
    pub health_tips: &'static [HealthTip],
    pub wellness: &'static [WellnessGuide],
}

impl KnowledgeTables {
    pub fn builtin() -> Self {
        Self {
            conditions: catalog::CONDITIONS,
            medications: catalog::MEDICATIONS,
            first_aid: catalog::FIRST_AID_GUIDES,
            health_tips: catalog::HEALTH_TIPS,
            wellness: catalog::WELLNESS_GUIDES,
        }
    }
}

/// Result of a free-text search across every table.
#[derive(Debug, Clone, Default, Serialize)]
pub struct KnowledgeSearch {
    pub conditions: Vec<&'static MedicalCondition>,
    pub medications: Vec<&'static Medication>,
    pub first_aid: Vec<&'static FirstAidGuide>,
    pub health_tips: Vec<&'static HealthTip>,
    pub wellness: Vec<&'static WellnessGuide>,
}

impl KnowledgeSearch {
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
            && self.medications.is_empty()
            && self.first_aid.is_empty()
            && self.health_tips.is_empty()
            && self.wellness.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    tables: KnowledgeTables,
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

fn ensure_unique_ids<'a>(table: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(AppError::KnowledgeBase(format!("{} table has an empty id", table)));
        }
        if !seen.insert(id) {
            return Err(AppError::KnowledgeBase(format!("{} table has duplicate id '{}'", table, id)));
        }
    }
    Ok(())
}

impl KnowledgeBase {
    /// Builds the knowledge base from the built-in tables.
    pub fn new() -> Result<Self, AppError> {
        Self::from_tables(KnowledgeTables::builtin())
    }

    /// Validates `tables` and wraps them. A malformed table is fatal here,
    /// never per request.
    pub fn from_tables(tables: KnowledgeTables) -> Result<Self, AppError> {
        if tables.conditions.is_empty() {
            return Err(AppError::KnowledgeBase("conditions table is empty".to_string()));
        }
        if tables.health_tips.is_empty() {
            return Err(AppError::KnowledgeBase("health tips table is empty".to_string()));
        }

        ensure_unique_ids("conditions", tables.conditions.iter().map(|c| c.id))?;
        ensure_unique_ids("medications", tables.medications.iter().map(|m| m.id))?;
        ensure_unique_ids("first aid", tables.first_aid.iter().map(|g| g.id))?;
        ensure_unique_ids("health tips", tables.health_tips.iter().map(|t| t.id))?;
        ensure_unique_ids("wellness", tables.wellness.iter().map(|w| w.id))?;

        if let Some(c) = tables.conditions.iter().find(|c| c.symptoms.is_empty()) {
            return Err(AppError::KnowledgeBase(format!("condition '{}' lists no symptoms", c.id)));
        }
        if let Some(g) = tables.first_aid.iter().find(|g| g.steps.is_empty()) {
            return Err(AppError::KnowledgeBase(format!("first aid guide '{}' has no steps", g.id)));
        }

        info!(
            conditions = tables.conditions.len(),
            medications = tables.medications.len(),
            first_aid = tables.first_aid.len(),
            health_tips = tables.health_tips.len(),
            wellness = tables.wellness.len(),
            "Knowledge base loaded"
        );

        Ok(Self { tables })
    }

    pub fn conditions(&self) -> &'static [MedicalCondition] {
        self.tables.conditions
    }

    pub fn medications(&self) -> &'static [Medication] {
        self.tables.medications
    }

    pub fn first_aid_guides(&self) -> &'static [FirstAidGuide] {
        self.tables.first_aid
    }

    /// Conditions sharing a symptom with the input, most severe first.
    ///
    /// A symptom matches when either string contains the other, ignoring case.
    /// The sort is stable, so equal severities keep table order.
    pub fn conditions_by_symptoms<S: AsRef<str>>(&self, symptoms: &[S]) -> Vec<&'static MedicalCondition> {
        let wanted: Vec<String> = symptoms
            .iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let mut matches: Vec<&'static MedicalCondition> = self
            .tables
            .conditions
            .iter()
            .filter(|condition| {
                condition.symptoms.iter().any(|known| {
                    let known = known.to_lowercase();
                    wanted
                        .iter()
                        .any(|symptom| known.contains(symptom.as_str()) || symptom.contains(known.as_str()))
                })
            })
            .collect();

        matches.sort_by(|a, b| Severity::descending(&a.severity, &b.severity));
        matches
    }

    /// First medication whose brand or generic name contains `name`.
    pub fn medication_info(&self, name: &str) -> Option<&'static Medication> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.tables
            .medications
            .iter()
            .find(|med| contains_ci(med.name, &query) || contains_ci(med.generic_name, &query))
    }

    /// First guide whose situation name (or one of its aliases) appears in `text`.
    pub fn first_aid_guide(&self, text: &str) -> Option<&'static FirstAidGuide> {
        let text = text.to_lowercase();
        self.tables.first_aid.iter().find(|guide| {
            text.contains(&guide.situation.to_lowercase())
                || guide.aliases.iter().any(|alias| text.contains(&alias.to_lowercase()))
        })
    }

    /// Steps rendered as `N. step`, preserving procedure order.
    pub fn numbered_steps(guide: &FirstAidGuide) -> Vec<String> {
        guide
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect()
    }

    /// First-aid text for a topic: the matching guide, or general guidance
    /// listing the guides that exist.
    pub fn first_aid_info(&self, topic: &str) -> String {
        if let Some(guide) = self.first_aid_guide(topic) {
            let mut out = format!("🩹 **First Aid: {}**\n\n**Steps to follow:**\n", guide.situation);
            for step in Self::numbered_steps(guide) {
                out.push_str(&step);
                out.push('\n');
            }
            out.push_str("\n**Important warnings:**\n");
            for warning in guide.warnings {
                out.push_str(&format!("• {}\n", warning));
            }
            out.push_str(&format!("\n**When to seek help:** {}", guide.when_to_seek_help));
            return out;
        }

        let available: Vec<&str> = self.tables.first_aid.iter().map(|g| g.situation).collect();
        format!(
            "🩹 **General First Aid Information:**\n\n\
             • Check the scene for safety before helping\n\
             • Call emergency services (911) for life-threatening situations\n\
             • Do not move someone with a possible head, neck or spine injury\n\
             • Apply firm pressure to stop heavy bleeding\n\
             • Keep the person calm and warm until help arrives\n\n\
             **Guides available:** {}\n\n\
             *Ask about a specific situation, e.g. \"first aid for burns\", for step-by-step guidance.*",
            available.join(", ")
        )
    }

    /// All tips, or those whose category contains `category`.
    pub fn health_tips(&self, category: Option<&str>) -> Vec<&'static HealthTip> {
        match category.map(|c| c.trim().to_lowercase()) {
            Some(wanted) if !wanted.is_empty() => self
                .tables
                .health_tips
                .iter()
                .filter(|tip| contains_ci(tip.category, &wanted))
                .collect(),
            _ => self.tables.health_tips.iter().collect(),
        }
    }

    /// Guides whose question, category, answer or any recommendation contains `query`.
    pub fn wellness_guidance(&self, query: &str) -> Vec<&'static WellnessGuide> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.tables
            .wellness
            .iter()
            .filter(|guide| {
                contains_ci(guide.question, &query)
                    || contains_ci(guide.category, &query)
                    || contains_ci(guide.answer, &query)
                    || guide.recommendations.iter().any(|rec| contains_ci(rec, &query))
            })
            .collect()
    }

    /// Independent substring searches across every table. Deterministic.
    pub fn search_knowledge(&self, query: &str) -> KnowledgeSearch {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return KnowledgeSearch::default();
        }

        KnowledgeSearch {
            conditions: self
                .tables
                .conditions
                .iter()
                .filter(|c| {
                    contains_ci(c.name, &q)
                        || contains_ci(c.description, &q)
                        || c.symptoms.iter().any(|s| contains_ci(s, &q))
                })
                .collect(),
            medications: self
                .tables
                .medications
                .iter()
                .filter(|m| {
                    contains_ci(m.name, &q)
                        || contains_ci(m.generic_name, &q)
                        || m.uses.iter().any(|u| contains_ci(u, &q))
                })
                .collect(),
            first_aid: self
                .tables
                .first_aid
                .iter()
                .filter(|g| contains_ci(g.situation, &q))
                .collect(),
            health_tips: self
                .tables
                .health_tips
                .iter()
                .filter(|t| contains_ci(t.title, &q) || contains_ci(t.description, &q))
                .collect(),
            wellness: self.wellness_guidance(&q),
        }
    }

    pub fn random_health_tip(&self, rng: &dyn RandomSource) -> &'static HealthTip {
        // Non-empty is checked in `from_tables`.
        random::pick(rng, self.tables.health_tips).unwrap_or(&self.tables.health_tips[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new().expect("builtin tables are valid")
    }

    #[test]
    fn test_conditions_by_symptoms_sorted_by_severity() {
        let found = kb().conditions_by_symptoms(&["chest pain"]);
        let ids: Vec<&str> = found.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["heart-attack", "pneumonia"]);
    }

    #[test]
    fn test_conditions_by_symptoms_bidirectional() {
        // "headache" is inside "mild headache" and "severe headache".
        let found = kb().conditions_by_symptoms(&["headache"]);
        let ids: Vec<&str> = found.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["influenza", "migraine", "common-cold"]);

        // Input longer than the stored symptom.
        let found = kb().conditions_by_symptoms(&["a very runny nose today"]);
        assert_eq!(found[0].id, "common-cold");
    }

    #[test]
    fn test_conditions_by_symptoms_no_match() {
        assert!(kb().conditions_by_symptoms(&["itchy elbow"]).is_empty());
        assert!(kb().conditions_by_symptoms::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_medication_info() {
        let kb = kb();
        assert_eq!(kb.medication_info("tylenol").map(|m| m.id), Some("acetaminophen"));
        assert_eq!(kb.medication_info("IBUPROFEN").map(|m| m.id), Some("ibuprofen"));
        assert_eq!(kb.medication_info("motrin").map(|m| m.id), Some("ibuprofen"));
        assert!(kb.medication_info("penicillin").is_none());
        assert!(kb.medication_info("  ").is_none());
    }

    #[test]
    fn test_first_aid_guide_matches_situation_and_alias() {
        let kb = kb();
        assert_eq!(kb.first_aid_guide("someone is choking!").map(|g| g.id), Some("choking"));
        assert_eq!(kb.first_aid_guide("first aid for a burn").map(|g| g.id), Some("burns"));
        assert!(kb.first_aid_guide("first aid for a sprain").is_none());
    }

    #[test]
    fn test_numbered_steps_preserve_order() {
        let kb = kb();
        let guide = kb.first_aid_guide("choking").unwrap();
        let steps = KnowledgeBase::numbered_steps(guide);
        assert_eq!(steps.len(), guide.steps.len());
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step, &format!("{}. {}", i + 1, guide.steps[i]));
        }
    }

    #[test]
    fn test_first_aid_info_general_lists_guides() {
        let info = kb().first_aid_info("general");
        assert!(info.contains("General First Aid Information"));
        assert!(info.contains("Choking, Burns"));
    }

    #[test]
    fn test_first_aid_info_specific() {
        let info = kb().first_aid_info("burns");
        assert!(info.contains("First Aid: Burns"));
        assert!(info.contains("1. Remove from heat source"));
    }

    #[test]
    fn test_wellness_guidance() {
        let kb = kb();
        let ids: Vec<&str> = kb.wellness_guidance("sleep").iter().map(|g| g.id).collect();
        assert!(ids.contains(&"sleep-duration"));
        assert!(ids.contains(&"stress-management"));
        assert!(kb.wellness_guidance("").is_empty());
    }

    #[test]
    fn test_health_tips_by_category() {
        let kb = kb();
        assert_eq!(kb.health_tips(None).len(), 2);
        let mental = kb.health_tips(Some("mental"));
        assert_eq!(mental.len(), 1);
        assert_eq!(mental[0].id, "sleep-hygiene");
    }

    #[test]
    fn test_search_knowledge_is_deterministic() {
        let kb = kb();
        let first = kb.search_knowledge("fever");
        let second = kb.search_knowledge("fever");
        let ids = |s: &KnowledgeSearch| s.conditions.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(ids(&first), vec!["common-cold", "influenza", "pneumonia"]);
        assert_eq!(first.medications.len(), 2);
    }

    #[test]
    fn test_search_knowledge_empty_query() {
        assert!(kb().search_knowledge("   ").is_empty());
    }

    #[test]
    fn test_random_health_tip_uses_source() {
        let kb = kb();
        assert_eq!(kb.random_health_tip(&FixedRandom::new(0, 0.0)).id, "hydration");
        assert_eq!(kb.random_health_tip(&FixedRandom::new(1, 0.0)).id, "sleep-hygiene");
    }

    static DUPLICATE_GUIDES: &[FirstAidGuide] = &[
        FirstAidGuide {
            id: "dup",
            situation: "A",
            aliases: &[],
            steps: &["one"],
            warnings: &[],
            when_to_seek_help: "",
        },
        FirstAidGuide {
            id: "dup",
            situation: "B",
            aliases: &[],
            steps: &["two"],
            warnings: &[],
            when_to_seek_help: "",
        },
    ];

    static EMPTY_STEPS: &[FirstAidGuide] = &[FirstAidGuide {
        id: "nothing",
        situation: "Nothing",
        aliases: &[],
        steps: &[],
        warnings: &[],
        when_to_seek_help: "",
    }];

    #[test]
    fn test_malformed_tables_are_rejected() {
        let tables = KnowledgeTables {
            first_aid: DUPLICATE_GUIDES,
            ..KnowledgeTables::builtin()
        };
        let err = KnowledgeBase::from_tables(tables).unwrap_err();
        assert!(err.to_string().contains("duplicate id 'dup'"));

        let tables = KnowledgeTables {
            first_aid: EMPTY_STEPS,
            ..KnowledgeTables::builtin()
        };
        assert!(matches!(KnowledgeBase::from_tables(tables), Err(AppError::KnowledgeBase(_))));

        let tables = KnowledgeTables {
            conditions: &[],
            ..KnowledgeTables::builtin()
        };
        assert!(KnowledgeBase::from_tables(tables).is_err());
    }
}
