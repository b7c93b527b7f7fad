use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Ordinal urgency classification shared by patterns, conditions and results.
///
/// The derived ordering follows declaration order, so `Low < Medium < High < Emergency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Emergency,
}

impl Severity {
    /// Numeric rank used for tie-breaks (low=1 .. emergency=4).
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
            Severity::Emergency => 4,
        }
    }

    /// Uppercase label printed on symptom cards.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Emergency => "EMERGENCY",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Emergency => "🚨",
            Severity::High => "⚠️",
            Severity::Medium => "⚡",
            Severity::Low => "ℹ️",
        }
    }

    /// Descending comparison helper for stable severity sorts.
    pub fn descending(a: &Severity, b: &Severity) -> Ordering {
        b.rank().cmp(&a.rank())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// A static rule associating trigger phrases with a severity and advice.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomPattern {
    pub keywords: &'static [&'static str],
    pub severity: Severity,
    pub conditions: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    pub urgency_level: &'static str,
    pub follow_up_questions: &'static [&'static str],
}

/// Reference record for a medical condition.
#[derive(Debug, Clone, Serialize)]
pub struct MedicalCondition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub causes: &'static [&'static str],
    pub treatments: &'static [&'static str],
    pub prevention: &'static [&'static str],
    pub severity: Severity,
    pub specialty_required: Option<&'static str>,
}

/// Reference record for an over-the-counter medication.
#[derive(Debug, Clone, Serialize)]
pub struct Medication {
    pub id: &'static str,
    pub name: &'static str,
    pub generic_name: &'static str,
    pub description: &'static str,
    pub uses: &'static [&'static str],
    pub side_effects: &'static [&'static str],
    pub interactions: &'static [&'static str],
    pub dosage_info: &'static str,
    pub warnings: &'static [&'static str],
}

/// First-aid procedure. `steps` are in procedure order.
#[derive(Debug, Clone, Serialize)]
pub struct FirstAidGuide {
    pub id: &'static str,
    pub situation: &'static str,
    /// Extra trigger words that select this guide ("burn" for "Burns").
    pub aliases: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub warnings: &'static [&'static str],
    pub when_to_seek_help: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthTip {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    pub how_to: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct WellnessGuide {
    pub id: &'static str,
    pub category: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub recommendations: &'static [&'static str],
    pub factors: &'static [&'static str],
    pub warnings: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FoodCategory {
    Fruit,
    Vegetable,
    FastFood,
    Grain,
    Protein,
    Dairy,
    Snack,
    Beverage,
}

impl FoodCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Fruit => "fruit",
            FoodCategory::Vegetable => "vegetable",
            FoodCategory::FastFood => "fast-food",
            FoodCategory::Grain => "grain",
            FoodCategory::Protein => "protein",
            FoodCategory::Dairy => "dairy",
            FoodCategory::Snack => "snack",
            FoodCategory::Beverage => "beverage",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grams per serving. Absent entries are simply not reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Nutrients {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<u32>,
}

impl Nutrients {
    pub const NONE: Nutrients = Nutrients {
        protein: None,
        carbs: None,
        fat: None,
        fiber: None,
    };

    /// `(label, grams)` pairs in display order, skipping absent values.
    pub fn present(&self) -> Vec<(&'static str, u32)> {
        [
            ("Protein", self.protein),
            ("Carbs", self.carbs),
            ("Fat", self.fat),
            ("Fiber", self.fiber),
        ]
        .into_iter()
        .filter_map(|(label, grams)| grams.map(|g| (label, g)))
        .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodItem {
    /// Lookup key, stored lowercase.
    pub name: &'static str,
    pub calories: u32,
    pub serving: &'static str,
    pub category: FoodCategory,
    pub nutrients: Nutrients,
}

#[derive(Debug, Clone, Serialize)]
pub struct RemedyFood {
    pub name: &'static str,
    pub benefit: &'static str,
    pub how_to_use: &'static str,
}

/// Foods associated with a condition keyword plus the synonyms that select it.
#[derive(Debug, Clone, Serialize)]
pub struct HealthFoodRecommendation {
    pub condition_key: &'static str,
    /// Human-readable label, e.g. "Iron Deficiency/Anemia".
    pub condition: &'static str,
    pub synonyms: &'static [&'static str],
    pub foods: &'static [RemedyFood],
    pub explanation: &'static str,
}
