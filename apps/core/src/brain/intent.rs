//! Intent detection using regex templates.
//!
//! Greeting, calorie and wellness templates. No ML model required - pure Rust regex matching.
//! Template order is significant: the first calorie template that matches decides
//! which text is treated as the food name.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

/// One step of the router's dispatch sequence, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Whole-message greeting ("hi", "hello there")
    Greeting,
    /// Calorie/nutrition fact lookup for a named food
    Calorie,
    /// Foods that help with a named condition
    FoodRemedy,
    /// Water, sleep, exercise and diet guidance
    Wellness,
    /// Symptom, medication, first-aid and tip analysis
    Symptom,
    /// Medication safety, general first aid, or the default menu
    MedicalFallback,
}

impl Stage {
    pub const ORDER: [Stage; 6] = [
        Stage::Greeting,
        Stage::Calorie,
        Stage::FoodRemedy,
        Stage::Wellness,
        Stage::Symptom,
        Stage::MedicalFallback,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Greeting => "greeting",
            Stage::Calorie => "calorie",
            Stage::FoodRemedy => "food_remedy",
            Stage::Wellness => "wellness",
            Stage::Symptom => "symptom",
            Stage::MedicalFallback => "medical_fallback",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Topic of a wellness question, by keyword in the lowercased message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WellnessTopic {
    Water,
    Sleep,
    Exercise,
    Diet,
    Other,
}

impl WellnessTopic {
    /// Checked in order: water, sleep, exercise, diet/nutrition.
    pub fn detect(message_lower: &str) -> Self {
        if message_lower.contains("water") {
            WellnessTopic::Water
        } else if message_lower.contains("sleep") {
            WellnessTopic::Sleep
        } else if message_lower.contains("exercise") {
            WellnessTopic::Exercise
        } else if message_lower.contains("diet") || message_lower.contains("nutrition") {
            WellnessTopic::Diet
        } else {
            WellnessTopic::Other
        }
    }
}

/// A calorie template and the capture group holding the food name.
struct CalorieTemplate {
    regex: Regex,
    food_group: usize,
}

// Compile patterns once at startup
// NOTE: expect() is acceptable here: the literals are fixed and a bad one is a programming error.
static GREETING_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)^(hi|hello|hey|good morning|good afternoon|good evening|greetings)$")
            .expect("Invalid regex: greetings"),
        Regex::new(r"(?i)^(hi there|hello there|hey there)$").expect("Invalid regex: greetings with 'there'"),
        Regex::new(r"(?i)^(how are you|what's up|sup)$").expect("Invalid regex: informal greetings"),
    ]
});

static CALORIE_TEMPLATES: LazyLock<Vec<CalorieTemplate>> = LazyLock::new(|| {
    let template = |pattern: &str, food_group: usize| CalorieTemplate {
        regex: Regex::new(pattern).expect("Invalid regex: calorie template"),
        food_group,
    };
    vec![
        template(r"(?i)how many calories (in|does|are in) (.+)", 2),
        template(r"(?i)calories in (.+)", 1),
        // Broad on purpose; kept after the specific templates.
        template(r"(?i)(.+) calories", 1),
        template(r"(?i)calorie count for (.+)", 1),
        template(r"(?i)nutritional info for (.+)", 1),
        template(r"(?i)nutrition facts (.+)", 1),
    ]
});

static WELLNESS_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)how much (water|sleep|exercise)").expect("Invalid regex: how much"),
        Regex::new(r"(?i)daily (water|sleep|exercise)").expect("Invalid regex: daily"),
        Regex::new(r"(?i)recommended (water|sleep|exercise)").expect("Invalid regex: recommended"),
        Regex::new(r"(?i)(diet|nutrition|healthy eating)").expect("Invalid regex: diet"),
        Regex::new(r"(?i)health tip").expect("Invalid regex: health tip"),
        Regex::new(r"(?i)wellness advice").expect("Invalid regex: wellness advice"),
        Regex::new(r"(?i)food for (.+)").expect("Invalid regex: food for"),
        Regex::new(r"(?i)what to eat for (.+)").expect("Invalid regex: what to eat"),
        Regex::new(r"(?i)foods that help with (.+)").expect("Invalid regex: foods that help"),
        Regex::new(r"(?i)natural remedy for (.+)").expect("Invalid regex: natural remedy"),
        Regex::new(r"(?i)diet for (.+)").expect("Invalid regex: diet for"),
    ]
});

/// Template matcher for the pattern-driven router stages.
#[derive(Clone, Copy)]
pub struct IntentMatcher {
    greetings: &'static [Regex],
    calorie_templates: &'static [CalorieTemplate],
    wellness: &'static [Regex],
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentMatcher {
    pub fn new() -> Self {
        Self {
            greetings: GREETING_PATTERNS.as_slice(),
            calorie_templates: CALORIE_TEMPLATES.as_slice(),
            wellness: WELLNESS_PATTERNS.as_slice(),
        }
    }

    /// Whole-message greeting check. A greeting inside a longer sentence does not count.
    pub fn is_greeting(&self, text: &str) -> bool {
        let text = text.trim();
        !text.is_empty() && self.greetings.iter().any(|p| p.is_match(text))
    }

    /// Food name from the first calorie template that matches the raw message.
    pub fn extract_food_query(&self, text: &str) -> Option<String> {
        self.calorie_templates.iter().find_map(|template| {
            let captures = template.regex.captures(text)?;
            let food = captures.get(template.food_group)?.as_str();
            let food = food
                .trim()
                .trim_end_matches(['?', '.', '!'])
                .trim();
            (!food.is_empty()).then(|| food.to_string())
        })
    }

    pub fn is_wellness_query(&self, text: &str) -> bool {
        self.wellness.iter().any(|p| p.is_match(text))
    }
}
