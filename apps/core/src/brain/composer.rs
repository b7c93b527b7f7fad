//! Response Composer - the rule router.
//!
//! Runs the stages in [`Stage::ORDER`] and returns the first answer. Every
//! stage is a pure function of the message, the static tables and the
//! injected random source; the last stage always answers.

use std::sync::Arc;
use tracing::debug;

use super::intent::{IntentMatcher, Stage, WellnessTopic};
use super::response::{AnalysisResult, ChatResponse};
use super::symptoms::SymptomAnalyzer;
use crate::error::AppError;
use crate::knowledge::KnowledgeBase;
use crate::models::{FoodCategory, Severity};
use crate::nutrition::{FoodCatalog, FoodHealthMatcher};
use crate::random::{self, RandomSource, ThreadRandom};

const GREETING_CONFIDENCE: f32 = 0.9;
const CALORIE_CONFIDENCE: f32 = 0.85;
const FOOD_REMEDY_CONFIDENCE: f32 = 0.85;
const WELLNESS_CONFIDENCE: f32 = 0.8;
const SYMPTOM_CONFIDENCE: f32 = 0.75;
const MEDICAL_FALLBACK_CONFIDENCE: f32 = 0.7;
const DEFAULT_CONFIDENCE: f32 = 0.5;

const GREETINGS: &[&str] = &[
    "Hello! I'm your healthcare assistant. How can I help you today?",
    "Hi there! I'm here to help with your health questions and provide wellness guidance.",
    "Hey! I can help you with symptoms, nutrition, wellness tips, and general health information.",
    "Hello! Feel free to ask me about calories in foods, health symptoms, or wellness advice.",
];

const WELLNESS_TIPS: &[&str] = &[
    "🌟 **Health Tip**: Take a 10-minute walk after meals to help with digestion and blood sugar control.",
    "🌟 **Wellness Tip**: Practice deep breathing for 5 minutes daily to reduce stress and improve focus.",
    "🌟 **Nutrition Tip**: Fill half your plate with vegetables and fruits for optimal nutrition.",
    "🌟 **Sleep Tip**: Keep your bedroom temperature between 60-67°F for better sleep quality.",
    "🌟 **Hydration Tip**: Start your day with a glass of water to kickstart your metabolism.",
];

const WATER_BLOCK: &str = "💧 **Daily Water Intake Recommendations:**

• **General guideline**: 8 glasses (64 oz) per day
• **Men**: About 15.5 cups (3.7 liters) daily
• **Women**: About 11.5 cups (2.7 liters) daily
• **Active individuals**: Add 12-16 oz for every hour of exercise
• **Hot weather**: Increase intake by 16-24 oz

**Tips:**
• Drink water before you feel thirsty
• Monitor urine color (pale yellow is ideal)
• Include water-rich foods like fruits and vegetables";

const SLEEP_BLOCK: &str = "😴 **Sleep Recommendations:**

• **Adults (18-64)**: 7-9 hours per night
• **Older adults (65+)**: 7-8 hours per night
• **Teenagers**: 8-10 hours per night

**For Better Sleep:**
• Maintain consistent sleep schedule
• Create a relaxing bedtime routine
• Keep bedroom cool, dark, and quiet
• Avoid screens 1 hour before bed
• Limit caffeine after 2 PM
• Get natural sunlight during the day";

const EXERCISE_BLOCK: &str = "🏃‍♂️ **Exercise Recommendations:**

• **Aerobic activity**: 150 minutes moderate OR 75 minutes vigorous per week
• **Strength training**: 2+ days per week (all major muscle groups)
• **Daily movement**: At least 10,000 steps

**Types of Exercise:**
• Moderate: Brisk walking, swimming, cycling
• Vigorous: Running, HIIT, competitive sports
• Strength: Weight lifting, resistance bands, bodyweight exercises

**Start gradually** and increase intensity over time!";

const DIET_BLOCK: &str = "🥗 **Healthy Diet Guidelines:**

**Daily Servings:**
• Vegetables: 5-9 servings
• Fruits: 2-4 servings
• Whole grains: 6-8 servings
• Lean protein: 2-3 servings
• Healthy fats: 2-3 servings

**Key Principles:**
• Eat a variety of colorful foods
• Choose whole foods over processed
• Control portion sizes
• Stay hydrated
• Limit added sugars and sodium
• Include healthy fats (nuts, olive oil, avocado)";

const MEDICATION_SAFETY_BLOCK: &str = "💊 **Medication Safety:**

• Always follow prescribed dosages
• Take medications at the same time daily
• Don't stop medications without consulting your doctor
• Be aware of potential side effects
• Keep a list of all medications you take
• Store medications properly (cool, dry place)

**⚠️ Important**: Never share medications or take expired drugs. Consult your healthcare provider for specific medication questions.";

const DEFAULT_MENU: &str = "I'm here to help with your health questions! You can ask me about:

• **Calories**: \"How many calories in an apple?\"
• **Symptoms**: \"I have a headache and fever\"
• **Wellness**: \"How much water should I drink?\"
• **Nutrition**: \"What's a healthy diet?\"
• **Sleep**: \"How much sleep do I need?\"
• **Exercise**: \"How much should I exercise?\"
• **Food Recommendations**: \"Food for a healthy heart\"

What would you like to know?";

const MEDICATION_WORDS: &[&str] = &["medication", "medicine", "drug"];
const FIRST_AID_WORDS: &[&str] = &["first aid", "emergency"];

/// Ordered rule router over the knowledge, food and remedy tables.
#[derive(Clone)]
pub struct ResponseComposer {
    knowledge: KnowledgeBase,
    foods: FoodCatalog,
    remedies: FoodHealthMatcher,
    intents: IntentMatcher,
    rng: Arc<dyn RandomSource>,
}

impl ResponseComposer {
    /// Builds a composer over the built-in tables with thread-local randomness.
    pub fn new() -> Result<Self, AppError> {
        Self::with_random(Arc::new(ThreadRandom))
    }

    pub fn with_random(rng: Arc<dyn RandomSource>) -> Result<Self, AppError> {
        let foods = FoodCatalog::new();
        let remedies = FoodHealthMatcher::new();
        foods.validate()?;
        remedies.validate()?;
        Ok(Self::from_parts(KnowledgeBase::new()?, foods, remedies, rng))
    }

    /// Assembles a composer from already validated parts.
    pub fn from_parts(
        knowledge: KnowledgeBase,
        foods: FoodCatalog,
        remedies: FoodHealthMatcher,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            knowledge,
            foods,
            remedies,
            intents: IntentMatcher::new(),
            rng,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn foods(&self) -> &FoodCatalog {
        &self.foods
    }

    pub fn remedies(&self) -> &FoodHealthMatcher {
        &self.remedies
    }

    /// Answer for `message`. Never empty, never an error.
    pub fn respond(&self, message: &str) -> ChatResponse {
        self.route(message).1
    }

    /// Answer together with the stage that produced it.
    pub fn route(&self, message: &str) -> (Stage, ChatResponse) {
        for stage in Stage::ORDER {
            if let Some(response) = self.respond_at(stage, message) {
                debug!(stage = %stage, category = %response.category(), "Stage answered");
                return (stage, response);
            }
        }
        // The fallback stage always answers; kept for exhaustiveness.
        (Stage::MedicalFallback, Self::default_response())
    }

    /// Runs a single stage in isolation.
    pub fn respond_at(&self, stage: Stage, message: &str) -> Option<ChatResponse> {
        match stage {
            Stage::Greeting => self.greeting_stage(message),
            Stage::Calorie => self.calorie_stage(message),
            Stage::FoodRemedy => self.food_remedy_stage(message),
            Stage::Wellness => self.wellness_stage(message),
            Stage::Symptom => self.symptom_stage(message),
            Stage::MedicalFallback => Some(self.medical_fallback_stage(message)),
        }
    }

    fn greeting_stage(&self, message: &str) -> Option<ChatResponse> {
        let clean = message.trim().to_lowercase();
        if !self.intents.is_greeting(&clean) {
            return None;
        }
        Some(ChatResponse::Greeting {
            text: self.greeting(),
            confidence: GREETING_CONFIDENCE,
        })
    }

    fn calorie_stage(&self, message: &str) -> Option<ChatResponse> {
        let food = self.intents.extract_food_query(message)?;
        debug!(food = %food, "Calorie query extracted");
        Some(ChatResponse::Calorie {
            text: self.foods.calorie_info(&food),
            confidence: CALORIE_CONFIDENCE,
        })
    }

    fn food_remedy_stage(&self, message: &str) -> Option<ChatResponse> {
        let text = self.remedies.food_recommendations(message)?;
        Some(ChatResponse::Health {
            text,
            confidence: FOOD_REMEDY_CONFIDENCE,
        })
    }

    fn wellness_stage(&self, message: &str) -> Option<ChatResponse> {
        let clean = message.trim().to_lowercase();
        if !self.intents.is_wellness_query(&clean) {
            return None;
        }
        Some(ChatResponse::Health {
            text: self.wellness_text(WellnessTopic::detect(&clean)),
            confidence: WELLNESS_CONFIDENCE,
        })
    }

    fn symptom_stage(&self, message: &str) -> Option<ChatResponse> {
        let analysis = SymptomAnalyzer::new(&self.knowledge).analyze(message, self.rng.as_ref());
        if !analysis.is_meaningful() {
            return None;
        }

        let text = Self::format_symptom_response(&analysis);
        let AnalysisResult {
            severity,
            urgency_level,
            follow_up_questions,
            ..
        } = analysis;

        Some(if severity == Severity::Emergency {
            ChatResponse::Emergency {
                text,
                confidence: SYMPTOM_CONFIDENCE,
                urgency_level,
                follow_up_questions,
            }
        } else {
            ChatResponse::Symptom {
                text,
                severity,
                confidence: SYMPTOM_CONFIDENCE,
                urgency_level,
                follow_up_questions,
            }
        })
    }

    fn medical_fallback_stage(&self, message: &str) -> ChatResponse {
        let clean = message.trim().to_lowercase();
        if MEDICATION_WORDS.iter().any(|w| clean.contains(w)) {
            return ChatResponse::Health {
                text: MEDICATION_SAFETY_BLOCK.to_string(),
                confidence: MEDICAL_FALLBACK_CONFIDENCE,
            };
        }
        if FIRST_AID_WORDS.iter().any(|w| clean.contains(w)) {
            return ChatResponse::Health {
                text: self.knowledge.first_aid_info("general"),
                confidence: MEDICAL_FALLBACK_CONFIDENCE,
            };
        }
        Self::default_response()
    }

    fn default_response() -> ChatResponse {
        ChatResponse::General {
            text: DEFAULT_MENU.to_string(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    /// Structured card for a symptom analysis.
    pub fn format_symptom_response(analysis: &AnalysisResult) -> String {
        let mut out = String::from("🏥 **Symptom Analysis**\n\n");
        out.push_str(&format!("**Severity**: {}\n", analysis.severity.label()));
        out.push_str(&format!(
            "**Possible Conditions**: {}\n\n",
            analysis.possible_conditions.join(", ")
        ));
        out.push_str("**Recommendations**:\n");
        for rec in &analysis.recommendations {
            out.push_str(&format!("• {}\n", rec));
        }

        if analysis.severity == Severity::Emergency {
            out.push_str("\n🚨 **EMERGENCY**: Seek immediate medical attention!");
        }

        out.push_str("\n\n⚠️ **Disclaimer**: This is not a substitute for professional medical advice.");
        out
    }

    pub fn wellness_text(&self, topic: WellnessTopic) -> String {
        match topic {
            WellnessTopic::Water => WATER_BLOCK.to_string(),
            WellnessTopic::Sleep => SLEEP_BLOCK.to_string(),
            WellnessTopic::Exercise => EXERCISE_BLOCK.to_string(),
            WellnessTopic::Diet => DIET_BLOCK.to_string(),
            WellnessTopic::Other => self.random_wellness_tip(),
        }
    }

    pub fn greeting(&self) -> String {
        random::pick(self.rng.as_ref(), GREETINGS)
            .copied()
            .unwrap_or(GREETINGS[0])
            .to_string()
    }

    pub fn random_wellness_tip(&self) -> String {
        random::pick(self.rng.as_ref(), WELLNESS_TIPS)
            .copied()
            .unwrap_or(WELLNESS_TIPS[0])
            .to_string()
    }

    /// Either a food-for-condition tip or a nudge toward a fruit or vegetable.
    pub fn daily_health_tip(&self) -> String {
        let rng = self.rng.as_ref();
        let tip = if rng.unit() < 0.5 {
            self.remedies.random_food_tip(rng)
        } else {
            self.foods.random_healthy_food(rng).map(|food| {
                let group = match food.category {
                    FoodCategory::Fruit => "Fruits",
                    _ => "Vegetables",
                };
                format!(
                    "🍎 **Daily Health Tip**: Try adding {} to your diet! It contains {} calories per {} \
                     and is packed with nutrients. {} are essential for a balanced diet.",
                    food.name, food.calories, food.serving, group
                )
            })
        };
        tip.unwrap_or_else(|| self.random_wellness_tip())
    }
}
