//! Food-based recommendations for everyday conditions.

use crate::error::AppError;
use crate::models::{HealthFoodRecommendation, RemedyFood};
use crate::random::{self, RandomSource};

const fn remedy(name: &'static str, benefit: &'static str, how_to_use: &'static str) -> RemedyFood {
    RemedyFood {
        name,
        benefit,
        how_to_use,
    }
}

/// Checked in order; the first condition whose key, label or synonym
/// appears in the query wins.
pub static HEALTH_FOODS: &[HealthFoodRecommendation] = &[
    HealthFoodRecommendation {
        condition_key: "dehydration",
        condition: "Dehydration",
        synonyms: &["dehydrated", "thirsty", "dry mouth", "fluid loss"],
        foods: &[
            remedy("Lemon Water", "Provides electrolytes and vitamin C", "Add fresh lemon juice to water, drink throughout the day"),
            remedy("Coconut Water", "Natural electrolytes and potassium", "Drink 1-2 cups daily, especially after exercise"),
            remedy("Watermelon", "92% water content plus vitamins", "Eat fresh slices or blend into smoothies"),
            remedy("Cucumber", "High water content and cooling effect", "Add to water, eat in salads, or make cucumber juice"),
        ],
        explanation: "These foods help restore fluid balance and provide essential electrolytes.",
    },
    HealthFoodRecommendation {
        condition_key: "vitamin c deficiency",
        condition: "Vitamin C Deficiency",
        synonyms: &["vitamin c", "immune system", "scurvy", "weak immunity"],
        foods: &[
            remedy("Oranges", "High vitamin C content (70mg per orange)", "Eat 1-2 fresh oranges daily or drink fresh orange juice"),
            remedy("Bell Peppers", "Higher vitamin C than oranges", "Add to salads, stir-fries, or eat raw as snacks"),
            remedy("Strawberries", "Rich in vitamin C and antioxidants", "Eat fresh, add to smoothies, or mix with yogurt"),
            remedy("Kiwi", "More vitamin C than oranges", "Eat 1-2 kiwis daily, add to fruit salads"),
        ],
        explanation: "These foods boost immune system and help with collagen production.",
    },
    HealthFoodRecommendation {
        condition_key: "anemia",
        condition: "Iron Deficiency/Anemia",
        synonyms: &["iron deficiency", "tired", "fatigue", "pale", "weak"],
        foods: &[
            remedy("Spinach", "High in iron and folate", "Add to smoothies, salads, or cook as side dish"),
            remedy("Lentils", "Plant-based iron and protein", "Make lentil soup, dal, or add to salads"),
            remedy("Dark Chocolate", "Contains iron and antioxidants", "Eat 1-2 squares of 70%+ dark chocolate daily"),
            remedy("Pumpkin Seeds", "Rich in iron and zinc", "Snack on roasted seeds or add to salads"),
        ],
        explanation: "These iron-rich foods help increase red blood cell production.",
    },
    HealthFoodRecommendation {
        condition_key: "constipation",
        condition: "Constipation",
        synonyms: &["constipated", "bowel movement", "digestive", "bloated"],
        foods: &[
            remedy("Prunes", "High fiber and natural laxative effect", "Eat 3-4 prunes daily or drink prune juice"),
            remedy("Apples", "Pectin fiber aids digestion", "Eat with skin on, 1-2 apples daily"),
            remedy("Flaxseeds", "Soluble and insoluble fiber", "Add 1 tbsp ground flaxseed to smoothies or yogurt"),
            remedy("Sweet Potatoes", "High fiber and potassium", "Bake or steam, eat with skin on"),
        ],
        explanation: "These high-fiber foods promote healthy bowel movements.",
    },
    HealthFoodRecommendation {
        condition_key: "high blood pressure",
        condition: "High Blood Pressure",
        synonyms: &["hypertension", "blood pressure", "bp"],
        foods: &[
            remedy("Bananas", "High potassium helps regulate blood pressure", "Eat 1-2 bananas daily as snacks or in smoothies"),
            remedy("Garlic", "Contains allicin which may lower blood pressure", "Add fresh garlic to cooking, 1-2 cloves daily"),
            remedy("Beetroot", "Nitrates help dilate blood vessels", "Drink beetroot juice or add to salads"),
            remedy("Oats", "Beta-glucan fiber helps lower blood pressure", "Eat oatmeal for breakfast or add to smoothies"),
        ],
        explanation: "These foods contain compounds that support healthy blood pressure levels.",
    },
    HealthFoodRecommendation {
        condition_key: "inflammation",
        condition: "Inflammation",
        synonyms: &["inflamed", "swelling", "joint pain", "arthritis"],
        foods: &[
            remedy("Turmeric", "Curcumin has powerful anti-inflammatory properties", "Add to curries, make turmeric tea, or take with black pepper"),
            remedy("Ginger", "Gingerol reduces inflammation", "Make ginger tea, add to smoothies, or use in cooking"),
            remedy("Blueberries", "Anthocyanins fight inflammation", "Eat fresh, add to yogurt, or blend in smoothies"),
            remedy("Salmon", "Omega-3 fatty acids reduce inflammation", "Eat 2-3 servings per week, grilled or baked"),
        ],
        explanation: "These anti-inflammatory foods help reduce chronic inflammation in the body.",
    },
    HealthFoodRecommendation {
        condition_key: "digestive issues",
        condition: "Digestive Issues",
        synonyms: &["stomach problems", "indigestion", "gut health", "bloating"],
        foods: &[
            remedy("Yogurt", "Probiotics support gut health", "Eat plain yogurt with live cultures daily"),
            remedy("Ginger", "Soothes stomach and aids digestion", "Make ginger tea or add fresh ginger to meals"),
            remedy("Papaya", "Papain enzyme aids protein digestion", "Eat fresh papaya before or after meals"),
            remedy("Peppermint", "Soothes digestive tract", "Drink peppermint tea after meals"),
        ],
        explanation: "These foods support healthy digestion and gut function.",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct FoodHealthMatcher {
    entries: &'static [HealthFoodRecommendation],
}

impl Default for FoodHealthMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FoodHealthMatcher {
    pub fn new() -> Self {
        Self { entries: HEALTH_FOODS }
    }

    pub fn with_table(entries: &'static [HealthFoodRecommendation]) -> Self {
        Self { entries }
    }

    /// Every condition needs a key and at least one food.
    pub fn validate(&self) -> Result<(), AppError> {
        for entry in self.entries {
            if entry.condition_key.trim().is_empty() {
                return Err(AppError::KnowledgeBase(format!("'{}' has an empty condition key", entry.condition)));
            }
            if entry.foods.is_empty() {
                return Err(AppError::KnowledgeBase(format!("'{}' lists no foods", entry.condition_key)));
            }
        }
        Ok(())
    }

    /// Condition keys in table order.
    pub fn all_conditions(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.condition_key).collect()
    }

    /// First entry triggered by the query, if any.
    pub fn find(&self, query: &str) -> Option<&'static HealthFoodRecommendation> {
        let query = query.to_lowercase();
        if query.trim().is_empty() {
            return None;
        }
        self.entries.iter().find(|entry| {
            query.contains(entry.condition_key)
                || query.contains(&entry.condition.to_lowercase())
                || entry.synonyms.iter().any(|s| query.contains(s))
        })
    }

    /// Formatted recommendation block, or `None` so the caller can try other stages.
    pub fn food_recommendations(&self, query: &str) -> Option<String> {
        self.find(query).map(Self::format)
    }

    fn format(entry: &HealthFoodRecommendation) -> String {
        let mut out = format!("🍎 **Food Recommendations for {}**\n\n", entry.condition);
        out.push_str(entry.explanation);
        out.push_str("\n\n**Recommended Foods:**\n\n");

        for (i, food) in entry.foods.iter().enumerate() {
            out.push_str(&format!("**{}. {}**\n", i + 1, food.name));
            out.push_str(&format!("• **Benefit**: {}\n", food.benefit));
            out.push_str(&format!("• **How to use**: {}\n\n", food.how_to_use));
        }

        out.push_str(
            "⚠️ **Note**: These are general dietary suggestions. \
             Consult a healthcare provider for persistent symptoms or serious conditions.",
        );
        out
    }

    /// One-liner about a random food for a random condition.
    pub fn random_food_tip(&self, rng: &dyn RandomSource) -> Option<String> {
        let entry = random::pick(rng, self.entries)?;
        let food = random::pick(rng, entry.foods)?;
        Some(format!(
            "💡 **Food Tip**: {} is great for {}! {}. {}",
            food.name,
            entry.condition.to_lowercase(),
            food.benefit,
            food.how_to_use
        ))
    }
}
