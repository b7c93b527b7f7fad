//! Food/calorie table and lookup.

use crate::error::AppError;
use crate::models::{FoodCategory, FoodItem, Nutrients};
use crate::random::{self, RandomSource};

const fn food(name: &'static str, calories: u32, serving: &'static str, category: FoodCategory, nutrients: Nutrients) -> FoodItem {
    FoodItem {
        name,
        calories,
        serving,
        category,
        nutrients,
    }
}

const fn n(protein: Option<u32>, carbs: Option<u32>, fat: Option<u32>, fiber: Option<u32>) -> Nutrients {
    Nutrients {
        protein,
        carbs,
        fat,
        fiber,
    }
}

use FoodCategory::*;

pub static FOOD_TABLE: &[FoodItem] = &[
    // Fruits
    food("apple", 95, "1 medium (182g)", Fruit, n(None, Some(25), None, Some(4))),
    food("banana", 105, "1 medium (118g)", Fruit, n(None, Some(27), None, Some(3))),
    food("orange", 62, "1 medium (154g)", Fruit, n(None, Some(15), None, Some(3))),
    food("strawberry", 49, "1 cup (152g)", Fruit, n(None, Some(12), None, Some(3))),
    food("grapes", 104, "1 cup (151g)", Fruit, n(None, Some(27), None, Some(1))),
    food("watermelon", 46, "1 cup (152g)", Fruit, n(None, Some(12), None, Some(1))),
    food("pineapple", 82, "1 cup (165g)", Fruit, n(None, Some(22), None, Some(2))),
    food("mango", 107, "1 cup (165g)", Fruit, n(None, Some(28), None, Some(3))),
    food("blueberry", 84, "1 cup (148g)", Fruit, n(None, Some(21), None, Some(4))),
    food("avocado", 234, "1 medium (150g)", Fruit, n(None, None, Some(21), Some(10))),
    // Vegetables
    food("broccoli", 55, "1 cup (156g)", Vegetable, n(Some(4), Some(11), None, Some(5))),
    food("carrot", 52, "1 cup (128g)", Vegetable, n(None, Some(12), None, Some(4))),
    food("spinach", 7, "1 cup (30g)", Vegetable, n(Some(1), Some(1), None, Some(1))),
    food("tomato", 32, "1 medium (123g)", Vegetable, n(None, Some(7), None, Some(2))),
    food("cucumber", 16, "1 cup (119g)", Vegetable, n(None, Some(4), None, Some(1))),
    food("bell pepper", 46, "1 cup (149g)", Vegetable, n(None, Some(11), None, Some(3))),
    food("onion", 64, "1 cup (160g)", Vegetable, n(None, Some(15), None, Some(3))),
    food("potato", 161, "1 medium (173g)", Vegetable, n(None, Some(37), None, Some(4))),
    food("sweet potato", 112, "1 medium (128g)", Vegetable, n(None, Some(26), None, Some(4))),
    food("lettuce", 10, "1 cup (72g)", Vegetable, n(None, Some(2), None, Some(1))),
    // Fast food
    food("big mac", 563, "1 burger", FastFood, n(Some(25), Some(45), Some(33), None)),
    food("french fries", 365, "medium (115g)", FastFood, n(None, Some(48), Some(17), None)),
    food("pizza slice", 285, "1 slice", FastFood, n(Some(12), Some(36), Some(10), None)),
    food("chicken nuggets", 270, "6 pieces", FastFood, n(Some(15), Some(16), Some(16), None)),
    food("whopper", 657, "1 burger", FastFood, n(Some(28), Some(49), Some(40), None)),
    food("taco", 170, "1 taco", FastFood, n(Some(8), Some(13), Some(10), None)),
    food("hot dog", 151, "1 hot dog", FastFood, n(Some(5), Some(2), Some(13), None)),
    food("subway sandwich", 350, "6 inch", FastFood, n(Some(24), Some(47), Some(6), None)),
    // Grains
    food("white rice", 205, "1 cup cooked", Grain, n(Some(4), Some(45), None, None)),
    food("brown rice", 216, "1 cup cooked", Grain, n(Some(5), Some(45), None, Some(4))),
    food("bread", 79, "1 slice", Grain, n(Some(4), Some(14), None, None)),
    food("pasta", 220, "1 cup cooked", Grain, n(Some(8), Some(44), None, None)),
    food("oatmeal", 154, "1 cup cooked", Grain, n(Some(6), Some(28), None, Some(4))),
    // Protein
    food("chicken breast", 231, "100g", Protein, n(Some(31), None, Some(3), None)),
    food("salmon", 208, "100g", Protein, n(Some(20), None, Some(13), None)),
    food("egg", 155, "2 large eggs", Protein, n(Some(13), None, Some(10), None)),
    food("ground beef", 250, "100g", Protein, n(Some(26), None, Some(15), None)),
    // Dairy
    food("milk", 149, "1 cup", Dairy, n(Some(8), Some(12), Some(8), None)),
    food("yogurt", 154, "1 cup", Dairy, n(Some(13), Some(17), Some(4), None)),
    food("cheese", 113, "1 oz", Dairy, n(Some(7), None, Some(9), None)),
    // Snacks
    food("chips", 152, "1 oz (28g)", Snack, n(None, Some(15), Some(10), None)),
    food("cookies", 142, "2 cookies", Snack, n(None, Some(20), Some(7), None)),
    food("chocolate", 235, "1.5 oz bar", Snack, n(None, Some(26), Some(13), None)),
    // Beverages
    food("coca cola", 140, "12 fl oz", Beverage, n(None, Some(39), None, None)),
    food("orange juice", 112, "1 cup", Beverage, n(None, Some(26), None, None)),
    food("coffee", 2, "1 cup", Beverage, Nutrients::NONE),
    food("beer", 153, "12 fl oz", Beverage, n(None, Some(13), None, None)),
];

/// Maximum rows listed when a query matches several foods.
const MAX_LISTED: usize = 5;

/// Lookup service over a food table.
#[derive(Debug, Clone, Copy)]
pub struct FoodCatalog {
    foods: &'static [FoodItem],
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl FoodCatalog {
    pub fn new() -> Self {
        Self { foods: FOOD_TABLE }
    }

    pub fn with_table(foods: &'static [FoodItem]) -> Self {
        Self { foods }
    }

    pub fn foods(&self) -> &'static [FoodItem] {
        self.foods
    }

    /// Rejects an empty table or a nameless row.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.foods.is_empty() {
            return Err(AppError::KnowledgeBase("food table is empty".to_string()));
        }
        if let Some(pos) = self.foods.iter().position(|f| f.name.trim().is_empty()) {
            return Err(AppError::KnowledgeBase(format!("food table row {} has no name", pos)));
        }
        Ok(())
    }

    /// Exact (case-insensitive) name first; otherwise either name contains the other.
    pub fn search_food(&self, query: &str) -> Vec<&'static FoodItem> {
        let term = query.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        let exact: Vec<&'static FoodItem> = self
            .foods
            .iter()
            .filter(|food| food.name.to_lowercase() == term)
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        self.foods
            .iter()
            .filter(|food| {
                let name = food.name.to_lowercase();
                name.contains(&term) || term.contains(&name)
            })
            .collect()
    }

    /// Formatted nutrition answer for a food query.
    pub fn calorie_info(&self, query: &str) -> String {
        let query = query.trim();
        let results = self.search_food(query);

        match results.as_slice() {
            [] => format!(
                "I don't have calorie information for \"{}\" in my database. \
                 Try searching for common foods like apple, banana, chicken, rice, etc.",
                query
            ),
            [food] => Self::food_card(food),
            many => {
                let mut out = format!("I found multiple foods matching \"{}\":\n\n", query);
                for food in many.iter().take(MAX_LISTED) {
                    out.push_str(&format!(
                        "• **{}**: {} calories per {}\n",
                        food.name, food.calories, food.serving
                    ));
                }
                out
            }
        }
    }

    fn food_card(food: &FoodItem) -> String {
        let mut out = format!("🍎 **{}**\n", capitalize(food.name));
        out.push_str(&format!("📊 **Calories:** {} per {}\n", food.calories, food.serving));
        out.push_str(&format!("🏷️ **Category:** {}\n", food.category));

        let present = food.nutrients.present();
        if !present.is_empty() {
            out.push_str("\n**Nutritional Info:**\n");
            for (label, grams) in present {
                out.push_str(&format!("• {}: {}g\n", label, grams));
            }
        }
        out
    }

    /// Random fruit or vegetable.
    pub fn random_healthy_food(&self, rng: &dyn RandomSource) -> Option<&'static FoodItem> {
        let healthy: Vec<&'static FoodItem> = self
            .foods
            .iter()
            .filter(|food| matches!(food.category, FoodCategory::Fruit | FoodCategory::Vegetable))
            .collect();
        random::pick(rng, &healthy).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedRandom;

    #[test]
    fn test_exact_match_wins_over_partial() {
        let catalog = FoodCatalog::new();
        // "orange" is also inside "orange juice".
        let found = catalog.search_food("Orange");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "orange");
    }

    #[test]
    fn test_partial_match_both_directions() {
        let catalog = FoodCatalog::new();
        let names: Vec<&str> = catalog.search_food("rice").iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["white rice", "brown rice"]);

        let names: Vec<&str> = catalog.search_food("a big mac please").iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["big mac"]);
    }

    #[test]
    fn test_calorie_info_single_card() {
        let info = FoodCatalog::new().calorie_info("apple");
        assert!(info.contains("**Apple**"));
        assert!(info.contains("95"));
        assert!(info.contains("1 medium (182g)"));
        assert!(info.contains("fruit"));
        assert!(info.contains("• Carbs: 25g"));
        assert!(info.contains("• Fiber: 4g"));
        assert!(!info.contains("Protein"));
    }

    #[test]
    fn test_calorie_info_without_nutrients() {
        let info = FoodCatalog::new().calorie_info("coffee");
        assert!(info.contains("2 per 1 cup"));
        assert!(!info.contains("Nutritional Info"));
    }

    #[test]
    fn test_calorie_info_not_found() {
        let info = FoodCatalog::new().calorie_info("xyzfood");
        assert!(info.contains("don't have calorie information"));
        assert!(info.contains("\"xyzfood\""));
    }

    #[test]
    fn test_calorie_info_lists_at_most_five() {
        // "a" is inside many names.
        let info = FoodCatalog::new().calorie_info("a");
        assert!(info.starts_with("I found multiple foods matching \"a\""));
        assert_eq!(info.lines().filter(|l| l.starts_with("• ")).count(), 5);
    }

    static NAMELESS: &[FoodItem] = &[food(" ", 1, "1 cup", Snack, Nutrients::NONE)];

    #[test]
    fn test_validate_rejects_bad_tables() {
        assert!(FoodCatalog::new().validate().is_ok());
        assert!(FoodCatalog::with_table(&[]).validate().is_err());
        let err = FoodCatalog::with_table(NAMELESS).validate().unwrap_err();
        assert!(err.to_string().contains("row 0 has no name"));
    }

    #[test]
    fn test_random_healthy_food_is_fruit_or_vegetable() {
        let catalog = FoodCatalog::new();
        for index in 0..25 {
            let food = catalog.random_healthy_food(&FixedRandom::new(index, 0.0)).unwrap();
            assert!(matches!(food.category, FoodCategory::Fruit | FoodCategory::Vegetable));
        }
        assert_eq!(catalog.random_healthy_food(&FixedRandom::first()).unwrap().name, "apple");
    }
}
