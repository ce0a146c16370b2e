// ABOUTME: Weekly diet plan generator from dosha templates and nutrition targets
// ABOUTME: Deterministic round-robin meal selection over fixed per-dosha option lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

//! Weekly diet plan generation.
//!
//! Each dosha has a fixed template: dietary principles, an avoid list, four
//! meal-slot option lists, and cooking tips. Plan generation round-robins
//! each slot through its options across the canonical Monday-to-Sunday week,
//! so plans are reproducible. The shopping list is a fixed staples table,
//! independent of the selected meals.

use prakriti_core::models::{
    Catalog, DailyMeals, DailyNutritionTargets, Dosha, NutritionalRequirement, Recipe,
    WeeklyDietPlan, WeeklyMeals,
};
use tracing::warn;

/// Fixed meal-planning template for one dosha.
pub struct MealTemplate {
    /// Dietary principles, in display order
    pub principles: &'static [&'static str],
    /// Foods to avoid, in display order
    pub avoid: &'static [&'static str],
    /// Breakfast options; round-robined across the week
    pub breakfast: &'static [&'static str],
    /// Lunch options
    pub lunch: &'static [&'static str],
    /// Dinner options
    pub dinner: &'static [&'static str],
    /// Snack options
    pub snacks: &'static [&'static str],
    /// Dosha-specific cooking tips
    pub cooking_tips: &'static [&'static str],
}

const VATA_TEMPLATE: MealTemplate = MealTemplate {
    principles: &[
        "Warm foods",
        "Regular meals",
        "Healthy fats",
        "Sweet, sour, salty tastes",
    ],
    avoid: &["Cold foods", "Dry foods", "Irregular eating"],
    breakfast: &[
        "Warm oatmeal with ghee and dates",
        "Hot cereal with nuts",
        "Warm milk with spices",
    ],
    lunch: &[
        "Khichdi with vegetables",
        "Rice with dal and cooked vegetables",
        "Warm soup with bread",
    ],
    dinner: &["Light khichdi", "Vegetable soup", "Rice with dal"],
    snacks: &["Dates and nuts", "Warm milk", "Herbal tea with biscuits"],
    cooking_tips: &[
        "Cook with warming spices like ginger and cinnamon",
        "Use adequate oil or ghee in cooking",
        "Prefer steaming and sauteing over raw preparations",
        "Eat meals warm and at regular times",
    ],
};

const PITTA_TEMPLATE: MealTemplate = MealTemplate {
    principles: &[
        "Cool foods",
        "Moderate portions",
        "Sweet, bitter, astringent tastes",
    ],
    avoid: &["Spicy foods", "Sour foods", "Excessive heat"],
    breakfast: &[
        "Cool porridge with coconut",
        "Fresh fruit salad",
        "Mild cereals",
    ],
    lunch: &[
        "Rice with cooling vegetables",
        "Salad with yogurt",
        "Light dal with rice",
    ],
    dinner: &["Light salad", "Cooling soups", "Rice with mild curry"],
    snacks: &["Sweet fruits", "Coconut water", "Milk-based drinks"],
    cooking_tips: &[
        "Use cooling spices like coriander and fennel",
        "Avoid excessive heating and frying",
        "Include fresh herbs like cilantro and mint",
        "Cook with coconut oil or moderate ghee",
    ],
};

const KAPHA_TEMPLATE: MealTemplate = MealTemplate {
    principles: &[
        "Light foods",
        "Warm spices",
        "Pungent, bitter, astringent tastes",
    ],
    avoid: &["Heavy foods", "Cold foods", "Excessive dairy"],
    breakfast: &[
        "Herbal tea with light snacks",
        "Spiced porridge",
        "Fresh fruits",
    ],
    lunch: &[
        "Barley with spiced vegetables",
        "Light dal with vegetables",
        "Quinoa salad",
    ],
    dinner: &["Vegetable soup", "Light curry with millet", "Herbal tea"],
    snacks: &["Spiced tea", "Light crackers", "Ginger preparations"],
    cooking_tips: &[
        "Use warming spices like black pepper and mustard seeds",
        "Minimize oil and heavy ingredients",
        "Prefer baking, roasting, and steaming",
        "Include plenty of vegetables and light proteins",
    ],
};

impl MealTemplate {
    /// Template for a dosha
    #[must_use]
    pub const fn for_dosha(dosha: Dosha) -> &'static Self {
        match dosha {
            Dosha::Vata => &VATA_TEMPLATE,
            Dosha::Pitta => &PITTA_TEMPLATE,
            Dosha::Kapha => &KAPHA_TEMPLATE,
        }
    }

    /// Meals for weekday index `day` (0 = Monday). Each slot rotates through
    /// its option list, so a list of length k repeats with period k.
    fn meals_for_day(&self, day: usize) -> DailyMeals {
        DailyMeals {
            breakfast: rotate(self.breakfast, day),
            lunch: rotate(self.lunch, day),
            dinner: rotate(self.dinner, day),
            snacks: rotate(self.snacks, day),
        }
    }
}

/// `options[day % len]`. Every template list above is statically non-empty,
/// which keeps the modulo well-defined.
fn rotate(options: &[&str], day: usize) -> String {
    options[day % options.len()].to_owned()
}

/// Weekly staples by category, emitted regardless of the selected meals.
/// A generic always-stock list, not derived from the plan.
pub const SHOPPING_STAPLES: &[(&str, &[&str])] = &[
    ("Grains", &["Rice", "Oats", "Quinoa", "Barley"]),
    ("Pulses", &["Moong dal", "Chana dal", "Masoor dal"]),
    ("Vegetables", &["Carrots", "Spinach", "Tomatoes", "Onions"]),
    ("Spices", &["Turmeric", "Ginger", "Cumin", "Coriander"]),
    ("Others", &["Ghee", "Oil", "Salt", "Jaggery"]),
];

/// Expands a classification + requirement set into a structured weekly plan.
///
/// Stateless; the catalog is injected read-only per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DietPlanGenerator;

impl DietPlanGenerator {
    /// Create a generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generate the weekly plan for a dosha label.
    ///
    /// Unrecognized labels fall back to the Vata template. The daily targets
    /// mirror the supplied requirement without re-derivation, and the
    /// shopping list is the fixed staples table.
    #[must_use]
    pub fn generate_plan(
        &self,
        dosha: &str,
        requirement: &NutritionalRequirement,
        catalog: &Catalog,
    ) -> WeeklyDietPlan {
        let resolved = Dosha::parse(dosha).unwrap_or_else(|| {
            warn!(label = dosha, "unrecognized dosha label, using Vata template");
            Dosha::Vata
        });
        let template = MealTemplate::for_dosha(resolved);

        WeeklyDietPlan {
            dosha: resolved,
            principles: to_strings(template.principles),
            foods_to_avoid: to_strings(template.avoid),
            weekly_meals: WeeklyMeals::from_fn(|day| template.meals_for_day(day)),
            daily_nutritional_targets: DailyNutritionTargets::from(requirement),
            shopping_list: shopping_list(),
            cooking_tips: to_strings(template.cooking_tips),
            recipe_suggestions: Self::recipe_suggestions(resolved, catalog),
        }
    }

    /// Catalog recipes rated good or excellent for the dosha, ordered by
    /// rating descending then name ascending.
    #[must_use]
    pub fn recipe_suggestions(dosha: Dosha, catalog: &Catalog) -> Vec<Recipe> {
        catalog
            .recipes_favorable_for(dosha)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Render the staples table as "<item> (1 week supply)" lines, in category
/// order.
fn shopping_list() -> Vec<String> {
    SHOPPING_STAPLES
        .iter()
        .flat_map(|(_, items)| {
            items
                .iter()
                .map(|item| format!("{item} (1 week supply)"))
        })
        .collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_list_is_non_empty() {
        for dosha in Dosha::ALL {
            let template = MealTemplate::for_dosha(dosha);
            assert!(!template.principles.is_empty());
            assert!(!template.avoid.is_empty());
            assert!(!template.breakfast.is_empty());
            assert!(!template.lunch.is_empty());
            assert!(!template.dinner.is_empty());
            assert!(!template.snacks.is_empty());
            assert!(!template.cooking_tips.is_empty());
        }
    }

    #[test]
    fn test_rotation_is_periodic() {
        let options = ["a", "b", "c"];
        assert_eq!(rotate(&options, 0), rotate(&options, 3));
        assert_eq!(rotate(&options, 1), rotate(&options, 4));
        assert_eq!(rotate(&options, 2), "c");
    }

    #[test]
    fn test_shopping_list_renders_every_staple() {
        let list = shopping_list();
        let staple_count: usize = SHOPPING_STAPLES.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(list.len(), staple_count);
        assert_eq!(list[0], "Rice (1 week supply)");
        assert!(list.iter().all(|line| line.ends_with("(1 week supply)")));
    }
}
