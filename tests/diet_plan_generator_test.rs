// ABOUTME: Integration tests for the weekly diet plan generator
// ABOUTME: Seven-day shape, round-robin rotation, fallback template, and target mirroring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Prakriti Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use prakriti_advisor::catalog;
use prakriti_advisor::models::{Catalog, Demographics, Dosha, NutritionalRequirement, WEEKDAYS};
use prakriti_advisor::{DietPlanGenerator, NutritionCalculator};

fn requirement() -> NutritionalRequirement {
    NutritionCalculator::new()
        .calculate_requirements(&Demographics::default())
        .unwrap()
}

fn generate(dosha: &str) -> prakriti_advisor::models::WeeklyDietPlan {
    DietPlanGenerator::new().generate_plan(dosha, &requirement(), &catalog::builtin())
}

#[test]
fn test_every_dosha_yields_exactly_seven_canonical_days() {
    for label in ["Vata", "Pitta", "Kapha", "Tridosha", ""] {
        let plan = generate(label);
        let days = plan.weekly_meals.days();
        assert_eq!(days.len(), 7);
        for (position, (name, _)) in days.iter().enumerate() {
            assert_eq!(*name, WEEKDAYS[position]);
        }

        let json = serde_json::to_value(&plan.weekly_meals).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 7, "{label} plan must serialize 7 day keys");
        for day in WEEKDAYS {
            assert!(object.contains_key(day));
        }
    }
}

#[test]
fn test_meal_rotation_is_periodic_over_option_lists() {
    let plan = generate("Vata");
    let meals = plan.weekly_meals;
    // Every slot list has three options, so day i and day i+3 repeat.
    assert_eq!(meals.monday.breakfast, meals.thursday.breakfast);
    assert_eq!(meals.monday.breakfast, meals.sunday.breakfast);
    assert_eq!(meals.tuesday.lunch, meals.friday.lunch);
    assert_eq!(meals.wednesday.dinner, meals.saturday.dinner);
    // Adjacent days differ while the rotation is mid-cycle.
    assert_ne!(meals.monday.breakfast, meals.tuesday.breakfast);
}

#[test]
fn test_vata_plan_content_follows_the_template() {
    let plan = generate("Vata");
    assert_eq!(plan.dosha, Dosha::Vata);
    assert_eq!(
        plan.weekly_meals.monday.breakfast,
        "Warm oatmeal with ghee and dates"
    );
    assert_eq!(plan.weekly_meals.tuesday.breakfast, "Hot cereal with nuts");
    assert!(plan.principles.contains(&"Warm foods".to_owned()));
    assert!(plan.foods_to_avoid.contains(&"Cold foods".to_owned()));
    assert!(plan
        .cooking_tips
        .contains(&"Use adequate oil or ghee in cooking".to_owned()));
}

#[test]
fn test_unrecognized_dosha_falls_back_to_vata_template() {
    let fallback = generate("Tridosha");
    let vata = generate("Vata");
    assert_eq!(fallback, vata);
}

#[test]
fn test_targets_mirror_the_supplied_requirement() {
    let requirement = requirement();
    let plan =
        DietPlanGenerator::new().generate_plan("Pitta", &requirement, &catalog::builtin());
    let targets = plan.daily_nutritional_targets;
    assert_eq!(targets.calories, requirement.daily_calories);
    assert_eq!(targets.protein_g, requirement.macronutrients.protein_g);
    assert_eq!(
        targets.carbohydrates_g,
        requirement.macronutrients.carbohydrates_g
    );
    assert_eq!(targets.fat_g, requirement.macronutrients.fat_g);
}

#[test]
fn test_shopping_list_is_fixed_across_doshas() {
    let vata = generate("Vata");
    let kapha = generate("Kapha");
    assert_eq!(vata.shopping_list, kapha.shopping_list);
    assert_eq!(vata.shopping_list.len(), 18);
    assert!(vata
        .shopping_list
        .contains(&"Turmeric (1 week supply)".to_owned()));
}

#[test]
fn test_cooking_tips_are_dosha_specific() {
    let pitta = generate("Pitta");
    let kapha = generate("Kapha");
    assert!(pitta
        .cooking_tips
        .contains(&"Use cooling spices like coriander and fennel".to_owned()));
    assert!(kapha
        .cooking_tips
        .contains(&"Minimize oil and heavy ingredients".to_owned()));
    assert_ne!(pitta.cooking_tips, kapha.cooking_tips);
}

#[test]
fn test_recipe_suggestions_come_from_the_injected_catalog() {
    let names = |plan: &prakriti_advisor::models::WeeklyDietPlan| -> Vec<String> {
        plan.recipe_suggestions
            .iter()
            .map(|recipe| recipe.name.clone())
            .collect()
    };

    // Rating descending, then name ascending.
    assert_eq!(
        names(&generate("Vata")),
        vec!["Khichdi", "Coconut Rice", "Dal Tadka"]
    );
    assert_eq!(
        names(&generate("Pitta")),
        vec!["Coconut Rice", "Dal Tadka", "Khichdi"]
    );
    assert_eq!(names(&generate("Kapha")), vec!["Dal Tadka", "Khichdi"]);

    // An empty catalog simply yields no suggestions.
    let plan = DietPlanGenerator::new().generate_plan("Vata", &requirement(), &Catalog::default());
    assert!(plan.recipe_suggestions.is_empty());
}

#[test]
fn test_generation_is_deterministic() {
    assert_eq!(generate("Kapha"), generate("Kapha"));
}
