//! Built-in fallback food table
//!
//! Used whenever no external catalog is configured or the configured file
//! cannot be loaded. Values are per-serving kiosk portions.

use meal_kiosk_shared::models::{FoodCategory, FoodItem};
use std::collections::BTreeSet;

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn item(
    name: &str,
    category: FoodCategory,
    calories: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    allergens: &[&str],
    diets: &[&str],
) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        category,
        calories,
        protein_g,
        carbs_g,
        fat_g,
        allergen_tags: tags(allergens),
        diet_tags: tags(diets),
    }
}

/// The bundled food table
pub fn builtin_catalog() -> Vec<FoodItem> {
    use FoodCategory::*;

    vec![
        // Protein sources
        item("grilled chicken breast", Protein, 220.0, 40.0, 0.0, 5.0, &[], &["halal"]),
        item("baked salmon fillet", Protein, 280.0, 23.0, 0.0, 18.0, &["fish"], &[]),
        item("tofu steak", Protein, 180.0, 20.0, 6.0, 9.0, &["soy"], &["vegan", "vegetarian", "halal"]),
        item("boiled eggs (2)", Protein, 155.0, 13.0, 1.0, 11.0, &["egg"], &["vegetarian", "halal"]),
        item("beef bulgogi", Protein, 310.0, 28.0, 8.0, 18.0, &[], &[]),
        item("grilled shrimp skewer", Protein, 150.0, 28.0, 1.0, 2.5, &["shellfish"], &[]),
        item("lentil patty", Protein, 190.0, 14.0, 24.0, 4.0, &[], &["vegan", "vegetarian", "halal"]),
        // Grains and starches
        item("steamed rice", Grain, 300.0, 6.0, 66.0, 1.0, &[], &["vegan", "vegetarian", "halal"]),
        item("brown rice bowl", Grain, 270.0, 6.0, 57.0, 2.0, &[], &["vegan", "vegetarian", "halal"]),
        item("whole wheat toast", Grain, 160.0, 7.0, 28.0, 2.0, &["gluten"], &["vegetarian"]),
        item("quinoa salad", Grain, 230.0, 8.0, 39.0, 5.0, &[], &["vegan", "vegetarian", "halal"]),
        item("baked sweet potato", Grain, 180.0, 4.0, 41.0, 0.3, &[], &["vegan", "vegetarian", "halal"]),
        item("oatmeal bowl", Grain, 150.0, 6.0, 27.0, 2.5, &[], &["vegan", "vegetarian", "halal"]),
        // Vegetables and fruit
        item("garden salad", Vegetable, 60.0, 2.0, 10.0, 1.0, &[], &["vegan", "vegetarian", "halal"]),
        item("steamed broccoli", Vegetable, 55.0, 4.0, 10.0, 0.5, &[], &["vegan", "vegetarian", "halal"]),
        item("kimchi", Vegetable, 30.0, 2.0, 6.0, 0.2, &[], &["vegan", "vegetarian"]),
        item("roasted vegetables", Vegetable, 120.0, 3.0, 18.0, 4.5, &[], &["vegan", "vegetarian", "halal"]),
        item("seasonal fruit cup", Vegetable, 90.0, 1.0, 22.0, 0.3, &[], &["vegan", "vegetarian", "halal"]),
        item("spinach namul", Vegetable, 45.0, 3.0, 4.0, 2.0, &[], &["vegan", "vegetarian", "halal"]),
        // Fats and nuts
        item("almond handful", FatNut, 170.0, 6.0, 6.0, 15.0, &["nut"], &["vegan", "vegetarian", "halal"]),
        item("peanut butter toast", FatNut, 250.0, 8.0, 24.0, 14.0, &["peanut", "gluten"], &["vegetarian"]),
        item("avocado half", FatNut, 160.0, 2.0, 8.0, 15.0, &[], &["vegan", "vegetarian", "halal"]),
        item("walnut mix", FatNut, 200.0, 5.0, 4.0, 20.0, &["nut"], &["vegan", "vegetarian", "halal"]),
        // Snacks
        item("greek yogurt", Snack, 120.0, 17.0, 8.0, 0.7, &["dairy"], &["vegetarian", "halal"]),
        item("protein bar", Snack, 210.0, 20.0, 22.0, 7.0, &["nut", "soy"], &["vegetarian"]),
        item("cheese cubes", Snack, 160.0, 10.0, 1.0, 13.0, &["dairy"], &["vegetarian"]),
        // Drinks
        item("milk (whole)", Drink, 120.0, 6.0, 9.0, 6.5, &["dairy"], &["vegetarian", "halal"]),
        item("soy milk", Drink, 100.0, 7.0, 8.0, 4.0, &["soy"], &["vegan", "vegetarian", "halal"]),
        item("orange juice", Drink, 110.0, 2.0, 26.0, 0.5, &[], &["vegan", "vegetarian", "halal"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_non_empty() {
        assert!(builtin_catalog().len() >= 20);
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let items = builtin_catalog();
        let mut names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), items.len());
    }

    #[test]
    fn test_builtin_has_peanut_item() {
        // The allergy tests rely on at least one peanut-tagged item existing
        let items = builtin_catalog();
        assert!(items
            .iter()
            .any(|i| i.name == "peanut butter toast" && i.allergen_tags.contains("peanut")));
    }

    #[test]
    fn test_builtin_nutrition_is_sane() {
        for item in builtin_catalog() {
            assert!(item.calories >= 0.0, "{}", item.name);
            assert!(item.protein_g >= 0.0 && item.carbs_g >= 0.0 && item.fat_g >= 0.0);
            // macro kcal should not wildly exceed the stated calories
            let macro_kcal = item.protein_g * 4.0 + item.carbs_g * 4.0 + item.fat_g * 9.0;
            assert!(
                macro_kcal <= item.calories * 1.35 + 20.0,
                "{}: {} macro kcal vs {} stated",
                item.name,
                macro_kcal,
                item.calories
            );
        }
    }
}
