//! Greedy meal assembly
//!
//! Given a filtered food pool and per-meal targets, picks one item per food
//! category to approximate the calorie target: the highest-protein protein
//! item anchors the meal, the highest-carb grain is the starch, up to two
//! vegetables fill out the plate, and a fat/nut item tops up a large
//! remaining gap. This is a local greedy pass, not an optimal solver.
//!
//! Ties are broken by random draw from an injected RNG handle, so repeated
//! calls with the same inputs are only reproducible under a fixed seed.

use crate::models::{
    EnergyTargets, FoodCategory, FoodItem, Meal, MealPlan, MealSlot, MealTotals, Preferences,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Minimum size of a liked-keyword subset before the assembler falls back to
/// the whole filtered pool. Observed in the source kiosks as a recurring
/// magic number; kept as a named, tunable constant.
pub const MIN_PREFERRED_POOL: usize = 15;

/// A fat/nut top-up is only added while the running total sits more than
/// this many kcal under the meal target.
pub const FAT_TOPUP_GAP_KCAL: f64 = 80.0;

/// How the daily kcal and protein targets are distributed across meals
pub const MEAL_SHARES: [(MealSlot, f64); 3] = [
    (MealSlot::Breakfast, 0.30),
    (MealSlot::Lunch, 0.40),
    (MealSlot::Dinner, 0.30),
];

/// Per-meal calorie and protein targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MealTargets {
    pub kcal: f64,
    pub protein_g: f64,
}

/// Apply the hard filters: allergens out, required diet tags in.
///
/// If filtering removes every item, the unfiltered table is returned instead
/// of failing; for any non-empty filtered pool, no item intersecting the
/// allergy set can survive.
pub fn filter_pool<'a>(catalog: &'a [FoodItem], prefs: &Preferences) -> Vec<&'a FoodItem> {
    let filtered: Vec<&FoodItem> = catalog
        .iter()
        .filter(|item| item.allergen_tags.is_disjoint(&prefs.allergy_keywords))
        .filter(|item| prefs.restricted_diet_tags.is_subset(&item.diet_tags))
        .collect();

    if filtered.is_empty() {
        catalog.iter().collect()
    } else {
        filtered
    }
}

/// Narrow the pool to items whose name contains the liked keyword.
///
/// Falls back to the full filtered pool when the subset has fewer than
/// [`MIN_PREFERRED_POOL`] items, so a narrow preference never starves the
/// assembler of choices.
pub fn preferred_pool<'a>(pool: &[&'a FoodItem], liked: Option<&str>) -> Vec<&'a FoodItem> {
    if let Some(keyword) = liked {
        let keyword = keyword.trim().to_lowercase();
        if !keyword.is_empty() {
            let subset: Vec<&FoodItem> = pool
                .iter()
                .copied()
                .filter(|item| item.name.to_lowercase().contains(&keyword))
                .collect();
            if subset.len() >= MIN_PREFERRED_POOL {
                return subset;
            }
        }
    }
    pool.to_vec()
}

/// Pick a random item among those maximizing `key`
fn pick_max_by<'a, R, F>(items: &[&'a FoodItem], key: F, rng: &mut R) -> Option<&'a FoodItem>
where
    R: Rng,
    F: Fn(&FoodItem) -> f64,
{
    let best = items
        .iter()
        .map(|item| key(item))
        .fold(f64::NEG_INFINITY, f64::max);
    let ties: Vec<&FoodItem> = items.iter().copied().filter(|i| key(i) == best).collect();
    ties.choose(rng).copied()
}

/// Pick a random item among those minimizing `key`
fn pick_min_by<'a, R, F>(items: &[&'a FoodItem], key: F, rng: &mut R) -> Option<&'a FoodItem>
where
    R: Rng,
    F: Fn(&FoodItem) -> f64,
{
    let best = items
        .iter()
        .map(|item| key(item))
        .fold(f64::INFINITY, f64::min);
    let ties: Vec<&FoodItem> = items.iter().copied().filter(|i| key(i) == best).collect();
    ties.choose(rng).copied()
}

fn of_category<'a>(pool: &[&'a FoodItem], category: FoodCategory) -> Vec<&'a FoodItem> {
    pool.iter().copied().filter(|i| i.category == category).collect()
}

fn remove_item(pool: &mut Vec<&FoodItem>, chosen: &FoodItem) {
    pool.retain(|i| !std::ptr::eq(*i, chosen));
}

/// Assemble a single meal from the pool
///
/// Returns an empty item list when the pool offers nothing at all; the
/// caller is responsible for surfacing "no matching food" to the user.
pub fn assemble_meal<R: Rng>(
    pool: &[&FoodItem],
    slot: MealSlot,
    targets: &MealTargets,
    rng: &mut R,
) -> Meal {
    let mut candidates: Vec<&FoodItem> = pool.to_vec();
    let mut items: Vec<FoodItem> = Vec::new();
    let mut kcal = 0.0;

    // Anchor: the highest-protein item, preferring the protein category but
    // falling back to the whole pool when no protein source survived.
    let protein_candidates = of_category(&candidates, FoodCategory::Protein);
    let anchor_from = if protein_candidates.is_empty() {
        candidates.clone()
    } else {
        protein_candidates
    };
    if let Some(anchor) = pick_max_by(&anchor_from, |i| i.protein_g, rng) {
        kcal += anchor.calories;
        items.push(anchor.clone());
        remove_item(&mut candidates, anchor);
    }

    // When the anchor alone falls short of the protein target, a second
    // protein pick is allowed as long as it fits the calorie budget.
    let protein_so_far: f64 = items.iter().map(|i| i.protein_g).sum();
    if protein_so_far < targets.protein_g {
        let extras: Vec<&FoodItem> = candidates
            .iter()
            .copied()
            .filter(|i| i.category == FoodCategory::Protein && kcal + i.calories <= targets.kcal)
            .collect();
        if let Some(extra) = pick_max_by(&extras, |i| i.protein_g, rng) {
            kcal += extra.calories;
            items.push(extra.clone());
            remove_item(&mut candidates, extra);
        }
    }

    // Starch: highest-carb grain.
    let grains = of_category(&candidates, FoodCategory::Grain);
    if let Some(starch) = pick_max_by(&grains, |i| i.carbs_g, rng) {
        kcal += starch.calories;
        items.push(starch.clone());
        remove_item(&mut candidates, starch);
    }

    // Up to two vegetables, drawn in random order, while they fit.
    let mut vegetables = of_category(&candidates, FoodCategory::Vegetable);
    vegetables.shuffle(rng);
    let mut picked = 0;
    for veg in vegetables {
        if picked == 2 {
            break;
        }
        if kcal + veg.calories <= targets.kcal {
            kcal += veg.calories;
            picked += 1;
            items.push(veg.clone());
            remove_item(&mut candidates, veg);
        }
    }

    // Fat/nut top-up only when still well under target; the item that best
    // fills the remaining gap wins.
    let gap = targets.kcal - kcal;
    if gap > FAT_TOPUP_GAP_KCAL {
        let fats = of_category(&candidates, FoodCategory::FatNut);
        if let Some(topup) = pick_min_by(&fats, |i| (i.calories - gap).abs(), rng) {
            items.push(topup.clone());
        }
    }

    let totals = MealTotals::from_items(&items);
    Meal { slot, items, totals }
}

/// Assemble a full day's plan
///
/// The catalog is filtered once, per-meal targets come from [`MEAL_SHARES`],
/// and items already used by an earlier meal are removed from the pool so
/// the three meals do not repeat each other.
pub fn assemble_plan<R: Rng>(
    catalog: &[FoodItem],
    prefs: &Preferences,
    targets: &EnergyTargets,
    rng: &mut R,
) -> MealPlan {
    let filtered = filter_pool(catalog, prefs);
    let mut remaining = preferred_pool(&filtered, prefs.liked_keyword.as_deref());

    let mut meals = Vec::with_capacity(MEAL_SHARES.len());
    let mut totals = MealTotals::default();

    for (slot, share) in MEAL_SHARES {
        let meal_targets = MealTargets {
            kcal: targets.daily_kcal_target * share,
            protein_g: targets.protein_g * share,
        };
        let meal = assemble_meal(&remaining, slot, &meal_targets, rng);
        remaining.retain(|i| !meal.items.iter().any(|used| used.name == i.name));
        totals.add(&meal.totals);
        meals.push(meal);
    }

    MealPlan { meals, totals }
}
