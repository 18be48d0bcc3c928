use chrono::{DateTime, Duration, Utc};

use crate::models::{Direction, FilterSpec, RecipeCard, SortKey};
use crate::sort::sort_recipes;

/// Check whether a recipe satisfies every active constraint of `spec`.
///
/// Axes are ANDed together, values within one axis are ORed. A recipe with
/// an unknown total time never passes an active cook-time ceiling, and one
/// without a creation timestamp never passes an active "new" filter.
pub fn matches(recipe: &RecipeCard, spec: &FilterSpec, now: DateTime<Utc>) -> bool {
    matches_search(recipe, &spec.search_term)
        && matches_axis(recipe.category.as_deref(), &spec.categories)
        && matches_axis(recipe.meal_type.as_deref(), &spec.meal_types)
        && matches_axis(
            recipe.dietary_preference.as_deref(),
            &spec.dietary_preferences,
        )
        && matches_groups(&recipe.group_ids, &spec.group_ids)
        && (!spec.favorites_only || recipe.is_favorite)
        && matches_cook_time(recipe.total_time, spec.max_cook_time)
        && matches_recency(recipe.created_at, spec.new_days, now)
}

fn matches_search(recipe: &RecipeCard, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    };

    contains(Some(&recipe.name))
        || contains(recipe.category.as_deref())
        || contains(recipe.meal_type.as_deref())
        || contains(recipe.dietary_preference.as_deref())
}

fn matches_axis(value: Option<&str>, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }

    value
        .map(|value| selected.iter().any(|s| s == value))
        .unwrap_or(false)
}

fn matches_groups(recipe_groups: &[i64], selected: &[i64]) -> bool {
    selected.is_empty() || recipe_groups.iter().any(|id| selected.contains(id))
}

fn matches_cook_time(total_time: Option<u32>, max: Option<u32>) -> bool {
    match max {
        None => true,
        Some(max) => total_time.map(|t| t <= max).unwrap_or(false),
    }
}

fn matches_recency(created_at: Option<i64>, new_days: Option<u32>, now: DateTime<Utc>) -> bool {
    let Some(days) = new_days else {
        return true;
    };
    let Some(created_at) = created_at else {
        return false;
    };

    // A window reaching past the representable range admits everything
    let cutoff = Duration::try_days(i64::from(days)).and_then(|window| now.checked_sub_signed(window));
    match cutoff {
        Some(cutoff) => created_at >= cutoff.timestamp_millis(),
        None => true,
    }
}

/// Keep the recipes that match `spec`, in their original order
pub fn filter_recipes(
    recipes: &[RecipeCard],
    spec: &FilterSpec,
    now: DateTime<Utc>,
) -> Vec<RecipeCard> {
    recipes
        .iter()
        .filter(|recipe| matches(recipe, spec, now))
        .cloned()
        .collect()
}

/// Filter, then sort the survivors
pub fn apply(
    recipes: &[RecipeCard],
    spec: &FilterSpec,
    sort_by: SortKey,
    direction: Direction,
    now: DateTime<Utc>,
) -> Vec<RecipeCard> {
    let mut result = filter_recipes(recipes, spec, now);
    sort_recipes(&mut result, sort_by, direction);
    result
}
