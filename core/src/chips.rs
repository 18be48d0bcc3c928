use crate::models::{set_membership, ActiveFilterChip, ChipKind, FilterSpec};
use crate::options::LabelLookups;

/// Turn a filter spec into one chip per removable constraint.
///
/// Chips come out in axis order (categories, meal types, dietary
/// preferences, groups, favorites, cook time, new), insertion order within
/// an axis. Values missing from the lookups are labelled with themselves.
pub fn project(spec: &FilterSpec, labels: &LabelLookups) -> Vec<ActiveFilterChip> {
    let mut chips = Vec::with_capacity(spec.constraint_count());

    let label_or_value = |table: &std::collections::HashMap<String, String>, value: &str| {
        table.get(value).cloned().unwrap_or_else(|| value.to_string())
    };

    for value in &spec.categories {
        chips.push(chip(
            ChipKind::Category,
            value.clone(),
            label_or_value(&labels.category, value),
        ));
    }
    for value in &spec.meal_types {
        chips.push(chip(
            ChipKind::MealType,
            value.clone(),
            label_or_value(&labels.meal_type, value),
        ));
    }
    for value in &spec.dietary_preferences {
        chips.push(chip(
            ChipKind::Dietary,
            value.clone(),
            label_or_value(&labels.dietary, value),
        ));
    }
    for id in &spec.group_ids {
        let label = labels
            .group
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string());
        chips.push(chip(ChipKind::Group, id.to_string(), label));
    }

    if spec.favorites_only {
        chips.push(chip(
            ChipKind::Favorites,
            "true".to_string(),
            "Favorites".to_string(),
        ));
    }
    if let Some(max) = spec.max_cook_time {
        chips.push(chip(ChipKind::CookTime, max.to_string(), format!("Under {max}m")));
    }
    if let Some(days) = spec.new_days {
        chips.push(chip(ChipKind::New, days.to_string(), "New".to_string()));
    }

    chips
}

fn chip(kind: ChipKind, value: String, label: String) -> ActiveFilterChip {
    ActiveFilterChip { kind, value, label }
}

/// Drop the single constraint a chip represents.
///
/// Returns false when the chip no longer matches anything in `spec`.
pub fn remove_chip(spec: &mut FilterSpec, chip: &ActiveFilterChip) -> bool {
    let before = spec.clone();

    match chip.kind {
        ChipKind::Category => set_membership(&mut spec.categories, chip.value.clone(), false),
        ChipKind::MealType => set_membership(&mut spec.meal_types, chip.value.clone(), false),
        ChipKind::Dietary => {
            set_membership(&mut spec.dietary_preferences, chip.value.clone(), false)
        }
        ChipKind::Group => {
            if let Ok(id) = chip.value.parse::<i64>() {
                set_membership(&mut spec.group_ids, id, false);
            }
        }
        ChipKind::Favorites => spec.favorites_only = false,
        ChipKind::CookTime => spec.max_cook_time = None,
        ChipKind::New => spec.new_days = None,
    }

    *spec != before
}
