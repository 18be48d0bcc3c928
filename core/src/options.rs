use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Group;

/// A selectable value with its display label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("beef", "Beef"),
    ("chicken", "Chicken"),
    ("pork", "Pork"),
    ("seafood", "Seafood"),
    ("vegetable", "Vegetable"),
    ("pasta", "Pasta"),
    ("soup", "Soup"),
    ("salad", "Salad"),
    ("dessert", "Dessert"),
    ("bread", "Bread"),
];

pub const MEAL_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("breakfast", "Breakfast"),
    ("lunch", "Lunch"),
    ("dinner", "Dinner"),
    ("side", "Side Dish"),
    ("snack", "Snack"),
    ("dessert", "Dessert"),
];

pub const DIETARY_OPTIONS: &[(&str, &str)] = &[
    ("vegetarian", "Vegetarian"),
    ("vegan", "Vegan"),
    ("gluten-free", "Gluten Free"),
    ("dairy-free", "Dairy Free"),
    ("keto", "Keto"),
    ("paleo", "Paleo"),
    ("low-carb", "Low Carb"),
];

fn to_options(table: &[(&str, &str)]) -> Vec<FilterOption> {
    table
        .iter()
        .map(|(value, label)| FilterOption {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// All option tables, as served to a filter panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub categories: Vec<FilterOption>,
    pub meal_types: Vec<FilterOption>,
    pub dietary_preferences: Vec<FilterOption>,
    pub groups: Vec<FilterOption>,
}

impl FilterOptions {
    pub fn new(groups: &[Group]) -> Self {
        Self {
            categories: to_options(CATEGORY_OPTIONS),
            meal_types: to_options(MEAL_TYPE_OPTIONS),
            dietary_preferences: to_options(DIETARY_OPTIONS),
            groups: groups
                .iter()
                .map(|g| FilterOption {
                    value: g.id.to_string(),
                    label: g.name.clone(),
                })
                .collect(),
        }
    }
}

/// Value -> label tables used when projecting chips
#[derive(Debug, Clone, Default)]
pub struct LabelLookups {
    pub category: HashMap<String, String>,
    pub meal_type: HashMap<String, String>,
    pub dietary: HashMap<String, String>,
    pub group: HashMap<i64, String>,
}

impl LabelLookups {
    pub fn defaults() -> Self {
        Self::with_groups(&[])
    }

    pub fn with_groups(groups: &[Group]) -> Self {
        let table = |t: &[(&str, &str)]| {
            t.iter()
                .map(|(v, l)| (v.to_string(), l.to_string()))
                .collect::<HashMap<_, _>>()
        };

        Self {
            category: table(CATEGORY_OPTIONS),
            meal_type: table(MEAL_TYPE_OPTIONS),
            dietary: table(DIETARY_OPTIONS),
            group: groups.iter().map(|g| (g.id, g.name.clone())).collect(),
        }
    }
}

impl From<&FilterOptions> for LabelLookups {
    fn from(options: &FilterOptions) -> Self {
        let table = |opts: &[FilterOption]| {
            opts.iter()
                .map(|o| (o.value.clone(), o.label.clone()))
                .collect::<HashMap<_, _>>()
        };

        Self {
            category: table(&options.categories),
            meal_type: table(&options.meal_types),
            dietary: table(&options.dietary_preferences),
            group: options
                .groups
                .iter()
                .filter_map(|o| o.value.parse::<i64>().ok().map(|id| (id, o.label.clone())))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_from_options_include_groups() {
        let options = FilterOptions::new(&[Group {
            id: 7,
            name: "Holiday".to_string(),
        }]);
        let lookups = LabelLookups::from(&options);

        assert_eq!(lookups.group.get(&7).map(String::as_str), Some("Holiday"));
        assert_eq!(
            lookups.dietary.get("gluten-free").map(String::as_str),
            Some("Gluten Free")
        );
        assert_eq!(lookups.category.len(), CATEGORY_OPTIONS.len());
    }
}
