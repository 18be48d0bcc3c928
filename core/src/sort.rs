use std::cmp::Ordering;

use deunicode::deunicode;

use crate::models::{Direction, RecipeCard, SortKey};

/// How creation order is read for one list of recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationOrder {
    Timestamp,
    /// Ids stand in for creation time
    Id,
}

impl CreationOrder {
    /// Timestamps only when every recipe in the list carries one
    pub fn for_list(recipes: &[RecipeCard]) -> Self {
        if recipes.iter().all(|r| r.created_at.is_some()) {
            CreationOrder::Timestamp
        } else {
            CreationOrder::Id
        }
    }
}

/// Compare two recipes by `sort_by`, ties broken by id.
///
/// For a fixed `creation` this is a total order. An unknown total time sorts
/// after every known one (it never passes a cook-time ceiling either).
pub fn compare(
    a: &RecipeCard,
    b: &RecipeCard,
    sort_by: SortKey,
    direction: Direction,
    creation: CreationOrder,
) -> Ordering {
    let ordering = match sort_by {
        SortKey::Alphabetical => compare_names(&a.name, &b.name),
        SortKey::CookTime => compare_cook_time(a.total_time, b.total_time),
        SortKey::CreatedAt => match creation {
            CreationOrder::Timestamp => a.created_at.cmp(&b.created_at),
            CreationOrder::Id => Ordering::Equal,
        },
    }
    .then_with(|| a.id.cmp(&b.id));

    match direction {
        Direction::Ascending => ordering,
        Direction::Descending => ordering.reverse(),
    }
}

/// Case-insensitive, with accents folded onto their base letters
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn collation_key(name: &str) -> String {
    deunicode(name).to_lowercase()
}

fn compare_cook_time(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort.
///
/// Creation order uses ids for the whole list as soon as one recipe lacks a
/// timestamp.
pub fn sort_recipes(recipes: &mut [RecipeCard], sort_by: SortKey, direction: Direction) {
    let creation = CreationOrder::for_list(recipes);
    recipes.sort_by(|a, b| compare(a, b, sort_by, direction, creation));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, name: &str, total_time: Option<u32>, created_at: Option<i64>) -> RecipeCard {
        RecipeCard {
            id,
            name: name.to_string(),
            category: None,
            meal_type: None,
            dietary_preference: None,
            total_time,
            is_favorite: false,
            created_at,
            group_ids: vec![],
        }
    }

    fn names(recipes: &[RecipeCard]) -> Vec<&str> {
        recipes.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<RecipeCard> {
        vec![
            card(4, "banana bread", Some(70), Some(4_000)),
            card(1, "Apple Pie", Some(60), Some(1_000)),
            card(3, "Chili", None, None),
            card(2, "Beef Stew", Some(120), Some(2_000)),
            card(5, "apple crumble", Some(60), None),
        ]
    }

    #[test]
    fn test_alphabetical_ascending() {
        let mut recipes = vec![
            card(1, "Beef Stew", None, None),
            card(2, "Apple Pie", None, None),
        ];
        sort_recipes(&mut recipes, SortKey::Alphabetical, Direction::Ascending);
        assert_eq!(names(&recipes), vec!["Apple Pie", "Beef Stew"]);
    }

    #[test]
    fn test_alphabetical_ignores_case() {
        let mut recipes = sample();
        sort_recipes(&mut recipes, SortKey::Alphabetical, Direction::Ascending);
        assert_eq!(
            names(&recipes),
            vec!["apple crumble", "Apple Pie", "banana bread", "Beef Stew", "Chili"]
        );
    }

    #[test]
    fn test_cook_time_puts_unknown_last() {
        let mut recipes = sample();
        sort_recipes(&mut recipes, SortKey::CookTime, Direction::Ascending);
        assert_eq!(
            names(&recipes),
            vec!["Apple Pie", "apple crumble", "banana bread", "Beef Stew", "Chili"]
        );
    }

    #[test]
    fn test_created_at_falls_back_to_id() {
        let mut recipes = vec![
            card(9, "no timestamp", None, None),
            card(2, "older", None, Some(500)),
            card(7, "newer", None, Some(9_000)),
        ];
        sort_recipes(&mut recipes, SortKey::CreatedAt, Direction::Descending);
        assert_eq!(names(&recipes), vec!["no timestamp", "newer", "older"]);
    }

    #[test]
    fn test_created_at_mixed_timestamps_use_ids() {
        let mut recipes = vec![
            card(3, "c", None, Some(50)),
            card(2, "b", None, None),
            card(1, "a", None, Some(100)),
        ];
        sort_recipes(&mut recipes, SortKey::CreatedAt, Direction::Ascending);
        assert_eq!(names(&recipes), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_alphabetical_folds_accents() {
        let mut recipes = vec![
            card(1, "Zucchini Bread", None, None),
            card(2, "Éclair", None, None),
            card(3, "Eggs Benedict", None, None),
            card(4, "crème brûlée", None, None),
        ];
        sort_recipes(&mut recipes, SortKey::Alphabetical, Direction::Ascending);
        assert_eq!(
            names(&recipes),
            vec!["crème brûlée", "Éclair", "Eggs Benedict", "Zucchini Bread"]
        );
    }

    #[test]
    fn test_created_at_compare_is_transitive() {
        let recipes = vec![
            card(3, "a", None, Some(50)),
            card(2, "b", None, None),
            card(1, "c", None, Some(100)),
        ];

        for creation in [CreationOrder::Timestamp, CreationOrder::Id] {
            let cmp = |x: &RecipeCard, y: &RecipeCard| {
                compare(x, y, SortKey::CreatedAt, Direction::Ascending, creation)
            };
            for x in &recipes {
                for y in &recipes {
                    for z in &recipes {
                        if cmp(x, y) != Ordering::Greater && cmp(y, z) != Ordering::Greater {
                            assert_ne!(cmp(x, z), Ordering::Greater, "{creation:?}");
                        }
                    }
                }
            }
        }
        assert_eq!(CreationOrder::for_list(&recipes), CreationOrder::Id);
        assert_eq!(CreationOrder::for_list(&recipes[..1]), CreationOrder::Timestamp);
    }

    #[test]
    fn test_descending_is_reversed_ascending() {
        for key in [SortKey::Alphabetical, SortKey::CookTime, SortKey::CreatedAt] {
            let mut ascending = sample();
            sort_recipes(&mut ascending, key, Direction::Ascending);
            ascending.reverse();

            let mut descending = sample();
            sort_recipes(&mut descending, key, Direction::Descending);

            assert_eq!(ascending, descending, "key {key}");
        }
    }

    #[test]
    fn test_ties_break_on_id() {
        let a = card(1, "Same", Some(10), None);
        let b = card(2, "same", Some(10), None);
        assert_eq!(
            compare(&a, &b, SortKey::CookTime, Direction::Ascending, CreationOrder::Id),
            Ordering::Less
        );
        assert_eq!(
            compare(&a, &b, SortKey::CookTime, Direction::Descending, CreationOrder::Id),
            Ordering::Greater
        );
    }
}
