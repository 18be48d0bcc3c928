use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Read-only projection of a recipe used by list and browse views
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCard {
    /// Numeric id, also used as the creation-order proxy
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub dietary_preference: Option<String>,
    /// Total time in minutes (None = unknown)
    #[serde(default)]
    pub total_time: Option<u32>,
    #[serde(default)]
    pub is_favorite: bool,
    /// Unix timestamp in milliseconds
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub group_ids: Vec<i64>,
}

/// Payload for creating a recipe
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub dietary_preference: Option<String>,
    #[serde(default)]
    pub total_time: Option<u32>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub group_ids: Vec<i64>,
}

/// A named collection of recipes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

/// The full set of active filter constraints.
///
/// Every axis left empty (or `None`/`false`) matches everything, so
/// `FilterSpec::default()` admits every recipe. The vectors are kept
/// duplicate-free and in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    pub search_term: String,
    pub categories: Vec<String>,
    pub meal_types: Vec<String>,
    pub dietary_preferences: Vec<String>,
    pub group_ids: Vec<i64>,
    pub favorites_only: bool,
    /// Inclusive ceiling in minutes
    pub max_cook_time: Option<u32>,
    /// Only recipes created within this many days
    pub new_days: Option<u32>,
}

impl FilterSpec {
    /// True when no constraint is active
    pub fn is_empty(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.categories.is_empty()
            && self.meal_types.is_empty()
            && self.dietary_preferences.is_empty()
            && self.group_ids.is_empty()
            && !self.favorites_only
            && self.max_cook_time.is_none()
            && self.new_days.is_none()
    }

    /// Number of individually removable constraints (search term excluded)
    pub fn constraint_count(&self) -> usize {
        self.categories.len()
            + self.meal_types.len()
            + self.dietary_preferences.len()
            + self.group_ids.len()
            + usize::from(self.favorites_only)
            + usize::from(self.max_cook_time.is_some())
            + usize::from(self.new_days.is_some())
    }
}

/// Add or remove `value`, keeping insertion order and no duplicates
pub(crate) fn set_membership<T: PartialEq>(values: &mut Vec<T>, value: T, included: bool) {
    let position = values.iter().position(|v| *v == value);
    match (position, included) {
        (None, true) => values.push(value),
        (Some(idx), false) => {
            values.remove(idx);
        }
        _ => {}
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Alphabetical,
    CookTime,
    CreatedAt,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alphabetical" | "alpha" | "name" => Ok(Self::Alphabetical),
            "cook-time" | "cooktime" | "time" => Ok(Self::CookTime),
            "created-at" | "createdat" | "created" | "newest" => Ok(Self::CreatedAt),
            _ => Err(Error::UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Alphabetical => "alphabetical",
            SortKey::CookTime => "cook-time",
            SortKey::CreatedAt => "created-at",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(Error::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => f.write_str("asc"),
            Direction::Descending => f.write_str("desc"),
        }
    }
}

/// Which constraint an active filter chip stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChipKind {
    Category,
    MealType,
    Dietary,
    Group,
    Favorites,
    CookTime,
    New,
}

/// One individually removable constraint, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilterChip {
    pub kind: ChipKind,
    pub value: String,
    pub label: String,
}
