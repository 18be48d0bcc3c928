use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::{set_membership, FilterSpec};

pub const QUICK_COOK_TIME: u32 = 30;
pub const QUICK_NEW_DAYS: u32 = 7;

/// Single-click shortcuts onto one axis value.
///
/// Whether a quick filter is active is always read back from the spec, so
/// the pills and the detailed filter panel cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QuickFilter {
    Favorites,
    UnderThirty,
    New,
    Breakfast,
    Vegetarian,
    Dessert,
}

impl QuickFilter {
    pub const ALL: [QuickFilter; 6] = [
        QuickFilter::Favorites,
        QuickFilter::UnderThirty,
        QuickFilter::New,
        QuickFilter::Breakfast,
        QuickFilter::Vegetarian,
        QuickFilter::Dessert,
    ];

    pub fn id(self) -> &'static str {
        match self {
            QuickFilter::Favorites => "favorites",
            QuickFilter::UnderThirty => "under-30",
            QuickFilter::New => "new",
            QuickFilter::Breakfast => "breakfast",
            QuickFilter::Vegetarian => "vegetarian",
            QuickFilter::Dessert => "dessert",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickFilter::Favorites => "Favorites",
            QuickFilter::UnderThirty => "Under 30 min",
            QuickFilter::New => "New",
            QuickFilter::Breakfast => "Breakfast",
            QuickFilter::Vegetarian => "Vegetarian",
            QuickFilter::Dessert => "Dessert",
        }
    }

    pub fn is_active(self, spec: &FilterSpec) -> bool {
        match self {
            QuickFilter::Favorites => spec.favorites_only,
            QuickFilter::UnderThirty => spec.max_cook_time == Some(QUICK_COOK_TIME),
            QuickFilter::New => spec.new_days == Some(QUICK_NEW_DAYS),
            QuickFilter::Breakfast => spec.meal_types.iter().any(|m| m == "breakfast"),
            QuickFilter::Vegetarian => spec.dietary_preferences.iter().any(|d| d == "vegetarian"),
            QuickFilter::Dessert => spec.categories.iter().any(|c| c == "dessert"),
        }
    }

    /// Switch the underlying axis value on or off
    pub fn apply(self, spec: &mut FilterSpec, on: bool) {
        match self {
            QuickFilter::Favorites => spec.favorites_only = on,
            QuickFilter::UnderThirty => spec.max_cook_time = on.then_some(QUICK_COOK_TIME),
            QuickFilter::New => spec.new_days = on.then_some(QUICK_NEW_DAYS),
            QuickFilter::Breakfast => {
                set_membership(&mut spec.meal_types, "breakfast".to_string(), on)
            }
            QuickFilter::Vegetarian => {
                set_membership(&mut spec.dietary_preferences, "vegetarian".to_string(), on)
            }
            QuickFilter::Dessert => set_membership(&mut spec.categories, "dessert".to_string(), on),
        }
    }

    /// Flip the filter; returns its new state
    pub fn toggle(self, spec: &mut FilterSpec) -> bool {
        let on = !self.is_active(spec);
        self.apply(spec, on);
        on
    }
}

/// Quick filters currently reflected by `spec`
pub fn active_quick_filters(spec: &FilterSpec) -> Vec<QuickFilter> {
    QuickFilter::ALL
        .into_iter()
        .filter(|q| q.is_active(spec))
        .collect()
}

impl FromStr for QuickFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuickFilter::ALL
            .into_iter()
            .find(|q| q.id() == s.trim())
            .ok_or_else(|| Error::UnknownQuickFilter(s.to_string()))
    }
}

impl TryFrom<String> for QuickFilter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuickFilter> for String {
    fn from(value: QuickFilter) -> Self {
        value.id().to_string()
    }
}

impl fmt::Display for QuickFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
