use larder_core::{ActiveFilterChip, Direction, FilterSpec, QuickFilter, SortKey};
use serde::{Deserialize, Serialize};

use super::recipe::RecipeDto;

/// Query string of `GET /browse`.
///
/// Repeated keys (`category=soup&category=salad`) add several values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseQuery {
    pub favorites_only: Option<bool>,
    pub search: Option<String>,
    pub category: Vec<String>,
    pub meal_type: Vec<String>,
    pub diet: Vec<String>,
    pub group: Vec<i64>,
    pub max_time: Option<u32>,
    pub new_days: Option<u32>,
    pub quick: Vec<String>,
    pub sort_by: Option<String>,
    pub direction: Option<String>,
    /// Save the resulting state for the next request
    pub keep: bool,
}

/// Filtered listing plus the state that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseView {
    pub recipes: Vec<RecipeDto>,
    pub total: usize,
    pub spec: FilterSpec,
    pub chips: Vec<ActiveFilterChip>,
    pub quick_filters: Vec<QuickFilter>,
    pub sort_by: SortKey,
    pub direction: Direction,
    pub panel_open: bool,
    /// Query string mirroring the favorites constraint
    pub url_query: String,
}
