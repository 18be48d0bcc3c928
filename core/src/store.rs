use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chips::{project, remove_chip};
use crate::error::Result;
use crate::filter;
use crate::models::{set_membership, ActiveFilterChip, Direction, FilterSpec, RecipeCard, SortKey};
use crate::options::LabelLookups;
use crate::quick_filter::{active_quick_filters, QuickFilter};
use crate::session::{FilterSnapshot, SessionStore};

pub const FAVORITES_PARAM: &str = "favoritesOnly";

/// A named user intent against the filter state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum FilterIntent {
    SetSearchTerm { term: String },
    SetCategory { value: String, included: bool },
    SetMealType { value: String, included: bool },
    SetDietary { value: String, included: bool },
    SetGroup { id: i64, included: bool },
    SetFavoritesOnly { enabled: bool },
    SetMaxCookTime { minutes: Option<u32> },
    SetNewDays { days: Option<u32> },
    ToggleQuickFilter { id: QuickFilter },
    RemoveChip { chip: ActiveFilterChip },
    SetSort {
        #[serde(rename = "sortBy")]
        sort_by: SortKey,
        direction: Direction,
    },
    TogglePanel,
    SetPanelOpen { open: bool },
    ClearAll,
}

/// Owner of the current filter spec, sort order and panel visibility.
///
/// All changes go through the named operations below. The snapshot is
/// written to the injected session store only on [`FilterStore::persist`].
pub struct FilterStore<S: SessionStore> {
    spec: FilterSpec,
    sort_by: SortKey,
    direction: Direction,
    panel_open: bool,
    session: S,
}

impl<S: SessionStore> FilterStore<S> {
    /// Fresh state; whatever the session holds is left alone
    pub fn new(session: S) -> Self {
        Self::from_snapshot(FilterSnapshot::default(), session)
    }

    pub fn from_snapshot(snapshot: FilterSnapshot, session: S) -> Self {
        Self {
            spec: snapshot.spec,
            sort_by: snapshot.sort_by,
            direction: snapshot.direction,
            panel_open: snapshot.panel_open,
            session,
        }
    }

    /// Consume the saved snapshot, if any, and start from it.
    ///
    /// A snapshot that cannot be read is dropped and the defaults are used.
    pub fn restore(mut session: S) -> Self {
        let snapshot = match session.take() {
            Ok(Some(snapshot)) => {
                debug!(constraints = snapshot.spec.constraint_count(), "Restored filter state");
                snapshot
            }
            Ok(None) => FilterSnapshot::default(),
            Err(e) => {
                warn!("Discarding unreadable filter state: {}", e);
                FilterSnapshot::default()
            }
        };

        Self::from_snapshot(snapshot, session)
    }

    /// Let a `favoritesOnly` URL parameter override the restored value
    pub fn with_url_favorites(mut self, favorites_only: Option<bool>) -> Self {
        if let Some(enabled) = favorites_only {
            self.spec.favorites_only = enabled;
        }
        self
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    pub fn sort(&self) -> (SortKey, Direction) {
        (self.sort_by, self.direction)
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            spec: self.spec.clone(),
            sort_by: self.sort_by,
            direction: self.direction,
            panel_open: self.panel_open,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn into_session(self) -> S {
        self.session
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.spec.search_term = term.into();
    }

    pub fn set_category(&mut self, value: impl Into<String>, included: bool) {
        let value = value.into();
        debug!(%value, included, "Set category");
        set_membership(&mut self.spec.categories, value, included);
    }

    pub fn set_meal_type(&mut self, value: impl Into<String>, included: bool) {
        let value = value.into();
        debug!(%value, included, "Set meal type");
        set_membership(&mut self.spec.meal_types, value, included);
    }

    pub fn set_dietary(&mut self, value: impl Into<String>, included: bool) {
        let value = value.into();
        debug!(%value, included, "Set dietary preference");
        set_membership(&mut self.spec.dietary_preferences, value, included);
    }

    pub fn set_group(&mut self, id: i64, included: bool) {
        debug!(id, included, "Set group");
        set_membership(&mut self.spec.group_ids, id, included);
    }

    pub fn set_favorites_only(&mut self, enabled: bool) {
        self.spec.favorites_only = enabled;
    }

    /// `Some(0)` is treated as no ceiling
    pub fn set_max_cook_time(&mut self, minutes: Option<u32>) {
        self.spec.max_cook_time = minutes.filter(|m| *m > 0);
    }

    /// `Some(0)` is treated as no recency constraint
    pub fn set_new_days(&mut self, days: Option<u32>) {
        self.spec.new_days = days.filter(|d| *d > 0);
    }

    /// Flip a quick filter; returns whether it is now active
    pub fn toggle_quick_filter(&mut self, quick: QuickFilter) -> bool {
        let on = quick.toggle(&mut self.spec);
        debug!(quick_filter = %quick, on, "Toggled quick filter");
        on
    }

    pub fn active_quick_filters(&self) -> Vec<QuickFilter> {
        active_quick_filters(&self.spec)
    }

    pub fn remove_chip(&mut self, chip: &ActiveFilterChip) -> bool {
        remove_chip(&mut self.spec, chip)
    }

    /// Reset every axis and the search term; sort and panel stay as they are
    pub fn clear_all(&mut self) {
        debug!("Cleared all filters");
        self.spec = FilterSpec::default();
    }

    pub fn set_sort(&mut self, sort_by: SortKey, direction: Direction) {
        self.sort_by = sort_by;
        self.direction = direction;
    }

    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
    }

    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }

    pub fn apply_intent(&mut self, intent: FilterIntent) {
        match intent {
            FilterIntent::SetSearchTerm { term } => self.set_search_term(term),
            FilterIntent::SetCategory { value, included } => self.set_category(value, included),
            FilterIntent::SetMealType { value, included } => self.set_meal_type(value, included),
            FilterIntent::SetDietary { value, included } => self.set_dietary(value, included),
            FilterIntent::SetGroup { id, included } => self.set_group(id, included),
            FilterIntent::SetFavoritesOnly { enabled } => self.set_favorites_only(enabled),
            FilterIntent::SetMaxCookTime { minutes } => self.set_max_cook_time(minutes),
            FilterIntent::SetNewDays { days } => self.set_new_days(days),
            FilterIntent::ToggleQuickFilter { id } => {
                self.toggle_quick_filter(id);
            }
            FilterIntent::RemoveChip { chip } => {
                self.remove_chip(&chip);
            }
            FilterIntent::SetSort { sort_by, direction } => self.set_sort(sort_by, direction),
            FilterIntent::TogglePanel => {
                self.toggle_panel();
            }
            FilterIntent::SetPanelOpen { open } => self.set_panel_open(open),
            FilterIntent::ClearAll => self.clear_all(),
        }
    }

    pub fn chips(&self, labels: &LabelLookups) -> Vec<ActiveFilterChip> {
        project(&self.spec, labels)
    }

    /// Filtered and sorted view of `recipes`
    pub fn apply(&self, recipes: &[RecipeCard], now: DateTime<Utc>) -> Vec<RecipeCard> {
        filter::apply(recipes, &self.spec, self.sort_by, self.direction, now)
    }

    /// Save the current state for the next restore
    pub fn persist(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        self.session.save(&snapshot)
    }

    /// Drop any saved state
    pub fn forget(&mut self) -> Result<()> {
        self.session.clear()
    }

    /// URL query mirroring the favorites constraint (empty when off)
    pub fn url_query(&self) -> String {
        if self.spec.favorites_only {
            format!("{}=true", FAVORITES_PARAM)
        } else {
            String::new()
        }
    }
}
