#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

pub mod chips;
pub mod db;
pub mod error;
pub mod filter;
pub mod models;
pub mod options;
pub mod quick_filter;
pub mod schema;
pub mod session;
pub mod sort;
pub mod store;

// Re-export commonly used types
pub use chips::{project, remove_chip};
pub use db::{
    assign_group, create_group, create_recipe, delete_recipe, get_recipe_by_id, group_exists,
    list_groups, list_recipes, open_db, set_favorite, unassign_group,
};
pub use error::{Error, Result};
pub use filter::{filter_recipes, matches};
pub use models::{
    ActiveFilterChip, ChipKind, Direction, FilterSpec, Group, NewRecipe, RecipeCard, SortKey,
};
pub use options::{FilterOptions, LabelLookups};
pub use quick_filter::{active_quick_filters, QuickFilter};
pub use session::{FilterSnapshot, MemorySession, SessionStore, SqliteSession};
pub use sort::{compare, sort_recipes, CreationOrder};
pub use store::{FilterIntent, FilterStore, FAVORITES_PARAM};
