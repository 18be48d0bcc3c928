use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use larder_core::{QuickFilter, SortKey};
use serde::{Deserialize, Serialize};

use crate::utils::new_window::NewWindow;

#[derive(Parser, Debug)]
#[command(
    name = "larder",
    version,
    about,
    long_about = "Recipe book with saved browse filters"
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Debug, Args, Serialize)]
pub struct ConfigArgs {
    /// Profile name (selects config file, database and saved filters)
    #[arg(long, short, env = "LARDER_PROFILE")]
    pub profile: Option<String>,
}

#[derive(Debug, Subcommand, Serialize, PartialEq)]
pub enum Command {
    /// Prints out current configuration
    Config,
    /// Writes the profile configuration file
    Init(InitArgs),
    /// Recipe subcommands
    #[clap(subcommand)]
    Recipe(RecipeCommand),
    /// Browse recipes. Alias for 'recipe list'.
    Ls(RecipeListArgs),
    /// Recipe group subcommands
    #[clap(subcommand)]
    Group(GroupCommand),
    /// Saved filter state subcommands
    #[clap(subcommand)]
    Filters(FiltersCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        #[serde(skip)]
        shell: Shell,
    },
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct InitArgs {
    /// Database path (defaults to the profile's data directory)
    #[arg(long)]
    pub db_path: Option<String>,
    /// Default server for `recipe list`
    #[arg(long)]
    pub remote_url: Option<String>,
}

#[derive(Debug, Subcommand, Serialize, PartialEq)]
pub enum RecipeCommand {
    /// Adds a recipe.
    Add(RecipeAddArgs),
    /// Lists recipes matching the given filters.
    List(RecipeListArgs),
    /// Marks a recipe as favorite.
    Favorite(RecipeFavoriteArgs),
    /// Deletes a recipe.
    Delete(RecipeDeleteArgs),
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct RecipeAddArgs {
    /// Recipe name
    #[arg(trailing_var_arg = true, required = true)]
    pub name: Vec<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub meal_type: Option<String>,
    /// Dietary preference
    #[arg(long)]
    pub diet: Option<String>,
    /// Total time in minutes
    #[arg(long, short)]
    pub time: Option<u32>,
    #[arg(long, short, default_value_t = false)]
    pub favorite: bool,
    /// Group ids (can be specified multiple times or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub group: Vec<i64>,
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Plain,
    Json,
}

#[derive(Debug, Clone, Args, PartialEq, Serialize)]
#[command(about = "Browse recipes")]
pub struct RecipeListArgs {
    /// Search term (name, category, meal type or dietary preference)
    #[arg(default_value = None)]
    pub term: Option<String>,

    /// Filter by category (can be specified multiple times or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub category: Vec<String>,

    /// Filter by meal type
    #[arg(long, value_delimiter = ',')]
    pub meal_type: Vec<String>,

    /// Filter by dietary preference
    #[arg(long, value_delimiter = ',')]
    pub diet: Vec<String>,

    /// Filter by group id
    #[arg(long, value_delimiter = ',')]
    pub group: Vec<i64>,

    /// Only favorites (`--favorites false` turns a resumed constraint off)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub favorites: Option<bool>,

    /// Maximum total time in minutes
    #[arg(long, value_name = "MINUTES")]
    pub max_time: Option<u32>,

    /// Only recipes added recently ("today", "week", "month" or a number of days)
    #[arg(long, value_name = "WINDOW", value_parser = parse_new_window)]
    pub new: Option<NewWindow>,

    /// Toggle a quick filter (favorites, under-30, new, breakfast, vegetarian, dessert)
    #[arg(long, value_name = "ID", value_delimiter = ',', value_parser = parse_quick_filter)]
    pub quick: Vec<QuickFilter>,

    /// Sort by (alphabetical, cook-time, created-at)
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Sort descending
    #[arg(long, default_value_t = false)]
    pub desc: bool,

    /// Start from the saved filter state (consumes it)
    #[arg(long, short, default_value_t = false)]
    pub resume: bool,

    /// Save the resulting filter state for the next --resume
    #[arg(long, short, default_value_t = false)]
    pub keep: bool,

    /// Fetch recipes from a larder server instead of the local database
    #[arg(long, value_name = "URL")]
    pub remote: Option<String>,

    /// Maximum number of results to print
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Output format (pretty, plain, or json)
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub output: OutputFormat,
}

impl Default for RecipeListArgs {
    fn default() -> Self {
        Self {
            term: None,
            category: vec![],
            meal_type: vec![],
            diet: vec![],
            group: vec![],
            favorites: None,
            max_time: None,
            new: None,
            quick: vec![],
            sort: None,
            desc: false,
            resume: false,
            keep: false,
            remote: None,
            limit: None,
            output: OutputFormat::Pretty,
        }
    }
}

pub fn parse_new_window(s: &str) -> anyhow::Result<NewWindow> {
    s.parse()
}

pub fn parse_quick_filter(s: &str) -> Result<QuickFilter, larder_core::Error> {
    s.parse()
}

pub fn parse_sort_key(s: &str) -> Result<SortKey, larder_core::Error> {
    s.parse()
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct RecipeFavoriteArgs {
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Remove from favorites instead
    #[arg(long, default_value_t = false)]
    pub off: bool,
}

#[derive(Debug, Args, Serialize, PartialEq)]
pub struct RecipeDeleteArgs {
    /// Recipe ID(s) to delete
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<i64>,
}

#[derive(Debug, Subcommand, Serialize, PartialEq)]
pub enum GroupCommand {
    /// Creates a group.
    Add {
        #[arg(trailing_var_arg = true, required = true)]
        name: Vec<String>,
    },
    /// Lists groups.
    List,
    /// Adds a recipe to a group.
    Assign {
        group: i64,
        recipe: i64,
        /// Remove the recipe from the group instead
        #[arg(long, default_value_t = false)]
        remove: bool,
    },
}

#[derive(Debug, Subcommand, Serialize, PartialEq)]
pub enum FiltersCommand {
    /// Shows the saved filter state without consuming it.
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
        output: OutputFormat,
    },
    /// Drops the saved filter state.
    Clear,
}
