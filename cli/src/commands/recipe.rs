use std::path::Path;

use chrono::Utc;
use larder_core::{
    Direction, FilterStore, LabelLookups, NewRecipe, RecipeCard, SessionStore,
};
use tracing::debug;

use crate::{
    app_config::AppConfig,
    args::{RecipeCommand, RecipeListArgs},
    db::LocalDb,
    formatters::{ListingHeader, RecipeFormatter},
    remote::RemoteClient,
};

pub fn recipe_cmd(config: &AppConfig, subcommand: RecipeCommand) -> Result<(), anyhow::Error> {
    let db = LocalDb::open(Path::new(&config.db_path))?;

    match subcommand {
        RecipeCommand::Add(args) => {
            let recipe = db.create_recipe(&NewRecipe {
                name: args.name.join(" "),
                category: args.category,
                meal_type: args.meal_type,
                dietary_preference: args.diet,
                total_time: args.time,
                is_favorite: args.favorite,
                group_ids: args.group,
            })?;

            println!("Recipe added successfully ({})", recipe.id);
        }
        RecipeCommand::List(args) => list_cmd(config, &db, args)?,
        RecipeCommand::Favorite(args) => {
            db.set_favorite(args.id, !args.off)?;
            if args.off {
                println!("Recipe {} removed from favorites", args.id);
            } else {
                println!("Recipe {} marked as favorite", args.id);
            }
        }
        RecipeCommand::Delete(args) => {
            for id in args.ids {
                db.delete_recipe(id)?;
                println!("Recipe {} deleted", id);
            }
        }
    };

    Ok(())
}

fn list_cmd(config: &AppConfig, db: &LocalDb, args: RecipeListArgs) -> anyhow::Result<()> {
    let session = db.session(config.session_name());
    let mut store = build_store(&args, session);

    let remote = args
        .remote
        .as_deref()
        .or(config.remote_url.as_deref())
        .map(RemoteClient::new);

    let (recipes, labels) = match remote {
        Some(client) => {
            let recipes = client.fetch_recipes()?;
            let labels = LabelLookups::from(&client.fetch_options()?);
            (recipes, labels)
        }
        None => (
            db.list_recipes()?,
            LabelLookups::with_groups(&db.list_groups()?),
        ),
    };

    let mut results = store.apply(&recipes, Utc::now());
    debug!(total = recipes.len(), matched = results.len(), "Applied filters");
    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    print_listing(&store, &recipes, &results, &labels, args.output.clone())?;

    if args.keep {
        store.persist()?;
    }

    Ok(())
}

/// Start from a fresh or resumed state and overlay the command line
pub fn build_store<S: SessionStore>(args: &RecipeListArgs, session: S) -> FilterStore<S> {
    let mut store = if args.resume {
        FilterStore::restore(session)
    } else {
        FilterStore::new(session)
    }
    .with_url_favorites(args.favorites);

    if let Some(term) = &args.term {
        store.set_search_term(term.as_str());
    }
    for value in &args.category {
        store.set_category(value.as_str(), true);
    }
    for value in &args.meal_type {
        store.set_meal_type(value.as_str(), true);
    }
    for value in &args.diet {
        store.set_dietary(value.as_str(), true);
    }
    for id in &args.group {
        store.set_group(*id, true);
    }
    if args.max_time.is_some() {
        store.set_max_cook_time(args.max_time);
    }
    if let Some(window) = &args.new {
        store.set_new_days(Some(window.days()));
    }
    for quick in &args.quick {
        store.toggle_quick_filter(*quick);
    }

    let (current_key, current_direction) = store.sort();
    let direction = if args.desc {
        Direction::Descending
    } else if args.sort.is_some() {
        Direction::Ascending
    } else {
        current_direction
    };
    store.set_sort(args.sort.unwrap_or(current_key), direction);

    store
}

fn print_listing<S: SessionStore>(
    store: &FilterStore<S>,
    all: &[RecipeCard],
    results: &[RecipeCard],
    labels: &LabelLookups,
    output: crate::args::OutputFormat,
) -> anyhow::Result<()> {
    let chips = store.chips(labels);
    let quick_filters = store.active_quick_filters();
    let header = ListingHeader {
        chips: &chips,
        quick_filters: &quick_filters,
        sort: store.sort(),
        total: all.len(),
    };

    RecipeFormatter::new(output)
        .print_recipes(results, &header)
        .map_err(|e| anyhow::anyhow!("Error while formatting recipes: {}", e))
}
