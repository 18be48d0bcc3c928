use anyhow::{Context, Result};
use larder_core::{Group, NewRecipe, RecipeCard, SqliteSession};
use rusqlite::Connection;
use std::path::Path;

/// Local recipe database
pub struct LocalDb {
    conn: Connection,
}

impl LocalDb {
    /// Open or create local database at the given path
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create database directory {:?}", parent))?;
        }

        let conn = larder_core::open_db(path)
            .with_context(|| format!("Failed to open local database at {:?}", path))?;

        Ok(Self { conn })
    }

    pub fn create_recipe(&self, recipe: &NewRecipe) -> Result<RecipeCard> {
        larder_core::create_recipe(&self.conn, recipe).context("Failed to create recipe")
    }

    pub fn list_recipes(&self) -> Result<Vec<RecipeCard>> {
        larder_core::list_recipes(&self.conn).context("Failed to list recipes")
    }

    pub fn set_favorite(&self, id: i64, favorite: bool) -> Result<()> {
        let found =
            larder_core::set_favorite(&self.conn, id, favorite).context("Failed to update recipe")?;
        if !found {
            anyhow::bail!(larder_core::Error::RecipeNotFound(id));
        }
        Ok(())
    }

    pub fn delete_recipe(&self, id: i64) -> Result<()> {
        let found = larder_core::delete_recipe(&self.conn, id).context("Failed to delete recipe")?;
        if !found {
            anyhow::bail!(larder_core::Error::RecipeNotFound(id));
        }
        Ok(())
    }

    pub fn create_group(&self, name: &str) -> Result<Group> {
        larder_core::create_group(&self.conn, name)
            .with_context(|| format!("Failed to create group '{}'", name))
    }

    pub fn list_groups(&self) -> Result<Vec<Group>> {
        larder_core::list_groups(&self.conn).context("Failed to list groups")
    }

    pub fn assign_group(&self, group_id: i64, recipe_id: i64, included: bool) -> Result<()> {
        let exists = larder_core::group_exists(&self.conn, group_id)
            .context("Failed to look up group")?;
        if !exists {
            anyhow::bail!(larder_core::Error::GroupNotFound(group_id));
        }
        if included {
            larder_core::assign_group(&self.conn, group_id, recipe_id)
        } else {
            larder_core::unassign_group(&self.conn, group_id, recipe_id)
        }
        .context("Failed to update group membership")
    }

    /// Saved filter state for the named session
    pub fn session(&self, name: &str) -> SqliteSession<'_> {
        SqliteSession::new(&self.conn, name)
    }
}
