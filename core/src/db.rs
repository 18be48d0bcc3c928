use crate::error::Error;
use crate::models::{Group, NewRecipe, RecipeCard};
use crate::schema;
use rusqlite::{params, Connection, OptionalExtension, Result, Row};
use std::collections::HashMap;
use std::path::Path;

const RECIPE_COLUMNS: &str =
    "id, name, category, meal_type, dietary_preference, total_time, is_favorite, created_at";

/// Open or create a recipe database at the specified path
pub fn open_db(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

fn recipe_from_row(row: &Row<'_>) -> Result<RecipeCard> {
    Ok(RecipeCard {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        meal_type: row.get(3)?,
        dietary_preference: row.get(4)?,
        total_time: row.get(5)?,
        is_favorite: row.get(6)?,
        created_at: row.get(7)?,
        group_ids: vec![],
    })
}

/// Create a new recipe, stamped with the current time.
///
/// The recipe row and its group links are written in one transaction; an
/// unknown group id leaves nothing behind.
pub fn create_recipe(conn: &Connection, recipe: &NewRecipe) -> crate::Result<RecipeCard> {
    let tx = conn.unchecked_transaction()?;

    for group_id in &recipe.group_ids {
        if !group_exists(&tx, *group_id)? {
            return Err(Error::GroupNotFound(*group_id));
        }
    }

    let now = chrono::Utc::now().timestamp_millis();
    tx.execute(
        "INSERT INTO recipes (name, category, meal_type, dietary_preference, total_time, is_favorite, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            recipe.name,
            recipe.category,
            recipe.meal_type,
            recipe.dietary_preference,
            recipe.total_time,
            recipe.is_favorite,
            now
        ],
    )?;
    let id = tx.last_insert_rowid();

    for group_id in &recipe.group_ids {
        assign_group(&tx, *group_id, id)?;
    }
    tx.commit()?;

    Ok(RecipeCard {
        id,
        name: recipe.name.clone(),
        category: recipe.category.clone(),
        meal_type: recipe.meal_type.clone(),
        dietary_preference: recipe.dietary_preference.clone(),
        total_time: recipe.total_time,
        is_favorite: recipe.is_favorite,
        created_at: Some(now),
        group_ids: recipe.group_ids.clone(),
    })
}

/// Get a recipe by ID
pub fn get_recipe_by_id(conn: &Connection, id: i64) -> Result<Option<RecipeCard>> {
    let sql = format!("SELECT {} FROM recipes WHERE id = ?1", RECIPE_COLUMNS);
    let recipe = conn
        .query_row(&sql, params![id], recipe_from_row)
        .optional()?;

    match recipe {
        Some(mut recipe) => {
            let mut stmt = conn.prepare(
                "SELECT group_id FROM recipe_group_members WHERE recipe_id = ?1 ORDER BY group_id",
            )?;
            let ids = stmt.query_map(params![id], |row| row.get(0))?;
            recipe.group_ids = ids.collect::<Result<Vec<i64>>>()?;
            Ok(Some(recipe))
        }
        None => Ok(None),
    }
}

/// Every recipe card, ordered by id
pub fn list_recipes(conn: &Connection) -> Result<Vec<RecipeCard>> {
    let mut memberships: HashMap<i64, Vec<i64>> = HashMap::new();
    let mut stmt = conn.prepare(
        "SELECT recipe_id, group_id FROM recipe_group_members ORDER BY recipe_id, group_id",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
    for row in rows {
        let (recipe_id, group_id) = row?;
        memberships.entry(recipe_id).or_default().push(group_id);
    }

    let sql = format!("SELECT {} FROM recipes ORDER BY id", RECIPE_COLUMNS);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], recipe_from_row)?;

    let mut recipes = Vec::new();
    for recipe in rows {
        let mut recipe = recipe?;
        recipe.group_ids = memberships.remove(&recipe.id).unwrap_or_default();
        recipes.push(recipe);
    }

    Ok(recipes)
}

/// Mark or unmark a favorite; false when no such recipe
pub fn set_favorite(conn: &Connection, id: i64, favorite: bool) -> Result<bool> {
    let changed = conn.execute(
        "UPDATE recipes SET is_favorite = ?1 WHERE id = ?2",
        params![favorite, id],
    )?;
    Ok(changed > 0)
}

/// Delete a recipe and its group memberships; false when no such recipe
pub fn delete_recipe(conn: &Connection, id: i64) -> Result<bool> {
    conn.execute(
        "DELETE FROM recipe_group_members WHERE recipe_id = ?1",
        params![id],
    )?;
    let changed = conn.execute("DELETE FROM recipes WHERE id = ?1", params![id])?;
    Ok(changed > 0)
}

/// Create a group
pub fn create_group(conn: &Connection, name: &str) -> Result<Group> {
    conn.execute(
        "INSERT INTO recipe_groups (name) VALUES (?1)",
        params![name],
    )?;

    Ok(Group {
        id: conn.last_insert_rowid(),
        name: name.to_string(),
    })
}

/// All groups, ordered by name
pub fn list_groups(conn: &Connection) -> Result<Vec<Group>> {
    let mut stmt = conn.prepare("SELECT id, name FROM recipe_groups ORDER BY name")?;
    let rows = stmt.query_map([], |row| {
        Ok(Group {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    rows.collect()
}

pub fn group_exists(conn: &Connection, id: i64) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM recipe_groups WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )
}

/// Add a recipe to a group (no-op if already a member)
pub fn assign_group(conn: &Connection, group_id: i64, recipe_id: i64) -> Result<()> {
    conn.execute(
        "INSERT OR IGNORE INTO recipe_group_members (group_id, recipe_id) VALUES (?1, ?2)",
        params![group_id, recipe_id],
    )?;
    Ok(())
}

/// Remove a recipe from a group
pub fn unassign_group(conn: &Connection, group_id: i64, recipe_id: i64) -> Result<()> {
    conn.execute(
        "DELETE FROM recipe_group_members WHERE group_id = ?1 AND recipe_id = ?2",
        params![group_id, recipe_id],
    )?;
    Ok(())
}

/// Get session state value
pub fn get_session_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM session_state WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
}

/// Set session state value
pub fn set_session_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO session_state (key, value) VALUES (?1, ?2)",
        params![key, value],
    )?;
    Ok(())
}

/// Delete session state value
pub fn delete_session_value(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM session_state WHERE key = ?1", params![key])?;
    Ok(())
}
