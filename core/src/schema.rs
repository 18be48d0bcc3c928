/// SQL schema for a recipe database (used by both CLI and server)
pub const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS recipes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT,
    meal_type TEXT,
    dietary_preference TEXT,
    total_time INTEGER,
    is_favorite INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER
);

CREATE TABLE IF NOT EXISTS recipe_groups (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS recipe_group_members (
    group_id INTEGER NOT NULL,
    recipe_id INTEGER NOT NULL,
    PRIMARY KEY (group_id, recipe_id),
    FOREIGN KEY (group_id) REFERENCES recipe_groups (id) ON DELETE CASCADE,
    FOREIGN KEY (recipe_id) REFERENCES recipes (id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_recipes_name ON recipes(name);

PRAGMA user_version = 1;
"#;

/// Migration from V1 to V2: session key/value storage for saved filter state
pub const MIGRATION_V1_TO_V2: &str = r#"
CREATE TABLE IF NOT EXISTS session_state (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_recipes_created_at ON recipes(created_at);

PRAGMA user_version = 2;
"#;

/// Get current schema version from database
pub fn get_schema_version(conn: &rusqlite::Connection) -> Result<i32, rusqlite::Error> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Run migrations to bring database to current schema version
pub fn migrate(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.pragma_update(None, "foreign_keys", true)?;

    let mut version = get_schema_version(conn)?;

    if version == 0 {
        conn.execute_batch(SCHEMA_V1)?;
        version = 1;
    }

    if version == 1 {
        conn.execute_batch(MIGRATION_V1_TO_V2)?;
        version = 2;
    }

    if version == 2 {
        Ok(())
    } else {
        Err(rusqlite::Error::InvalidQuery)
    }
}
