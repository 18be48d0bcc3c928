use std::collections::HashMap;

use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::db::{delete_session_value, get_session_value, set_session_value};
use crate::error::Result;
use crate::models::{Direction, FilterSpec, SortKey};

/// Everything a browse view needs to pick up where it left off
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSnapshot {
    pub spec: FilterSpec,
    pub sort_by: SortKey,
    pub direction: Direction,
    pub panel_open: bool,
}

/// Session-scoped storage for a filter snapshot
pub trait SessionStore {
    fn save(&mut self, snapshot: &FilterSnapshot) -> Result<()>;
    fn load(&self) -> Result<Option<FilterSnapshot>>;
    fn clear(&mut self) -> Result<()>;

    /// Load and clear, so a snapshot is restored at most once
    fn take(&mut self) -> Result<Option<FilterSnapshot>> {
        let snapshot = self.load();
        self.clear()?;
        snapshot
    }
}

pub const SNAPSHOT_KEY: &str = "recipe_browser_filters";

/// In-process string storage, keyed like browser session storage
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: &FilterSnapshot) -> Result<Self> {
        let mut session = Self::new();
        session.save(snapshot)?;
        Ok(session)
    }

    /// Raw stored value, if any
    pub fn raw(&self) -> Option<&str> {
        self.values.get(SNAPSHOT_KEY).map(String::as_str)
    }

    pub fn set_raw(&mut self, value: impl Into<String>) {
        self.values.insert(SNAPSHOT_KEY.to_string(), value.into());
    }
}

impl SessionStore for MemorySession {
    fn save(&mut self, snapshot: &FilterSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.set_raw(json);
        Ok(())
    }

    fn load(&self) -> Result<Option<FilterSnapshot>> {
        self.raw()
            .map(|json| serde_json::from_str(json).map_err(Into::into))
            .transpose()
    }

    fn clear(&mut self) -> Result<()> {
        self.values.remove(SNAPSHOT_KEY);
        Ok(())
    }
}

/// Snapshot stored in the `session_state` table of a recipe database
pub struct SqliteSession<'a> {
    conn: &'a Connection,
    key: String,
}

impl<'a> SqliteSession<'a> {
    /// `name` scopes the snapshot, e.g. one per CLI profile
    pub fn new(conn: &'a Connection, name: &str) -> Self {
        Self {
            conn,
            key: format!("{}:{}", SNAPSHOT_KEY, name),
        }
    }
}

impl SessionStore for SqliteSession<'_> {
    fn save(&mut self, snapshot: &FilterSnapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        set_session_value(self.conn, &self.key, &json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<FilterSnapshot>> {
        match get_session_value(self.conn, &self.key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn clear(&mut self) -> Result<()> {
        delete_session_value(self.conn, &self.key)?;
        Ok(())
    }
}
