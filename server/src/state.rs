use rusqlite::Connection;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::{RestError, RestResult};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(db: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
        }
    }

    pub fn conn(&self) -> RestResult<MutexGuard<'_, Connection>> {
        self.db
            .lock()
            .map_err(|_| RestError::Internal("Database lock poisoned".to_string()))
    }
}
