use std::path::Path;

use serde::Serialize;

use crate::profile::{get_profile_db_path, Profile};

#[derive(Debug, Serialize)]
pub struct AppConfig {
    pub profile_name: String,
    pub profile_path: String,
    pub db_path: String,
    pub remote_url: Option<String>,
    pub profile_exists: bool,
}

impl AppConfig {
    pub fn from_profile(profile_name: &str, profile_path: &Path, profile: Option<&Profile>) -> Self {
        let db_path = profile
            .and_then(|p| p.db_path.as_ref())
            .cloned()
            .unwrap_or_else(|| {
                get_profile_db_path(profile_name)
                    .to_string_lossy()
                    .into_owned()
            });

        AppConfig {
            profile_name: profile_name.to_string(),
            profile_path: profile_path.to_string_lossy().into_owned(),
            db_path,
            remote_url: profile.and_then(|p| p.remote_url.clone()),
            profile_exists: profile.is_some(),
        }
    }

    /// Session key for saved filter state
    pub fn session_name(&self) -> &str {
        &self.profile_name
    }
}
