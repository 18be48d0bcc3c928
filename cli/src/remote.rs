use anyhow::Context;
use larder_core::{FilterOptions, RecipeCard};
use reqwest::blocking::Client;

/// Read-only client for a larder server's recipe API
pub struct RemoteClient {
    base_url: String,
    client: Client,
}

impl RemoteClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn fetch_recipes(&self) -> anyhow::Result<Vec<RecipeCard>> {
        let url = format!("{}/recipes", self.base_url);
        self.client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Failed to fetch recipes from {}", url))?
            .json()
            .context("Failed to decode recipe list")
    }

    pub fn fetch_options(&self) -> anyhow::Result<FilterOptions> {
        let url = format!("{}/filters/options", self.base_url);
        self.client
            .get(&url)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Failed to fetch filter options from {}", url))?
            .json()
            .context("Failed to decode filter options")
    }
}
