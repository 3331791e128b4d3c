use crate::config::ApiConfig;
use crate::error::RecipeError;
use crate::model::{Recipe, SearchResponse};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

/// Anything that can answer a recipe search
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Run one search and return the recipes in API order
    async fn search(&self, term: &str) -> Result<Vec<Recipe>, RecipeError>;
}

/// HTTP client for the public recipe search endpoint
pub struct RecipeClient {
    client: Client,
    config: ApiConfig,
}

impl RecipeClient {
    pub fn new(config: ApiConfig) -> Result<Self, RecipeError> {
        let mut builder =
            Client::builder().user_agent("Mozilla/5.0 (compatible; RecipeFinder/0.1)");
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| RecipeError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl RecipeSource for RecipeClient {
    async fn search(&self, term: &str) -> Result<Vec<Recipe>, RecipeError> {
        debug!("GET {} q={:?}", self.config.base_url, term);

        // Pairs are percent-encoded, so reserved characters in the term are safe
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("type", "public"),
                ("q", term),
                ("app_id", self.config.app_id.as_str()),
                ("app_key", self.config.app_key.as_deref().unwrap_or_default()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let recipes = serde_json::from_str::<SearchResponse>(&body)?.into_recipes();
        debug!("{} hits for {:?}", recipes.len(), term);
        Ok(recipes)
    }
}
