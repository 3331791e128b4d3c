use crate::error::RecipeError;
use config::{Config, Environment, File, Map};
use serde::Deserialize;
use std::time::Duration;

/// Variable the web build used to carry the API key; still honoured as a fallback
const LEGACY_KEY_VAR: &str = "REACT_APP_RECIPE_API_KEY";

/// Settings for the recipe search API
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Search endpoint, queried with GET
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Application id sent as `app_id`
    #[serde(default = "default_app_id")]
    pub app_id: String,
    /// Secret sent as `app_key`. Not validated; a missing key just makes requests fail.
    #[serde(default)]
    pub app_key: Option<String>,
    /// Term used for the featured set loaded at startup
    #[serde(default = "default_featured_query")]
    pub featured_query: String,
    /// Request timeout in seconds. None waits indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: default_app_id(),
            app_key: None,
            featured_query: default_featured_query(),
            timeout_secs: None,
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.edamam.com/api/recipes/v2".to_string()
}

fn default_app_id() -> String {
    "782d2889".to_string()
}

fn default_featured_query() -> String {
    "pasta".to_string()
}

impl ApiConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. Default values
    ///
    /// If no key was found, `REACT_APP_RECIPE_API_KEY` is consulted.
    pub fn load() -> Result<Self, RecipeError> {
        let mut config = Self::from_sources("recipe-finder", None)?;
        if config.app_key.is_none() {
            config.app_key = std::env::var(LEGACY_KEY_VAR).ok();
        }
        Ok(config)
    }

    /// Layer the optional `file` under `RECIPE_FINDER__*` variables.
    /// `vars` stands in for the process environment when given.
    fn from_sources(file: &str, vars: Option<Map<String, String>>) -> Result<Self, RecipeError> {
        let settings = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("RECIPE_FINDER")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_app_key(mut self, app_key: impl Into<String>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
