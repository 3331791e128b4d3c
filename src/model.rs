use serde::Deserialize;

/// One recipe as returned by the API. Read-only; never persisted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub label: String,
    pub image: String,
    pub calories: f64,
    pub ingredient_lines: Vec<String>,
    pub url: String,
}

impl Recipe {
    /// Calorie count rounded to the nearest whole kcal
    pub fn rounded_calories(&self) -> i64 {
        self.calories.round() as i64
    }
}

/// Response envelope of the search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    pub recipe: Recipe,
}

impl SearchResponse {
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.hits.into_iter().map(|hit| hit.recipe).collect()
    }
}
