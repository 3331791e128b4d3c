pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod state;

pub use app::RecipeApp;
pub use client::{RecipeClient, RecipeSource};
pub use config::ApiConfig;
pub use error::RecipeError;
pub use model::Recipe;
pub use state::{FetchKind, Status};

/// Load the featured set and, if `query` is given and not blank, search for it.
///
/// Returns the rendered page. Fetch failures show up as the error line on the
/// page, not as an `Err`.
pub async fn render_with_config(
    config: ApiConfig,
    query: Option<&str>,
) -> Result<String, RecipeError> {
    let mut app = RecipeApp::from_config(config)?;
    app.load_featured().await;

    if let Some(query) = query {
        app.set_query(query);
        app.submit().await;
    }

    Ok(render::render_app(&app))
}
