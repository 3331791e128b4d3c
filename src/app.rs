use crate::client::{RecipeClient, RecipeSource};
use crate::config::ApiConfig;
use crate::error::RecipeError;
use crate::model::Recipe;
use crate::state::{FetchKind, FetchTicket, Generation, Status};
use log::{debug, error, info, warn};

/// Page state: the query being typed, both result sets and the shared status.
///
/// Fetch failures never leave this type. They are logged and turned into the
/// fixed message of the operation that failed, and the target set keeps
/// whatever it held before.
pub struct RecipeApp<S: RecipeSource> {
    source: S,
    featured_query: String,
    query: String,
    featured: Vec<Recipe>,
    searched: Vec<Recipe>,
    status: Status,
    generation: Generation,
}

impl RecipeApp<RecipeClient> {
    /// Build an app backed by the HTTP client
    pub fn from_config(config: ApiConfig) -> Result<Self, RecipeError> {
        let featured_query = config.featured_query.clone();
        Ok(Self::new(RecipeClient::new(config)?, featured_query))
    }
}

impl<S: RecipeSource> RecipeApp<S> {
    pub fn new(source: S, featured_query: impl Into<String>) -> Self {
        Self {
            source,
            featured_query: featured_query.into(),
            query: String::new(),
            featured: Vec::new(),
            searched: Vec::new(),
            status: Status::default(),
            generation: Generation::default(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn featured(&self) -> &[Recipe] {
        &self.featured
    }

    pub fn searched(&self) -> &[Recipe] {
        &self.searched
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Replace the query text. Called on every keystroke.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Recipes to show: the searched set when it has anything, otherwise the featured set
    pub fn visible_recipes(&self) -> &[Recipe] {
        if self.searched.is_empty() {
            &self.featured
        } else {
            &self.searched
        }
    }

    /// Load the featured set with the configured default term
    pub async fn load_featured(&mut self) {
        info!("Loading featured recipes for {:?}", self.featured_query);
        let ticket = self.begin(FetchKind::Featured);
        let result = self.source.search(&self.featured_query).await;
        self.finish(ticket, result);
    }

    /// Load the searched set. Blank terms are ignored without a request.
    pub async fn load_searched(&mut self, term: &str) {
        let term = term.trim();
        if term.is_empty() {
            debug!("Ignoring blank search");
            return;
        }

        info!("Searching recipes for {:?}", term);
        let ticket = self.begin(FetchKind::Searched);
        let result = self.source.search(term).await;
        self.finish(ticket, result);
    }

    /// Form submission: search for the current query if it is not blank.
    ///
    /// Returns whether a request was made.
    pub async fn submit(&mut self) -> bool {
        let term = self.query.trim().to_string();
        if term.is_empty() {
            return false;
        }
        self.load_searched(&term).await;
        true
    }

    /// Mark a fetch as started and hand out its ticket
    pub fn begin(&mut self, kind: FetchKind) -> FetchTicket {
        self.status.loading = true;
        self.generation.issue(kind)
    }

    /// Apply the outcome of a fetch started with [`RecipeApp::begin`].
    ///
    /// Recipes land only if no newer fetch of the same kind was issued; the
    /// status changes only if no newer fetch of any kind was issued.
    pub fn finish(&mut self, ticket: FetchTicket, result: Result<Vec<Recipe>, RecipeError>) {
        let owns_status = self.generation.is_current(&ticket);

        match result {
            Ok(recipes) => {
                if self.generation.is_latest_of_kind(&ticket) {
                    debug!("Storing {} {:?} recipes", recipes.len(), ticket.kind);
                    match ticket.kind {
                        FetchKind::Featured => self.featured = recipes,
                        FetchKind::Searched => self.searched = recipes,
                    }
                } else {
                    warn!("Discarding stale {:?} response", ticket.kind);
                }
                if owns_status {
                    self.status.loading = false;
                    self.status.error.clear();
                }
            }
            Err(e) => {
                error!("{:?} fetch failed: {}", ticket.kind, e);
                if owns_status {
                    self.status.loading = false;
                    self.status.error = ticket.kind.error_message().to_string();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Answers searches from a script and records every term it was asked for
    #[derive(Default)]
    struct ScriptedSource {
        replies: Mutex<VecDeque<Result<Vec<Recipe>, RecipeError>>>,
        terms: Mutex<Vec<String>>,
    }

    impl ScriptedSource {
        fn with(replies: Vec<Result<Vec<Recipe>, RecipeError>>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                terms: Mutex::default(),
            }
        }

        fn terms(&self) -> Vec<String> {
            self.terms.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecipeSource for ScriptedSource {
        async fn search(&self, term: &str) -> Result<Vec<Recipe>, RecipeError> {
            self.terms.lock().unwrap().push(term.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Vec::new()))
        }
    }

    fn recipe(label: &str) -> Recipe {
        Recipe {
            label: label.to_string(),
            image: format!("https://img/{label}.jpg"),
            calories: 100.0,
            ingredient_lines: vec![format!("{label} base")],
            url: format!("https://recipes/{label}"),
        }
    }

    #[tokio::test]
    async fn test_load_featured_uses_default_term() {
        let source = ScriptedSource::with(vec![Ok(vec![recipe("a"), recipe("b")])]);
        let mut app = RecipeApp::new(source, "pasta");

        app.load_featured().await;

        assert_eq!(app.source.terms(), vec!["pasta"]);
        assert_eq!(app.featured().len(), 2);
        assert!(app.searched().is_empty());
        assert_eq!(app.visible_recipes(), app.featured());
        assert_eq!(app.status(), &Status::default());
    }

    #[tokio::test]
    async fn test_blank_submit_makes_no_request() {
        let mut app = RecipeApp::new(ScriptedSource::default(), "pasta");
        app.status.error = "previous".to_string();

        for blank in ["", "   ", "\t\n"] {
            app.set_query(blank);
            assert!(!app.submit().await);
        }

        assert!(app.source.terms().is_empty());
        assert_eq!(app.status().error, "previous");
        assert!(!app.status().loading);
    }

    #[tokio::test]
    async fn test_submit_searches_trimmed_query_once() {
        let source = ScriptedSource::with(vec![Ok(vec![recipe("soup")])]);
        let mut app = RecipeApp::new(source, "pasta");

        app.set_query("  tomato soup ");
        assert!(app.submit().await);

        assert_eq!(app.source.terms(), vec!["tomato soup"]);
        assert_eq!(app.query(), "  tomato soup ");
        assert_eq!(app.visible_recipes(), &[recipe("soup")]);
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let source = ScriptedSource::with(vec![
            Err(RecipeError::Status(500)),
            Ok(vec![recipe("x")]),
        ]);
        let mut app = RecipeApp::new(source, "pasta");

        app.load_searched("x").await;
        assert_eq!(app.status().error, "Arama sırasında bir hata oluştu!");

        app.load_searched("x").await;
        assert_eq!(app.status(), &Status::default());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_results() {
        let source = ScriptedSource::with(vec![
            Ok(vec![recipe("featured")]),
            Ok(vec![recipe("first")]),
            Err(RecipeError::Status(503)),
        ]);
        let mut app = RecipeApp::new(source, "pasta");

        app.load_featured().await;
        app.load_searched("first").await;
        app.load_searched("second").await;

        assert_eq!(app.searched(), &[recipe("first")]);
        assert_eq!(app.featured(), &[recipe("featured")]);
        assert_eq!(app.visible_recipes(), &[recipe("first")]);
        assert!(!app.status().loading);
        assert_eq!(app.status().error, "Arama sırasında bir hata oluştu!");
    }

    #[tokio::test]
    async fn test_featured_failure_message() {
        let source = ScriptedSource::with(vec![Err(RecipeError::Status(401))]);
        let mut app = RecipeApp::new(source, "pasta");

        app.load_featured().await;

        assert!(app.featured().is_empty());
        assert!(!app.status().loading);
        assert_eq!(app.status().error, "Tarifler yüklenirken bir hata oluştu!");
    }

    #[test]
    fn test_stale_search_cannot_overwrite_newer_one() {
        let mut app = RecipeApp::new(ScriptedSource::default(), "pasta");

        let older = app.begin(FetchKind::Searched);
        let newer = app.begin(FetchKind::Searched);
        assert!(app.status().loading);

        app.finish(newer, Ok(vec![recipe("new")]));
        app.finish(older, Err(RecipeError::Status(500)));
        app.finish(older, Ok(vec![recipe("old")]));

        assert_eq!(app.searched(), &[recipe("new")]);
        assert_eq!(app.status(), &Status::default());
    }

    #[test]
    fn test_late_featured_still_fills_featured_set() {
        let mut app = RecipeApp::new(ScriptedSource::default(), "pasta");

        let featured = app.begin(FetchKind::Featured);
        let search = app.begin(FetchKind::Searched);

        app.finish(search, Ok(vec![recipe("soup")]));
        assert!(!app.status().loading);

        app.finish(featured, Ok(vec![recipe("pasta")]));
        assert_eq!(app.featured(), &[recipe("pasta")]);
        assert_eq!(app.visible_recipes(), &[recipe("soup")]);
        assert!(!app.status().loading);
    }

    #[test]
    fn test_loading_stays_until_latest_fetch_finishes() {
        let mut app = RecipeApp::new(ScriptedSource::default(), "pasta");

        let search = app.begin(FetchKind::Searched);
        let featured = app.begin(FetchKind::Featured);

        app.finish(search, Ok(vec![recipe("soup")]));
        assert!(app.status().loading);

        app.finish(featured, Ok(Vec::new()));
        assert!(!app.status().loading);
    }
}
