//! HTML rendering of the search page and recipe cards.
//!
//! Every piece of API text is escaped before it is written, attributes with
//! [`encode_double_quoted_attribute`] and element content with [`encode_text`].

use crate::client::RecipeSource;
use crate::model::Recipe;
use crate::state::Status;
use crate::RecipeApp;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;

pub const PAGE_TITLE: &str = "Project-9 Recipe App";
pub const SEARCH_PLACEHOLDER: &str = "Recipe Title Here...";
pub const LOADING_TEXT: &str = "Loading...";
pub const LINK_TEXT: &str = "Learn More About...";

/// Render the whole page for the current app state
pub fn render_app<S: RecipeSource>(app: &RecipeApp<S>) -> String {
    render_page(app.query(), app.status(), app.visible_recipes())
}

/// Render the page: heading, search form, status lines and the card grid
pub fn render_page(query: &str, status: &Status, recipes: &[Recipe]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", PAGE_TITLE);
    html.push_str("</head>\n<body class=\"bg-pink-100 min-h-screen p-5\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"text-center text-3xl font-bold mb-5\">{}</h1>",
        PAGE_TITLE
    );

    html.push_str(&render_search_form(query));

    // Loading does not hide the cards that are already on screen
    if status.loading {
        let _ = writeln!(html, "<p class=\"loading text-center\">{}</p>", LOADING_TEXT);
    }
    if status.has_error() {
        let _ = writeln!(
            html,
            "<p class=\"error text-center text-red-500\">{}</p>",
            encode_text(&status.error)
        );
    }

    html.push_str("<div class=\"grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-5\">\n");
    for recipe in recipes {
        html.push_str(&render_card(recipe));
    }
    html.push_str("</div>\n</body>\n</html>\n");

    html
}

/// Search form with the query as the input's current value.
///
/// The form carries no action: keystrokes go to [`RecipeApp::set_query`] and
/// submission to [`RecipeApp::submit`].
pub fn render_search_form(query: &str) -> String {
    format!(
        concat!(
            "<form class=\"flex justify-center items-center mb-5\">\n",
            "<input type=\"text\" value=\"{}\" placeholder=\"{}\" class=\"w-1/2 p-2 border rounded-l-md\">\n",
            "<button type=\"submit\" class=\"p-2 bg-pink-500 text-white rounded-r-md\">Search</button>\n",
            "</form>\n"
        ),
        encode_double_quoted_attribute(query),
        SEARCH_PLACEHOLDER
    )
}

/// One recipe card
pub fn render_card(recipe: &Recipe) -> String {
    let mut html = String::from("<div class=\"card bg-white shadow-md rounded-md p-5\">\n");

    let _ = writeln!(
        html,
        "<h2 class=\"text-xl font-bold mb-3\">{}</h2>",
        encode_text(&recipe.label)
    );
    let _ = writeln!(
        html,
        "<img src=\"{}\" alt=\"{}\" class=\"w-full h-48 object-cover rounded-md mb-3\">",
        encode_double_quoted_attribute(&recipe.image),
        encode_double_quoted_attribute(&recipe.label)
    );
    let _ = writeln!(
        html,
        "<p class=\"calories text-gray-700 mb-3\">{} kcal</p>",
        recipe.rounded_calories()
    );

    html.push_str("<ul class=\"list-disc ml-5 mb-3\">\n");
    for line in &recipe.ingredient_lines {
        let _ = writeln!(html, "<li>{}</li>", encode_text(line));
    }
    html.push_str("</ul>\n");

    let _ = writeln!(
        html,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"text-pink-500\">{}</a>",
        encode_double_quoted_attribute(&recipe.url),
        LINK_TEXT
    );
    html.push_str("</div>\n");

    html
}
