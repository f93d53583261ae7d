//! Index page listing the available API routes

use axum::response::Html;
use shared::API_ROUTES;

/// List all available api routes
pub async fn index() -> Html<String> {
    let mut body = String::from("Available Routes:<br/>");
    let lines: Vec<String> = API_ROUTES
        .iter()
        .map(|route| format!("{}: {}", route.title, escape_html(route.path)))
        .collect();
    body.push_str(&lines.join("<br/>"));
    Html(body)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
