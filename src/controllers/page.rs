use axum::response::Html;

/// GET / - The audiobook form
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
