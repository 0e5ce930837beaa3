//! Handler for the landing page.

use axum::response::Html;

/// Static greeting.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> Html<&'static str> {
    Html("<h1>Bakery GET-POST-PATCH-DELETE API</h1>")
}
