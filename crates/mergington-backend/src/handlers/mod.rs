pub mod activities;
pub mod error;
pub mod health;

use axum::response::Redirect;

pub const INDEX_PAGE: &str = "/static/index.html";

/// Handle the `/` route by sending the browser to the bundled front page.
pub async fn root() -> Redirect {
    Redirect::temporary(INDEX_PAGE)
}
