//! Home page, stylesheet and 404 fallback

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use fyyur_common::query;
use sqlx::SqlitePool;

use crate::error::{PageError, PageResult};
use crate::flash::Flash;
use crate::pages;
use crate::AppState;

const FYYUR_CSS: &str = include_str!("../ui/fyyur.css");

pub fn ui_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/static/fyyur.css", get(serve_css))
}

/// GET /
pub async fn index(State(state): State<AppState>) -> PageResult<Html<String>> {
    Ok(Html(render_home(&state.db, None).await?))
}

/// GET /static/fyyur.css
pub async fn serve_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        FYYUR_CSS,
    )
        .into_response()
}

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> PageError {
    PageError::NotFound(uri.path().to_string())
}

/// Home page with recent listings; create handlers land here with a flash
pub(crate) async fn render_home(db: &SqlitePool, flash: Option<&Flash>) -> PageResult<String> {
    let recent = query::recent_listings(db, pages::home::RECENT_LIMIT).await?;
    Ok(pages::home::home(&recent, flash))
}
