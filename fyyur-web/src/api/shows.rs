//! Show handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use fyyur_common::input::{FormFields, NewShow};
use fyyur_common::{mutation, query, Error};

use super::page_with_status;
use super::ui::render_home;
use crate::error::{status_for, PageResult};
use crate::{flash, pages, AppState};

pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}

/// GET /shows
pub async fn list_shows(State(state): State<AppState>) -> PageResult<Html<String>> {
    let shows = query::list_shows(&state.db).await?;
    Ok(Html(pages::shows::show_list(&shows)))
}

/// GET /shows/create
pub async fn create_show_form() -> Html<String> {
    Html(pages::forms::new_show(&FormFields::default(), None))
}

/// POST /shows/create
///
/// Unknown venue/artist ids and duplicate shows re-render the form with the
/// reason; other failures land on the home page.
pub async fn create_show(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Response> {
    let form = FormFields::from(pairs);

    let input = match NewShow::from_form(&form) {
        Ok(input) => input,
        Err(e) => {
            let flash = flash::show_not_listed().with_reason(&e);
            return Ok(page_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::forms::new_show(&form, Some(&flash)),
            ));
        }
    };

    match mutation::create_show(&state.db, input).await {
        Ok(_) => {
            let flash = flash::show_listed();
            Ok(Html(render_home(&state.db, Some(&flash)).await?).into_response())
        }
        Err(e @ (Error::InvalidInput(_) | Error::Conflict(_))) => {
            let flash = flash::show_not_listed().with_reason(&e);
            Ok(page_with_status(
                status_for(&e),
                pages::forms::new_show(&form, Some(&flash)),
            ))
        }
        Err(e) => {
            let page = render_home(&state.db, Some(&flash::show_not_listed())).await?;
            Ok(page_with_status(status_for(&e), page))
        }
    }
}
