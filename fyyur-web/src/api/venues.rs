//! Venue handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use fyyur_common::input::{FormFields, NewVenue, VenueEdit};
use fyyur_common::{mutation, query, time, Error};

use super::ui::render_home;
use super::{page_with_status, parse_id, DeleteResponse, DetailParams};
use crate::error::{status_for, PageResult};
use crate::{flash, pages, AppState};

pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/:id", get(show_venue).delete(delete_venue))
        .route("/venues/:id/edit", get(edit_venue_form).post(edit_venue))
}

/// GET /venues
pub async fn list_venues(State(state): State<AppState>) -> PageResult<Html<String>> {
    let areas = query::list_venues_by_area(&state.db, time::now()).await?;
    Ok(Html(pages::venues::venue_list(&areas)))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let form = FormFields::from(pairs);
    let term = form.get("search_term").unwrap_or("");
    let results = query::search_venues(&state.db, term).await?;
    Ok(Html(pages::venues::search_results(term, &results)))
}

/// GET /venues/:id
pub async fn show_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(params): Query<DetailParams>,
) -> PageResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let detail = query::venue_detail(&state.db, id, time::now()).await?;
    let flash = params
        .updated
        .then(|| flash::updated("Venue", &detail.venue.name, detail.venue.id));
    Ok(Html(pages::venues::venue_page(&detail, flash.as_ref())))
}

/// GET /venues/create
pub async fn create_venue_form() -> Html<String> {
    Html(pages::forms::new_venue(&FormFields::default(), None))
}

/// POST /venues/create
///
/// Renders the home page with the outcome; invalid input re-renders the form.
pub async fn create_venue(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Response> {
    let form = FormFields::from(pairs);
    let name = form.get("name").unwrap_or_default().to_string();

    let input = match NewVenue::from_form(&form) {
        Ok(input) => input,
        Err(e) => {
            let flash = flash::not_listed("Venue", &name).with_reason(&e);
            return Ok(page_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::forms::new_venue(&form, Some(&flash)),
            ));
        }
    };

    match mutation::create_venue(&state.db, input).await {
        Ok(venue) => {
            let flash = flash::listed("Venue", &venue.name, venue.id);
            Ok(Html(render_home(&state.db, Some(&flash)).await?).into_response())
        }
        Err(e) => {
            let flash = flash::not_listed("Venue", &name);
            let page = render_home(&state.db, Some(&flash)).await?;
            Ok(page_with_status(status_for(&e), page))
        }
    }
}

/// GET /venues/:id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> PageResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let venue = query::get_venue(&state.db, id).await?;
    let form = pages::forms::venue_values(&venue);
    Ok(Html(pages::forms::edit_venue(id, &form, None)))
}

/// POST /venues/:id/edit
///
/// Redirects to the detail page on success.
pub async fn edit_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Response> {
    let id = parse_id(&raw_id)?;
    let form = FormFields::from(pairs);
    let name = form.get("name").unwrap_or_default().to_string();

    let edit = match VenueEdit::from_form(&form) {
        Ok(edit) => edit,
        Err(e) => {
            let flash = flash::not_updated("Venue", &name).with_reason(&e);
            return Ok(page_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::forms::edit_venue(id, &form, Some(&flash)),
            ));
        }
    };

    match mutation::update_venue(&state.db, id, edit).await {
        Ok(venue) => Ok(Redirect::to(&format!("/venues/{}?updated=true", venue.id)).into_response()),
        Err(e @ Error::NotFound(_)) => Err(e.into()),
        Err(e) => {
            let flash = flash::not_updated("Venue", &name);
            Ok(page_with_status(
                status_for(&e),
                pages::forms::edit_venue(id, &form, Some(&flash)),
            ))
        }
    }
}

/// DELETE /venues/:id
///
/// Shows at the venue are removed with it.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> (StatusCode, Json<DeleteResponse>) {
    let failed = |status: StatusCode| {
        (
            status,
            Json(DeleteResponse {
                success: false,
                message: flash::not_deleted("Venue"),
            }),
        )
    };

    let Ok(id) = parse_id(&raw_id) else {
        return failed(StatusCode::NOT_FOUND);
    };

    match mutation::delete_venue(&state.db, id).await {
        Ok(venue) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success: true,
                message: flash::deleted("Venue", &venue.name, venue.id),
            }),
        ),
        Err(e) => failed(status_for(&e)),
    }
}
