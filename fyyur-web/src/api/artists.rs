//! Artist handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Json, Router,
};
use fyyur_common::input::{ArtistEdit, FormFields, NewArtist};
use fyyur_common::{mutation, query, time, Error};

use super::ui::render_home;
use super::{page_with_status, parse_id, DeleteResponse, DetailParams};
use crate::error::{status_for, PageResult};
use crate::{flash, pages, AppState};

pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/:id", get(show_artist).delete(delete_artist))
        .route("/artists/:id/edit", get(edit_artist_form).post(edit_artist))
}

/// GET /artists
pub async fn list_artists(State(state): State<AppState>) -> PageResult<Html<String>> {
    let artists = query::list_artists(&state.db).await?;
    Ok(Html(pages::artists::artist_list(&artists)))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Html<String>> {
    let form = FormFields::from(pairs);
    let term = form.get("search_term").unwrap_or("");
    let results = query::search_artists(&state.db, term).await?;
    Ok(Html(pages::artists::search_results(term, &results)))
}

/// GET /artists/:id
pub async fn show_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(params): Query<DetailParams>,
) -> PageResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let detail = query::artist_detail(&state.db, id, time::now()).await?;
    let flash = params
        .updated
        .then(|| flash::updated("Artist", &detail.artist.name, detail.artist.id));
    Ok(Html(pages::artists::artist_page(&detail, flash.as_ref())))
}

/// GET /artists/create
pub async fn create_artist_form() -> Html<String> {
    Html(pages::forms::new_artist(&FormFields::default(), None))
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Response> {
    let form = FormFields::from(pairs);
    let name = form.get("name").unwrap_or_default().to_string();

    let input = match NewArtist::from_form(&form) {
        Ok(input) => input,
        Err(e) => {
            let flash = flash::not_listed("Artist", &name).with_reason(&e);
            return Ok(page_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::forms::new_artist(&form, Some(&flash)),
            ));
        }
    };

    match mutation::create_artist(&state.db, input).await {
        Ok(artist) => {
            let flash = flash::listed("Artist", &artist.name, artist.id);
            Ok(Html(render_home(&state.db, Some(&flash)).await?).into_response())
        }
        Err(e) => {
            let flash = flash::not_listed("Artist", &name);
            let page = render_home(&state.db, Some(&flash)).await?;
            Ok(page_with_status(status_for(&e), page))
        }
    }
}

/// GET /artists/:id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> PageResult<Html<String>> {
    let id = parse_id(&raw_id)?;
    let artist = query::get_artist(&state.db, id).await?;
    let form = pages::forms::artist_values(&artist);
    Ok(Html(pages::forms::edit_artist(id, &form, None)))
}

/// POST /artists/:id/edit
pub async fn edit_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Response> {
    let id = parse_id(&raw_id)?;
    let form = FormFields::from(pairs);
    let name = form.get("name").unwrap_or_default().to_string();

    let edit = match ArtistEdit::from_form(&form) {
        Ok(edit) => edit,
        Err(e) => {
            let flash = flash::not_updated("Artist", &name).with_reason(&e);
            return Ok(page_with_status(
                StatusCode::UNPROCESSABLE_ENTITY,
                pages::forms::edit_artist(id, &form, Some(&flash)),
            ));
        }
    };

    match mutation::update_artist(&state.db, id, edit).await {
        Ok(artist) => {
            Ok(Redirect::to(&format!("/artists/{}?updated=true", artist.id)).into_response())
        }
        Err(e @ Error::NotFound(_)) => Err(e.into()),
        Err(e) => {
            let flash = flash::not_updated("Artist", &name);
            Ok(page_with_status(
                status_for(&e),
                pages::forms::edit_artist(id, &form, Some(&flash)),
            ))
        }
    }
}

/// DELETE /artists/:id
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> (StatusCode, Json<DeleteResponse>) {
    let failed = |status: StatusCode| {
        (
            status,
            Json(DeleteResponse {
                success: false,
                message: flash::not_deleted("Artist"),
            }),
        )
    };

    let Ok(id) = parse_id(&raw_id) else {
        return failed(StatusCode::NOT_FOUND);
    };

    match mutation::delete_artist(&state.db, id).await {
        Ok(artist) => (
            StatusCode::OK,
            Json(DeleteResponse {
                success: true,
                message: flash::deleted("Artist", &artist.name, artist.id),
            }),
        ),
        Err(e) => failed(status_for(&e)),
    }
}
