//! Mutation service: create, update and delete with all-or-nothing semantics
//!
//! Each operation runs in a single transaction. On success it commits and
//! returns the stored entity. On any failure the transaction guard is
//! dropped, which rolls it back and returns the connection to the pool;
//! the failure is logged and handed back as a typed [`Error`].

use crate::input::{ArtistEdit, NewArtist, NewShow, NewVenue, VenueEdit};
use crate::models::{ARTIST_COLUMNS, VENUE_COLUMNS};
use crate::{Artist, Error, Result, Show, Venue};
use sqlx::types::Json;
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::{error, info, warn};

pub async fn create_venue(pool: &SqlitePool, input: NewVenue) -> Result<Venue> {
    let result = insert_venue(pool, &input).await;
    log_outcome("create venue", &input.name, result)
}

async fn insert_venue(pool: &SqlitePool, input: &NewVenue) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let sql = format!(
        r#"
        INSERT INTO venue (
            name, genres, address, city, state, phone,
            website, facebook_link, image_link, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {}
        "#,
        VENUE_COLUMNS
    );
    let venue = sqlx::query_as::<_, Venue>(&sql)
        .bind(&input.name)
        .bind(Json(&input.genres))
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.website)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(input.seeking_talent)
        .bind(&input.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(venue)
}

pub async fn create_artist(pool: &SqlitePool, input: NewArtist) -> Result<Artist> {
    let result = insert_artist(pool, &input).await;
    log_outcome("create artist", &input.name, result)
}

async fn insert_artist(pool: &SqlitePool, input: &NewArtist) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let sql = format!(
        r#"
        INSERT INTO artist (
            name, genres, city, state, phone,
            website, facebook_link, image_link, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {}
        "#,
        ARTIST_COLUMNS
    );
    let artist = sqlx::query_as::<_, Artist>(&sql)
        .bind(&input.name)
        .bind(Json(&input.genres))
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.phone)
        .bind(&input.website)
        .bind(&input.facebook_link)
        .bind(&input.image_link)
        .bind(input.seeking_venue)
        .bind(&input.seeking_description)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(artist)
}

/// Schedule a show
///
/// A missing venue or artist is reported as invalid input; scheduling the
/// same artist at the same venue and time twice is a conflict.
pub async fn create_show(pool: &SqlitePool, input: NewShow) -> Result<Show> {
    let subject = format!("venue {} / artist {}", input.venue_id, input.artist_id);
    let result = insert_show(pool, &input).await;
    log_outcome("create show", &subject, result)
}

async fn insert_show(pool: &SqlitePool, input: &NewShow) -> Result<Show> {
    let mut tx = pool.begin().await?;

    if !row_exists(&mut tx, "venue", input.venue_id).await? {
        return Err(Error::InvalidInput(format!("Venue {} does not exist", input.venue_id)));
    }
    if !row_exists(&mut tx, "artist", input.artist_id).await? {
        return Err(Error::InvalidInput(format!("Artist {} does not exist", input.artist_id)));
    }

    sqlx::query("INSERT INTO show (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(input.venue_id)
        .bind(input.artist_id)
        .bind(input.start_time)
        .execute(&mut *tx)
        .await
        .map_err(|e| match Error::from(e) {
            e if e.is_unique_violation() => {
                Error::Conflict("This show is already scheduled".to_string())
            }
            e => e,
        })?;

    tx.commit().await?;

    Ok(Show {
        venue_id: input.venue_id,
        artist_id: input.artist_id,
        start_time: input.start_time,
    })
}

async fn row_exists(tx: &mut Transaction<'_, Sqlite>, table: &str, id: i64) -> Result<bool> {
    // table is one of two literals above, never user input
    let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", table);
    let exists: bool = sqlx::query_scalar(&sql).bind(id).fetch_one(&mut **tx).await?;
    Ok(exists)
}

/// Overwrite the edit-form fields of a venue; other columns keep their values
pub async fn update_venue(pool: &SqlitePool, id: i64, edit: VenueEdit) -> Result<Venue> {
    let result = apply_venue_edit(pool, id, &edit).await;
    log_outcome("update venue", &edit.name, result)
}

async fn apply_venue_edit(pool: &SqlitePool, id: i64, edit: &VenueEdit) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let sql = format!(
        r#"
        UPDATE venue
        SET name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?, facebook_link = ?
        WHERE id = ?
        RETURNING {}
        "#,
        VENUE_COLUMNS
    );
    let venue = sqlx::query_as::<_, Venue>(&sql)
        .bind(&edit.name)
        .bind(&edit.city)
        .bind(&edit.state)
        .bind(&edit.address)
        .bind(&edit.phone)
        .bind(Json(&edit.genres))
        .bind(&edit.facebook_link)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Venue {}", id)))?;

    tx.commit().await?;
    Ok(venue)
}

/// Overwrite the edit-form fields of an artist; other columns keep their values
pub async fn update_artist(pool: &SqlitePool, id: i64, edit: ArtistEdit) -> Result<Artist> {
    let result = apply_artist_edit(pool, id, &edit).await;
    log_outcome("update artist", &edit.name, result)
}

async fn apply_artist_edit(pool: &SqlitePool, id: i64, edit: &ArtistEdit) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let sql = format!(
        r#"
        UPDATE artist
        SET name = ?, city = ?, state = ?, phone = ?, genres = ?
        WHERE id = ?
        RETURNING {}
        "#,
        ARTIST_COLUMNS
    );
    let artist = sqlx::query_as::<_, Artist>(&sql)
        .bind(&edit.name)
        .bind(&edit.city)
        .bind(&edit.state)
        .bind(&edit.phone)
        .bind(Json(&edit.genres))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Artist {}", id)))?;

    tx.commit().await?;
    Ok(artist)
}

/// Delete a venue and, through the foreign key cascade, all of its shows
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<Venue> {
    let result = remove_venue(pool, id).await;
    log_outcome("delete venue", &format!("#{}", id), result)
}

async fn remove_venue(pool: &SqlitePool, id: i64) -> Result<Venue> {
    let mut tx = pool.begin().await?;

    let sql = format!("DELETE FROM venue WHERE id = ? RETURNING {}", VENUE_COLUMNS);
    let venue = sqlx::query_as::<_, Venue>(&sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Venue {}", id)))?;

    tx.commit().await?;
    Ok(venue)
}

/// Delete an artist and, through the foreign key cascade, all of their shows
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<Artist> {
    let result = remove_artist(pool, id).await;
    log_outcome("delete artist", &format!("#{}", id), result)
}

async fn remove_artist(pool: &SqlitePool, id: i64) -> Result<Artist> {
    let mut tx = pool.begin().await?;

    let sql = format!("DELETE FROM artist WHERE id = ? RETURNING {}", ARTIST_COLUMNS);
    let artist = sqlx::query_as::<_, Artist>(&sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Artist {}", id)))?;

    tx.commit().await?;
    Ok(artist)
}

/// Log a committed or rolled-back mutation and pass the result through
fn log_outcome<T>(action: &str, subject: &str, result: Result<T>) -> Result<T> {
    match &result {
        Ok(_) => info!("{} {:?}: committed", action, subject),
        Err(e @ (Error::NotFound(_) | Error::InvalidInput(_) | Error::Conflict(_))) => {
            warn!("{} {:?}: rolled back: {}", action, subject, e)
        }
        Err(e) => error!("{} {:?}: rolled back: {}", action, subject, e),
    }
    result
}
