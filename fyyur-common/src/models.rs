//! Entity models
//!
//! Row shapes of the `venue`, `artist` and `show` tables. Genres are stored as
//! a JSON array in a TEXT column.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    #[sqlx(json)]
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    #[sqlx(json)]
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// A scheduled performance; identified by all three fields together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

/// Column list shared by every `SELECT`/`RETURNING` on `venue`
pub(crate) const VENUE_COLUMNS: &str = "id, name, genres, address, city, state, phone, \
     website, facebook_link, image_link, seeking_talent, seeking_description";

/// Column list shared by every `SELECT`/`RETURNING` on `artist`
pub(crate) const ARTIST_COLUMNS: &str = "id, name, genres, city, state, phone, \
     website, facebook_link, image_link, seeking_venue, seeking_description";
