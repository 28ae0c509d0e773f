//! Query service: read-side projections for the site's pages
//!
//! Every function runs explicit queries and returns materialized values;
//! nothing is loaded lazily. Functions that split shows into upcoming and
//! past take `now` from the caller so the boundary is deterministic.

use crate::models::{ARTIST_COLUMNS, VENUE_COLUMNS};
use crate::time::format_show_time;
use crate::{Artist, Error, Result, Show, Venue};
use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// Venues sharing one (state, city) location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Id and name of a venue or artist
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Listing {
    pub id: i64,
    pub name: String,
}

/// Result of a name search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> SearchResults<T> {
    fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// A show as seen from its venue's page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// A show as seen from its artist's page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// A row of the all-shows listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// Newest venues and artists for the home page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentListings {
    pub venues: Vec<Listing>,
    pub artists: Vec<Listing>,
}

#[derive(Debug, FromRow)]
struct VenueLocationRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    num_upcoming_shows: i64,
}

#[derive(Debug, FromRow)]
struct CounterpartRow {
    id: i64,
    name: String,
    image_link: Option<String>,
    start_time: NaiveDateTime,
}

#[derive(Debug, FromRow)]
struct ShowListingRow {
    venue_id: i64,
    venue_name: String,
    artist_id: i64,
    artist_name: String,
    artist_image_link: Option<String>,
    start_time: NaiveDateTime,
}

/// All venues grouped by location, ordered by state then city; venues by id
pub async fn list_venues_by_area(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<VenueArea>> {
    let rows = sqlx::query_as::<_, VenueLocationRow>(
        r#"
        SELECT v.id, v.name, v.city, v.state,
               (SELECT COUNT(*) FROM show s
                WHERE s.venue_id = v.id AND s.start_time >= ?) AS num_upcoming_shows
        FROM venue v
        ORDER BY v.state, v.city, v.id
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(group_by_area(rows))
}

/// Fold rows already sorted by (state, city, id) into location groups
fn group_by_area(rows: Vec<VenueLocationRow>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();

    for row in rows {
        let summary = VenueSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };

        match areas.last_mut() {
            Some(area) if area.state == row.state && area.city == row.city => {
                area.venues.push(summary);
            }
            _ => areas.push(VenueArea {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }

    areas
}

/// All artists ordered by id
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<Listing>> {
    let artists = sqlx::query_as::<_, Listing>("SELECT id, name FROM artist ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(artists)
}

/// Case-insensitive substring search on venue names
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<SearchResults<Venue>> {
    let sql = format!(
        "SELECT {} FROM venue WHERE name LIKE ? ESCAPE '\\' ORDER BY id",
        VENUE_COLUMNS
    );
    let venues = sqlx::query_as::<_, Venue>(&sql)
        .bind(like_pattern(term))
        .fetch_all(pool)
        .await?;
    Ok(SearchResults::new(venues))
}

/// Case-insensitive substring search on artist names
pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<SearchResults<Artist>> {
    let sql = format!(
        "SELECT {} FROM artist WHERE name LIKE ? ESCAPE '\\' ORDER BY id",
        ARTIST_COLUMNS
    );
    let artists = sqlx::query_as::<_, Artist>(&sql)
        .bind(like_pattern(term))
        .fetch_all(pool)
        .await?;
    Ok(SearchResults::new(artists))
}

/// `%term%` with LIKE wildcards in the term matched literally
///
/// SQLite's LIKE ignores case for ASCII letters only, so the term is passed
/// through unfolded and an exact-case match always hits.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Venue> {
    let sql = format!("SELECT {} FROM venue WHERE id = ?", VENUE_COLUMNS);
    sqlx::query_as::<_, Venue>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Venue {}", id)))
}

pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Artist> {
    let sql = format!("SELECT {} FROM artist WHERE id = ?", ARTIST_COLUMNS);
    sqlx::query_as::<_, Artist>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Artist {}", id)))
}

/// Venue page data: past shows newest first, upcoming shows soonest first
pub async fn venue_detail(pool: &SqlitePool, id: i64, now: NaiveDateTime) -> Result<VenueDetail> {
    let venue = get_venue(pool, id).await?;

    let past = sqlx::query_as::<_, CounterpartRow>(
        r#"
        SELECT a.id, a.name, a.image_link, s.start_time
        FROM show s JOIN artist a ON a.id = s.artist_id
        WHERE s.venue_id = ? AND s.start_time < ?
        ORDER BY s.start_time DESC
        "#,
    )
    .bind(id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    let upcoming = sqlx::query_as::<_, CounterpartRow>(
        r#"
        SELECT a.id, a.name, a.image_link, s.start_time
        FROM show s JOIN artist a ON a.id = s.artist_id
        WHERE s.venue_id = ? AND s.start_time >= ?
        ORDER BY s.start_time ASC
        "#,
    )
    .bind(id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    let past_shows: Vec<ArtistShow> = past.into_iter().map(ArtistShow::from).collect();
    let upcoming_shows: Vec<ArtistShow> = upcoming.into_iter().map(ArtistShow::from).collect();

    Ok(VenueDetail {
        venue,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

/// Artist page data: past shows newest first, upcoming shows soonest first
pub async fn artist_detail(pool: &SqlitePool, id: i64, now: NaiveDateTime) -> Result<ArtistDetail> {
    let artist = get_artist(pool, id).await?;

    let past = sqlx::query_as::<_, CounterpartRow>(
        r#"
        SELECT v.id, v.name, v.image_link, s.start_time
        FROM show s JOIN venue v ON v.id = s.venue_id
        WHERE s.artist_id = ? AND s.start_time < ?
        ORDER BY s.start_time DESC
        "#,
    )
    .bind(id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    let upcoming = sqlx::query_as::<_, CounterpartRow>(
        r#"
        SELECT v.id, v.name, v.image_link, s.start_time
        FROM show s JOIN venue v ON v.id = s.venue_id
        WHERE s.artist_id = ? AND s.start_time >= ?
        ORDER BY s.start_time ASC
        "#,
    )
    .bind(id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    let past_shows: Vec<VenueShow> = past.into_iter().map(VenueShow::from).collect();
    let upcoming_shows: Vec<VenueShow> = upcoming.into_iter().map(VenueShow::from).collect();

    Ok(ArtistDetail {
        artist,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

impl From<CounterpartRow> for ArtistShow {
    fn from(row: CounterpartRow) -> Self {
        Self {
            artist_id: row.id,
            artist_name: row.name,
            artist_image_link: row.image_link,
            start_time: format_show_time(row.start_time),
        }
    }
}

impl From<CounterpartRow> for VenueShow {
    fn from(row: CounterpartRow) -> Self {
        Self {
            venue_id: row.id,
            venue_name: row.name,
            venue_image_link: row.image_link,
            start_time: format_show_time(row.start_time),
        }
    }
}

/// Every show ordered by start time
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let rows = sqlx::query_as::<_, ShowListingRow>(
        r#"
        SELECT s.venue_id, v.name AS venue_name,
               s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM show s
        JOIN venue v ON v.id = s.venue_id
        JOIN artist a ON a.id = s.artist_id
        ORDER BY s.start_time ASC, s.venue_id, s.artist_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| ShowListing {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: format_show_time(row.start_time),
        })
        .collect())
}

/// Raw shows held at a venue
pub async fn shows_for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<Show>> {
    let shows = sqlx::query_as::<_, Show>(
        "SELECT venue_id, artist_id, start_time FROM show WHERE venue_id = ? ORDER BY start_time",
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;
    Ok(shows)
}

/// Raw shows played by an artist
pub async fn shows_for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<Show>> {
    let shows = sqlx::query_as::<_, Show>(
        "SELECT venue_id, artist_id, start_time FROM show WHERE artist_id = ? ORDER BY start_time",
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;
    Ok(shows)
}

/// The `limit` most recently listed venues and artists
pub async fn recent_listings(pool: &SqlitePool, limit: i64) -> Result<RecentListings> {
    let venues = sqlx::query_as::<_, Listing>(
        "SELECT id, name FROM venue ORDER BY id DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    let artists = sqlx::query_as::<_, Listing>(
        "SELECT id, name FROM artist ORDER BY id DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(RecentListings { venues, artists })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, state: &str, city: &str) -> VenueLocationRow {
        VenueLocationRow {
            id,
            name: format!("Venue {}", id),
            city: city.to_string(),
            state: state.to_string(),
            num_upcoming_shows: 0,
        }
    }

    #[test]
    fn test_group_by_area_starts_new_group_on_location_change() {
        let areas = group_by_area(vec![
            row(2, "CA", "LA"),
            row(1, "CA", "SF"),
            row(3, "CA", "SF"),
            row(4, "NY", "NYC"),
        ]);

        assert_eq!(areas.len(), 3);
        assert_eq!((areas[0].state.as_str(), areas[0].city.as_str()), ("CA", "LA"));
        assert_eq!(areas[1].venues.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(areas[2].venues.len(), 1);
    }

    #[test]
    fn test_same_city_in_different_states_is_separate() {
        let areas = group_by_area(vec![row(1, "OR", "Portland"), row(2, "TX", "Portland")]);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_group_by_area_empty() {
        assert!(group_by_area(Vec::new()).is_empty());
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ABC"), "%ABC%");
        assert_eq!(like_pattern(" École "), "%École%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern(""), "%%");
    }
}
