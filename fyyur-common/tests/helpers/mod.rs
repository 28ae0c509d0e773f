//! Shared fixtures for fyyur-common integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use fyyur_common::input::{NewArtist, NewShow, NewVenue};
use fyyur_common::{mutation, Artist, Venue};
use sqlx::SqlitePool;

/// Fixed "current time" for partitioning shows in tests
pub fn fixed_now() -> NaiveDateTime {
    at(2030, 1, 1, 12)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

pub fn new_venue(name: &str, city: &str, state: &str) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        genres: vec!["Jazz".to_string(), "Rock n Roll".to_string()],
        address: "1015 Folsom Street".to_string(),
        city: city.to_string(),
        state: state.to_string(),
        phone: "123-123-1234".to_string(),
        website: Some("https://example.com".to_string()),
        facebook_link: Some("https://www.facebook.com/example".to_string()),
        image_link: Some("https://images.example.com/venue.jpg".to_string()),
        seeking_talent: true,
        seeking_description: Some("Looking for local artists".to_string()),
    }
}

pub fn new_artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        genres: vec!["Rock n Roll".to_string()],
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        website: None,
        facebook_link: None,
        image_link: Some("https://images.example.com/artist.jpg".to_string()),
        seeking_venue: false,
        seeking_description: None,
    }
}

pub async fn venue(pool: &SqlitePool, name: &str, city: &str, state: &str) -> Venue {
    mutation::create_venue(pool, new_venue(name, city, state))
        .await
        .expect("Failed to create venue")
}

pub async fn artist(pool: &SqlitePool, name: &str) -> Artist {
    mutation::create_artist(pool, new_artist(name))
        .await
        .expect("Failed to create artist")
}

pub async fn show(pool: &SqlitePool, venue: &Venue, artist: &Artist, start_time: NaiveDateTime) {
    mutation::create_show(
        pool,
        NewShow {
            venue_id: venue.id,
            artist_id: artist.id,
            start_time,
        },
    )
    .await
    .expect("Failed to create show");
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
