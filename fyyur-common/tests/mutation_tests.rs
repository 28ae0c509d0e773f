//! Integration tests for the mutation service
//!
//! Tests cover:
//! - Create/update/delete round trips through the database
//! - Cascade delete of shows
//! - Rollback leaving row counts unchanged
//! - Partial edits leaving non-form columns untouched
//! - Show conflicts and dangling references

mod helpers;

use fyyur_common::db::init_memory_database;
use fyyur_common::input::{ArtistEdit, NewShow, VenueEdit};
use fyyur_common::{mutation, query, Error};
use helpers::{artist, at, count, fixed_now, new_artist, new_venue, show, venue};

#[tokio::test]
async fn test_create_venue_assigns_id_and_persists_fields() {
    let pool = init_memory_database().await.unwrap();

    let created = mutation::create_venue(&pool, new_venue("The Fillmore", "SF", "CA"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "The Fillmore");
    assert_eq!(created.genres, vec!["Jazz", "Rock n Roll"]);
    assert!(created.seeking_talent);

    let loaded = query::get_venue(&pool, created.id).await.unwrap();
    assert_eq!(loaded, created);
}

#[tokio::test]
async fn test_create_artist_defaults_seeking_false() {
    let pool = init_memory_database().await.unwrap();

    let created = mutation::create_artist(&pool, new_artist("Matt Quevedo")).await.unwrap();
    assert!(!created.seeking_venue);
    assert_eq!(created.website, None);
    assert_eq!(count(&pool, "artist").await, 1);
}

#[tokio::test]
async fn test_failed_create_leaves_no_row() {
    let pool = init_memory_database().await.unwrap();
    venue(&pool, "Existing", "SF", "CA").await;

    // Blank name violates the table's CHECK constraint
    let mut input = new_venue("ignored", "SF", "CA");
    input.name = "   ".to_string();

    let err = mutation::create_venue(&pool, input).await.unwrap_err();
    assert!(matches!(err, Error::Database(_)));
    assert_eq!(count(&pool, "venue").await, 1);

    let mut input = new_artist("ignored");
    input.name = String::new();
    assert!(mutation::create_artist(&pool, input).await.is_err());
    assert_eq!(count(&pool, "artist").await, 0);
}

#[tokio::test]
async fn test_pool_usable_after_rollback() {
    let pool = init_memory_database().await.unwrap();

    let mut input = new_venue("ignored", "SF", "CA");
    input.name = String::new();
    assert!(mutation::create_venue(&pool, input).await.is_err());

    // The single pooled connection must have been released
    let created = mutation::create_venue(&pool, new_venue("After", "SF", "CA")).await;
    assert!(created.is_ok());
}

#[tokio::test]
async fn test_create_show_requires_existing_venue_and_artist() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;

    let err = mutation::create_show(
        &pool,
        NewShow {
            venue_id: hop.id,
            artist_id: 404,
            start_time: at(2031, 1, 1, 20),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("Artist 404"));
    assert_eq!(count(&pool, "show").await, 0);
}

#[tokio::test]
async fn test_duplicate_show_is_conflict() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let band = artist(&pool, "Guns N Petals").await;
    show(&pool, &hop, &band, at(2031, 1, 1, 20)).await;

    let err = mutation::create_show(
        &pool,
        NewShow {
            venue_id: hop.id,
            artist_id: band.id,
            start_time: at(2031, 1, 1, 20),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, Error::Conflict(_)));
    assert_eq!(count(&pool, "show").await, 1);

    // Same pair at a different time is a different show
    show(&pool, &hop, &band, at(2031, 1, 2, 20)).await;
    assert_eq!(count(&pool, "show").await, 2);
}

#[tokio::test]
async fn test_show_appears_in_both_detail_views() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let band = artist(&pool, "Guns N Petals").await;
    show(&pool, &hop, &band, at(2031, 1, 1, 20)).await;

    let venue_view = query::venue_detail(&pool, hop.id, fixed_now()).await.unwrap();
    let artist_view = query::artist_detail(&pool, band.id, fixed_now()).await.unwrap();

    assert_eq!(venue_view.upcoming_shows[0].artist_id, band.id);
    assert_eq!(artist_view.upcoming_shows[0].venue_id, hop.id);
}

#[tokio::test]
async fn test_delete_venue_cascades_to_shows() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let other = venue(&pool, "Park Square Live", "SF", "CA").await;
    let band = artist(&pool, "Guns N Petals").await;

    show(&pool, &hop, &band, at(2029, 1, 1, 20)).await;
    show(&pool, &hop, &band, at(2031, 1, 1, 20)).await;
    show(&pool, &other, &band, at(2031, 2, 1, 20)).await;

    let deleted = mutation::delete_venue(&pool, hop.id).await.unwrap();
    assert_eq!(deleted.name, "The Musical Hop");

    assert!(query::shows_for_venue(&pool, hop.id).await.unwrap().is_empty());
    assert_eq!(query::shows_for_artist(&pool, band.id).await.unwrap().len(), 1);
    assert!(matches!(
        query::get_venue(&pool, hop.id).await,
        Err(Error::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_artist_cascades_to_shows() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let band = artist(&pool, "Guns N Petals").await;
    show(&pool, &hop, &band, at(2031, 1, 1, 20)).await;

    mutation::delete_artist(&pool, band.id).await.unwrap();

    assert!(query::shows_for_artist(&pool, band.id).await.unwrap().is_empty());
    assert!(query::shows_for_venue(&pool, hop.id).await.unwrap().is_empty());
    assert_eq!(count(&pool, "venue").await, 1);
}

#[tokio::test]
async fn test_delete_missing_venue_is_not_found() {
    let pool = init_memory_database().await.unwrap();
    let err = mutation::delete_venue(&pool, 77).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_update_venue_only_touches_edit_fields() {
    let pool = init_memory_database().await.unwrap();
    let original = venue(&pool, "The Musical Hop", "SF", "CA").await;

    let updated = mutation::update_venue(
        &pool,
        original.id,
        VenueEdit {
            name: "The Musical Hop II".to_string(),
            city: "Oakland".to_string(),
            state: "CA".to_string(),
            address: "1 Broadway".to_string(),
            phone: "510-000-0000".to_string(),
            genres: vec!["Funk".to_string()],
            facebook_link: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "The Musical Hop II");
    assert_eq!(updated.city, "Oakland");
    assert_eq!(updated.genres, vec!["Funk"]);
    assert_eq!(updated.facebook_link, None);

    // Columns outside the edit form keep their values
    assert_eq!(updated.website, original.website);
    assert_eq!(updated.image_link, original.image_link);
    assert_eq!(updated.seeking_talent, original.seeking_talent);
    assert_eq!(updated.seeking_description, original.seeking_description);

    assert_eq!(query::get_venue(&pool, original.id).await.unwrap(), updated);
}

#[tokio::test]
async fn test_update_artist_only_touches_edit_fields() {
    let pool = init_memory_database().await.unwrap();
    let original = artist(&pool, "Guns N Petals").await;

    let updated = mutation::update_artist(
        &pool,
        original.id,
        ArtistEdit {
            name: "Guns N Roses".to_string(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            phone: "213-000-0000".to_string(),
            genres: vec!["Rock n Roll".to_string(), "Blues".to_string()],
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.name, "Guns N Roses");
    assert_eq!(updated.genres, vec!["Rock n Roll", "Blues"]);
    assert_eq!(updated.image_link, original.image_link);
    assert_eq!(updated.seeking_venue, original.seeking_venue);
}

#[tokio::test]
async fn test_update_missing_artist_is_not_found() {
    let pool = init_memory_database().await.unwrap();
    let err = mutation::update_artist(
        &pool,
        5,
        ArtistEdit {
            name: "Nobody".to_string(),
            city: "Nowhere".to_string(),
            state: "NV".to_string(),
            phone: "000".to_string(),
            genres: vec!["Other".to_string()],
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_fillmore_scenario() {
    let pool = init_memory_database().await.unwrap();

    let fillmore = venue(&pool, "The Fillmore", "SF", "CA").await;
    let x = artist(&pool, "X").await;

    let areas = query::list_venues_by_area(&pool, fixed_now()).await.unwrap();
    let area = areas
        .iter()
        .find(|a| a.state == "CA" && a.city == "SF")
        .expect("SF group missing");
    assert!(area.venues.iter().any(|v| v.id == fillmore.id && v.name == "The Fillmore"));

    show(&pool, &fillmore, &x, at(2020, 3, 14, 19)).await;

    let detail = query::venue_detail(&pool, fillmore.id, fixed_now()).await.unwrap();
    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.past_shows[0].artist_name, "X");
    assert_eq!(detail.upcoming_shows_count, 0);
}
