//! Integration tests for the query service against an in-memory database
//!
//! Covers venue grouping, name search, detail pages with upcoming/past
//! partitioning, and the all-shows listing.

mod helpers;

use fyyur_common::db::init_memory_database;
use fyyur_common::{query, Error};
use helpers::{artist, at, fixed_now, show, venue};

#[tokio::test]
async fn test_venues_grouped_by_state_then_city() {
    let pool = init_memory_database().await.unwrap();

    let sf = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let nyc = venue(&pool, "The Dueling Pianos Bar", "NYC", "NY").await;
    let la = venue(&pool, "Hollywood Bowl", "LA", "CA").await;
    let sf2 = venue(&pool, "Park Square Live", "SF", "CA").await;

    let areas = query::list_venues_by_area(&pool, fixed_now()).await.unwrap();

    let locations: Vec<(&str, &str)> = areas
        .iter()
        .map(|a| (a.state.as_str(), a.city.as_str()))
        .collect();
    assert_eq!(locations, vec![("CA", "LA"), ("CA", "SF"), ("NY", "NYC")]);

    assert_eq!(areas[0].venues.iter().map(|v| v.id).collect::<Vec<_>>(), vec![la.id]);
    assert_eq!(
        areas[1].venues.iter().map(|v| v.id).collect::<Vec<_>>(),
        vec![sf.id, sf2.id]
    );
    assert_eq!(areas[2].venues.iter().map(|v| v.id).collect::<Vec<_>>(), vec![nyc.id]);
}

#[tokio::test]
async fn test_num_upcoming_shows_counts_only_future() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let band = artist(&pool, "Guns N Petals").await;

    show(&pool, &hop, &band, at(2029, 5, 21, 21)).await;
    show(&pool, &hop, &band, at(2031, 4, 1, 20)).await;
    show(&pool, &hop, &band, at(2031, 4, 8, 20)).await;

    let areas = query::list_venues_by_area(&pool, fixed_now()).await.unwrap();
    assert_eq!(areas[0].venues[0].num_upcoming_shows, 2);
}

#[tokio::test]
async fn test_list_venues_empty_database() {
    let pool = init_memory_database().await.unwrap();
    let areas = query::list_venues_by_area(&pool, fixed_now()).await.unwrap();
    assert!(areas.is_empty());
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let pool = init_memory_database().await.unwrap();
    let target = venue(&pool, "xAbCy", "SF", "CA").await;
    venue(&pool, "Unrelated Hall", "SF", "CA").await;

    let results = query::search_venues(&pool, "ABC").await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].id, target.id);

    let band = artist(&pool, "The Wild Sax Band").await;
    artist(&pool, "Matt Quevedo").await;
    let results = query::search_artists(&pool, "sAx").await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].id, band.id);
}

#[tokio::test]
async fn test_search_matches_multiple_and_none() {
    let pool = init_memory_database().await.unwrap();
    artist(&pool, "Guns N Petals").await;
    artist(&pool, "Matt Quevedo").await;
    artist(&pool, "The Wild Sax Band").await;

    let results = query::search_artists(&pool, "a").await.unwrap();
    assert_eq!(results.count, 3);
    assert_eq!(results.data.len(), 3);

    let results = query::search_artists(&pool, "zzz").await.unwrap();
    assert_eq!(results.count, 0);
    assert!(results.data.is_empty());
}

#[tokio::test]
async fn test_search_wildcards_are_literal() {
    let pool = init_memory_database().await.unwrap();
    venue(&pool, "100% Club", "SF", "CA").await;
    venue(&pool, "1000 Club", "SF", "CA").await;

    let results = query::search_venues(&pool, "100%").await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].name, "100% Club");
}

#[tokio::test]
async fn test_search_finds_exact_non_ascii_name() {
    let pool = init_memory_database().await.unwrap();
    let ecole = venue(&pool, "École Nationale", "Paris", "FR").await;

    for term in ["École", "école nationale", "ÉCOLE NATIONALE", "cole"] {
        let results = query::search_venues(&pool, term).await.unwrap();
        // ASCII letters fold; non-ASCII letters match as typed
        if term.starts_with('é') {
            assert_eq!(results.count, 0, "{}", term);
        } else {
            assert_eq!(results.count, 1, "{}", term);
            assert_eq!(results.data[0].id, ecole.id);
        }
    }

    let band = artist(&pool, "Björk Ensemble").await;
    let results = query::search_artists(&pool, "Björk").await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].id, band.id);
}

#[tokio::test]
async fn test_venue_detail_partitions_and_orders_shows() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let petals = artist(&pool, "Guns N Petals").await;
    let sax = artist(&pool, "The Wild Sax Band").await;

    show(&pool, &hop, &petals, at(2029, 1, 1, 20)).await;
    show(&pool, &hop, &sax, at(2029, 6, 1, 20)).await;
    show(&pool, &hop, &sax, at(2031, 6, 1, 20)).await;
    show(&pool, &hop, &petals, at(2031, 1, 1, 20)).await;

    let detail = query::venue_detail(&pool, hop.id, fixed_now()).await.unwrap();

    assert_eq!(detail.venue, hop);
    assert_eq!(detail.past_shows_count, 2);
    assert_eq!(detail.upcoming_shows_count, 2);

    let past: Vec<&str> = detail.past_shows.iter().map(|s| s.start_time.as_str()).collect();
    assert_eq!(past, vec!["2029-06-01 20:00:00", "2029-01-01 20:00:00"]);

    let upcoming: Vec<&str> = detail
        .upcoming_shows
        .iter()
        .map(|s| s.start_time.as_str())
        .collect();
    assert_eq!(upcoming, vec!["2031-01-01 20:00:00", "2031-06-01 20:00:00"]);

    assert_eq!(detail.upcoming_shows[0].artist_id, petals.id);
    assert_eq!(detail.upcoming_shows[0].artist_name, "Guns N Petals");
    assert_eq!(detail.upcoming_shows[0].artist_image_link, petals.image_link);
}

#[tokio::test]
async fn test_artist_detail_projects_venue_side() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let bowl = venue(&pool, "Hollywood Bowl", "LA", "CA").await;
    let band = artist(&pool, "Guns N Petals").await;

    show(&pool, &hop, &band, at(2031, 3, 1, 20)).await;
    show(&pool, &bowl, &band, at(2031, 2, 1, 20)).await;
    show(&pool, &bowl, &band, at(2020, 2, 1, 20)).await;

    let detail = query::artist_detail(&pool, band.id, fixed_now()).await.unwrap();

    assert_eq!(detail.past_shows_count, 1);
    assert_eq!(detail.past_shows[0].venue_name, "Hollywood Bowl");
    assert_eq!(detail.upcoming_shows_count, 2);
    assert_eq!(detail.upcoming_shows[0].venue_id, bowl.id);
    assert_eq!(detail.upcoming_shows[1].venue_id, hop.id);
    assert_eq!(detail.upcoming_shows[1].venue_image_link, hop.image_link);
}

#[tokio::test]
async fn test_show_at_exactly_now_is_upcoming() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let band = artist(&pool, "Guns N Petals").await;
    show(&pool, &hop, &band, fixed_now()).await;

    let detail = query::venue_detail(&pool, hop.id, fixed_now()).await.unwrap();
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.past_shows_count, 0);
}

#[tokio::test]
async fn test_detail_of_missing_entity_is_not_found() {
    let pool = init_memory_database().await.unwrap();

    let err = query::venue_detail(&pool, 999, fixed_now()).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let err = query::artist_detail(&pool, 999, fixed_now()).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[tokio::test]
async fn test_list_shows_ordered_by_start_time() {
    let pool = init_memory_database().await.unwrap();
    let hop = venue(&pool, "The Musical Hop", "SF", "CA").await;
    let petals = artist(&pool, "Guns N Petals").await;
    let sax = artist(&pool, "The Wild Sax Band").await;

    show(&pool, &hop, &sax, at(2035, 4, 1, 20)).await;
    show(&pool, &hop, &petals, at(2019, 5, 21, 21)).await;
    show(&pool, &hop, &sax, at(2035, 4, 8, 20)).await;

    let shows = query::list_shows(&pool).await.unwrap();
    assert_eq!(shows.len(), 3);
    assert_eq!(shows[0].start_time, "2019-05-21 21:00:00");
    assert_eq!(shows[0].artist_name, "Guns N Petals");
    assert_eq!(shows[0].venue_name, "The Musical Hop");
    assert_eq!(shows[0].artist_image_link, petals.image_link);
    assert_eq!(shows[1].start_time, "2035-04-01 20:00:00");
    assert_eq!(shows[2].start_time, "2035-04-08 20:00:00");
}

#[tokio::test]
async fn test_list_artists_ordered_by_id() {
    let pool = init_memory_database().await.unwrap();
    let first = artist(&pool, "Zed").await;
    let second = artist(&pool, "Amy").await;

    let artists = query::list_artists(&pool).await.unwrap();
    assert_eq!(
        artists.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[tokio::test]
async fn test_recent_listings_newest_first() {
    let pool = init_memory_database().await.unwrap();
    venue(&pool, "One", "SF", "CA").await;
    venue(&pool, "Two", "SF", "CA").await;
    let three = venue(&pool, "Three", "SF", "CA").await;
    artist(&pool, "Solo").await;

    let recent = query::recent_listings(&pool, 2).await.unwrap();
    assert_eq!(recent.venues.len(), 2);
    assert_eq!(recent.venues[0].id, three.id);
    assert_eq!(recent.artists.len(), 1);
}
