//! Venue pages

use fyyur_common::query::{ArtistShow, SearchResults, VenueArea, VenueDetail};
use fyyur_common::time::{display_show_time, DisplayFormat};
use fyyur_common::Venue;

use super::{delete_button, escape, external_link, genre_tags, layout, Section};
use crate::flash::Flash;

/// Venues grouped by city and state
pub fn venue_list(areas: &[VenueArea]) -> String {
    let mut content = String::from(
        r#"<h1>Venues</h1>
<div class="actions"><a href="/venues/create">Post a venue</a></div>"#,
    );

    if areas.is_empty() {
        content.push_str(r#"<p class="subtitle">No venues listed yet.</p>"#);
    }

    for area in areas {
        let items: String = area
            .venues
            .iter()
            .map(|v| {
                format!(
                    r#"<li><a href="/venues/{id}">{name}</a> <span class="count">{n} upcoming shows</span></li>"#,
                    id = v.id,
                    name = escape(&v.name),
                    n = v.num_upcoming_shows
                )
            })
            .collect();
        content.push_str(&format!(
            r#"<h2>{city}, {state}</h2>
<ul class="items">{items}</ul>"#,
            city = escape(&area.city),
            state = escape(&area.state),
            items = items
        ));
    }

    layout("Venues", Section::Venues, None, &content)
}

pub fn search_results(term: &str, results: &SearchResults<Venue>) -> String {
    let items: String = results
        .data
        .iter()
        .map(|v| {
            format!(
                r#"<li><a href="/venues/{}">{}</a> <span class="count">{}, {}</span></li>"#,
                v.id,
                escape(&v.name),
                escape(&v.city),
                escape(&v.state)
            )
        })
        .collect();

    let content = format!(
        r#"<h1>Number of search results for "{term}": {count}</h1>
<ul class="items">{items}</ul>"#,
        term = escape(term),
        count = results.count,
        items = items
    );
    layout("Venue Search", Section::Venues, None, &content)
}

/// Venue detail with past and upcoming shows
pub fn venue_page(detail: &VenueDetail, flash: Option<&Flash>) -> String {
    let venue = &detail.venue;

    let seeking = if venue.seeking_talent {
        format!(
            r#"<div class="seeking"><strong>Currently seeking talent</strong><p>{}</p></div>"#,
            escape(venue.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="subtitle">Not currently seeking talent</p>"#.to_string()
    };

    let image = venue
        .image_link
        .as_deref()
        .map(|src| format!(r#"<img class="detail-image" src="{}" alt="Venue image">"#, escape(src)))
        .unwrap_or_default();

    let content = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>{address}</p>
<p>{city}, {state}</p>
<p>{phone}</p>
{website}
{facebook}
{seeking}
{image}
<div class="actions">
    <a href="/venues/{id}/edit">Edit</a>
    {delete}
</div>
<h2>{upcoming_count} Upcoming Shows</h2>
{upcoming}
<h2>{past_count} Past Shows</h2>
{past}"#,
        name = escape(&venue.name),
        id = venue.id,
        genres = genre_tags(&venue.genres),
        address = escape(&venue.address),
        city = escape(&venue.city),
        state = escape(&venue.state),
        phone = escape(&venue.phone),
        website = external_link("Website", venue.website.as_deref()),
        facebook = external_link("Facebook", venue.facebook_link.as_deref()),
        seeking = seeking,
        image = image,
        delete = delete_button(&format!("/venues/{}", venue.id), "Delete venue"),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = show_cards(&detail.upcoming_shows),
        past_count = detail.past_shows_count,
        past = show_cards(&detail.past_shows),
    );

    layout(&venue.name, Section::Venues, flash, &content)
}

fn show_cards(shows: &[ArtistShow]) -> String {
    let cards: String = shows
        .iter()
        .map(|s| {
            let image = s
                .artist_image_link
                .as_deref()
                .map(|src| format!(r#"<img src="{}" alt="Artist image">"#, escape(src)))
                .unwrap_or_default();
            format!(
                r#"<div class="show-card">{image}<a href="/artists/{id}">{name}</a><p class="time">{time}</p></div>"#,
                image = image,
                id = s.artist_id,
                name = escape(&s.artist_name),
                time = escape(&display_show_time(&s.start_time, DisplayFormat::Full)),
            )
        })
        .collect();
    format!(r#"<div class="shows">{}</div>"#, cards)
}
