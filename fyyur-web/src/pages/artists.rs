//! Artist pages

use fyyur_common::query::{ArtistDetail, Listing, SearchResults, VenueShow};
use fyyur_common::time::{display_show_time, DisplayFormat};
use fyyur_common::Artist;

use super::{delete_button, escape, external_link, genre_tags, layout, Section};
use crate::flash::Flash;

pub fn artist_list(artists: &[Listing]) -> String {
    let items: String = artists
        .iter()
        .map(|a| format!(r#"<li><a href="/artists/{}">{}</a></li>"#, a.id, escape(&a.name)))
        .collect();

    let body = if artists.is_empty() {
        r#"<p class="subtitle">No artists listed yet.</p>"#.to_string()
    } else {
        format!(r#"<ul class="items">{}</ul>"#, items)
    };

    let content = format!(
        r#"<h1>Artists</h1>
<div class="actions"><a href="/artists/create">Post an artist</a></div>
{}"#,
        body
    );
    layout("Artists", Section::Artists, None, &content)
}

pub fn search_results(term: &str, results: &SearchResults<Artist>) -> String {
    let items: String = results
        .data
        .iter()
        .map(|a| {
            format!(
                r#"<li><a href="/artists/{}">{}</a> <span class="count">{}, {}</span></li>"#,
                a.id,
                escape(&a.name),
                escape(&a.city),
                escape(&a.state)
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
    layout("Artist Search", Section::Artists, None, &content)
}

pub fn artist_page(detail: &ArtistDetail, flash: Option<&Flash>) -> String {
    let artist = &detail.artist;

    let seeking = if artist.seeking_venue {
        format!(
            r#"<div class="seeking"><strong>Currently seeking performance venues</strong><p>{}</p></div>"#,
            escape(artist.seeking_description.as_deref().unwrap_or(""))
        )
    } else {
        r#"<p class="subtitle">Not currently seeking performance venues</p>"#.to_string()
    };

    let image = artist
        .image_link
        .as_deref()
        .map(|src| format!(r#"<img class="detail-image" src="{}" alt="Artist image">"#, escape(src)))
        .unwrap_or_default();

    let content = format!(
        r#"<h1>{name}</h1>
<p class="subtitle">ID: {id}</p>
{genres}
<p>{city}, {state}</p>
<p>{phone}</p>
{website}
{facebook}
{seeking}
{image}
<div class="actions">
    <a href="/artists/{id}/edit">Edit</a>
    {delete}
</div>
<h2>{upcoming_count} Upcoming Shows</h2>
{upcoming}
<h2>{past_count} Past Shows</h2>
{past}"#,
        name = escape(&artist.name),
        id = artist.id,
        genres = genre_tags(&artist.genres),
        city = escape(&artist.city),
        state = escape(&artist.state),
        phone = escape(&artist.phone),
        website = external_link("Website", artist.website.as_deref()),
        facebook = external_link("Facebook", artist.facebook_link.as_deref()),
        seeking = seeking,
        image = image,
        delete = delete_button(&format!("/artists/{}", artist.id), "Delete artist"),
        upcoming_count = detail.upcoming_shows_count,
        upcoming = show_cards(&detail.upcoming_shows),
        past_count = detail.past_shows_count,
        past = show_cards(&detail.past_shows),
    );

    layout(&artist.name, Section::Artists, flash, &content)
}

fn show_cards(shows: &[VenueShow]) -> String {
    let cards: String = shows
        .iter()
        .map(|s| {
            let image = s
                .venue_image_link
                .as_deref()
                .map(|src| format!(r#"<img src="{}" alt="Venue image">"#, escape(src)))
                .unwrap_or_default();
            format!(
                r#"<div class="show-card">{image}<a href="/venues/{id}">{name}</a><p class="time">{time}</p></div>"#,
                image = image,
                id = s.venue_id,
                name = escape(&s.venue_name),
                time = escape(&display_show_time(&s.start_time, DisplayFormat::Full)),
            )
        })
        .collect();
    format!(r#"<div class="shows">{}</div>"#, cards)
}
