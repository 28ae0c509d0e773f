//! Home page

use fyyur_common::query::{Listing, RecentListings};

use super::{escape, layout, Section};
use crate::flash::Flash;

/// Number of recent venues and artists listed on the home page
pub const RECENT_LIMIT: i64 = 10;

pub fn home(recent: &RecentListings, flash: Option<&Flash>) -> String {
    let content = format!(
        r#"<h1>Fyyur</h1>
<p class="subtitle">Find the perfect venue for your next gig, or the perfect artist for your stage.</p>
<div class="actions">
    <a href="/venues/create">Post a venue</a>
    <a href="/artists/create">Post an artist</a>
    <a href="/shows/create">Post a show</a>
</div>
<h2>Recently listed venues</h2>
{venues}
<h2>Recently listed artists</h2>
{artists}"#,
        venues = recent_list(&recent.venues, "venues"),
        artists = recent_list(&recent.artists, "artists"),
    );
    layout("Home", Section::Home, flash, &content)
}

fn recent_list(listings: &[Listing], base: &str) -> String {
    if listings.is_empty() {
        return format!(r#"<p class="subtitle">No {} listed yet.</p>"#, base);
    }

    let items: String = listings
        .iter()
        .map(|l| format!(r#"<li><a href="/{}/{}">{}</a></li>"#, base, l.id, escape(&l.name)))
        .collect();
    format!(r#"<ul class="items">{}</ul>"#, items)
}
