//! Show list page

use fyyur_common::query::ShowListing;
use fyyur_common::time::{display_show_time, DisplayFormat};

use super::{escape, layout, Section};

pub fn show_list(shows: &[ShowListing]) -> String {
    let cards: String = shows
        .iter()
        .map(|s| {
            let image = s
                .artist_image_link
                .as_deref()
                .map(|src| format!(r#"<img src="{}" alt="Artist image">"#, escape(src)))
                .unwrap_or_default();
            format!(
                r#"<div class="show-card">{image}
<p class="time">{time}</p>
<a href="/artists/{artist_id}">{artist_name}</a>
<p>playing at <a href="/venues/{venue_id}">{venue_name}</a></p>
</div>"#,
                image = image,
                time = escape(&display_show_time(&s.start_time, DisplayFormat::Medium)),
                artist_id = s.artist_id,
                artist_name = escape(&s.artist_name),
                venue_id = s.venue_id,
                venue_name = escape(&s.venue_name),
            )
        })
        .collect();

    let body = if shows.is_empty() {
        r#"<p class="subtitle">No shows scheduled yet.</p>"#.to_string()
    } else {
        format!(r#"<div class="shows">{}</div>"#, cards)
    };

    let content = format!(
        r#"<h1>Shows</h1>
<div class="actions"><a href="/shows/create">Post a show</a></div>
{}"#,
        body
    );
    layout("Shows", Section::Shows, None, &content)
}
