//! Create and edit forms
//!
//! Forms render from [`FormFields`] so the same code serves an empty form,
//! a form prefilled from a stored row, and a rejected submission shown back
//! to the user with what they typed.

use fyyur_common::input::FormFields;
use fyyur_common::time::{format_show_time, now};
use fyyur_common::{Artist, Venue};

use super::{escape, layout, Section};
use crate::flash::Flash;

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR",
    "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Stored venue as form values, for the edit page
pub fn venue_values(venue: &Venue) -> FormFields {
    let mut pairs = vec![
        ("name", venue.name.clone()),
        ("city", venue.city.clone()),
        ("state", venue.state.clone()),
        ("address", venue.address.clone()),
        ("phone", venue.phone.clone()),
    ];
    if let Some(link) = &venue.facebook_link {
        pairs.push(("facebook_link", link.clone()));
    }
    into_fields(pairs, &venue.genres)
}

/// Stored artist as form values, for the edit page
pub fn artist_values(artist: &Artist) -> FormFields {
    let pairs = vec![
        ("name", artist.name.clone()),
        ("city", artist.city.clone()),
        ("state", artist.state.clone()),
        ("phone", artist.phone.clone()),
    ];
    into_fields(pairs, &artist.genres)
}

fn into_fields(pairs: Vec<(&str, String)>, genres: &[String]) -> FormFields {
    let mut fields: Vec<(String, String)> = pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    fields.extend(genres.iter().map(|g| ("genres".to_string(), g.clone())));
    FormFields::from(fields)
}

pub fn new_venue(form: &FormFields, flash: Option<&Flash>) -> String {
    let fields = [
        text_input(form, "name", "Name", true),
        text_input(form, "city", "City", true),
        state_select(form),
        text_input(form, "address", "Address", true),
        text_input(form, "phone", "Phone", true),
        genres_select(form),
        text_input(form, "facebook_link", "Facebook Link", false),
        text_input(form, "image_link", "Image Link", false),
        text_input(form, "website", "Website", false),
        checkbox(form, "seeking_talent", "Looking for talent"),
        text_input(form, "seeking_description", "Seeking Description", false),
    ]
    .concat();

    render("List a new venue", Section::Venues, "/venues/create", "Create Venue", &fields, flash)
}

pub fn edit_venue(id: i64, form: &FormFields, flash: Option<&Flash>) -> String {
    let fields = [
        text_input(form, "name", "Name", true),
        text_input(form, "city", "City", true),
        state_select(form),
        text_input(form, "address", "Address", true),
        text_input(form, "phone", "Phone", true),
        genres_select(form),
        text_input(form, "facebook_link", "Facebook Link", false),
    ]
    .concat();

    render(
        "Edit venue",
        Section::Venues,
        &format!("/venues/{}/edit", id),
        "Edit Venue",
        &fields,
        flash,
    )
}

pub fn new_artist(form: &FormFields, flash: Option<&Flash>) -> String {
    let fields = [
        text_input(form, "name", "Name", true),
        text_input(form, "city", "City", true),
        state_select(form),
        text_input(form, "phone", "Phone", true),
        genres_select(form),
        text_input(form, "facebook_link", "Facebook Link", false),
        text_input(form, "image_link", "Image Link", false),
        text_input(form, "website", "Website", false),
        checkbox(form, "seeking_venue", "Looking for venues"),
        text_input(form, "seeking_description", "Seeking Description", false),
    ]
    .concat();

    render("List a new artist", Section::Artists, "/artists/create", "Create Artist", &fields, flash)
}

pub fn edit_artist(id: i64, form: &FormFields, flash: Option<&Flash>) -> String {
    let fields = [
        text_input(form, "name", "Name", true),
        text_input(form, "city", "City", true),
        state_select(form),
        text_input(form, "phone", "Phone", true),
        genres_select(form),
    ]
    .concat();

    render(
        "Edit artist",
        Section::Artists,
        &format!("/artists/{}/edit", id),
        "Edit Artist",
        &fields,
        flash,
    )
}

/// Start time defaults to now when the form is fresh
pub fn new_show(form: &FormFields, flash: Option<&Flash>) -> String {
    let start_time = form
        .get("start_time")
        .map(str::to_string)
        .unwrap_or_else(|| format_show_time(now()));

    let fields = [
        number_input(form, "artist_id", "Artist ID"),
        number_input(form, "venue_id", "Venue ID"),
        format!(
            r#"<label for="start_time">Start Time</label>
<input type="text" id="start_time" name="start_time" value="{}" placeholder="YYYY-MM-DD HH:MM" required>"#,
            escape(&start_time)
        ),
    ]
    .concat();

    render("List a new show", Section::Shows, "/shows/create", "Create Show", &fields, flash)
}

fn render(
    title: &str,
    section: Section,
    action: &str,
    submit: &str,
    fields: &str,
    flash: Option<&Flash>,
) -> String {
    let content = format!(
        r#"<h1>{title}</h1>
<form class="entity-form" method="post" action="{action}">
{fields}
<input type="submit" value="{submit}">
</form>"#,
        title = escape(title),
        action = escape(action),
        fields = fields,
        submit = escape(submit),
    );
    layout(title, section, flash, &content)
}

fn text_input(form: &FormFields, name: &str, label: &str, required: bool) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}"{required}>
"#,
        name = name,
        label = label,
        value = escape(form.get(name).unwrap_or("")),
        required = if required { " required" } else { "" },
    )
}

fn number_input(form: &FormFields, name: &str, label: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="number" id="{name}" name="{name}" min="1" value="{value}" required>
"#,
        name = name,
        label = label,
        value = escape(form.get(name).unwrap_or("")),
    )
}

fn checkbox(form: &FormFields, name: &str, label: &str) -> String {
    let checked = matches!(
        form.get(name).map(str::to_ascii_lowercase).as_deref(),
        Some("y" | "on" | "true" | "1")
    );
    format!(
        r#"<label><input type="checkbox" name="{name}" value="y"{checked}> {label}</label>
"#,
        name = name,
        label = label,
        checked = if checked { " checked" } else { "" },
    )
}

fn state_select(form: &FormFields) -> String {
    let current = form.get("state").unwrap_or("");
    let mut options = String::from(r#"<option value="">Select a state</option>"#);
    for state in STATES {
        options.push_str(&option(state, *state == current));
    }
    // Keep a stored value that is not in the list
    if !current.is_empty() && !STATES.contains(&current) {
        options.push_str(&option(current, true));
    }

    format!(
        r#"<label for="state">State</label>
<select id="state" name="state" required>{}</select>
"#,
        options
    )
}

fn genres_select(form: &FormFields) -> String {
    let selected: Vec<&str> = form
        .all("genres")
        .into_iter()
        .flat_map(|raw| raw.split(','))
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .collect();

    let mut options: String = GENRES
        .iter()
        .map(|g| option(g, selected.contains(g)))
        .collect();
    for custom in selected.iter().filter(|g| !GENRES.contains(*g)) {
        options.push_str(&option(custom, true));
    }

    format!(
        r#"<label for="genres">Genres</label>
<select id="genres" name="genres" multiple required>{}</select>
"#,
        options
    )
}

fn option(value: &str, selected: bool) -> String {
    format!(
        r#"<option value="{v}"{s}>{v}</option>"#,
        v = escape(value),
        s = if selected { " selected" } else { "" }
    )
}
