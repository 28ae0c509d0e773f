//! HTML page rendering
//!
//! Pages are plain `format!` templates. Every value that came from the
//! database or a form goes through [`escape`] before it is interpolated.

pub mod artists;
pub mod errors;
pub mod forms;
pub mod home;
pub mod shows;
pub mod venues;

use crate::flash::Flash;

/// Top-level navigation section, used to highlight the nav link and pick
/// the search target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Venues,
    Artists,
    Shows,
}

impl Section {
    fn search_action(self) -> &'static str {
        match self {
            Section::Artists => "/artists/search",
            _ => "/venues/search",
        }
    }

    fn search_placeholder(self) -> &'static str {
        match self {
            Section::Artists => "Find an artist",
            _ => "Find a venue",
        }
    }
}

/// Escape text for HTML element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the site chrome
pub fn layout(title: &str, section: Section, flash: Option<&Flash>, content: &str) -> String {
    let nav_link = |href: &str, label: &str, target: Section| {
        let class = if section == target { " class=\"active\"" } else { "" };
        format!(r#"<a href="{}"{}>{}</a>"#, href, class, label)
    };

    let flash_html = flash
        .map(|f| {
            format!(
                r#"<div class="{}" role="alert">{}</div>"#,
                f.kind.css_class(),
                escape(&f.message)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} | Fyyur</title>
    <link rel="stylesheet" href="/static/fyyur.css">
</head>
<body>
    <nav>
        <a class="brand" href="/">🔥 Fyyur</a>
        {venues}
        {artists}
        {shows}
        <form method="post" action="{search_action}">
            <input type="search" name="search_term" placeholder="{search_placeholder}" aria-label="Search">
        </form>
    </nav>
    <main>
        {flash}
        {content}
    </main>
</body>
</html>
"#,
        title = escape(title),
        venues = nav_link("/venues", "Venues", Section::Venues),
        artists = nav_link("/artists", "Artists", Section::Artists),
        shows = nav_link("/shows", "Shows", Section::Shows),
        search_action = section.search_action(),
        search_placeholder = section.search_placeholder(),
        flash = flash_html,
        content = content,
    )
}

/// Genre tags
pub(crate) fn genre_tags(genres: &[String]) -> String {
    let tags: String = genres
        .iter()
        .map(|g| format!("<span>{}</span>", escape(g)))
        .collect();
    format!(r#"<div class="genres">{}</div>"#, tags)
}

/// `<a>` for an optional external link, empty when absent
pub(crate) fn external_link(label: &str, href: Option<&str>) -> String {
    match href {
        Some(href) => format!(
            r#"<p><a href="{href}" target="_blank" rel="noopener">{label}</a></p>"#,
            href = escape(href),
            label = label
        ),
        None => String::new(),
    }
}

/// Delete button that issues `DELETE path` and returns home on success
pub(crate) fn delete_button(path: &str, label: &str) -> String {
    format!(
        r#"<button class="delete" type="button" data-path="{path}" onclick="deleteEntity(this)">{label}</button>
<script>
function deleteEntity(button) {{
    if (!confirm('Delete this listing and all of its shows?')) {{
        return;
    }}
    fetch(button.dataset.path, {{ method: 'DELETE' }})
        .then(response => response.json())
        .then(result => {{
            alert(result.message);
            if (result.success) {{
                window.location.href = '/';
            }}
        }})
        .catch(() => alert('Delete request failed'));
}}
</script>"#,
        path = escape(path),
        label = escape(label)
    )
}
