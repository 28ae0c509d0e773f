//! 404, 500 and rejected-request pages

use axum::http::StatusCode;

use super::{escape, layout, Section};

pub fn not_found() -> String {
    layout(
        "Not Found",
        Section::Home,
        None,
        r#"<h1>404 Not Found</h1>
<p class="subtitle">The page you are looking for does not exist.</p>
<p><a href="/">Back to the home page</a></p>"#,
    )
}

pub fn server_error() -> String {
    layout(
        "Server Error",
        Section::Home,
        None,
        r#"<h1>500 Server Error</h1>
<p class="subtitle">Something went wrong on our side. Please try again later.</p>
<p><a href="/">Back to the home page</a></p>"#,
    )
}

/// Request understood but refused (bad input, conflicting write)
pub fn rejected(status: StatusCode, message: &str) -> String {
    let content = format!(
        r#"<h1>{code} {reason}</h1>
<p class="subtitle">{message}</p>
<p><a href="/">Back to the home page</a></p>"#,
        code = status.as_u16(),
        reason = status.canonical_reason().unwrap_or("Error"),
        message = escape(message)
    );
    layout("Request Rejected", Section::Home, None, &content)
}
