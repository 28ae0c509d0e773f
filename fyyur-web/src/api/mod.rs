//! HTTP handlers for fyyur-web

pub mod artists;
pub mod health;
pub mod shows;
pub mod ui;
pub mod venues;

pub use artists::artist_routes;
pub use health::health_routes;
pub use shows::show_routes;
pub use ui::{not_found, ui_routes};
pub use venues::venue_routes;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};

/// JSON body returned by DELETE endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Query flags on detail pages
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    /// Set by the redirect after a successful edit
    #[serde(default)]
    pub updated: bool,
}

/// Path ids are positive integers; anything else is a missing page
pub(crate) fn parse_id(raw: &str) -> PageResult<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| PageError::NotFound(raw.to_string()))
}

/// Page with a non-200 status, used for re-rendered forms
pub(crate) fn page_with_status(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("0").is_err());
        assert!(parse_id("-3").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("99999999999999999999").is_err());
    }
}
