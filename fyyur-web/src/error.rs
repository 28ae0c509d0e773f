//! Error pages for fyyur-web
//!
//! Handlers return [`PageError`]; it renders the matching HTML page and
//! status. Server-side failures are logged here so handlers only propagate.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::pages;

/// Page handler error type
#[derive(Debug, Error)]
pub enum PageError {
    /// No page at this path (404)
    #[error("Page not found: {0}")]
    NotFound(String),

    /// fyyur-common error, status chosen by kind
    #[error(transparent)]
    Common(#[from] fyyur_common::Error),
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;

/// HTTP status for a service error
pub fn status_for(err: &fyyur_common::Error) -> StatusCode {
    use fyyur_common::Error;

    match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Conflict(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Common(err) => status_for(err),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            PageError::NotFound(_) => pages::errors::not_found(),
            PageError::Common(fyyur_common::Error::NotFound(_)) => pages::errors::not_found(),
            PageError::Common(fyyur_common::Error::InvalidInput(msg))
            | PageError::Common(fyyur_common::Error::Conflict(msg)) => {
                pages::errors::rejected(status, msg)
            }
            PageError::Common(err) => {
                error!("Request failed: {}", err);
                pages::errors::server_error()
            }
        };

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_common::Error;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(&Error::NotFound("x".into())), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&Error::InvalidInput("x".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_for(&Error::Conflict("x".into())), StatusCode::CONFLICT);
        assert_eq!(
            status_for(&Error::Database(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            PageError::NotFound("/nowhere".into()).status(),
            StatusCode::NOT_FOUND
        );
    }
}
