//! One-shot messages shown on the page rendered after a mutation
//!
//! There is no session store: the message is rendered straight into the
//! response page (or carried through a redirect as a query flag).

use std::fmt::Display;

/// Visual category of a flash message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Error,
}

impl FlashKind {
    /// CSS class for the message banner
    pub fn css_class(self) -> &'static str {
        match self {
            FlashKind::Success => "flash flash-success",
            FlashKind::Error => "flash flash-error",
        }
    }
}

/// A message banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }

    /// Append the cause when it is the user's to fix
    pub fn with_reason(mut self, reason: impl Display) -> Self {
        self.message = format!("{} {}", self.message, reason);
        self
    }
}

/// `Venue "The Fillmore" with ID: 3 was successfully listed!`
pub fn listed(kind: &str, name: &str, id: i64) -> Flash {
    Flash::success(format!(
        "{} \"{}\" with ID: {} was successfully listed!",
        kind, name, id
    ))
}

/// `An error occurred. Venue "The Fillmore" could not be listed.`
pub fn not_listed(kind: &str, name: &str) -> Flash {
    Flash::error(format!(
        "An error occurred. {} \"{}\" could not be listed.",
        kind, name
    ))
}

pub fn updated(kind: &str, name: &str, id: i64) -> Flash {
    Flash::success(format!(
        "{} \"{}\" with ID: {} was successfully updated!",
        kind, name, id
    ))
}

pub fn not_updated(kind: &str, name: &str) -> Flash {
    Flash::error(format!(
        "An error occurred. {} \"{}\" could not be updated.",
        kind, name
    ))
}

/// Message text only; delete responses are JSON rather than pages
pub fn deleted(kind: &str, name: &str, id: i64) -> String {
    format!("{} \"{}\" with ID: {} was successfully deleted!", kind, name, id)
}

pub fn not_deleted(kind: &str) -> String {
    format!("An error occurred. {} could not be deleted.", kind)
}

pub fn show_listed() -> Flash {
    Flash::success("Show was successfully listed!")
}

pub fn show_not_listed() -> Flash {
    Flash::error("An error occurred. Show could not be listed.")
}
