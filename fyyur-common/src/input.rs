//! Form input validation
//!
//! Each mutation takes an explicit input struct. The structs are built from
//! raw urlencoded form pairs and validated before anything reaches the
//! database, so a missing field is an [`Error::InvalidInput`] naming the
//! field rather than a fault deeper in the stack.
//!
//! Genres arrive either as repeated `genres` keys (multi-select) or as a
//! single comma-separated value; both produce the same list.

use crate::time::parse_show_time;
use crate::{Error, Result};
use chrono::NaiveDateTime;

const MAX_SHORT_FIELD: usize = 120;
const MAX_ADDRESS: usize = 200;
const MAX_LINK: usize = 500;

/// Ordered key/value pairs of a submitted form
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl FormFields {
    /// First value for `key`, trimmed; empty values count as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Every non-empty value submitted under `key`
    pub fn all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .collect()
    }

    fn required(&self, key: &str, max_len: Option<usize>) -> Result<String> {
        let value = self
            .get(key)
            .ok_or_else(|| Error::InvalidInput(format!("{} is required", key)))?;
        check_length(key, value, max_len)?;
        Ok(value.to_string())
    }

    fn optional(&self, key: &str, max_len: usize) -> Result<Option<String>> {
        match self.get(key) {
            Some(value) => {
                check_length(key, value, Some(max_len))?;
                Ok(Some(value.to_string()))
            }
            None => Ok(None),
        }
    }

    /// Checkbox semantics: `y`, `on`, `true` or `1` mean checked
    fn flag(&self, key: &str) -> bool {
        matches!(
            self.get(key).map(str::to_ascii_lowercase).as_deref(),
            Some("y" | "on" | "true" | "1")
        )
    }

    fn genres(&self) -> Result<Vec<String>> {
        let mut genres: Vec<String> = Vec::new();
        for raw in self.all("genres") {
            for genre in raw.split(',').map(str::trim).filter(|g| !g.is_empty()) {
                check_length("genres", genre, Some(MAX_SHORT_FIELD))?;
                if !genres.iter().any(|g| g == genre) {
                    genres.push(genre.to_string());
                }
            }
        }

        if genres.is_empty() {
            return Err(Error::InvalidInput("genres is required".to_string()));
        }
        Ok(genres)
    }

    fn id(&self, key: &str) -> Result<i64> {
        let raw = self.required(key, None)?;
        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(id),
            _ => Err(Error::InvalidInput(format!("{} must be a positive integer", key))),
        }
    }
}

fn check_length(key: &str, value: &str, max_len: Option<usize>) -> Result<()> {
    match max_len {
        Some(max) if value.chars().count() > max => Err(Error::InvalidInput(format!(
            "{} must be at most {} characters",
            key, max
        ))),
        _ => Ok(()),
    }
}

/// Input for creating a venue
#[derive(Debug, Clone, PartialEq)]
pub struct NewVenue {
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl NewVenue {
    pub fn from_form(form: &FormFields) -> Result<Self> {
        Ok(Self {
            name: form.required("name", None)?,
            genres: form.genres()?,
            address: form.required("address", Some(MAX_ADDRESS))?,
            city: form.required("city", Some(MAX_SHORT_FIELD))?,
            state: form.required("state", Some(MAX_SHORT_FIELD))?,
            phone: form.required("phone", Some(MAX_SHORT_FIELD))?,
            website: form.optional("website", MAX_LINK)?,
            facebook_link: form.optional("facebook_link", MAX_LINK)?,
            image_link: form.optional("image_link", MAX_LINK)?,
            seeking_talent: form.flag("seeking_talent"),
            seeking_description: form.optional("seeking_description", usize::MAX)?,
        })
    }
}

/// Input for creating an artist
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl NewArtist {
    pub fn from_form(form: &FormFields) -> Result<Self> {
        Ok(Self {
            name: form.required("name", None)?,
            genres: form.genres()?,
            city: form.required("city", Some(MAX_SHORT_FIELD))?,
            state: form.required("state", Some(MAX_SHORT_FIELD))?,
            phone: form.required("phone", Some(MAX_SHORT_FIELD))?,
            website: form.optional("website", MAX_LINK)?,
            facebook_link: form.optional("facebook_link", MAX_LINK)?,
            image_link: form.optional("image_link", MAX_LINK)?,
            seeking_venue: form.flag("seeking_venue"),
            seeking_description: form.optional("seeking_description", usize::MAX)?,
        })
    }
}

/// Input for scheduling a show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

impl NewShow {
    pub fn from_form(form: &FormFields) -> Result<Self> {
        let venue_id = form.id("venue_id")?;
        let artist_id = form.id("artist_id")?;
        let raw_time = form.required("start_time", None)?;
        let start_time = parse_show_time(&raw_time).ok_or_else(|| {
            Error::InvalidInput("start_time must look like YYYY-MM-DD HH:MM".to_string())
        })?;

        Ok(Self {
            venue_id,
            artist_id,
            start_time,
        })
    }
}

/// Fields the venue edit form may overwrite; everything else is untouched
#[derive(Debug, Clone, PartialEq)]
pub struct VenueEdit {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub facebook_link: Option<String>,
}

impl VenueEdit {
    pub fn from_form(form: &FormFields) -> Result<Self> {
        Ok(Self {
            name: form.required("name", None)?,
            city: form.required("city", Some(MAX_SHORT_FIELD))?,
            state: form.required("state", Some(MAX_SHORT_FIELD))?,
            address: form.required("address", Some(MAX_ADDRESS))?,
            phone: form.required("phone", Some(MAX_SHORT_FIELD))?,
            genres: form.genres()?,
            facebook_link: form.optional("facebook_link", MAX_LINK)?,
        })
    }
}

/// Fields the artist edit form may overwrite
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistEdit {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
}

impl ArtistEdit {
    pub fn from_form(form: &FormFields) -> Result<Self> {
        Ok(Self {
            name: form.required("name", None)?,
            city: form.required("city", Some(MAX_SHORT_FIELD))?,
            state: form.required("state", Some(MAX_SHORT_FIELD))?,
            phone: form.required("phone", Some(MAX_SHORT_FIELD))?,
            genres: form.genres()?,
        })
    }
}
