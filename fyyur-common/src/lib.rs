//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking site:
//! - Database initialization and schema
//! - Entity models (venues, artists, shows)
//! - Form input validation
//! - Query and mutation services
//! - Configuration loading
//! - Show time formatting

pub mod config;
pub mod db;
pub mod error;
pub mod input;
pub mod models;
pub mod mutation;
pub mod query;
pub mod time;

pub use error::{Error, Result};
pub use models::{Artist, Show, Venue};
