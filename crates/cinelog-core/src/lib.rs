//! Core domain model for cinelog.
//!
//! This crate defines the movie catalog data model, the SQLite schema,
//! collection statistics, and fuzzy title search.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod schema;
pub mod search;
pub mod stats;

pub use error::{Error, Result};
