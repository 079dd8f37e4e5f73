//! OMDb API client and configuration for cinelog.
//!
//! Wraps the OMDb REST API (<https://www.omdbapi.com/>) behind a typed
//! client with retry on transient failures, and provides the layered
//! configuration (config file, environment, defaults) the CLI uses.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{OmdbClient, OmdbMovie};
pub use config::Config;
pub use error::{OmdbError, OmdbResult};
