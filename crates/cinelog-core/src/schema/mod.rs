//! SQLite schema and storage.

pub mod db;
pub mod migrations;

pub use db::Database;
