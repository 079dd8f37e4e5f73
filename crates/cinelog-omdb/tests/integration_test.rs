//! Integration tests for the fetch → store flow.
//!
//! These tests use canned OMDb metadata to verify the conversion and
//! storage path works end to end without real API calls.

use cinelog_core::schema::Database;
use cinelog_omdb::{Config, OmdbClient, OmdbMovie};
use tempfile::TempDir;

#[test]
fn test_database_schema_creation() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let db = Database::open(&db_path).expect("Failed to open database");

    let movies = db.list_movies().expect("Failed to list movies");
    assert!(movies.is_empty(), "New database should have no movies");
}

#[test]
fn test_fetched_metadata_round_trips_through_store() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();

    let fetched = OmdbMovie {
        title: "The Matrix".to_string(),
        year: "1999".to_string(),
        imdb_rating: Some("8.7".to_string()),
        poster: Some("https://example.com/matrix.jpg".to_string()),
        imdb_id: Some("tt0133093".to_string()),
    };

    let movie = fetched.into_movie().expect("conversion should succeed");
    db.insert_movie(&movie).expect("insert should succeed");

    let stored = db.get_movie("the matrix").unwrap().expect("movie stored");
    assert_eq!(stored.year, 1999);
    assert_eq!(stored.imdb_id.as_deref(), Some("tt0133093"));
}

#[test]
fn test_duplicate_add_is_rejected() {
    let db = Database::open_in_memory().unwrap();

    let fetched = OmdbMovie {
        title: "Alien".to_string(),
        year: "1979".to_string(),
        imdb_rating: Some("8.5".to_string()),
        poster: None,
        imdb_id: None,
    };

    db.insert_movie(&fetched.clone().into_movie().unwrap()).unwrap();
    let err = db.insert_movie(&fetched.into_movie().unwrap()).unwrap_err();
    assert!(matches!(err, cinelog_core::Error::AlreadyExists { .. }));
}

#[test]
fn test_client_builds_without_network() {
    let client = OmdbClient::new("test-key");
    assert!(client.is_ok());
}

#[test]
fn test_config_defaults_are_usable() {
    let config = Config::default();
    assert!(config.database_path.ends_with("cinelog/cinelog.db"));
    assert!(config.website_dir.ends_with("cinelog/site"));
}
