use rusqlite::Connection;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Movie;

use super::migrations::MIGRATIONS;

/// A database connection with CRUD methods for the movie catalog.
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) a database at the given path and apply migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.apply_migrations()?;
        Ok(db)
    }

    /// Get a reference to the underlying connection (for advanced queries).
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    fn apply_migrations(&self) -> Result<()> {
        // Create migrations table if it doesn't exist
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            )",
            [],
        )?;

        // Get applied migrations
        let mut stmt = self
            .conn
            .prepare("SELECT version FROM schema_migrations ORDER BY version")?;
        let applied: Vec<u32> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        // Apply pending migrations
        for migration in MIGRATIONS {
            if !applied.contains(&migration.version) {
                log::info!(
                    "Applying migration {} ({})",
                    migration.version,
                    migration.name
                );
                self.conn.execute_batch(migration.sql)?;
                self.conn.execute(
                    "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)",
                    rusqlite::params![migration.version, migration.name],
                )?;
            }
        }

        Ok(())
    }
}

// Movie CRUD
impl Database {
    /// Insert a new movie.
    ///
    /// Titles are unique; inserting a duplicate yields
    /// [`Error::AlreadyExists`].
    pub fn insert_movie(&self, movie: &Movie) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO movies (
                    id, title, year, rating, poster_url, imdb_id,
                    created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params![
                    movie.id.to_string(),
                    movie.title,
                    i64::from(movie.year),
                    movie.rating,
                    movie.poster_url,
                    movie.imdb_id,
                    movie.created_at.to_rfc3339(),
                    movie.updated_at.to_rfc3339(),
                ],
            )
            .map_err(|e| constraint_to_exists(e, &movie.title))?;
        Ok(())
    }

    /// List all movies, ordered by title.
    pub fn list_movies(&self) -> Result<Vec<Movie>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, year, rating, poster_url, imdb_id,
                    created_at, updated_at
             FROM movies
             ORDER BY title",
        )?;

        let movies = stmt
            .query_map([], |row| self.row_to_movie(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(movies)
    }

    /// Look up a single movie by title (case-insensitive).
    pub fn get_movie(&self, title: &str) -> Result<Option<Movie>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, year, rating, poster_url, imdb_id,
                    created_at, updated_at
             FROM movies
             WHERE title = ?1 COLLATE NOCASE",
        )?;

        let mut rows = stmt.query_map([title], |row| self.row_to_movie(row))?;
        match rows.next() {
            Some(movie) => Ok(Some(movie?)),
            None => Ok(None),
        }
    }

    /// Update the rating of an existing movie (case-insensitive title).
    pub fn update_rating(&self, title: &str, rating: f64) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE movies
             SET rating = ?2, updated_at = ?3
             WHERE title = ?1 COLLATE NOCASE",
            rusqlite::params![title, rating, chrono::Utc::now().to_rfc3339()],
        )?;

        if changed == 0 {
            return Err(Error::NotFound {
                title: title.to_string(),
            });
        }
        Ok(())
    }

    /// Delete a movie by title (case-insensitive).
    pub fn delete_movie(&self, title: &str) -> Result<()> {
        let changed = self.conn.execute(
            "DELETE FROM movies WHERE title = ?1 COLLATE NOCASE",
            [title],
        )?;

        if changed == 0 {
            return Err(Error::NotFound {
                title: title.to_string(),
            });
        }
        Ok(())
    }

    /// Count movies in the catalog.
    pub fn count_movies(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    fn row_to_movie(&self, row: &rusqlite::Row) -> rusqlite::Result<Movie> {
        use crate::model::MovieId;
        use chrono::DateTime;
        use uuid::Uuid;

        let id: String = row.get(0)?;
        let year: i64 = row.get(2)?;
        let created_at_str: String = row.get(6)?;
        let updated_at_str: String = row.get(7)?;

        // These columns are only ever written by us, from valid values.
        Ok(Movie {
            id: MovieId::from_uuid(Uuid::parse_str(&id).unwrap()),
            title: row.get(1)?,
            year: year as i32,
            rating: row.get(3)?,
            poster_url: row.get(4)?,
            imdb_id: row.get(5)?,
            created_at: DateTime::parse_from_rfc3339(&created_at_str)
                .unwrap()
                .into(),
            updated_at: DateTime::parse_from_rfc3339(&updated_at_str)
                .unwrap()
                .into(),
        })
    }
}

/// Map a SQLite unique-constraint failure on insert to `AlreadyExists`.
fn constraint_to_exists(e: rusqlite::Error, title: &str) -> Error {
    if let rusqlite::Error::SqliteFailure(err, _) = &e {
        if err.code == rusqlite::ErrorCode::ConstraintViolation {
            return Error::AlreadyExists {
                title: title.to_string(),
            };
        }
    }
    Error::Database(e)
}
