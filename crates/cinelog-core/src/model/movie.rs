use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::MovieId;

/// A single movie in the catalog.
///
/// Metadata is fetched from OMDb when the movie is added; the rating
/// can later be overridden by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,

    /// Release year. For series OMDb reports a range; only the first
    /// year is kept.
    pub year: i32,

    /// Rating on a 0.0..=10.0 scale (IMDb rating at add time).
    pub rating: f64,

    /// Poster image URL, if OMDb had one.
    pub poster_url: Option<String>,

    /// IMDb identifier (e.g. "tt0133093"), if known.
    pub imdb_id: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Movie {
    #[must_use]
    pub fn new(title: impl Into<String>, year: i32, rating: f64) -> Self {
        let now = Utc::now();
        Self {
            id: MovieId::new(),
            title: title.into(),
            year,
            rating,
            poster_url: None,
            imdb_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn with_poster_url(mut self, url: impl Into<String>) -> Self {
        self.poster_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_imdb_id(mut self, imdb_id: impl Into<String>) -> Self {
        self.imdb_id = Some(imdb_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_new() {
        let movie = Movie::new("The Matrix", 1999, 8.7);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.year, 1999);
        assert!(movie.poster_url.is_none());
    }

    #[test]
    fn test_movie_builder() {
        let movie = Movie::new("Stalker", 1979, 8.1)
            .with_poster_url("https://example.com/stalker.jpg")
            .with_imdb_id("tt0079944");

        assert_eq!(
            movie.poster_url,
            Some("https://example.com/stalker.jpg".to_string())
        );
        assert_eq!(movie.imdb_id, Some("tt0079944".to_string()));
    }
}
