//! OMDb API client.
//!
//! OMDb is a plain query-parameter API: `?apikey=...&t=<title>` looks a
//! movie up by title. Lookup failure is signalled in-band with HTTP 200
//! and `{"Response": "False", "Error": "Movie not found!"}`, so the
//! client inspects the body rather than relying on status codes alone.

use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use cinelog_core::model::Movie;

use crate::error::{OmdbError, OmdbResult};

const OMDB_API_BASE: &str = "https://www.omdbapi.com/";

/// Raw OMDb response. Every field is a string in OMDb's JSON; absent
/// data is the literal `"N/A"`.
#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
}

/// Movie metadata as returned by OMDb, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct OmdbMovie {
    pub title: String,
    pub year: String,
    pub imdb_rating: Option<String>,
    pub poster: Option<String>,
    pub imdb_id: Option<String>,
}

impl OmdbMovie {
    /// Convert OMDb metadata into a catalog [`Movie`].
    ///
    /// `Year` can be a range for series ("2008–2013"); the leading
    /// four-digit year is kept. A missing rating is stored as 0.0 with
    /// a warning so the user can `rate` it manually.
    pub fn into_movie(self) -> OmdbResult<Movie> {
        let year = parse_year(&self.year).ok_or_else(|| OmdbError::Parse {
            message: format!("unparseable year {:?} for {:?}", self.year, self.title),
        })?;

        let rating = match self.imdb_rating.as_deref() {
            Some(r) => r.parse::<f64>().map_err(|_| OmdbError::Parse {
                message: format!("unparseable rating {:?} for {:?}", r, self.title),
            })?,
            None => {
                log::warn!("OMDb has no rating for {:?}; storing 0.0", self.title);
                0.0
            }
        };

        let mut movie = Movie::new(self.title, year, rating);
        if let Some(poster) = self.poster {
            movie = movie.with_poster_url(poster);
        }
        if let Some(imdb_id) = self.imdb_id {
            movie = movie.with_imdb_id(imdb_id);
        }
        Ok(movie)
    }
}

/// Extract the first four-digit year from an OMDb `Year` value.
fn parse_year(year: &str) -> Option<i32> {
    let digits: String = year
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.len() == 4 {
        digits.parse().ok()
    } else {
        None
    }
}

/// OMDb treats `"N/A"` as null; map it to `None`.
fn non_na(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "N/A")
}

/// OMDb API client.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: Client,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("cinelog/0.1.0 (https://github.com/oxur/cinelog)")
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
        })
    }

    /// Look a movie up by title, retrying transient failures with
    /// exponential backoff.
    pub async fn fetch_by_title(&self, title: &str) -> OmdbResult<OmdbMovie> {
        (|| self.fetch_once(title))
            .retry(ExponentialBuilder::default())
            .when(|e: &OmdbError| e.is_transient())
            .await
    }

    async fn fetch_once(&self, title: &str) -> OmdbResult<OmdbMovie> {
        let response = self
            .http
            .get(OMDB_API_BASE)
            .query(&[("apikey", self.api_key.as_str()), ("t", title)])
            .send()
            .await?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(OmdbError::RateLimited),
            s if s.is_server_error() => {
                return Err(OmdbError::Http {
                    message: s.to_string(),
                })
            }
            _ => {}
        }

        let raw: RawResponse = response.json().await.map_err(|e| OmdbError::Parse {
            message: e.to_string(),
        })?;

        raw_to_movie(raw, title)
    }
}

fn raw_to_movie(raw: RawResponse, requested_title: &str) -> OmdbResult<OmdbMovie> {
    if raw.response != "True" {
        return Err(OmdbError::NotFound {
            title: requested_title.to_string(),
            message: raw.error.unwrap_or_else(|| "Movie not found!".to_string()),
        });
    }

    let title = raw.title.ok_or_else(|| OmdbError::Parse {
        message: "response missing Title".to_string(),
    })?;
    let year = raw.year.ok_or_else(|| OmdbError::Parse {
        message: format!("response missing Year for {:?}", title),
    })?;

    Ok(OmdbMovie {
        title,
        year,
        imdb_rating: non_na(raw.imdb_rating),
        poster: non_na(raw.poster),
        imdb_id: non_na(raw.imdb_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OmdbClient::new("test-key");
        assert!(client.is_ok());
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2010"), Some(2010));
        assert_eq!(parse_year("2008\u{2013}2013"), Some(2008));
        assert_eq!(parse_year("N/A"), None);
        assert_eq!(parse_year(""), None);
    }

    #[test]
    fn test_deserialize_hit() {
        let json = r#"{
            "Title": "The Matrix",
            "Year": "1999",
            "Poster": "https://example.com/matrix.jpg",
            "imdbRating": "8.7",
            "imdbID": "tt0133093",
            "Response": "True"
        }"#;
        let raw: RawResponse = serde_json::from_str(json).unwrap();
        let movie = raw_to_movie(raw, "The Matrix").unwrap();
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.imdb_rating.as_deref(), Some("8.7"));
    }

    #[test]
    fn test_deserialize_miss() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let raw: RawResponse = serde_json::from_str(json).unwrap();
        let err = raw_to_movie(raw, "asdfgh").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Movie not found!");
    }

    #[test]
    fn test_na_fields_become_none() {
        let json = r#"{
            "Title": "Obscure Short",
            "Year": "1921",
            "Poster": "N/A",
            "imdbRating": "N/A",
            "imdbID": "tt0000001",
            "Response": "True"
        }"#;
        let raw: RawResponse = serde_json::from_str(json).unwrap();
        let movie = raw_to_movie(raw, "Obscure Short").unwrap();
        assert!(movie.poster.is_none());
        assert!(movie.imdb_rating.is_none());
    }

    #[test]
    fn test_into_movie_defaults_missing_rating() {
        let omdb = OmdbMovie {
            title: "Obscure Short".to_string(),
            year: "1921".to_string(),
            imdb_rating: None,
            poster: None,
            imdb_id: Some("tt0000001".to_string()),
        };
        let movie = omdb.into_movie().unwrap();
        assert_eq!(movie.year, 1921);
        assert!((movie.rating - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_into_movie_series_year_range() {
        let omdb = OmdbMovie {
            title: "Breaking Bad".to_string(),
            year: "2008\u{2013}2013".to_string(),
            imdb_rating: Some("9.5".to_string()),
            poster: None,
            imdb_id: None,
        };
        let movie = omdb.into_movie().unwrap();
        assert_eq!(movie.year, 2008);
    }
}
