//! Fuzzy title search.
//!
//! Matches a query against movie titles case-insensitively. A title
//! matches when it contains the query as a substring, or when the
//! Jaro-Winkler similarity of the query against the whole title or any
//! single title word clears [`MATCH_THRESHOLD`]. Results come back
//! ordered by descending score.

use strsim::jaro_winkler;

use crate::model::Movie;

/// Minimum similarity score for a fuzzy match.
const MATCH_THRESHOLD: f64 = 0.6;

/// A search hit with its similarity score (1.0 = exact).
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub movie: &'a Movie,
    pub score: f64,
}

/// Score a query against a single title.
///
/// Substring containment counts as a full match so that short queries
/// ("alien") find long titles without being penalized for length.
fn score(query: &str, title: &str) -> f64 {
    let query = query.to_lowercase();
    let title = title.to_lowercase();

    if title.contains(&query) {
        return 1.0;
    }

    let mut best = jaro_winkler(&query, &title);
    for word in title.split_whitespace() {
        best = best.max(jaro_winkler(&query, word));
    }
    best
}

/// Search the collection for titles matching `query`.
pub fn search<'a>(movies: &'a [Movie], query: &str) -> Vec<SearchHit<'a>> {
    let mut hits: Vec<SearchHit<'a>> = movies
        .iter()
        .map(|movie| SearchHit {
            movie,
            score: score(query, &movie.title),
        })
        .filter(|hit| hit.score > MATCH_THRESHOLD)
        .collect();

    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits
}
