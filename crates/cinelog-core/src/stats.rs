//! Collection statistics.
//!
//! Average and median rating plus the best- and worst-rated movie.
//! Everything here is a pure function over an in-memory slice; at
//! catalog scale (dozens of movies) there is no reason to push the
//! aggregation into SQL.

use crate::model::Movie;

/// Summary statistics for a movie collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingSummary {
    pub count: usize,
    pub average: f64,
    pub median: f64,
    /// Title and rating of the highest-rated movie.
    pub best: (String, f64),
    /// Title and rating of the lowest-rated movie.
    pub worst: (String, f64),
}

/// Summarize ratings across the collection.
///
/// Returns `None` for an empty collection. Ties for best/worst resolve
/// to whichever movie comes first in the input order.
pub fn summarize(movies: &[Movie]) -> Option<RatingSummary> {
    if movies.is_empty() {
        return None;
    }

    let mut ratings: Vec<f64> = movies.iter().map(|m| m.rating).collect();
    ratings.sort_by(|a, b| a.total_cmp(b));

    let count = ratings.len();
    let average = ratings.iter().sum::<f64>() / count as f64;
    let median = if count % 2 == 0 {
        (ratings[count / 2 - 1] + ratings[count / 2]) / 2.0
    } else {
        ratings[count / 2]
    };

    let mut best = &movies[0];
    let mut worst = &movies[0];
    for movie in &movies[1..] {
        if movie.rating > best.rating {
            best = movie;
        }
        if movie.rating < worst.rating {
            worst = movie;
        }
    }

    Some(RatingSummary {
        count,
        average,
        median,
        best: (best.title.clone(), best.rating),
        worst: (worst.title.clone(), worst.rating),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, rating: f64) -> Movie {
        Movie::new(title, 2000, rating)
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_summarize_single() {
        let movies = vec![movie("Solaris", 8.0)];
        let summary = summarize(&movies).unwrap();
        assert_eq!(summary.count, 1);
        assert!((summary.average - 8.0).abs() < f64::EPSILON);
        assert!((summary.median - 8.0).abs() < f64::EPSILON);
        assert_eq!(summary.best.0, "Solaris");
        assert_eq!(summary.worst.0, "Solaris");
    }

    #[test]
    fn test_summarize_odd_count() {
        let movies = vec![movie("A", 4.0), movie("B", 9.0), movie("C", 6.0)];
        let summary = summarize(&movies).unwrap();
        assert!((summary.median - 6.0).abs() < f64::EPSILON);
        assert_eq!(summary.best.0, "B");
    }

    #[test]
    fn test_summarize_even_median() {
        let movies = vec![
            movie("A", 4.0),
            movie("B", 6.0),
            movie("C", 8.0),
            movie("D", 9.0),
        ];
        let summary = summarize(&movies).unwrap();
        assert!((summary.median - 7.0).abs() < f64::EPSILON);
        assert!((summary.average - 6.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_best_and_worst() {
        let movies = vec![movie("Low", 2.5), movie("High", 9.5), movie("Mid", 7.0)];
        let summary = summarize(&movies).unwrap();
        assert_eq!(summary.best, ("High".to_string(), 9.5));
        assert_eq!(summary.worst, ("Low".to_string(), 2.5));
    }

    #[test]
    fn test_tie_resolves_to_first() {
        let movies = vec![movie("First", 8.0), movie("Second", 8.0)];
        let summary = summarize(&movies).unwrap();
        assert_eq!(summary.best.0, "First");
        assert_eq!(summary.worst.0, "First");
    }
}
