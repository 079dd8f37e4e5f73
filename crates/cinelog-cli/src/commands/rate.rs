use anyhow::Result;
use std::path::Path;

use cinelog_core::schema::Database;
use cinelog_core::Error as CoreError;

/// Valid rating range, inclusive.
pub const RATING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;

pub fn run_rate(db_path: &Path, title: &str, rating: f64) -> Result<()> {
    if !RATING_RANGE.contains(&rating) {
        println!("Rating {} is invalid; expected 0 to 10", rating);
        return Ok(());
    }

    let db = Database::open(db_path)?;
    match db.update_rating(title, rating) {
        Ok(()) => {
            println!("Movie {} has been updated", title);
            Ok(())
        }
        Err(CoreError::NotFound { title }) => {
            println!("Movie {} does not exist", title);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
