use anyhow::Result;
use std::path::Path;

use cinelog_core::schema::Database;

pub fn run_sort(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let mut movies = db.list_movies()?;

    // Best first; equal ratings keep title order from the store.
    movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));

    for movie in &movies {
        println!("{} {:.1}", movie.title, movie.rating);
    }

    Ok(())
}
