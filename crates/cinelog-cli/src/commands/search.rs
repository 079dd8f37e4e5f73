use anyhow::Result;
use std::path::Path;

use cinelog_core::schema::Database;
use cinelog_core::search;

pub fn run_search(db_path: &Path, query: &str) -> Result<()> {
    let db = Database::open(db_path)?;
    let movies = db.list_movies()?;

    let hits = search::search(&movies, query);
    if hits.is_empty() {
        println!("No movies matching {:?}", query);
        return Ok(());
    }

    for hit in hits {
        println!("{}, {:.1}", hit.movie.title, hit.movie.rating);
    }

    Ok(())
}
