use anyhow::Result;
use std::path::Path;

use cinelog_core::schema::Database;

pub fn run_list(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let movies = db.list_movies()?;

    println!("{} movies in total", movies.len());
    for movie in &movies {
        println!("{} ({}): {:.1}", movie.title, movie.year, movie.rating);
    }

    Ok(())
}
