use anyhow::Result;
use rand::seq::IndexedRandom;
use std::path::Path;

use cinelog_core::schema::Database;

pub fn run_random(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let movies = db.list_movies()?;

    let mut rng = rand::rng();
    match movies.choose(&mut rng) {
        Some(movie) => {
            println!(
                "Your movie for tonight: {} ({}), it's rated {:.1}",
                movie.title, movie.year, movie.rating
            );
        }
        None => {
            println!("No movies yet. Add one with `cinelog add <title>`.");
        }
    }

    Ok(())
}
