use anyhow::Result;
use std::path::Path;

use cinelog_core::schema::Database;
use cinelog_core::stats;

pub fn run_stats(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let movies = db.list_movies()?;

    let Some(summary) = stats::summarize(&movies) else {
        println!("No movies yet. Add one with `cinelog add <title>`.");
        return Ok(());
    };

    println!("Average rating: {:.2}", summary.average);
    println!("Median rating: {:.2}", summary.median);
    println!("Best movie: {}, {:.1}", summary.best.0, summary.best.1);
    println!("Worst movie: {}, {:.1}", summary.worst.0, summary.worst.1);

    Ok(())
}
