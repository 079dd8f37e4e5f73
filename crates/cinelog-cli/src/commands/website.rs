use anyhow::Result;
use std::path::Path;

use cinelog_core::schema::Database;

use crate::site;

pub fn run_website(db_path: &Path, out_dir: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let movies = db.list_movies()?;

    let page = site::write_site(out_dir, &movies)?;
    println!("Website was generated successfully: {}", page.display());

    Ok(())
}
