use anyhow::Result;
use std::path::Path;

use cinelog_core::schema::Database;
use cinelog_core::Error as CoreError;

pub fn run_remove(db_path: &Path, title: &str) -> Result<()> {
    let db = Database::open(db_path)?;

    match db.delete_movie(title) {
        Ok(()) => {
            println!("Movie {} has been deleted", title);
            Ok(())
        }
        Err(CoreError::NotFound { title }) => {
            println!("Movie {} does not exist", title);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
