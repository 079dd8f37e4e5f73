use anyhow::Result;
use std::path::Path;

use cinelog_core::schema::Database;
use cinelog_core::Error as CoreError;
use cinelog_omdb::{Config, OmdbClient, OmdbError};

/// What happened when a title was fetched and stored.
///
/// The interactive menu reprompts on `NotFound`; the `add` subcommand
/// just prints the outcome.
#[derive(Debug)]
pub enum AddOutcome {
    /// Stored under OMDb's canonical title.
    Added(String),
    /// OMDb had no match; carries OMDb's own message.
    NotFound(String),
    /// The catalog already has this title.
    Duplicate(String),
}

/// Fetch a title from OMDb and insert it into the catalog.
pub async fn fetch_and_store(config: &Config, db_path: &Path, title: &str) -> Result<AddOutcome> {
    let api_key = config.omdb_api_key.as_deref().ok_or(OmdbError::MissingApiKey)?;
    let client = OmdbClient::new(api_key)?;

    log::info!("Fetching {:?} from OMDb", title);
    let fetched = match client.fetch_by_title(title).await {
        Ok(fetched) => fetched,
        Err(OmdbError::NotFound { message, .. }) => return Ok(AddOutcome::NotFound(message)),
        Err(e) => return Err(e.into()),
    };

    let movie = fetched.into_movie()?;
    let name = movie.title.clone();

    let db = Database::open(db_path)?;
    match db.insert_movie(&movie) {
        Ok(()) => Ok(AddOutcome::Added(name)),
        Err(CoreError::AlreadyExists { title }) => Ok(AddOutcome::Duplicate(title)),
        Err(e) => Err(e.into()),
    }
}

/// Fetch a title from OMDb and add it to the catalog.
///
/// User-level misses (title unknown to OMDb, title already in the
/// catalog) are reported on stdout and do not abort the process;
/// configuration and transport failures propagate.
pub async fn run_add(config: &Config, db_path: &Path, title: &str) -> Result<()> {
    match fetch_and_store(config, db_path, title).await? {
        AddOutcome::Added(name) => println!("Movie {} has been added", name),
        AddOutcome::NotFound(message) => println!("{}", message),
        AddOutcome::Duplicate(name) => {
            println!("Movie {} already exists (see `cinelog list`)", name);
        }
    }
    Ok(())
}
