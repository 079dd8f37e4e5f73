use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cinelog_omdb::Config;

mod commands;
mod site;

#[derive(Debug, Parser)]
#[command(name = "cinelog", version, about)]
struct Cli {
    /// Run without a subcommand for the interactive menu.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the database (default: ~/.local/share/cinelog/cinelog.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// List all movies in the catalog
    List,
    /// Fetch a movie from OMDb by title and add it to the catalog
    ///
    /// Looks the title up on the OMDb API and stores the returned
    /// metadata (title, year, IMDb rating, poster URL). Requires an
    /// OMDb API key; see `cinelog config example`. A title already in
    /// the catalog is reported and left untouched.
    Add {
        /// Movie title to look up
        title: String,
    },
    /// Remove a movie from the catalog
    Remove {
        /// Title of the movie to remove (case-insensitive)
        title: String,
    },
    /// Override the stored rating of a movie
    Rate {
        /// Title of the movie (case-insensitive)
        title: String,
        /// New rating, 0 to 10
        rating: f64,
    },
    /// Show collection statistics (average, median, best, worst)
    Stats,
    /// Suggest one random movie from the catalog
    Random,
    /// Fuzzy-search movie titles
    Search {
        /// Part of a movie title (typos tolerated)
        query: String,
    },
    /// List movies sorted by rating, best first
    Sort,
    /// Generate the static HTML website for the catalog
    Website {
        /// Output directory (default: ~/.local/share/cinelog/site)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the current effective configuration
    Show,
    /// Get a config value (or print the whole file)
    Get { key: Option<String> },
    /// Set a config value
    Set { key: String, value: String },
    /// Show the config file path
    Path,
    /// Print an example configuration
    Example,
    /// Create the config file with defaults
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let config = match cli.db {
        Some(db) => Config::load_with_db_path(db)?,
        None => Config::load()?,
    };
    let db_path = config.database_path.clone();

    // Ensure database directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    match cli.command {
        None => {
            commands::run_menu(&config, &db_path).await?;
        }
        Some(Commands::List) => {
            commands::run_list(&db_path)?;
        }
        Some(Commands::Add { title }) => {
            commands::run_add(&config, &db_path, &title).await?;
        }
        Some(Commands::Remove { title }) => {
            commands::run_remove(&db_path, &title)?;
        }
        Some(Commands::Rate { title, rating }) => {
            commands::run_rate(&db_path, &title, rating)?;
        }
        Some(Commands::Stats) => {
            commands::run_stats(&db_path)?;
        }
        Some(Commands::Random) => {
            commands::run_random(&db_path)?;
        }
        Some(Commands::Search { query }) => {
            commands::run_search(&db_path, &query)?;
        }
        Some(Commands::Sort) => {
            commands::run_sort(&db_path)?;
        }
        Some(Commands::Website { out }) => {
            let out_dir = out.unwrap_or_else(|| config.website_dir.clone());
            commands::run_website(&db_path, &out_dir)?;
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => commands::config::show_config()?,
            ConfigAction::Get { key } => commands::config::get_config(key)?,
            ConfigAction::Set { key, value } => commands::config::set_config(key, value)?,
            ConfigAction::Path => commands::config::show_path()?,
            ConfigAction::Example => commands::config::show_example()?,
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
