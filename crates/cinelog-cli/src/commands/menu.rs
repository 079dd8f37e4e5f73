//! Interactive menu.
//!
//! Running `cinelog` without a subcommand lands here: a keyboard-driven
//! select loop over the same operations the subcommands expose. Bad
//! input reprompts instead of aborting, and command failures are
//! printed without leaving the loop.

use anyhow::Result;
use dialoguer::{Input, Select};
use std::path::Path;

use cinelog_core::schema::Database;
use cinelog_omdb::Config;

use super::add::{fetch_and_store, AddOutcome};
use super::rate::RATING_RANGE;

const MENU_ITEMS: &[&str] = &[
    "List movies",
    "Add movie",
    "Delete movie",
    "Update movie",
    "Stats",
    "Random movie",
    "Search movie",
    "Movies sorted by rating",
    "Generate movie website",
    "Exit",
];

pub async fn run_menu(config: &Config, db_path: &Path) -> Result<()> {
    println!("******* Welcome to cinelog *******\n");

    loop {
        println!();
        let selection = Select::new()
            .with_prompt("Choose an option")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => super::run_list(db_path),
            1 => add_flow(config, db_path).await,
            2 => delete_flow(db_path),
            3 => update_flow(db_path),
            4 => super::run_stats(db_path),
            5 => super::run_random(db_path),
            6 => search_flow(db_path),
            7 => super::run_sort(db_path),
            8 => super::run_website(db_path, &config.website_dir),
            _ => {
                println!("Exiting the program. Goodbye!");
                return Ok(());
            }
        };

        // A failed command returns to the menu rather than exiting.
        if let Err(e) = outcome {
            println!("Error: {:#}", e);
        }
    }
}

/// Prompt for a title and fetch it; on an OMDb miss, reprompt until a
/// hit or `q`.
async fn add_flow(config: &Config, db_path: &Path) -> Result<()> {
    let mut title: String = Input::new().with_prompt("Enter movie name").interact_text()?;

    loop {
        match fetch_and_store(config, db_path, &title).await? {
            AddOutcome::Added(name) => {
                println!("Movie {} has been added", name);
                return Ok(());
            }
            AddOutcome::Duplicate(name) => {
                println!("Movie {} already exists (use List movies to see the catalog)", name);
                return Ok(());
            }
            AddOutcome::NotFound(message) => {
                println!("{}", message);
                title = Input::new()
                    .with_prompt("Enter movie name, or q to go back")
                    .interact_text()?;
                if title == "q" {
                    println!("Returning to main menu...");
                    return Ok(());
                }
            }
        }
    }
}

/// Prompt for an existing title, reprompting until a match or `q`.
/// Returns `None` when the user backs out.
fn prompt_existing_title(db: &Database) -> Result<Option<String>> {
    let mut title: String = Input::new().with_prompt("Enter movie name").interact_text()?;

    loop {
        if db.get_movie(&title)?.is_some() {
            return Ok(Some(title));
        }
        println!("Movie {} does not exist", title);
        title = Input::new()
            .with_prompt("Enter a valid movie name, or q to go back")
            .interact_text()?;
        if title == "q" {
            println!("Returning to main menu...");
            return Ok(None);
        }
    }
}

fn delete_flow(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let Some(title) = prompt_existing_title(&db)? else {
        return Ok(());
    };
    drop(db);

    super::run_remove(db_path, &title)
}

fn update_flow(db_path: &Path) -> Result<()> {
    let db = Database::open(db_path)?;
    let Some(title) = prompt_existing_title(&db)? else {
        return Ok(());
    };

    let rating = loop {
        let input: String = Input::new()
            .with_prompt("Enter new movie rating (0-10)")
            .interact_text()?;
        match input.parse::<f64>() {
            Ok(r) if RATING_RANGE.contains(&r) => break r,
            _ => println!("Rating {} is invalid; expected 0 to 10", input),
        }
    };
    drop(db);

    super::run_rate(db_path, &title, rating)
}

fn search_flow(db_path: &Path) -> Result<()> {
    let query: String = Input::new()
        .with_prompt("Enter part of movie name")
        .interact_text()?;
    super::run_search(db_path, &query)
}
