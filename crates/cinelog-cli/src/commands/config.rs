use anyhow::{Context, Result};
use cinelog_omdb::{config, Config};

const VALID_KEYS: &str = "omdb_api_key, database_path, website_dir";

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!(
        "  omdb_api_key: {}",
        config.omdb_api_key.as_deref().unwrap_or("<not set>")
    );
    println!("  database_path: {}", config.database_path.display());
    println!("  website_dir: {}", config.website_dir.display());

    println!("\nPriority: CLI args > ENV vars (CINE_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value.
pub fn get_config(key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        let config = Config::load()?;

        match key.as_str() {
            "omdb_api_key" => {
                println!(
                    "{}",
                    config.omdb_api_key.unwrap_or_else(|| String::from("<not set>"))
                );
            }
            "database_path" => {
                println!("{}", config.database_path.display());
            }
            "website_dir" => {
                println!("{}", config.website_dir.display());
            }
            _ => {
                anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS);
            }
        }
    } else {
        // No key provided, show entire config file contents
        let config_path = config::config_file_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{}", contents);
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'cinelog config init' to create it.");
        }
    }

    Ok(())
}

/// Replace (or append) `key = "value"` in the config file contents.
fn set_key_line(contents: &str, key: &str, value: &str) -> String {
    let mut new_lines = Vec::new();
    let mut found = false;

    for line in contents.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with(key) && !trimmed.starts_with('#') {
            new_lines.push(format!("{} = \"{}\"", key, value));
            found = true;
        } else {
            new_lines.push(line.to_string());
        }
    }

    if !found {
        new_lines.push(format!("\n{} = \"{}\"", key, value));
    }

    new_lines.join("\n")
}

/// Set a config value.
pub fn set_config(key: String, value: String) -> Result<()> {
    let config_path = config::config_file_path();

    match key.as_str() {
        "omdb_api_key" | "database_path" | "website_dir" => {}
        _ => {
            anyhow::bail!("Unknown config key: {}\n\nValid keys: {}", key, VALID_KEYS);
        }
    }

    // Ensure config file exists
    config::ensure_config_file()?;

    let contents =
        std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    let contents = set_key_line(&contents, &key, &value);

    std::fs::write(&config_path, contents).context("Failed to write config file")?;

    println!("✓ Updated {} = {}", key, value);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    let config_path = config::config_file_path();
    println!("{}", config_path.display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure cinelog.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_key_line_replaces_existing() {
        let contents = "omdb_api_key = \"old\"\ndatabase_path = \"/x\"";
        let updated = set_key_line(contents, "omdb_api_key", "new");
        assert!(updated.contains("omdb_api_key = \"new\""));
        assert!(updated.contains("database_path = \"/x\""));
    }

    #[test]
    fn test_set_key_line_skips_comments() {
        let contents = "# omdb_api_key = \"commented\"";
        let updated = set_key_line(contents, "omdb_api_key", "new");
        assert!(updated.contains("# omdb_api_key = \"commented\""));
        assert!(updated.contains("omdb_api_key = \"new\""));
    }

    #[test]
    fn test_set_key_line_appends_missing() {
        let updated = set_key_line("", "website_dir", "/srv/site");
        assert!(updated.contains("website_dir = \"/srv/site\""));
    }
}
