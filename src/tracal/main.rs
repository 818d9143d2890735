use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracal::api::{CmdMessage, MessageLevel, TracalApi};
use tracal::config::TracalConfig;
use tracal::error::{Result, TracalError};
use tracal::model::Item;
use tracal::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir()?;

    let config = TracalConfig::load(&data_dir).unwrap_or_default();
    let mut api = TracalApi::new(FileStore::new(data_dir.clone()), config)?;

    match cli.command {
        Some(Commands::Add { name, calories }) => handle_add(&mut api, name, calories),
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::Edit {
            id,
            name,
            calories,
        }) => handle_edit(&mut api, id, name, calories),
        Some(Commands::Delete { id }) => handle_delete(&mut api, id),
        Some(Commands::Clear { yes }) => handle_clear(&mut api, yes),
        Some(Commands::Total) => handle_total(&api),
        Some(Commands::Config { key, value }) => handle_config(&data_dir, key, value),
    }
}

/// Data directory: `TRACAL_DATA_DIR` when set (tests use this), otherwise
/// the platform data dir.
fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("TRACAL_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "tracal", "tracal")
        .ok_or_else(|| TracalError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_add(api: &mut TracalApi<FileStore>, name: String, calories: String) -> Result<()> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(TracalError::Api("Name cannot be empty".into()));
    }

    let result = api.add_item(name, &calories)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &TracalApi<FileStore>) -> Result<()> {
    let result = api.list_items()?;
    print_items(&result.listed_items, result.total);
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(
    api: &mut TracalApi<FileStore>,
    id: u64,
    name: String,
    calories: String,
) -> Result<()> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(TracalError::Api("Name cannot be empty".into()));
    }

    let result = api.edit_item(id, name, &calories)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &mut TracalApi<FileStore>, id: u64) -> Result<()> {
    let result = api.delete_item(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(api: &mut TracalApi<FileStore>, yes: bool) -> Result<()> {
    let result = api.clear_items(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_total(api: &TracalApi<FileStore>) -> Result<()> {
    let result = api.total()?;
    if let Some(total) = result.total {
        println!("{}", format!("Total: {} kcal", total).bold());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = TracalConfig::load(data_dir).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) | (Some("daily-limit"), None) => {
            match config.daily_limit {
                Some(limit) => println!("daily-limit = {}", limit),
                None => println!("daily-limit is not set"),
            }
            Ok(())
        }
        (Some("daily-limit"), Some(v)) => {
            if v == "none" {
                config.daily_limit = None;
            } else {
                let limit = v
                    .parse::<i64>()
                    .map_err(|_| TracalError::Api(format!("Invalid daily-limit: {}", v)))?;
                config.daily_limit = Some(limit);
            }
            config.save(data_dir)?;
            match config.daily_limit {
                Some(limit) => println!("daily-limit = {}", limit),
                None => println!("daily-limit unset"),
            }
            Ok(())
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            Ok(())
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 32;

fn print_items(items: &[Item], total: Option<i64>) {
    if items.is_empty() {
        println!("No items tracked.");
        return;
    }

    for item in items {
        let name = truncate_to_width(&item.name, NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        println!(
            "{:>4}  {}{}  {:>6} kcal",
            item.id.to_string().dimmed(),
            name,
            " ".repeat(padding),
            item.calories
        );
    }

    if let Some(total) = total {
        println!("{}", format!("Total: {} kcal", total).bold());
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
