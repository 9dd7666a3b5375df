//! Interactive configuration for recordwatch.
//!
//! This module implements the interactive configuration using dialoguer.

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::types::config::Config;
use crate::RecordwatchResult;

/// Runs the interactive configuration.
pub fn run_interactive_config(config_path: &Path) -> RecordwatchResult<()> {
    let theme = ColorfulTheme::default();

    println!("\n🔧 recordwatch configuration\n");

    // Load existing config or start from defaults
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        println!("Creating a new configuration...\n");
        Config::default_config()
    };

    loop {
        let options = vec![
            "General",
            "Records",
            "Window titles",
            "Clipboard",
            "Shortcuts",
            "Save and exit",
            "Exit without saving",
        ];

        let selection = Select::with_theme(&theme)
            .with_prompt("What do you want to configure?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => configure_general(&theme, &mut config)?,
            1 => configure_records(&theme, &mut config)?,
            2 => configure_title(&theme, &mut config)?,
            3 => configure_clipboard(&theme, &mut config)?,
            4 => configure_shortcuts(&theme, &mut config)?,
            5 => {
                config.validate()?;
                config.save(config_path)?;
                println!("\n✓ Configuration saved to: {}\n", config_path.display());
                break;
            }
            6 => {
                if Confirm::with_theme(&theme)
                    .with_prompt("Really exit without saving?")
                    .default(false)
                    .interact()?
                {
                    println!("\nExiting without saving.\n");
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Configures general options.
fn configure_general(theme: &ColorfulTheme, config: &mut Config) -> RecordwatchResult<()> {
    let log_levels = vec!["error", "warn", "info", "debug", "trace"];
    let current_idx = log_levels
        .iter()
        .position(|&l| l == config.general.log_level)
        .unwrap_or(2);

    let log_level_idx = Select::with_theme(theme)
        .with_prompt("Log level")
        .items(&log_levels)
        .default(current_idx)
        .interact()?;

    config.general.log_level = log_levels[log_level_idx].to_string();

    let log_formats = vec!["text", "json"];
    let current_format_idx = log_formats
        .iter()
        .position(|&f| f == config.general.log_format)
        .unwrap_or(0);

    let log_format_idx = Select::with_theme(theme)
        .with_prompt("Log format")
        .items(&log_formats)
        .default(current_format_idx)
        .interact()?;

    config.general.log_format = log_formats[log_format_idx].to_string();

    println!("\n✓ General settings updated.\n");
    Ok(())
}

/// Configures the record limit and ignore rules.
fn configure_records(theme: &ColorfulTheme, config: &mut Config) -> RecordwatchResult<()> {
    let records = &mut config.records;

    let capacity: usize = Input::with_theme(theme)
        .with_prompt(format!(
            "Record limit ({}-{})",
            records.min_capacity, records.max_capacity
        ))
        .default(records.capacity)
        .interact_text()?;

    records.capacity = capacity.clamp(records.min_capacity, records.max_capacity);

    records.ignore_plural = Confirm::with_theme(theme)
        .with_prompt("Ignore record types ending in 's' (list views)?")
        .default(records.ignore_plural)
        .interact()?;

    let ignored: String = Input::with_theme(theme)
        .with_prompt("Always ignored record types (comma separated)")
        .default(records.ignored_categories.join(", "))
        .allow_empty(true)
        .interact_text()?;

    records.ignored_categories = split_list(&ignored);

    println!("\n✓ Record settings updated.\n");
    Ok(())
}

/// Configures window title parsing.
fn configure_title(theme: &ColorfulTheme, config: &mut Config) -> RecordwatchResult<()> {
    let title = &mut config.title;

    title.marker = Input::with_theme(theme)
        .with_prompt("Application marker (third title segment prefix)")
        .default(title.marker.clone())
        .interact_text()?;

    title.command = Input::with_theme(theme)
        .with_prompt("Active window title command")
        .default(title.command.clone())
        .interact_text()?;

    let args: String = Input::with_theme(theme)
        .with_prompt("Arguments (space separated)")
        .default(title.args.join(" "))
        .allow_empty(true)
        .interact_text()?;

    title.args = args.split_whitespace().map(String::from).collect();

    println!("\n✓ Window title settings updated.\n");
    Ok(())
}

/// Configures clipboard routing.
fn configure_clipboard(theme: &ColorfulTheme, config: &mut Config) -> RecordwatchResult<()> {
    config.clipboard.enabled = Confirm::with_theme(theme)
        .with_prompt("Watch the clipboard?")
        .default(config.clipboard.enabled)
        .interact()?;

    if !config.clipboard.enabled {
        println!("Clipboard disabled.\n");
        return Ok(());
    }

    let prefixes: String = Input::with_theme(theme)
        .with_prompt("Prefixes (comma separated)")
        .default(config.clipboard.prefixes.join(", "))
        .interact_text()?;

    config.clipboard.prefixes = split_list(&prefixes);

    println!("\n✓ Clipboard settings updated.\n");
    Ok(())
}

/// Adds or removes a notepad shortcut.
fn configure_shortcuts(theme: &ColorfulTheme, config: &mut Config) -> RecordwatchResult<()> {
    let word: String = Input::with_theme(theme)
        .with_prompt("Shortcut word")
        .interact_text()?;

    let word = word.trim().to_string();
    if word.is_empty() {
        return Ok(());
    }

    let current = config.shortcuts.get(&word).cloned().unwrap_or_default();
    let category: String = Input::with_theme(theme)
        .with_prompt("Record type (empty to remove)")
        .default(current)
        .allow_empty(true)
        .interact_text()?;

    if category.trim().is_empty() {
        config.shortcuts.remove(&word);
        println!("\n✓ Shortcut '{}' removed.\n", word);
    } else {
        config.shortcuts.insert(word.clone(), category.trim().to_string());
        println!("\n✓ Shortcut '{}' set.\n", word);
    }
    Ok(())
}

fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Prints a configuration summary.
pub fn show_config_summary(config: &Config) {
    println!("\n📊 Configuration summary\n");
    println!("Records");
    println!(
        "  limit:        {} ({}-{})",
        config.records.capacity, config.records.min_capacity, config.records.max_capacity
    );
    println!(
        "  plural types: {}",
        if config.records.ignore_plural { "ignored" } else { "kept" }
    );
    if !config.records.ignored_categories.is_empty() {
        println!("  ignored:      {}", config.records.ignored_categories.join(", "));
    }
    println!("Window titles");
    println!("  marker:       {}", config.title.marker);
    println!(
        "  command:      {} {}",
        config.title.command,
        config.title.args.join(" ")
    );
    println!("Clipboard");
    if config.clipboard.enabled {
        println!("  prefixes:     {}", config.clipboard.prefixes.join(", "));
    } else {
        println!("  disabled");
    }
    println!("Shortcuts");
    for (word, category) in &config.shortcuts {
        println!("  {:<12}  {}", word, category);
    }
    println!();
}
