use std::io::{self, Write};

use clap::{Args, Subcommand};

use crate::config::{DEFAULT_SOURCE_URL, StoredConfig, config_file_path};
use crate::domain::board::{GroupingOption, SortOption};
use crate::error::{AppError, AppResult};

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored configuration.
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
    }
}

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;

    println!("Configuring tix CLI.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!();

    apply_prompt("Ticket source URL", &mut cfg.source_url)?;
    apply_prompt(
        "Default grouping (status/user/priority)",
        &mut cfg.default_grouping,
    )?;
    apply_prompt(
        "Default ordering (priority/title)",
        &mut cfg.default_ordering,
    )?;

    if let Some(value) = &cfg.default_grouping {
        GroupingOption::from_str(value).ok_or_else(|| {
            AppError::Configuration(format!("unknown grouping '{value}'"))
        })?;
    }
    if let Some(value) = &cfg.default_ordering {
        SortOption::from_str(value)
            .ok_or_else(|| AppError::Configuration(format!("unknown ordering '{value}'")))?;
    }

    cfg.save()?;

    let path = config_file_path()?;
    println!("\nConfiguration saved to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!(
        "Ticket source URL: {}",
        display_value_or(&cfg.source_url, DEFAULT_SOURCE_URL)
    );
    println!(
        "Default grouping: {}",
        display_value_or(&cfg.default_grouping, "status")
    );
    println!(
        "Default ordering: {}",
        display_value_or(&cfg.default_ordering, "priority")
    );

    Ok(())
}

fn apply_prompt(field: &str, target: &mut Option<String>) -> AppResult<()> {
    match prompt(field, target.as_deref())? {
        PromptAction::Keep => {}
        PromptAction::Clear => *target = None,
        PromptAction::Set(value) => *target = Some(value),
    }
    Ok(())
}

fn prompt(field: &str, current: Option<&str>) -> AppResult<PromptAction> {
    let mut stdout = io::stdout();

    match current {
        Some(value) => write!(stdout, "{field} [{value}] (Enter to keep, '-' to clear): ")?,
        None => write!(stdout, "{field} (Enter to skip): ")?,
    }
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim();

    if trimmed.is_empty() {
        Ok(PromptAction::Keep)
    } else if trimmed == "-" {
        Ok(PromptAction::Clear)
    } else {
        Ok(PromptAction::Set(trimmed.to_string()))
    }
}

fn display_value_or(value: &Option<String>, fallback: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| format!("{fallback} (default)"))
}

enum PromptAction {
    Keep,
    Clear,
    Set(String),
}
