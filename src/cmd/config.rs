use std::io::{self, Write};

use clap::{Args, Subcommand};

use crate::config::{DEFAULT_API_URL, StoredConfig, config_file_path};
use crate::domain::filter::StatusFilter;
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

    println!("Configuring tix.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!();

    let api_label = format!("Ticket API base URL (default {DEFAULT_API_URL})");
    ask(&api_label, &mut cfg.api_base_url)?;
    ask("Default list filter (all/open/completed)", &mut cfg.default_status)?;

    if let Some(status) = cfg.default_status.as_deref()
        && StatusFilter::from_str(status).is_none()
    {
        return Err(AppError::Configuration(format!(
            "unknown default status '{status}' (expected all, open, or completed)"
        )));
    }

    cfg.save()?;
    println!("\nConfiguration saved to {}", config_file_path()?.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;

    println!("Configuration file: {}", config_file_path()?.display());
    for (label, value) in [
        ("Ticket API base URL", cfg.api_base_url.as_deref()),
        ("Default list filter", cfg.default_status.as_deref()),
    ] {
        println!("{label}: {}", display_value(value));
    }
    Ok(())
}

/// Prompts on stdout for one stored field and applies the answer to it.
fn ask(field: &str, target: &mut Option<String>) -> AppResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt_label(field, target.as_deref()))?;
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    PromptAction::parse(&input).apply(target);
    Ok(())
}

fn prompt_label(field: &str, current: Option<&str>) -> String {
    match current {
        Some(value) => format!("{field} [{value}] (Enter to keep, '-' to clear): "),
        None => format!("{field} (Enter to skip): "),
    }
}

fn display_value(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("<not set>")
}

#[derive(Debug, PartialEq, Eq)]
enum PromptAction {
    Keep,
    Clear,
    Set(String),
}

impl PromptAction {
    fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            PromptAction::Keep
        } else if trimmed == "-" {
            PromptAction::Clear
        } else {
            PromptAction::Set(trimmed.to_string())
        }
    }

    fn apply(self, target: &mut Option<String>) {
        match self {
            PromptAction::Keep => {}
            PromptAction::Clear => *target = None,
            PromptAction::Set(value) => *target = Some(value),
        }
    }
}
