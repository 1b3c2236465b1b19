// server/src/cli/commands.rs

// This file defines the command-line arguments for the clinic CLI and the
// menu choices understood by the interactive session.
use clap::Parser;
use std::path::PathBuf;
use strsim::jaro_winkler;

use lib::{ListingFormat, ListingOrder};
use models::{ClinicError, RecordKind};

/// CLI entry point for the clinic records manager.
#[derive(Parser, Debug)]
#[command(name = "clinic-cli")]
#[command(version, about = "Console records manager for patients, doctors and appointments", long_about = None)]
pub struct CliArgs {
    /// Path to a TOML config file.
    #[arg(long, short = 'c', env = "CLINIC_CONFIG", value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    /// Listing order: insertion or newest-first.
    #[arg(long, value_parser = parse_listing_order)]
    pub order: Option<ListingOrder>,
    /// Listing format: text or json.
    #[arg(long, value_parser = parse_listing_format)]
    pub format: Option<ListingFormat>,
    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
    /// Skip the welcome banner.
    #[arg(long)]
    pub no_banner: bool,
    /// Read plain lines from stdin instead of using the line editor.
    #[arg(long)]
    pub plain: bool,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Accepts `insertion` and the newest-first spellings.
pub fn parse_listing_order(order: &str) -> Result<ListingOrder, String> {
    match order.to_lowercase().as_str() {
        "insertion" | "oldest-first" | "chronological" => Ok(ListingOrder::Insertion),
        "newest-first" | "newest_first" | "newest" | "recent" => Ok(ListingOrder::NewestFirst),
        other => Err(format!(
            "Invalid listing order: '{}'. Supported values: insertion, newest-first",
            other
        )),
    }
}

pub fn parse_listing_format(format: &str) -> Result<ListingFormat, String> {
    match format.to_lowercase().as_str() {
        "text" => Ok(ListingFormat::Text),
        "json" => Ok(ListingFormat::Json),
        other => Err(format!("Invalid listing format: '{}'. Supported values: text, json", other)),
    }
}

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register(RecordKind),
    List(RecordKind),
    Help,
    Clear,
    Exit,
}

/// Every accepted spelling, numbers first. Word aliases are matched after
/// lower-casing and collapsing whitespace.
const MENU_ALIASES: &[(&str, MenuChoice)] = &[
    ("1", MenuChoice::Register(RecordKind::Patient)),
    ("2", MenuChoice::Register(RecordKind::Doctor)),
    ("3", MenuChoice::Register(RecordKind::Appointment)),
    ("4", MenuChoice::List(RecordKind::Patient)),
    ("5", MenuChoice::List(RecordKind::Doctor)),
    ("6", MenuChoice::List(RecordKind::Appointment)),
    ("7", MenuChoice::Exit),
    ("patient", MenuChoice::Register(RecordKind::Patient)),
    ("register patient", MenuChoice::Register(RecordKind::Patient)),
    ("doctor", MenuChoice::Register(RecordKind::Doctor)),
    ("register doctor", MenuChoice::Register(RecordKind::Doctor)),
    ("appointment", MenuChoice::Register(RecordKind::Appointment)),
    ("register appointment", MenuChoice::Register(RecordKind::Appointment)),
    ("patients", MenuChoice::List(RecordKind::Patient)),
    ("list patients", MenuChoice::List(RecordKind::Patient)),
    ("doctors", MenuChoice::List(RecordKind::Doctor)),
    ("list doctors", MenuChoice::List(RecordKind::Doctor)),
    ("appointments", MenuChoice::List(RecordKind::Appointment)),
    ("list appointments", MenuChoice::List(RecordKind::Appointment)),
    ("help", MenuChoice::Help),
    ("menu", MenuChoice::Help),
    ("clear", MenuChoice::Clear),
    ("clean", MenuChoice::Clear),
    ("exit", MenuChoice::Exit),
    ("quit", MenuChoice::Exit),
    ("q", MenuChoice::Exit),
];

const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Parses one line of menu input.
pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, ClinicError> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

    if let Some((_, choice)) = MENU_ALIASES.iter().find(|(alias, _)| *alias == normalized) {
        return Ok(*choice);
    }

    Err(ClinicError::InvalidMenuChoice {
        choice: input.trim().to_string(),
        suggestion: suggest_alias(&normalized),
    })
}

// Closest word alias by Jaro-Winkler similarity, if any is close enough.
fn suggest_alias(normalized: &str) -> Option<String> {
    if normalized.len() < 2 {
        return None;
    }
    MENU_ALIASES
        .iter()
        .filter(|(alias, _)| alias.len() > 1)
        .map(|(alias, _)| (*alias, jaro_winkler(normalized, alias)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(alias, _)| alias.to_string())
}
