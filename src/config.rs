//! Picker configuration: command line, environment, item source.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

pub const DEFAULT_MAX_ROWS: u16 = 14;

/// Fuzzy single-select picker. Reads one item per line and prints the pick.
#[derive(Clone, Debug, Parser)]
#[command(name = "select-tui", version, about)]
pub struct PickerConfig {
    /// File with one item per line (stdin when omitted).
    pub input: Option<PathBuf>,

    /// Prompt shown before the query.
    #[arg(long, env = "SELECT_TUI_PROMPT", default_value = "▸ ")]
    pub prompt: String,

    /// Maximum number of result rows.
    #[arg(long, env = "SELECT_TUI_MAX_ROWS", default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: u16,

    /// Mark the item equal to this value as the current selection.
    #[arg(long, env = "SELECT_TUI_SELECTED")]
    pub selected: Option<String>,

    /// Print picks as JSON objects instead of plain lines.
    #[arg(long, env = "SELECT_TUI_JSON")]
    pub json: bool,

    /// Stay open after a pick; Escape ends the session.
    #[arg(long, env = "SELECT_TUI_KEEP_OPEN")]
    pub keep_open: bool,
}

impl PickerConfig {
    pub fn load_items(&self) -> Result<Vec<String>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening {}", path.display()))?;
                read_items(BufReader::new(file))
                    .with_context(|| format!("reading {}", path.display()))
            }
            None => read_items(io::stdin().lock()).context("reading stdin"),
        }
    }
}

/// Non-blank lines, with trailing `\r` removed.
pub fn read_items<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut items = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.trim().is_empty() {
            items.push(line.to_string());
        }
    }
    Ok(items)
}
