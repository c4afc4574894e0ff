use std::path::Path;

use gridstat::{ExtractError, LineOptions, PagedWords, Roster, RosterEntry, UnicodeNorm};
use serde::Deserialize;
use tracing::debug;

use crate::cli::UnicodeNormArg;

/// One entry of a word dump.
#[derive(Debug, Deserialize)]
struct DumpedWord {
    /// 1-based page number.
    page: usize,
    text: String,
    x0: f64,
    top: f64,
}

/// Group dumped words into pages, keeping their order as the reading order.
fn paginate(dump: Vec<DumpedWord>) -> Result<PagedWords, String> {
    if let Some(at) = dump.iter().position(|w| w.page == 0) {
        return Err(format!("word {at} has page 0; pages are 1-based"));
    }
    Ok(PagedWords::from_rows(
        dump.into_iter().map(|w| (w.page - 1, w.text, w.x0, w.top)),
    ))
}

/// Read a word dump with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is not found
/// or is not a valid dump.
pub fn load_words(file: &Path) -> Result<PagedWords, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let content = std::fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })?;
    let dump: Vec<DumpedWord> = serde_json::from_str(&content).map_err(|e| {
        eprintln!("Error: invalid word dump: {e}");
        1
    })?;
    let words = paginate(dump).map_err(|e| {
        eprintln!("Error: invalid word dump: {e}");
        1
    })?;
    debug!(pages = words.pages().len(), "word dump loaded");
    Ok(words)
}

/// Parse a `NAME=ABBR` roster flag.
pub fn parse_team(value: &str) -> Result<RosterEntry, String> {
    match value.split_once('=') {
        Some((name, abbreviation)) if !name.trim().is_empty() && !abbreviation.trim().is_empty() => {
            Ok(RosterEntry::new(name.trim(), abbreviation.trim()))
        }
        _ => Err(format!("expected NAME=ABBR, got '{value}'")),
    }
}

/// Build the roster from repeated `--team` flags.
pub fn build_roster(teams: &[String]) -> Result<Roster, i32> {
    let entries = teams
        .iter()
        .map(|t| parse_team(t))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            eprintln!("Error: {e}");
            1
        })?;
    let roster = Roster::new(entries);
    if roster.len() < 2 {
        eprintln!("Error: at least two teams are required");
        return Err(1);
    }
    Ok(roster)
}

/// Line options from the command-line flags.
pub fn line_options(margin: f64, unicode_norm: Option<&UnicodeNormArg>) -> LineOptions {
    LineOptions {
        margin,
        unicode_norm: unicode_norm.map_or(UnicodeNorm::None, UnicodeNormArg::to_unicode_norm),
    }
}

/// Print an extraction error and map it to the exit code.
pub fn report_error(err: ExtractError) -> i32 {
    eprintln!("Error: {err}");
    1
}
