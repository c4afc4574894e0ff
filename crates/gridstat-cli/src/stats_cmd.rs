use std::path::Path;

use gridstat::{Config, ExtractOptions, FlatRecord, GameExtractor, GameStats};

use crate::cli::{StatsFormat, UnicodeNormArg};
use crate::shared::{build_roster, line_options, load_words, report_error};

/// Flags of the stats subcommand.
pub struct StatsArgs<'a> {
    pub teams: &'a [String],
    pub run_threshold: i32,
    pub pass_threshold: i32,
    pub format: &'a StatsFormat,
    pub margin: f64,
    pub rates: bool,
    pub strict: bool,
    pub unicode_norm: Option<&'a UnicodeNormArg>,
}

pub fn run(file: &Path, args: &StatsArgs<'_>) -> Result<(), i32> {
    let roster = build_roster(args.teams)?;
    let words = load_words(file)?;
    let options = ExtractOptions {
        lines: line_options(args.margin, args.unicode_norm),
        strict_mode: args.strict,
    };

    let extractor = GameExtractor::new(roster)
        .map_err(report_error)?
        .config(Config::new(args.run_threshold, args.pass_threshold))
        .options(options);
    let result = extractor.extract(&words).map_err(report_error)?;

    let records = flatten(&result.value, args.rates)?;
    match args.format {
        StatsFormat::Json => write_json(&records),
        StatsFormat::Csv => {
            write_csv(&records);
            Ok(())
        }
    }
}

/// Home record first, then visitor.
fn flatten(game: &GameStats, rates: bool) -> Result<Vec<FlatRecord>, i32> {
    game.teams()
        .iter()
        .map(|(_, team)| {
            if rates {
                team.flatten_with_rates().map_err(report_error)
            } else {
                Ok(team.flatten())
            }
        })
        .collect()
}

fn write_json(records: &[FlatRecord]) -> Result<(), i32> {
    let json_str = serde_json::to_string_pretty(records).map_err(|e| {
        eprintln!("Error: failed to serialize stats: {e}");
        1
    })?;
    println!("{json_str}");
    Ok(())
}

fn write_csv(records: &[FlatRecord]) {
    if let Some(first) = records.first() {
        println!("{}", first.csv_header());
    }
    for record in records {
        println!("{}", record.csv_row());
    }
}
