use std::path::Path;

use gridstat::{ExtractOptions, GameExtractor, field_positions_csv};

use crate::cli::UnicodeNormArg;
use crate::shared::{build_roster, line_options, load_words, report_error};

pub fn run(
    file: &Path,
    teams: &[String],
    margin: f64,
    unicode_norm: Option<&UnicodeNormArg>,
) -> Result<(), i32> {
    let roster = build_roster(teams)?;
    let words = load_words(file)?;
    let options = ExtractOptions {
        lines: line_options(margin, unicode_norm),
        strict_mode: false,
    };

    let extractor = GameExtractor::new(roster)
        .map_err(report_error)?
        .options(options);
    let result = extractor.extract(&words).map_err(report_error)?;

    print!("{}", field_positions_csv(result.value.all_field_positions()));
    Ok(())
}
