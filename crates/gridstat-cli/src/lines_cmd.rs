use std::path::Path;

use gridstat::Document;

use crate::cli::UnicodeNormArg;
use crate::shared::{line_options, load_words, report_error};

pub fn run(file: &Path, margin: f64, unicode_norm: Option<&UnicodeNormArg>) -> Result<(), i32> {
    let words = load_words(file)?;
    let options = line_options(margin, unicode_norm);
    let doc = Document::load(&words, &options).map_err(report_error)?;

    println!("page\ttext");
    for line in doc.lines() {
        println!("{}\t{}", line.page() + 1, line.text());
    }
    Ok(())
}
